mod identity;
mod signature;

pub mod ssh_ed25519;

pub use self::identity::*;
pub use self::signature::*;
