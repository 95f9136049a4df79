mod agent;
mod constraints;
mod error;
mod forwarding;
mod listener;
mod signing_key;
mod store;

pub use self::agent::*;
pub use self::constraints::*;
pub use self::error::*;
pub use self::forwarding::*;
pub use self::listener::*;
pub use self::signing_key::*;
pub use self::store::*;
