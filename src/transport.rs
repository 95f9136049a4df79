mod cookie;
mod error;
mod message;
mod msg_kex_init;
mod negotiation;
mod preferences;

pub use self::cookie::*;
pub use self::error::*;
pub use self::message::*;
pub use self::msg_kex_init::*;
pub use self::negotiation::*;
pub use self::preferences::*;
