pub mod agent;
pub mod algorithm;
pub mod identity;
pub mod transport;
pub mod util;

pub use self::agent::{AgentError, KeyAgent, KeyAgentListener};
pub use self::algorithm::{AlgorithmConfig, AlgorithmError, Algorithms, Catalog, SharedAlgorithms};
pub use self::identity::{Identity, Signature};
pub use self::transport::{KexInitError, KexPreferences, MsgKexInit};
