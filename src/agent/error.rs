#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentError {
    /// The key does not exist.
    InvalidSshKey,
    /// The private key failed to produce a signature.
    InvalidSshKeySignature,
    /// The key's constraints forbid its use.
    KeyTimeout,
}

impl std::error::Error for AgentError {}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSshKey => write!(f, "The key does not exist"),
            Self::InvalidSshKeySignature => write!(f, "Signature generation failed"),
            Self::KeyTimeout => write!(f, "Key constraints exceeded"),
        }
    }
}
