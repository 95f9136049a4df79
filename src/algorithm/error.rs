#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The name is unknown or its implementation could not be constructed.
    NotSupported(String),
    /// A default was requested for a name that is not registered.
    Unknown(String),
}

impl std::error::Error for AlgorithmError {}

impl std::fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSupported(x) => write!(f, "Algorithm not supported: {}", x),
            Self::Unknown(x) => write!(f, "Unknown algorithm: {}", x),
        }
    }
}

/// Failures reported by the built-in algorithm bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CryptoError {
    InvalidKeyLength,
    InvalidLength,
    IntegrityCheckFailed,
    InvalidPublicKey,
    NotInitialized,
}

impl std::error::Error for CryptoError {}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKeyLength => write!(f, "Invalid key length"),
            Self::InvalidLength => write!(f, "Invalid input length"),
            Self::IntegrityCheckFailed => write!(f, "Integrity check failed"),
            Self::InvalidPublicKey => write!(f, "Invalid public key"),
            Self::NotInitialized => write!(f, "Not initialized"),
        }
    }
}
