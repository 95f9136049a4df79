use crate::util::codec::SshCodecError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KexInitError {
    /// The message could not be encoded or decoded. Carries the cause's description.
    InvalidMessage(String),
}

impl From<SshCodecError> for KexInitError {
    fn from(e: SshCodecError) -> Self {
        Self::InvalidMessage(e.to_string())
    }
}

impl std::error::Error for KexInitError {}

impl std::fmt::Display for KexInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessage(e) => write!(f, "Invalid KEXINIT message: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_01() {
        let e = KexInitError::from(SshCodecError::DecodingFailed);
        assert_eq!(e, KexInitError::InvalidMessage("decoding failed".into()));
        assert_eq!(format!("{}", e), "Invalid KEXINIT message: decoding failed");
    }
}
