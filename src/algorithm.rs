mod algorithms;
mod catalog;
mod config;
mod error;
mod registry;

pub mod compression;
pub mod encryption;
pub mod format;
pub mod kex;
pub mod mac;
pub mod public_key;

pub use self::algorithms::*;
pub use self::catalog::*;
pub use self::compression::CompressionAlgorithm;
pub use self::config::*;
pub use self::encryption::EncryptionAlgorithm;
pub use self::error::*;
pub use self::format::PublicKeyFormat;
pub use self::kex::KexAlgorithm;
pub use self::mac::MacAlgorithm;
pub use self::public_key::PublicKeyAlgorithm;
pub use self::registry::*;

/// The algorithm families negotiated during key exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Kex,
    PublicKey,
    Cipher,
    Mac,
    Compression,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Kex,
        Self::PublicKey,
        Self::Cipher,
        Self::Mac,
        Self::Compression,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kex => write!(f, "key-exchange"),
            Self::PublicKey => write!(f, "public-key"),
            Self::Cipher => write!(f, "cipher"),
            Self::Mac => write!(f, "mac"),
            Self::Compression => write!(f, "compression"),
        }
    }
}
