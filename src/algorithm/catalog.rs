use super::compression::*;
use super::encryption::*;
use super::format::*;
use super::kex::*;
use super::mac::*;
use super::public_key::*;
use super::*;

use std::collections::HashMap;

/// Implementation identifier to factory mapping of one category.
pub struct CatalogTable<T: ?Sized>(HashMap<String, Factory<T>>);

impl<T: ?Sized> CatalogTable<T> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, id: &str, factory: Factory<T>) {
        self.0.insert(id.into(), factory);
    }

    pub fn get(&self, id: &str) -> Option<&Factory<T>> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }
}

impl<T: ?Sized> Default for CatalogTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The implementations extension descriptors may refer to.
///
/// `Catalog::default()` contains the built-in implementations only. Applications add their
/// own implementations at startup before applying an [AlgorithmConfig].
pub struct Catalog {
    pub kex: CatalogTable<dyn KexAlgorithm>,
    pub public_key: CatalogTable<dyn PublicKeyAlgorithm>,
    pub encryption: CatalogTable<dyn EncryptionAlgorithm>,
    pub mac: CatalogTable<dyn MacAlgorithm>,
    pub compression: CatalogTable<dyn CompressionAlgorithm>,
    pub public_key_format: CatalogTable<dyn PublicKeyFormat>,
}

impl Catalog {
    /// A catalog without any implementations.
    pub fn empty() -> Self {
        Self {
            kex: CatalogTable::new(),
            public_key: CatalogTable::new(),
            encryption: CatalogTable::new(),
            mac: CatalogTable::new(),
            compression: CatalogTable::new(),
            public_key_format: CatalogTable::new(),
        }
    }

    /// A catalog with all built-in implementations.
    pub fn builtin() -> Self {
        let mut c = Self::empty();
        c.kex.insert(Curve25519Sha256::ID, curve25519_sha256());
        c.public_key.insert(SshEd25519Verifier::ID, ssh_ed25519());
        c.encryption.insert(Chacha20Poly1305::ID, chacha20_poly1305());
        c.mac.insert(HmacSha256::ID, hmac_sha256());
        c.mac.insert(HmacSha1::ID, hmac_sha1());
        c.public_key_format.insert(OpenSshPublicKeyFormat::ID, openssh_public_key_format());
        c
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn ids<T: ?Sized>(t: &CatalogTable<T>) -> Vec<&str> {
            let mut ids: Vec<&str> = t.0.keys().map(|x| x.as_str()).collect();
            ids.sort_unstable();
            ids
        }
        f.debug_struct("Catalog")
            .field("kex", &ids(&self.kex))
            .field("public_key", &ids(&self.public_key))
            .field("encryption", &ids(&self.encryption))
            .field("mac", &ids(&self.mac))
            .field("compression", &ids(&self.compression))
            .field("public_key_format", &ids(&self.public_key_format))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_01() {
        let c = Catalog::empty();
        assert!(!c.kex.contains(Curve25519Sha256::ID));
        assert!(!c.mac.contains(HmacSha256::ID));
    }

    #[test]
    fn test_builtin_01() {
        let c = Catalog::builtin();
        assert!(c.kex.contains("Curve25519Sha256"));
        assert!(c.public_key.contains("SshEd25519"));
        assert!(c.encryption.contains("ChaCha20Poly1305"));
        assert!(c.mac.contains("HmacSha256"));
        assert!(c.mac.contains("HmacSha1"));
        assert!(c.public_key_format.contains("OpenSshPublicKeyFormat"));
        assert!(!c.compression.contains("ZlibCompression"));
    }

    #[test]
    fn test_builtin_factories_01() {
        let c = Catalog::builtin();
        assert!(c.kex.get(Curve25519Sha256::ID).map(|f| f().is_ok()).unwrap_or(false));
        assert!(c.mac.get(HmacSha1::ID).map(|f| f().is_ok()).unwrap_or(false));
    }

    #[test]
    fn test_debug_01() {
        let s = format!("{:?}", Catalog::builtin());
        assert!(s.contains("\"HmacSha1\", \"HmacSha256\""));
    }
}
