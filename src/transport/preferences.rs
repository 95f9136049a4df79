use crate::algorithm::*;

/// The preferred algorithm per KEXINIT list.
///
/// A preferred name that is not supported is ignored when the message is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KexPreferences {
    pub kex: String,
    pub public_key: String,
    pub encryption_client_to_server: String,
    pub encryption_server_to_client: String,
    pub mac_client_to_server: String,
    pub mac_server_to_client: String,
    pub compression_client_to_server: String,
    pub compression_server_to_client: String,
}

impl KexPreferences {
    /// Prefer the current default of each registry (in both directions).
    pub fn from_defaults(algorithms: &Algorithms) -> Self {
        let cipher = algorithms.cipher.default_name();
        let mac = algorithms.mac.default_name();
        let compression = algorithms.compression.default_name();
        Self {
            kex: algorithms.kex.default_name().into(),
            public_key: algorithms.public_key.default_name().into(),
            encryption_client_to_server: cipher.into(),
            encryption_server_to_client: cipher.into(),
            mac_client_to_server: mac.into(),
            mac_server_to_client: mac.into(),
            compression_client_to_server: compression.into(),
            compression_server_to_client: compression.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_defaults_01() {
        let mut a = Algorithms::builtin();
        a.mac.set_default("hmac-sha1").unwrap();
        let p = KexPreferences::from_defaults(&a);
        assert_eq!(p.kex, "curve25519-sha256@libssh.org");
        assert_eq!(p.public_key, "ssh-ed25519");
        assert_eq!(p.encryption_client_to_server, "chacha20-poly1305@openssh.com");
        assert_eq!(p.encryption_server_to_client, "chacha20-poly1305@openssh.com");
        assert_eq!(p.mac_client_to_server, "hmac-sha1");
        assert_eq!(p.mac_server_to_client, "hmac-sha1");
        assert_eq!(p.compression_client_to_server, "none");
        assert_eq!(p.compression_server_to_client, "none");
    }
}
