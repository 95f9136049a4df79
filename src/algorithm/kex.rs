use super::*;
use crate::util::secret::Secret;

use rand_core::OsRng;
use sha2::{Digest, Sha256};
use std::convert::TryInto;

/// A key exchange method.
///
/// An instance holds one ephemeral key pair and can compute the shared secret exactly once.
pub trait KexAlgorithm: Send {
    /// The local ephemeral public key as sent to the peer.
    fn public_key(&self) -> &[u8];
    /// Combine the local ephemeral secret with the peer's public key.
    ///
    /// The ephemeral secret is consumed. Calling this again fails with `NotInitialized`.
    fn shared_secret(&mut self, peer_public_key: &[u8]) -> Result<Secret, CryptoError>;
    /// The hash function used for the exchange hash and key derivation.
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

/// RFC 8731: `curve25519-sha256` (also known as `curve25519-sha256@libssh.org`).
pub struct Curve25519Sha256 {
    secret: Option<x25519_dalek::EphemeralSecret>,
    public: x25519_dalek::PublicKey,
}

impl Curve25519Sha256 {
    pub const NAME: &'static str = "curve25519-sha256";
    pub const NAME_LIBSSH: &'static str = "curve25519-sha256@libssh.org";
    pub const ID: &'static str = "Curve25519Sha256";

    pub fn new() -> Self {
        let secret = x25519_dalek::EphemeralSecret::new(&mut OsRng);
        let public = x25519_dalek::PublicKey::from(&secret);
        Self {
            secret: Some(secret),
            public,
        }
    }
}

impl Default for Curve25519Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl KexAlgorithm for Curve25519Sha256 {
    fn public_key(&self) -> &[u8] {
        self.public.as_bytes().as_ref()
    }

    fn shared_secret(&mut self, peer_public_key: &[u8]) -> Result<Secret, CryptoError> {
        let peer: [u8; 32] = peer_public_key
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        let secret = self.secret.take().ok_or(CryptoError::NotInitialized)?;
        let shared = secret.diffie_hellman(&x25519_dalek::PublicKey::from(peer));
        // RFC 8731: An all-zero shared secret must be rejected
        if shared.as_bytes().iter().all(|x| *x == 0) {
            return Err(CryptoError::InvalidPublicKey);
        }
        Ok(Secret::new(shared.as_bytes()))
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

impl std::fmt::Debug for Curve25519Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Curve25519Sha256")
            .field("public", self.public.as_bytes())
            .field("secret", &self.secret.as_ref().map(|_| ".."))
            .finish()
    }
}

pub fn curve25519_sha256() -> Factory<dyn KexAlgorithm> {
    factory(|| Ok(Box::new(Curve25519Sha256::new()) as Box<dyn KexAlgorithm>))
}

/// Register the built-in key exchange methods (default: `curve25519-sha256@libssh.org`).
pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn KexAlgorithm>) {
    r.register(Curve25519Sha256::NAME_LIBSSH, Some(curve25519_sha256()));
    r.register(Curve25519Sha256::NAME, Some(curve25519_sha256()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffie_hellman_01() {
        let mut a = Curve25519Sha256::new();
        let mut b = Curve25519Sha256::new();
        let pa = a.public_key().to_vec();
        let pb = b.public_key().to_vec();
        let sa = a.shared_secret(&pb).unwrap();
        let sb = b.shared_secret(&pa).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(sa.as_ref().len(), 32);
    }

    #[test]
    fn test_shared_secret_twice_01() {
        let mut a = Curve25519Sha256::new();
        let b = Curve25519Sha256::new();
        assert!(a.shared_secret(b.public_key()).is_ok());
        assert_eq!(
            a.shared_secret(b.public_key()),
            Err(CryptoError::NotInitialized)
        );
    }

    #[test]
    fn test_shared_secret_invalid_length_01() {
        let mut a = Curve25519Sha256::new();
        assert_eq!(
            a.shared_secret(&[1; 31]),
            Err(CryptoError::InvalidPublicKey)
        );
        // The secret is only consumed by well-formed input
        let b = Curve25519Sha256::new();
        assert!(a.shared_secret(b.public_key()).is_ok());
    }

    #[test]
    fn test_shared_secret_all_zero_01() {
        let mut a = Curve25519Sha256::new();
        assert_eq!(
            a.shared_secret(&[0; 32]),
            Err(CryptoError::InvalidPublicKey)
        );
    }

    #[test]
    fn test_hash_01() {
        let a = Curve25519Sha256::new();
        let h = a.hash(b"abc");
        assert_eq!(h.len(), 32);
        assert_eq!(&h[..4], &[0xba, 0x78, 0x16, 0xbf]);
    }

    #[test]
    fn test_register_builtin_01() {
        let mut r = AlgorithmRegistry::new(Category::Kex);
        register_builtin(&mut r);
        assert_eq!(
            r.supported_names(),
            vec!["curve25519-sha256@libssh.org", "curve25519-sha256"]
        );
        assert_eq!(r.default_name(), "curve25519-sha256@libssh.org");
        assert!(r.instantiate_default().unwrap().is_some());
    }
}
