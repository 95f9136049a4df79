use super::*;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use zeroize::Zeroize;

/// A message authentication code algorithm.
///
/// RFC 4253: The MAC is computed over the sequence number (as uint32) followed by the
/// unencrypted packet.
pub trait MacAlgorithm: Send {
    fn key_len(&self) -> usize;
    fn mac_len(&self) -> usize;
    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError>;
    fn sign(&self, seq: u32, packet: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn verify(&self, seq: u32, packet: &[u8], tag: &[u8]) -> Result<(), CryptoError>;
}

struct HmacContext {
    key: Option<Vec<u8>>,
}

impl HmacContext {
    fn new() -> Self {
        Self { key: None }
    }

    fn init(&mut self, key_len: usize, key: &[u8]) -> Result<(), CryptoError> {
        if key.len() != key_len {
            return Err(CryptoError::InvalidKeyLength);
        }
        if let Some(mut old) = self.key.replace(key.to_vec()) {
            old.zeroize()
        }
        Ok(())
    }

    fn mac<M: Mac + KeyInit>(&self, seq: u32, packet: &[u8]) -> Result<M, CryptoError> {
        let key = self.key.as_ref().ok_or(CryptoError::NotInitialized)?;
        let mut m = <M as Mac>::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength)?;
        m.update(&seq.to_be_bytes());
        m.update(packet);
        Ok(m)
    }

    fn sign<M: Mac + KeyInit>(&self, seq: u32, packet: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.mac::<M>(seq, packet)?.finalize().into_bytes().to_vec())
    }

    fn verify<M: Mac + KeyInit>(&self, seq: u32, packet: &[u8], tag: &[u8]) -> Result<(), CryptoError> {
        self.mac::<M>(seq, packet)?
            .verify_slice(tag)
            .map_err(|_| CryptoError::IntegrityCheckFailed)
    }
}

impl Drop for HmacContext {
    fn drop(&mut self) {
        if let Some(key) = self.key.as_mut() {
            key.zeroize()
        }
    }
}

/// RFC 6668: `hmac-sha2-256`
pub struct HmacSha256(HmacContext);

impl HmacSha256 {
    pub const NAME: &'static str = "hmac-sha2-256";
    pub const ID: &'static str = "HmacSha256";
    pub const KEY_LEN: usize = 32;
    pub const MAC_LEN: usize = 32;

    pub fn new() -> Self {
        Self(HmacContext::new())
    }
}

impl Default for HmacSha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl MacAlgorithm for HmacSha256 {
    fn key_len(&self) -> usize {
        Self::KEY_LEN
    }

    fn mac_len(&self) -> usize {
        Self::MAC_LEN
    }

    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        self.0.init(Self::KEY_LEN, key)
    }

    fn sign(&self, seq: u32, packet: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.0.sign::<Hmac<Sha256>>(seq, packet)
    }

    fn verify(&self, seq: u32, packet: &[u8], tag: &[u8]) -> Result<(), CryptoError> {
        self.0.verify::<Hmac<Sha256>>(seq, packet, tag)
    }
}

/// RFC 4253: `hmac-sha1`
pub struct HmacSha1(HmacContext);

impl HmacSha1 {
    pub const NAME: &'static str = "hmac-sha1";
    pub const ID: &'static str = "HmacSha1";
    pub const KEY_LEN: usize = 20;
    pub const MAC_LEN: usize = 20;

    pub fn new() -> Self {
        Self(HmacContext::new())
    }
}

impl Default for HmacSha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl MacAlgorithm for HmacSha1 {
    fn key_len(&self) -> usize {
        Self::KEY_LEN
    }

    fn mac_len(&self) -> usize {
        Self::MAC_LEN
    }

    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        self.0.init(Self::KEY_LEN, key)
    }

    fn sign(&self, seq: u32, packet: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.0.sign::<Hmac<Sha1>>(seq, packet)
    }

    fn verify(&self, seq: u32, packet: &[u8], tag: &[u8]) -> Result<(), CryptoError> {
        self.0.verify::<Hmac<Sha1>>(seq, packet, tag)
    }
}

pub fn hmac_sha256() -> Factory<dyn MacAlgorithm> {
    factory(|| Ok(Box::new(HmacSha256::new()) as Box<dyn MacAlgorithm>))
}

pub fn hmac_sha1() -> Factory<dyn MacAlgorithm> {
    factory(|| Ok(Box::new(HmacSha1::new()) as Box<dyn MacAlgorithm>))
}

pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn MacAlgorithm>) {
    r.register(HmacSha256::NAME, Some(hmac_sha256()));
    r.register(HmacSha1::NAME, Some(hmac_sha1()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_01() {
        let mut m = HmacSha256::new();
        assert_eq!(m.init(&[1; 20]), Err(CryptoError::InvalidKeyLength));
        assert_eq!(m.init(&[1; 32]), Ok(()));
        let mut m = HmacSha1::new();
        assert_eq!(m.init(&[1; 32]), Err(CryptoError::InvalidKeyLength));
        assert_eq!(m.init(&[1; 20]), Ok(()));
    }

    #[test]
    fn test_not_initialized_01() {
        let m = HmacSha256::new();
        assert_eq!(m.sign(0, b"abc"), Err(CryptoError::NotInitialized));
    }

    #[test]
    fn test_sign_len_01() {
        let mut m = HmacSha256::new();
        m.init(&[1; 32]).unwrap();
        assert_eq!(m.sign(3, b"packet").unwrap().len(), 32);
        let mut m = HmacSha1::new();
        m.init(&[1; 20]).unwrap();
        assert_eq!(m.sign(3, b"packet").unwrap().len(), 20);
    }

    #[test]
    fn test_sign_verify_01() {
        let mut m = HmacSha256::new();
        m.init(&[5; 32]).unwrap();
        let tag = m.sign(42, b"packet").unwrap();
        assert_eq!(m.verify(42, b"packet", &tag), Ok(()));
        assert_eq!(
            m.verify(43, b"packet", &tag),
            Err(CryptoError::IntegrityCheckFailed)
        );
        assert_eq!(
            m.verify(42, b"packex", &tag),
            Err(CryptoError::IntegrityCheckFailed)
        );
    }

    #[test]
    fn test_sign_seq_prefix_01() {
        // The sequence number is part of the authenticated data
        let mut m = HmacSha1::new();
        m.init(&[9; 20]).unwrap();
        let a = m.sign(0x01020304, b"x").unwrap();
        let mut h = <Hmac<Sha1> as Mac>::new_from_slice(&[9; 20]).unwrap();
        h.update(&[1, 2, 3, 4, 120]);
        let b = h.finalize().into_bytes().to_vec();
        assert_eq!(a, b);
    }

    #[test]
    fn test_register_builtin_01() {
        let mut r = AlgorithmRegistry::new(Category::Mac);
        register_builtin(&mut r);
        assert_eq!(r.supported_names(), vec!["hmac-sha2-256", "hmac-sha1"]);
        assert_eq!(r.default_name(), "hmac-sha2-256");
    }
}
