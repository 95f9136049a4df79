use super::*;

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{ChaCha20Legacy, Key, LegacyNonce};
use poly1305::universal_hash::KeyInit;
use poly1305::Poly1305;
use zeroize::Zeroize;

/// Size of the packet length field that precedes every binary packet.
pub const PACKET_LEN_SIZE: usize = 4;
/// The maximum total packet size an implementation must accept.
pub const MAX_PACKET_LEN: usize = 35000;

/// A packet encryption algorithm.
///
/// Buffers passed to `encrypt` and `decrypt` contain the whole binary packet including the
/// length field and room for the authentication tag (`mac_len` bytes at the end).
pub trait EncryptionAlgorithm: Send {
    fn key_len(&self) -> usize;
    fn block_len(&self) -> usize;
    /// Length of the integrated authentication tag (0 for non-AEAD ciphers).
    fn mac_len(&self) -> usize;
    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError>;
    fn encrypt(&self, seq: u64, buf: &mut [u8]) -> Result<(), CryptoError>;
    /// Authenticate and decrypt in place and return the length of the decrypted region.
    fn decrypt(&self, seq: u64, buf: &mut [u8]) -> Result<usize, CryptoError>;
    /// Decrypt the length field and return the total packet size including the tag.
    fn decrypt_len(&self, seq: u64, len: [u8; 4]) -> Result<usize, CryptoError>;
}

/// `chacha20-poly1305@openssh.com` as described in OpenSSH's `PROTOCOL.chacha20poly1305`.
///
/// The 64 byte key consists of K_2 (packet payload) followed by K_1 (length field).
#[derive(Default)]
pub struct Chacha20Poly1305 {
    keys: Option<Chacha20Poly1305Keys>,
}

struct Chacha20Poly1305Keys {
    k1: [u8; 32],
    k2: [u8; 32],
}

impl Drop for Chacha20Poly1305Keys {
    fn drop(&mut self) {
        self.k1.zeroize();
        self.k2.zeroize();
    }
}

impl Chacha20Poly1305 {
    pub const NAME: &'static str = "chacha20-poly1305@openssh.com";
    pub const ID: &'static str = "ChaCha20Poly1305";
    pub const BLOCK_LEN: usize = 8;
    pub const MAC_LEN: usize = 16;
    pub const KEY_LEN: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> Result<&Chacha20Poly1305Keys, CryptoError> {
        self.keys.as_ref().ok_or(CryptoError::NotInitialized)
    }

    fn poly1305(k2: &[u8; 32], nonce: &[u8; 8]) -> (ChaCha20Legacy, Poly1305) {
        // The Poly1305 key is the first 32 bytes of the K_2 keystream (block 0)
        let mut chacha = ChaCha20Legacy::new(Key::from_slice(k2), LegacyNonce::from_slice(nonce));
        let mut poly_key: [u8; 32] = [0; 32];
        chacha.apply_keystream(&mut poly_key);
        let poly = Poly1305::new(poly1305::Key::from_slice(&poly_key));
        // Consume the rest of block 0 so that the payload starts with block 1
        chacha.apply_keystream(&mut poly_key);
        poly_key.zeroize();
        (chacha, poly)
    }
}

impl EncryptionAlgorithm for Chacha20Poly1305 {
    fn key_len(&self) -> usize {
        Self::KEY_LEN
    }

    fn block_len(&self) -> usize {
        Self::BLOCK_LEN
    }

    fn mac_len(&self) -> usize {
        Self::MAC_LEN
    }

    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        if key.len() != Self::KEY_LEN {
            return Err(CryptoError::InvalidKeyLength);
        }
        let mut keys = Chacha20Poly1305Keys {
            k1: [0; 32],
            k2: [0; 32],
        };
        keys.k2.copy_from_slice(&key[..32]);
        keys.k1.copy_from_slice(&key[32..]);
        self.keys = Some(keys);
        Ok(())
    }

    fn encrypt(&self, seq: u64, buf: &mut [u8]) -> Result<(), CryptoError> {
        let keys = self.keys()?;
        if buf.len() < PACKET_LEN_SIZE + Self::MAC_LEN {
            return Err(CryptoError::InvalidLength);
        }
        let nonce: [u8; 8] = seq.to_be_bytes();
        // Encrypt packet length (first 4 bytes) with K_1
        let mut chacha = ChaCha20Legacy::new(Key::from_slice(&keys.k1), LegacyNonce::from_slice(&nonce));
        chacha.apply_keystream(&mut buf[..PACKET_LEN_SIZE]);
        // Encipher padding len byte + msg + padding with K_2
        let (mut chacha, poly) = Self::poly1305(&keys.k2, &nonce);
        let cipher_end = buf.len() - Self::MAC_LEN;
        chacha.apply_keystream(&mut buf[PACKET_LEN_SIZE..cipher_end]);
        // Compute and set the Poly1305 auth tag
        let tag = poly.compute_unpadded(&buf[..cipher_end]);
        buf[cipher_end..].copy_from_slice(tag.as_ref());
        Ok(())
    }

    fn decrypt(&self, seq: u64, buf: &mut [u8]) -> Result<usize, CryptoError> {
        let keys = self.keys()?;
        if buf.len() <= PACKET_LEN_SIZE + Self::MAC_LEN {
            return Err(CryptoError::InvalidLength);
        }
        let nonce: [u8; 8] = seq.to_be_bytes();
        let (mut chacha, poly) = Self::poly1305(&keys.k2, &nonce);
        let cipher_end = buf.len() - Self::MAC_LEN;
        let tag_computed = poly.compute_unpadded(&buf[..cipher_end]);
        let tag_received = &buf[cipher_end..];
        let diff = tag_computed
            .iter()
            .zip(tag_received)
            .fold(0, |acc, (a, b)| acc | (a ^ b));
        if diff != 0 {
            return Err(CryptoError::IntegrityCheckFailed);
        }
        chacha.apply_keystream(&mut buf[PACKET_LEN_SIZE..cipher_end]);
        Ok(cipher_end - PACKET_LEN_SIZE)
    }

    fn decrypt_len(&self, seq: u64, mut len: [u8; 4]) -> Result<usize, CryptoError> {
        let keys = self.keys()?;
        let nonce: [u8; 8] = seq.to_be_bytes();
        let mut chacha = ChaCha20Legacy::new(Key::from_slice(&keys.k1), LegacyNonce::from_slice(&nonce));
        chacha.apply_keystream(&mut len);
        let len = PACKET_LEN_SIZE + u32::from_be_bytes(len) as usize + Self::MAC_LEN;
        if len > MAX_PACKET_LEN {
            return Err(CryptoError::InvalidLength);
        }
        Ok(len)
    }
}

impl std::fmt::Debug for Chacha20Poly1305 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chacha20Poly1305 {{ initialized: {} }}", self.keys.is_some())
    }
}

pub fn chacha20_poly1305() -> Factory<dyn EncryptionAlgorithm> {
    factory(|| Ok(Box::new(Chacha20Poly1305::new()) as Box<dyn EncryptionAlgorithm>))
}

pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn EncryptionAlgorithm>) {
    r.register(Chacha20Poly1305::NAME, Some(chacha20_poly1305()));
}

#[cfg(test)]
mod tests {
    use super::*;

    const K1: [u8; 32] = [
        220, 134, 135, 208, 1, 2, 121, 163, 164, 252, 211, 244, 36, 148, 174, 220, 234, 137, 133,
        117, 40, 131, 157, 84, 211, 208, 74, 103, 215, 88, 145, 28,
    ];
    const K2: [u8; 32] = [
        136, 155, 238, 35, 145, 72, 154, 220, 247, 70, 199, 97, 239, 124, 7, 41, 45, 7, 131, 160,
        203, 80, 54, 7, 100, 198, 188, 112, 19, 150, 155, 10,
    ];

    fn example_context() -> Chacha20Poly1305 {
        let mut key = [0; 64];
        key[..32].copy_from_slice(&K2);
        key[32..].copy_from_slice(&K1);
        let mut ctx = Chacha20Poly1305::new();
        ctx.init(&key).unwrap();
        ctx
    }

    fn example_plain() -> [u8; 36] {
        let mut plain = [0; 36];
        plain[..6].copy_from_slice(&[0, 0, 0, 16, 10, 97]);
        plain
    }

    #[test]
    fn test_init_01() {
        let mut ctx = Chacha20Poly1305::new();
        assert_eq!(ctx.init(&[0; 32]), Err(CryptoError::InvalidKeyLength));
        assert_eq!(ctx.init(&[0; 64]), Ok(()));
    }

    #[test]
    fn test_not_initialized_01() {
        let ctx = Chacha20Poly1305::new();
        let mut buf = example_plain();
        assert_eq!(ctx.encrypt(7, &mut buf), Err(CryptoError::NotInitialized));
        assert_eq!(ctx.decrypt(7, &mut buf), Err(CryptoError::NotInitialized));
        assert_eq!(ctx.decrypt_len(7, [0; 4]), Err(CryptoError::NotInitialized));
    }

    #[test]
    fn test_encrypt_01() {
        let ctx = example_context();
        let mut buf = example_plain();
        ctx.encrypt(7, &mut buf).unwrap();
        let expected: [u8; 20] = [
            76, 188, 158, 20, 126, 192, 194, 231, 77, 234, 102, 185, 54, 122, 208, 204, 155, 191,
            192, 209,
        ];
        assert_eq!(&buf[..20], &expected[..]);
    }

    #[test]
    fn test_encrypt_decrypt_01() {
        let ctx = example_context();
        let plain = example_plain();
        let mut buf = plain;
        ctx.encrypt(7, &mut buf).unwrap();
        assert_ne!(&buf[..20], &plain[..20]);
        assert_eq!(ctx.decrypt_len(7, [buf[0], buf[1], buf[2], buf[3]]), Ok(36));
        assert_eq!(ctx.decrypt(7, &mut buf), Ok(16));
        assert_eq!(&buf[4..20], &plain[4..20]);
    }

    #[test]
    fn test_decrypt_tampered_01() {
        let ctx = example_context();
        let mut buf = example_plain();
        ctx.encrypt(7, &mut buf).unwrap();
        buf[5] ^= 1;
        let copy = buf;
        assert_eq!(ctx.decrypt(7, &mut buf), Err(CryptoError::IntegrityCheckFailed));
        // Nothing is decrypted unless the tag is valid
        assert_eq!(buf, copy);
    }

    #[test]
    fn test_decrypt_wrong_seq_01() {
        let ctx = example_context();
        let mut buf = example_plain();
        ctx.encrypt(7, &mut buf).unwrap();
        assert_eq!(ctx.decrypt(8, &mut buf), Err(CryptoError::IntegrityCheckFailed));
    }

    #[test]
    fn test_decrypt_len_01() {
        let ctx = example_context();
        assert_eq!(ctx.decrypt_len(7, [76, 188, 158, 20]), Ok(36));
    }

    #[test]
    fn test_decrypt_len_02() {
        let mut ctx = Chacha20Poly1305::new();
        ctx.init(&[0; 64]).unwrap();
        assert_eq!(
            ctx.decrypt_len(7, [76, 188, 158, 20]),
            Err(CryptoError::InvalidLength)
        );
    }

    #[test]
    fn test_short_buffer_01() {
        let ctx = example_context();
        let mut buf = [0; 19];
        assert_eq!(ctx.encrypt(0, &mut buf), Err(CryptoError::InvalidLength));
        assert_eq!(ctx.decrypt(0, &mut buf), Err(CryptoError::InvalidLength));
    }
}
