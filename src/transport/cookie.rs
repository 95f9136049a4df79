use crate::util::codec::*;
use rand_core::OsRng;
use rand_core::RngCore;

/// The 16 random bytes at the start of every KEXINIT message.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KexCookie(pub [u8; 16]);

impl KexCookie {
    pub fn random() -> Self {
        let mut cookie: [u8; 16] = [0; 16];
        OsRng.fill_bytes(&mut cookie);
        Self(cookie)
    }
}

impl AsRef<[u8]> for KexCookie {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SshEncode for KexCookie {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bytes(&self.0)
    }
}

impl SshDecode for KexCookie {
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        let mut x = [0; 16];
        d.take_bytes_into(&mut x)?;
        Some(Self(x))
    }
}

impl std::fmt::Debug for KexCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KexCookie(")?;
        for i in &self.0 {
            write!(f, "{:02x}", i)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_01() {
        let c1 = KexCookie::random();
        let c2 = KexCookie::random();
        assert_ne!(c1.0, c2.0);
    }

    #[test]
    fn test_debug_01() {
        let k1 = KexCookie([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(
            "KexCookie(000102030405060708090a0b0c0d0e0f)",
            format!("{:?}", k1)
        );
    }

    #[test]
    fn test_encode_01() {
        let k1 = KexCookie([7; 16]);
        assert_eq!(SshCodec::encode(&k1).unwrap(), vec![7; 16]);
    }

    #[test]
    fn test_decode_01() {
        let k1: KexCookie = SshCodec::decode(&[9; 16][..]).unwrap();
        assert_eq!(k1, KexCookie([9; 16]));
        let k2: Result<KexCookie, _> = SshCodec::decode(&[9; 15][..]);
        assert!(k2.is_err());
    }
}
