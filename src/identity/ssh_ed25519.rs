use crate::util::codec::*;
use std::convert::TryInto;

#[derive(Debug)]
pub struct SshEd25519;

impl SshEd25519 {
    pub const NAME: &'static str = "ssh-ed25519";
}

#[derive(PartialEq, Clone, Debug)]
pub struct SshEd25519PublicKey<'a>(pub &'a [u8; 32]);

impl<'a> SshEd25519PublicKey<'a> {
    pub fn pk(&self) -> &[u8; 32] {
        self.0
    }
}

impl<'a> SshEncode for SshEd25519PublicKey<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(SshEd25519::NAME)?;
        e.push_bytes_framed(self.0)
    }
}

impl<'a> SshDecodeRef<'a> for SshEd25519PublicKey<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_str_framed(SshEd25519::NAME)?;
        d.take_bytes_framed()?.try_into().ok().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_01() {
        let key = SshEd25519PublicKey(&[3; 32]);
        let actual = SshCodec::encode(&key).unwrap();
        let mut expected = vec![
            0, 0, 0, 11, 115, 115, 104, 45, 101, 100, 50, 53, 53, 49, 57, 0, 0, 0, 32,
        ];
        expected.extend_from_slice(&[3; 32]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_wrong_length_01() {
        let bin = [
            0, 0, 0, 11, 115, 115, 104, 45, 101, 100, 50, 53, 53, 49, 57, 0, 0, 0, 1, 3,
        ];
        let key: Result<SshEd25519PublicKey, _> = SshCodec::decode(&bin[..]);
        assert!(key.is_err());
    }
}
