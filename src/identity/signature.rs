use crate::util::codec::*;

/// A public key signature.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    algo: String,
    data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignatureError {
    UnsupportedSignature,
    UnsupportedIdentity,
    InvalidSignature,
}

impl Signature {
    pub fn new(algo: String, data: Vec<u8>) -> Self {
        Self { algo, data }
    }

    pub fn algo(&self) -> &str {
        &self.algo
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl SshEncode for Signature {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        let alen = self.algo.len();
        let slen = self.data.len();
        e.push_usize(8 + alen + slen)?;
        e.push_str_framed(&self.algo)?;
        e.push_bytes_framed(&self.data)
    }
}

impl SshDecode for Signature {
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        let innr = d.take_bytes_framed()?;
        let innr = &mut RefDecoder::new(innr);
        let algo = innr.take_str_framed().map(String::from)?;
        let data = innr.take_bytes_framed().map(Vec::from)?;
        innr.expect_eoi()?;
        Some(Self { algo, data })
    }
}

impl std::error::Error for SignatureError {}

impl std::fmt::Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedSignature => write!(f, "Unsupported signature algorithm"),
            Self::UnsupportedIdentity => write!(f, "Unsupported identity"),
            Self::InvalidSignature => write!(f, "Invalid signature"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_01() {
        let sig = Signature::new("ab".into(), vec![1, 2, 3]);
        let expected = [0, 0, 0, 13, 0, 0, 0, 2, 97, 98, 0, 0, 0, 3, 1, 2, 3];
        assert_eq!(&expected[..], &SshCodec::encode(&sig).unwrap()[..]);
    }

    #[test]
    fn test_decode_01() {
        let bin = [0, 0, 0, 13, 0, 0, 0, 2, 97, 98, 0, 0, 0, 3, 1, 2, 3];
        let sig: Signature = SshCodec::decode(&bin[..]).unwrap();
        assert_eq!(sig.algo(), "ab");
        assert_eq!(sig.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_decode_trailing_inner_01() {
        let bin = [0, 0, 0, 14, 0, 0, 0, 2, 97, 98, 0, 0, 0, 3, 1, 2, 3, 9];
        let sig: Result<Signature, _> = SshCodec::decode(&bin[..]);
        assert!(sig.is_err());
    }
}
