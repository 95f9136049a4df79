mod decoder;
mod encoder;
mod error;
mod ref_decoder;
mod ref_encoder;
mod size_encoder;
mod ssh_decode;
mod ssh_decoder;
mod ssh_encode;
mod ssh_encoder;

pub use self::decoder::*;
pub use self::encoder::*;
pub use self::error::*;
pub use self::ref_decoder::*;
pub use self::ref_encoder::*;
pub use self::size_encoder::*;
pub use self::ssh_decode::*;
pub use self::ssh_decoder::*;
pub use self::ssh_encode::*;
pub use self::ssh_encoder::*;

/// Entry point for turning values into their SSH wire representation and back.
pub struct SshCodec;

impl SshCodec {
    /// Encode a value into a freshly allocated `Vec<u8>`.
    ///
    /// The required size is determined in a first pass with a [SizeEncoder] so that the
    /// actual encoding pass never needs to reallocate.
    pub fn encode<T: SshEncode>(x: &T) -> Result<Vec<u8>, SshCodecError> {
        let mut size = SizeEncoder::new();
        x.encode(&mut size).ok_or(SshCodecError::EncodingFailed)?;
        let mut vec = vec![0; size.into()];
        let mut enc = RefEncoder::new(&mut vec);
        x.encode(&mut enc).ok_or(SshCodecError::EncodingFailed)?;
        Ok(vec)
    }

    /// Decode a value from a byte slice.
    ///
    /// Fails unless the value consumes the whole input.
    pub fn decode<'a, T: SshDecodeRef<'a>>(bytes: &'a [u8]) -> Result<T, SshCodecError> {
        let mut dec = RefDecoder::new(bytes);
        let x = dec.take().ok_or(SshCodecError::DecodingFailed)?;
        dec.expect_eoi().ok_or(SshCodecError::DecodingFailed)?;
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_01() {
        let x = String::from("abc");
        assert_eq!(&[0, 0, 0, 3, 97, 98, 99][..], &SshCodec::encode(&x).unwrap()[..]);
    }

    #[test]
    fn test_decode_01() {
        let x: String = SshCodec::decode(&[0, 0, 0, 3, 97, 98, 99][..]).unwrap();
        assert_eq!(x, "abc");
    }

    #[test]
    fn test_decode_trailing_input_01() {
        let x: Result<String, _> = SshCodec::decode(&[0, 0, 0, 1, 97, 98][..]);
        assert_eq!(x, Err(SshCodecError::DecodingFailed));
    }
}
