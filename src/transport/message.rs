use crate::util::codec::*;

/// All types representing SSH_MSG_* messages shall implement this trait.
///
/// The message body encoding (`SshEncode`/`SshDecode`) excludes the message number. Use
/// [encode_message] and [decode_message] for the complete payload.
pub trait Message {
    /// The message number as specified in the RFCs.
    const NUMBER: u8;
}

struct Numbered<'a, M>(&'a M);

impl<'a, M: Message + SshEncode> SshEncode for Numbered<'a, M> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(M::NUMBER)?;
        self.0.encode(e)
    }
}

/// Encode message number and body.
pub fn encode_message<M: Message + SshEncode>(msg: &M) -> Result<Vec<u8>, SshCodecError> {
    SshCodec::encode(&Numbered(msg))
}

/// Decode a payload that must start with the message number of `M` and contain nothing
/// but the message.
pub fn decode_message<'a, M: Message + SshDecodeRef<'a>>(
    bytes: &'a [u8],
) -> Result<M, SshCodecError> {
    let mut d = RefDecoder::new(bytes);
    d.expect_u8(M::NUMBER).ok_or(SshCodecError::DecodingFailed)?;
    let msg = d.take().ok_or(SshCodecError::DecodingFailed)?;
    d.expect_eoi().ok_or(SshCodecError::DecodingFailed)?;
    Ok(msg)
}
