use super::ssh_ed25519::*;
use crate::util::codec::*;
use sha2::{Digest, Sha256};

/// A user or host public key in its SSH wire representation.
///
/// Two identities are equal iff their encodings are equal. This makes the type usable as
/// lookup key independent of the algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity(Vec<u8>);

/// A user or host public key.
pub type PublicKey = Identity;

impl Identity {
    /// The algorithm name the key blob starts with (e.g. `ssh-ed25519`).
    pub fn algorithm(&self) -> &str {
        RefDecoder::new(&self.0).take_str_framed().unwrap_or("")
    }

    /// The OpenSSH style fingerprint (`SHA256:` followed by the unpadded base64 digest).
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.0);
        format!("SHA256:{}", base64::encode_config(digest, base64::STANDARD_NO_PAD))
    }

    pub fn as_ssh_ed25519(&self) -> Option<SshEd25519PublicKey<'_>> {
        SshCodec::decode(&self.0).ok()
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Identity {
    fn from(x: Vec<u8>) -> Self {
        Self(x)
    }
}

impl SshEncode for Identity {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bytes_framed(&self.0)
    }
}

impl SshDecode for Identity {
    fn decode<'a, D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.take_bytes_framed().map(Vec::from).map(Self)
    }
}
