use super::*;
use crate::identity::ssh_ed25519::SshEd25519;
use crate::identity::*;

use ed25519_dalek::PublicKey as PK;
use ed25519_dalek::Signature as SG;
use std::convert::TryFrom;

/// A public key (host key) algorithm.
pub trait PublicKeyAlgorithm: Send {
    /// Check `signature` over `data` against the public key `identity`.
    fn verify(
        &self,
        identity: &Identity,
        data: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError>;
}

#[derive(Debug, Default)]
pub struct SshEd25519Verifier;

impl SshEd25519Verifier {
    pub const NAME: &'static str = SshEd25519::NAME;
    pub const ID: &'static str = "SshEd25519";
}

impl PublicKeyAlgorithm for SshEd25519Verifier {
    fn verify(
        &self,
        identity: &Identity,
        data: &[u8],
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        let e = SignatureError::InvalidSignature;
        if signature.algo() != Self::NAME {
            return Err(SignatureError::UnsupportedSignature);
        }
        let id = identity
            .as_ssh_ed25519()
            .ok_or(SignatureError::UnsupportedIdentity)?;
        let key = PK::from_bytes(id.pk().as_ref()).map_err(|_| e)?;
        let sig = SG::try_from(signature.data()).map_err(|_| e)?;
        key.verify_strict(data, &sig).map_err(|_| e)
    }
}

pub fn ssh_ed25519() -> Factory<dyn PublicKeyAlgorithm> {
    factory(|| Ok(Box::new(SshEd25519Verifier) as Box<dyn PublicKeyAlgorithm>))
}

pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn PublicKeyAlgorithm>) {
    r.register(SshEd25519Verifier::NAME, Some(ssh_ed25519()));
}
