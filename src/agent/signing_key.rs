use crate::algorithm::CryptoError;
use crate::identity::ssh_ed25519::*;
use crate::identity::*;
use crate::util::codec::*;

use ed25519_dalek::{Keypair, PublicKey, SecretKey, Signer};
use rand_core::{OsRng, RngCore};
use zeroize::Zeroize;

/// Private key material held by the agent.
pub trait SigningKey: Send {
    /// The public half in wire representation.
    fn public_key(&self) -> Identity;
    fn sign(&self, data: &[u8]) -> Result<Signature, SignatureError>;
}

pub struct Ed25519SigningKey {
    keypair: Keypair,
}

impl Ed25519SigningKey {
    /// Generate a new key from the OS random number generator.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        let key = Self::from_seed(&seed);
        seed.zeroize();
        key
    }

    /// Create a key from its 32 byte seed (the ed25519 secret key).
    pub fn from_seed(seed: &[u8]) -> Result<Self, CryptoError> {
        let secret = SecretKey::from_bytes(seed).map_err(|_| CryptoError::InvalidKeyLength)?;
        let public = PublicKey::from(&secret);
        let keypair = Keypair { secret, public };
        Ok(Self { keypair })
    }
}

impl SigningKey for Ed25519SigningKey {
    fn public_key(&self) -> Identity {
        let pk = SshEd25519PublicKey(self.keypair.public.as_bytes());
        // Encoding a fixed size key into a vector cannot fail
        Identity::from(SshCodec::encode(&pk).unwrap_or_default())
    }

    fn sign(&self, data: &[u8]) -> Result<Signature, SignatureError> {
        let sig = self
            .keypair
            .try_sign(data)
            .map_err(|_| SignatureError::InvalidSignature)?;
        Ok(Signature::new(
            SshEd25519::NAME.into(),
            sig.to_bytes().to_vec(),
        ))
    }
}

impl std::fmt::Debug for Ed25519SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ed25519SigningKey({})", self.public_key().fingerprint())
    }
}
