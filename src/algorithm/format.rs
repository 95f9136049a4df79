use super::*;
use crate::identity::Identity;

/// A textual public key representation (e.g. an `authorized_keys` line).
pub trait PublicKeyFormat: Send {
    /// The name the format is registered under.
    fn format_name(&self) -> &str;
    fn encode(&self, key: &Identity, comment: &str) -> String;
    /// Parse a key and its (possibly empty) comment.
    fn decode(&self, text: &str) -> Result<(Identity, String), CryptoError>;
}

/// `<algorithm> <base64(blob)> [comment]` as used by OpenSSH.
#[derive(Debug, Default)]
pub struct OpenSshPublicKeyFormat;

impl OpenSshPublicKeyFormat {
    pub const NAME: &'static str = "openssh";
    pub const ID: &'static str = "OpenSshPublicKeyFormat";
}

impl PublicKeyFormat for OpenSshPublicKeyFormat {
    fn format_name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, key: &Identity, comment: &str) -> String {
        let blob = base64::encode(key);
        if comment.is_empty() {
            format!("{} {}", key.algorithm(), blob)
        } else {
            format!("{} {} {}", key.algorithm(), blob, comment)
        }
    }

    fn decode(&self, text: &str) -> Result<(Identity, String), CryptoError> {
        let e = CryptoError::InvalidPublicKey;
        let mut parts = text.trim().splitn(3, char::is_whitespace);
        let algo = parts.next().filter(|x| !x.is_empty()).ok_or(e)?;
        let blob = parts.next().ok_or(e)?;
        let comment = parts.next().unwrap_or("").trim();
        let key = Identity::from(base64::decode(blob).map_err(|_| e)?);
        if key.algorithm() != algo {
            return Err(e);
        }
        Ok((key, comment.into()))
    }
}

pub fn openssh_public_key_format() -> Factory<dyn PublicKeyFormat> {
    factory(|| Ok(Box::new(OpenSshPublicKeyFormat) as Box<dyn PublicKeyFormat>))
}

pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn PublicKeyFormat>) {
    r.register(OpenSshPublicKeyFormat::NAME, Some(openssh_public_key_format()));
}

/// Install additional format handlers. Each handler is registered under its own format name.
pub(crate) fn discover(
    r: &mut AlgorithmRegistry<dyn PublicKeyFormat>,
    ids: &[String],
    table: &CatalogTable<dyn PublicKeyFormat>,
) {
    for id in ids {
        let factory = match table.get(id) {
            Some(factory) => factory,
            None => {
                log::warn!("Skipping public key format {}: implementation not found", id);
                continue;
            }
        };
        match factory() {
            Ok(handler) => {
                let name = handler.format_name().to_string();
                if r.register(&name, Some(factory.clone())) {
                    log::info!("Installed public key format {}", name);
                }
            }
            Err(e) => log::warn!("Skipping public key format {}: {}", id, e),
        }
    }
}
