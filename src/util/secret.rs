use crate::util::codec::*;
use std::sync::Arc;
use zeroize::*;

/// Sensitive bytes (passwords, shared secrets) that get wiped when the last copy is dropped.
#[derive(Clone)]
pub struct Secret(Arc<Vec<u8>>);

impl Secret {
    pub fn new(x: &[u8]) -> Self {
        Self(Arc::new(x.to_vec()))
    }

    /// Compare with `x` in time independent of where the contents differ.
    ///
    /// Only the length comparison exits early.
    pub fn matches(&self, x: &[u8]) -> bool {
        let own = self.as_ref();
        if own.len() != x.len() {
            return false;
        }
        own.iter().zip(x).fold(0, |acc, (a, b)| acc | (a ^ b)) == 0
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<&str> for Secret {
    fn from(x: &str) -> Self {
        Self::new(x.as_bytes())
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.as_ref())
    }
}

impl Eq for Secret {}

impl SshEncode for Secret {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bytes_framed(self.0.as_ref())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(..)")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        if let Some(x) = Arc::get_mut(&mut self.0) {
            x.zeroize()
        }
    }
}
