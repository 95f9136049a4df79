use super::*;

/// SSH specific encoding.
pub trait SshEncode {
    #[must_use]
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()>;
}

impl SshEncode for () {
    fn encode<E: SshEncoder>(&self, _: &mut E) -> Option<()> {
        Some(())
    }
}

impl SshEncode for u32 {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u32be(*self)
    }
}

impl SshEncode for String {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(self)
    }
}

impl SshEncode for &str {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(self)
    }
}

impl<A: SshEncode, B: SshEncode> SshEncode for (A, B) {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push(&self.0)?;
        e.push(&self.1)
    }
}
