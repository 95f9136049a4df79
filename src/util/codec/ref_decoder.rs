use super::*;

/// A cursor into an immutable buffer that implements [Decoder].
#[derive(Clone, Copy, Debug)]
pub struct RefDecoder<'a>(&'a [u8]);

impl<'a> RefDecoder<'a> {
    pub fn new(x: &'a [u8]) -> Self {
        Self(x)
    }
}

impl<'a> Decoder<'a> for RefDecoder<'a> {
    fn expect_eoi(&self) -> Option<()> {
        if self.0.is_empty() {
            Some(())
        } else {
            None
        }
    }

    fn expect_u8(&mut self, x: u8) -> Option<()> {
        self.take_u8().filter(|y| *y == x).map(drop)
    }

    fn take_u8(&mut self) -> Option<u8> {
        let (head, tail) = self.0.split_first()?;
        self.0 = tail;
        Some(*head)
    }

    fn take_u32be(&mut self) -> Option<u32> {
        let mut x = [0; 4];
        self.take_bytes_into(&mut x)?;
        Some(u32::from_be_bytes(x))
    }

    fn take_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.0.len() < len {
            None
        } else {
            let (head, tail) = self.0.split_at(len);
            self.0 = tail;
            Some(head)
        }
    }

    fn take_bytes_into(&mut self, dst: &mut [u8]) -> Option<()> {
        let src = self.take_bytes(dst.len())?;
        dst.copy_from_slice(src);
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_u8_01() {
        let a = [0, 1, 2, 3 as u8];
        let mut c = RefDecoder::new(&a);

        assert_eq!(c.take_u8(), Some(0));
        assert_eq!(c.take_u8(), Some(1));
        assert_eq!(c.take_u8(), Some(2));
        assert_eq!(c.take_u8(), Some(3));
        assert_eq!(c.take_u8(), None);
    }

    #[test]
    fn test_take_u32be_01() {
        let a = [1, 2, 3, 4, 5 as u8];
        let mut c = RefDecoder::new(&a);

        assert_eq!(c.take_u32be(), Some(0x01020304));
        assert_eq!(c.take_u32be(), None);
        assert_eq!(c.take_u8(), Some(5));
    }

    #[test]
    fn test_take_bytes_01() {
        let a = [1, 2, 3, 4, 5 as u8];
        let mut c = RefDecoder::new(&a);

        assert_eq!(c.take_bytes(3), Some(&[1, 2, 3 as u8][..]));
        assert_eq!(c.take_bytes(3), None);
        assert_eq!(c.take_bytes(2), Some(&[4, 5 as u8][..]));
        assert_eq!(c.expect_eoi(), Some(()));
    }

    #[test]
    fn test_take_bytes_into_01() {
        let a = [1, 2, 3 as u8];
        let mut c = RefDecoder::new(&a);
        let mut x = [0; 2];

        assert_eq!(c.take_bytes_into(&mut x), Some(()));
        assert_eq!(x, [1, 2]);
        assert_eq!(c.take_bytes_into(&mut x), None);
    }

    #[test]
    fn test_expect_u8_01() {
        let a = [20, 21 as u8];
        let mut c = RefDecoder::new(&a);

        assert_eq!(c.expect_u8(20), Some(()));
        assert_eq!(c.expect_u8(20), None);
    }
}
