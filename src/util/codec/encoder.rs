/// An `Encoder` is anything that is able to process a sequence of basic encoding operations
/// and assembles them into a result. It is most likely a bytestream assembler, but might also
/// just count the bytes (see [super::SizeEncoder]).
///
/// All operations shall return `Optional` instead of panicking. When being inlined the compiler is
/// usually able to generate quite efficient code and can merge subsequent bounds checks or
/// eliminate them completely.
pub trait Encoder: Sized {
    /// Push a `u8` to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_u8(&mut self, x: u8) -> Option<()>;
    /// Push a `u32` in big-endian representation to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_u32be(&mut self, x: u32) -> Option<()>;
    /// Push raw bytes to the encoder state.
    ///
    /// Returns `None` if the encoder had insufficient capacity.
    #[must_use]
    fn push_bytes(&mut self, x: &[u8]) -> Option<()>;
}
