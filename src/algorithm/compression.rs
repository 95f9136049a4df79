use super::*;

/// A payload compression algorithm.
///
/// Instances are stateful: SSH compression contexts span all packets of one direction.
pub trait CompressionAlgorithm: Send {
    fn compress(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
    fn decompress(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// `none`: Registered without factory as the transport skips the compression stage entirely.
#[derive(Debug)]
pub struct NoCompression;

impl NoCompression {
    pub const NAME: &'static str = "none";
}

pub(crate) fn register_builtin(r: &mut AlgorithmRegistry<dyn CompressionAlgorithm>) {
    r.register(NoCompression::NAME, None);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reverse;

    impl CompressionAlgorithm for Reverse {
        fn compress(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
            Ok(data.iter().rev().cloned().collect())
        }
        fn decompress(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
            self.compress(data)
        }
    }

    #[test]
    fn test_register_builtin_01() {
        let mut r = AlgorithmRegistry::new(Category::Compression);
        register_builtin(&mut r);
        assert_eq!(r.supported_names(), vec!["none"]);
        assert_eq!(r.default_name(), "none");
        assert!(r.instantiate("none").unwrap().is_none());
    }

    #[test]
    fn test_extension_01() {
        let mut table = CatalogTable::new();
        table.insert(
            "ZlibImpl",
            factory(|| Ok(Box::new(Reverse) as Box<dyn CompressionAlgorithm>)),
        );
        let mut r = AlgorithmRegistry::new(Category::Compression);
        register_builtin(&mut r);
        r.discover(&[ExtensionAlgorithm::new("zlib", "ZlibImpl")], &table);
        assert_eq!(r.supported_names(), vec!["none", "zlib"]);
        assert_eq!(r.default_name(), "none");
        let mut z = r.instantiate("zlib").unwrap().unwrap();
        assert_eq!(z.compress(&[1, 2, 3]), Ok(vec![3, 2, 1]));
    }
}
