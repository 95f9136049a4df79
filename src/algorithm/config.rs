use super::*;

/// An additional algorithm name backed by a catalog implementation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionAlgorithm {
    /// The name advertised on the wire (e.g. `hmac-sha2-256-etm@example.com`).
    pub algorithm_name: String,
    /// The catalog identifier of the implementation (e.g. `HmacSha256`).
    pub implementation: String,
}

impl ExtensionAlgorithm {
    pub fn new(algorithm_name: &str, implementation: &str) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            implementation: implementation.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Extension algorithms in discovery order.
    ///
    /// Defaults to the empty list.
    pub extensions: Vec<ExtensionAlgorithm>,
    /// Overrides the category default.
    ///
    /// Defaults to `None` (first built-in algorithm).
    pub default_algorithm: Option<String>,
}

/// The algorithm configuration as produced by an external configuration loader.
///
/// `AlgorithmConfig::default()` yields the built-in algorithms only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlgorithmConfig {
    pub kex: CategoryConfig,
    pub public_key: CategoryConfig,
    pub cipher: CategoryConfig,
    pub mac: CategoryConfig,
    pub compression: CategoryConfig,
    /// Catalog identifiers of additional public key format handlers.
    ///
    /// Defaults to the empty list (`openssh` is always available).
    pub public_key_formats: Vec<String>,
    /// Defaults to `None` (`openssh`).
    pub default_public_key_format: Option<String>,
    /// Private key format identifiers. They are passed through uninterpreted.
    ///
    /// Defaults to the empty list.
    pub private_key_formats: Vec<String>,
    /// Defaults to `None` (first entry of `private_key_formats` if any).
    pub default_private_key_format: Option<String>,
}

impl AlgorithmConfig {
    pub fn category(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::Kex => &self.kex,
            Category::PublicKey => &self.public_key,
            Category::Cipher => &self.cipher,
            Category::Mac => &self.mac,
            Category::Compression => &self.compression,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut CategoryConfig {
        match category {
            Category::Kex => &mut self.kex,
            Category::PublicKey => &mut self.public_key,
            Category::Cipher => &mut self.cipher,
            Category::Mac => &mut self.mac,
            Category::Compression => &mut self.compression,
        }
    }
}
