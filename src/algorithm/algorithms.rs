use super::*;

use std::sync::{Arc, RwLock};

/// The algorithm registries of all categories.
///
/// Built-in algorithms are always registered first. Extensions follow in the order given by
/// the configuration.
#[derive(Clone, Debug)]
pub struct Algorithms {
    pub kex: AlgorithmRegistry<dyn KexAlgorithm>,
    pub public_key: AlgorithmRegistry<dyn PublicKeyAlgorithm>,
    pub cipher: AlgorithmRegistry<dyn EncryptionAlgorithm>,
    pub mac: AlgorithmRegistry<dyn MacAlgorithm>,
    pub compression: AlgorithmRegistry<dyn CompressionAlgorithm>,
    pub public_key_formats: AlgorithmRegistry<dyn PublicKeyFormat>,
    private_key_formats: Vec<String>,
    default_private_key_format: Option<String>,
}

impl Algorithms {
    /// The built-in algorithms only.
    pub fn builtin() -> Self {
        let mut kex = AlgorithmRegistry::new(Category::Kex);
        let mut public_key = AlgorithmRegistry::new(Category::PublicKey);
        let mut cipher = AlgorithmRegistry::new(Category::Cipher);
        let mut mac = AlgorithmRegistry::new(Category::Mac);
        let mut compression = AlgorithmRegistry::new(Category::Compression);
        let mut public_key_formats = AlgorithmRegistry::new(Category::PublicKey);
        kex::register_builtin(&mut kex);
        public_key::register_builtin(&mut public_key);
        encryption::register_builtin(&mut cipher);
        mac::register_builtin(&mut mac);
        compression::register_builtin(&mut compression);
        format::register_builtin(&mut public_key_formats);
        Self {
            kex,
            public_key,
            cipher,
            mac,
            compression,
            public_key_formats,
            private_key_formats: vec![],
            default_private_key_format: None,
        }
    }

    /// Built-in algorithms plus the extensions and default overrides of `config`.
    ///
    /// Extensions that cannot be resolved through `catalog` are logged and skipped. A
    /// default override naming an algorithm that is not registered is an error.
    pub fn new(config: &AlgorithmConfig, catalog: &Catalog) -> Result<Self, AlgorithmError> {
        let mut x = Self::builtin();
        x.kex.discover(&config.kex.extensions, &catalog.kex);
        x.public_key
            .discover(&config.public_key.extensions, &catalog.public_key);
        x.cipher.discover(&config.cipher.extensions, &catalog.encryption);
        x.mac.discover(&config.mac.extensions, &catalog.mac);
        x.compression
            .discover(&config.compression.extensions, &catalog.compression);
        format::discover(
            &mut x.public_key_formats,
            &config.public_key_formats,
            &catalog.public_key_format,
        );
        Self::apply_default(&mut x.kex, &config.kex)?;
        Self::apply_default(&mut x.public_key, &config.public_key)?;
        Self::apply_default(&mut x.cipher, &config.cipher)?;
        Self::apply_default(&mut x.mac, &config.mac)?;
        Self::apply_default(&mut x.compression, &config.compression)?;
        if let Some(name) = &config.default_public_key_format {
            x.public_key_formats.set_default(name)?;
        }
        x.private_key_formats = config.private_key_formats.clone();
        x.default_private_key_format = match &config.default_private_key_format {
            Some(name) if !x.private_key_formats.contains(name) => {
                return Err(AlgorithmError::Unknown(name.clone()))
            }
            Some(name) => Some(name.clone()),
            None => x.private_key_formats.first().cloned(),
        };
        Ok(x)
    }

    fn apply_default<T: ?Sized>(
        r: &mut AlgorithmRegistry<T>,
        config: &CategoryConfig,
    ) -> Result<(), AlgorithmError> {
        if let Some(name) = &config.default_algorithm {
            r.set_default(name)?;
            log::debug!("Default {} algorithm is {}", r.category(), name);
        }
        Ok(())
    }

    /// The supported names of a category in registration order.
    pub fn supported_names(&self, category: Category) -> Vec<String> {
        match category {
            Category::Kex => self.kex.supported_names(),
            Category::PublicKey => self.public_key.supported_names(),
            Category::Cipher => self.cipher.supported_names(),
            Category::Mac => self.mac.supported_names(),
            Category::Compression => self.compression.supported_names(),
        }
    }

    pub fn default_name(&self, category: Category) -> &str {
        match category {
            Category::Kex => self.kex.default_name(),
            Category::PublicKey => self.public_key.default_name(),
            Category::Cipher => self.cipher.default_name(),
            Category::Mac => self.mac.default_name(),
            Category::Compression => self.compression.default_name(),
        }
    }

    pub fn set_default(&mut self, category: Category, name: &str) -> Result<(), AlgorithmError> {
        match category {
            Category::Kex => self.kex.set_default(name),
            Category::PublicKey => self.public_key.set_default(name),
            Category::Cipher => self.cipher.set_default(name),
            Category::Mac => self.mac.set_default(name),
            Category::Compression => self.compression.set_default(name),
        }
    }

    /// Private key format identifiers (never interpreted by this crate).
    pub fn private_key_formats(&self) -> &[String] {
        &self.private_key_formats
    }

    pub fn default_private_key_format(&self) -> Option<&str> {
        self.default_private_key_format.as_deref()
    }
}

impl Default for Algorithms {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A swappable [Algorithms] instance.
///
/// Readers get a consistent snapshot with [load](Self::load). Reconfiguration builds a
/// complete new instance before it becomes visible.
#[derive(Debug)]
pub struct SharedAlgorithms(RwLock<Arc<Algorithms>>);

impl SharedAlgorithms {
    pub fn new(algorithms: Algorithms) -> Self {
        Self(RwLock::new(Arc::new(algorithms)))
    }

    pub fn load(&self) -> Arc<Algorithms> {
        let guard = self.0.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    pub fn replace(&self, algorithms: Algorithms) -> Arc<Algorithms> {
        let mut guard = self.0.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(algorithms))
    }

    /// Drop all extensions and apply a new configuration.
    ///
    /// The current instance stays in place if the new configuration is invalid.
    pub fn reconfigure(
        &self,
        config: &AlgorithmConfig,
        catalog: &Catalog,
    ) -> Result<(), AlgorithmError> {
        let algorithms = Algorithms::new(config, catalog)?;
        self.replace(algorithms);
        log::info!("Algorithms reconfigured");
        Ok(())
    }
}

impl Default for SharedAlgorithms {
    fn default() -> Self {
        Self::new(Algorithms::builtin())
    }
}
