use super::*;
use std::sync::Arc;

/// Constructs a fresh instance of an algorithm implementation.
pub type Factory<T> = Arc<dyn Fn() -> Result<Box<T>, AlgorithmError> + Send + Sync>;

/// Wrap a closure as [Factory].
pub fn factory<T, F>(f: F) -> Factory<T>
where
    T: ?Sized,
    F: Fn() -> Result<Box<T>, AlgorithmError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An algorithm name and how to instantiate it.
///
/// An entry without factory is legal and stands for "no-op" (e.g. compression `none`).
pub struct AlgorithmEntry<T: ?Sized> {
    name: String,
    factory: Option<Factory<T>>,
}

impl<T: ?Sized> AlgorithmEntry<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn factory(&self) -> Option<&Factory<T>> {
        self.factory.as_ref()
    }
}

impl<T: ?Sized> Clone for AlgorithmEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: self.factory.clone(),
        }
    }
}

/// The algorithms of one category in registration order plus the current default.
///
/// The first registered name becomes the default. Afterwards the default can only be moved to
/// another registered name, so it is always contained in the registry once it is non-empty.
pub struct AlgorithmRegistry<T: ?Sized> {
    category: Category,
    entries: Vec<AlgorithmEntry<T>>,
    default: String,
}

impl<T: ?Sized> AlgorithmRegistry<T> {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: vec![],
            default: String::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// All registered names in registration order.
    pub fn supported_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn entries(&self) -> &[AlgorithmEntry<T>] {
        &self.entries
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_default(&mut self, name: &str) -> Result<(), AlgorithmError> {
        if !self.contains(name) {
            return Err(AlgorithmError::Unknown(name.into()));
        }
        self.default = name.into();
        Ok(())
    }

    /// Register a name.
    ///
    /// Registering a name again replaces its factory but keeps its position. Names that
    /// cannot appear in a name-list are rejected and false is returned.
    pub fn register(&mut self, name: &str, factory: Option<Factory<T>>) -> bool {
        if !is_valid_name(name) {
            log::warn!("Rejecting {} algorithm {:?}: invalid name", self.category, name);
            return false;
        }
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.factory = factory,
            None => {
                if self.entries.is_empty() {
                    self.default = name.into();
                }
                let name = name.into();
                self.entries.push(AlgorithmEntry { name, factory })
            }
        }
        true
    }

    /// Create an instance of the named algorithm.
    ///
    /// Returns `Ok(None)` for entries without factory.
    pub fn instantiate(&self, name: &str) -> Result<Option<Box<T>>, AlgorithmError> {
        let e = || AlgorithmError::NotSupported(name.into());
        let entry = self.entries.iter().find(|x| x.name == name).ok_or_else(e)?;
        match &entry.factory {
            None => Ok(None),
            Some(factory) => match factory() {
                Ok(x) => Ok(Some(x)),
                Err(err) => {
                    log::debug!("{} algorithm {} failed: {}", self.category, name, err);
                    Err(e())
                }
            },
        }
    }

    pub fn instantiate_default(&self) -> Result<Option<Box<T>>, AlgorithmError> {
        self.instantiate(&self.default)
    }

    /// Install extension algorithms resolved through the catalog table.
    ///
    /// Each implementation is instantiated once as a probe. Extensions that cannot be
    /// resolved or constructed are logged and skipped.
    pub fn discover(&mut self, extensions: &[ExtensionAlgorithm], table: &CatalogTable<T>) {
        for ext in extensions {
            let name = &ext.algorithm_name;
            let factory = match table.get(&ext.implementation) {
                Some(factory) => factory,
                None => {
                    log::warn!(
                        "Skipping {} algorithm {}: implementation {} not found",
                        self.category,
                        name,
                        ext.implementation
                    );
                    continue;
                }
            };
            if let Err(e) = factory() {
                log::warn!("Skipping {} algorithm {}: {}", self.category, name, e);
                continue;
            }
            if !self.register(name, Some(factory.clone())) {
                continue;
            }
            log::info!("Installed {} algorithm {}", self.category, name);
        }
    }
}

impl<T: ?Sized> Clone for AlgorithmRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            category: self.category,
            entries: self.entries.clone(),
            default: self.default.clone(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for AlgorithmRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("category", &self.category)
            .field("names", &self.supported_names())
            .field("default", &self.default)
            .finish()
    }
}

/// RFC 4251: Names are printable US-ASCII, at most 64 characters and never contain a comma.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name.bytes().all(|c| c.is_ascii_graphic() && c != b',')
}
