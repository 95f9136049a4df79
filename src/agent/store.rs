use super::*;
use crate::identity::Identity;
use crate::util::secret::Secret;

pub(crate) struct KeyRecord {
    pub public_key: Identity,
    pub private_key: Box<dyn SigningKey>,
    pub description: String,
    pub constraints: Box<dyn KeyConstraints>,
}

/// The keys and lock state of a [KeyAgent].
///
/// Listeners observe the agent through this read-only view.
#[derive(Default)]
pub struct KeyStore {
    records: Vec<KeyRecord>,
    password: Option<Secret>,
}

impl KeyStore {
    /// All public keys with their descriptions in insertion order.
    pub fn public_keys(&self) -> Vec<(Identity, String)> {
        self.records
            .iter()
            .map(|r| (r.public_key.clone(), r.description.clone()))
            .collect()
    }

    pub fn contains(&self, key: &Identity) -> bool {
        self.index_of(key).is_some()
    }

    pub fn index_of(&self, key: &Identity) -> Option<usize> {
        self.records.iter().position(|r| &r.public_key == key)
    }

    pub fn element_at(&self, index: usize) -> Option<&Identity> {
        self.records.get(index).map(|r| &r.public_key)
    }

    pub fn description(&self, key: &Identity) -> Option<&str> {
        self.record(key).map(|r| r.description.as_str())
    }

    /// The usage policy of a key.
    pub fn constraints(&self, key: &Identity) -> Option<&dyn KeyConstraints> {
        self.record(key).map(|r| r.constraints.as_ref())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.password.is_some()
    }

    fn record(&self, key: &Identity) -> Option<&KeyRecord> {
        self.records.iter().find(|r| &r.public_key == key)
    }

    pub(crate) fn record_mut(&mut self, key: &Identity) -> Option<&mut KeyRecord> {
        self.records.iter_mut().find(|r| &r.public_key == key)
    }

    pub(crate) fn insert(&mut self, record: KeyRecord) -> bool {
        if self.contains(&record.public_key) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub(crate) fn remove(&mut self, key: &Identity, description: &str) -> bool {
        match self.index_of(key) {
            Some(i) if self.records[i].description == description => {
                self.records.remove(i);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear()
    }

    pub(crate) fn lock(&mut self, password: &str) -> bool {
        if self.password.is_some() {
            return false;
        }
        self.password = Some(Secret::from(password));
        true
    }

    pub(crate) fn unlock(&mut self, password: &str) -> bool {
        match &self.password {
            Some(p) if p.matches(password.as_bytes()) => {
                self.password = None;
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self
            .records
            .iter()
            .map(|r| r.public_key.fingerprint())
            .collect();
        f.debug_struct("KeyStore")
            .field("keys", &keys)
            .field("locked", &self.is_locked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seed: u8, description: &str) -> KeyRecord {
        let key = Ed25519SigningKey::from_seed(&[seed; 32]).unwrap();
        KeyRecord {
            public_key: key.public_key(),
            private_key: Box::new(key),
            description: description.into(),
            constraints: Box::new(UsageConstraints::default()),
        }
    }

    fn identity(seed: u8) -> Identity {
        Ed25519SigningKey::from_seed(&[seed; 32]).unwrap().public_key()
    }

    #[test]
    fn test_insert_01() {
        let mut s = KeyStore::default();
        assert!(s.insert(record(1, "a")));
        assert!(s.insert(record(2, "b")));
        assert!(!s.insert(record(1, "c")));
        assert_eq!(s.len(), 2);
        assert_eq!(s.description(&identity(1)), Some("a"));
    }

    #[test]
    fn test_index_01() {
        let mut s = KeyStore::default();
        s.insert(record(1, "a"));
        s.insert(record(2, "b"));
        assert_eq!(s.index_of(&identity(2)), Some(1));
        assert_eq!(s.element_at(0), Some(&identity(1)));
        assert_eq!(s.element_at(2), None);
        assert_eq!(s.index_of(&identity(3)), None);
    }

    #[test]
    fn test_constraints_01() {
        let mut s = KeyStore::default();
        s.insert(record(1, "a"));
        let c = s.constraints(&identity(1)).unwrap();
        assert!(c.can_use());
        assert!(!c.has_timed_out());
        assert!(s.constraints(&identity(2)).is_none());
    }

    #[test]
    fn test_remove_01() {
        let mut s = KeyStore::default();
        s.insert(record(1, "a"));
        s.insert(record(2, "b"));
        assert!(!s.remove(&identity(1), "b"));
        assert!(!s.remove(&identity(3), "a"));
        assert!(s.remove(&identity(1), "a"));
        assert_eq!(s.public_keys(), vec![(identity(2), "b".to_string())]);
        assert_eq!(s.index_of(&identity(2)), Some(0));
    }

    #[test]
    fn test_lock_01() {
        let mut s = KeyStore::default();
        assert!(!s.is_locked());
        assert!(!s.unlock("a"));
        assert!(s.lock("a"));
        assert!(!s.lock("b"));
        assert!(!s.unlock("b"));
        assert!(!s.unlock("aa"));
        assert!(!s.unlock(""));
        assert!(s.is_locked());
        assert!(s.unlock("a"));
        assert!(!s.is_locked());
    }

    #[test]
    fn test_debug_01() {
        let mut s = KeyStore::default();
        s.insert(record(1, "a"));
        s.lock("secret");
        let d = format!("{:?}", s);
        assert!(d.contains("SHA256:"));
        assert!(d.contains("locked: true"));
        assert!(!d.contains("secret"));
    }
}
