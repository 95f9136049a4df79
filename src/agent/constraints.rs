use std::time::{Duration, Instant};

/// The usage policy of a stored key.
///
/// The agent consults `can_use` and `has_timed_out` before each signing operation and calls
/// `consume` once per signature.
pub trait KeyConstraints: Send {
    fn can_use(&self) -> bool;
    fn has_timed_out(&self) -> bool;
    fn consume(&mut self);
}

/// Limits a key by number of uses and/or lifetime.
#[derive(Clone, Debug)]
pub struct UsageConstraints {
    max_uses: Option<u64>,
    lifetime: Option<Duration>,
    created: Instant,
    uses: u64,
}

impl UsageConstraints {
    /// No limits.
    pub fn unlimited() -> Self {
        Self {
            max_uses: None,
            lifetime: None,
            created: Instant::now(),
            uses: 0,
        }
    }

    pub fn with_max_uses(mut self, max_uses: u64) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    /// The lifetime is measured from construction.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    pub fn uses(&self) -> u64 {
        self.uses
    }

    /// `None` if the number of uses is unlimited.
    pub fn remaining_uses(&self) -> Option<u64> {
        self.max_uses.map(|m| m.saturating_sub(self.uses))
    }
}

impl Default for UsageConstraints {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl KeyConstraints for UsageConstraints {
    fn can_use(&self) -> bool {
        self.max_uses.map(|m| self.uses < m).unwrap_or(true)
    }

    fn has_timed_out(&self) -> bool {
        self.lifetime
            .map(|l| self.created.elapsed() >= l)
            .unwrap_or(false)
    }

    fn consume(&mut self) {
        self.uses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_01() {
        let mut c = UsageConstraints::default();
        for _ in 0..100 {
            c.consume();
        }
        assert!(c.can_use());
        assert!(!c.has_timed_out());
        assert_eq!(c.uses(), 100);
    }

    #[test]
    fn test_max_uses_01() {
        let mut c = UsageConstraints::unlimited().with_max_uses(2);
        assert!(c.can_use());
        c.consume();
        assert!(c.can_use());
        c.consume();
        assert!(!c.can_use());
    }

    #[test]
    fn test_remaining_uses_01() {
        let mut c = UsageConstraints::unlimited().with_max_uses(2);
        assert_eq!(c.remaining_uses(), Some(2));
        c.consume();
        assert_eq!(c.remaining_uses(), Some(1));
        c.consume();
        c.consume();
        assert_eq!(c.remaining_uses(), Some(0));
        assert_eq!(UsageConstraints::unlimited().remaining_uses(), None);
    }

    #[test]
    fn test_max_uses_zero_01() {
        let c = UsageConstraints::unlimited().with_max_uses(0);
        assert!(!c.can_use());
    }

    #[test]
    fn test_lifetime_01() {
        let c = UsageConstraints::unlimited().with_lifetime(Duration::from_secs(0));
        assert!(c.has_timed_out());
        let c = UsageConstraints::unlimited().with_lifetime(Duration::from_secs(3600));
        assert!(!c.has_timed_out());
    }
}
