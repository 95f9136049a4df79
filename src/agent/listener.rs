use super::*;

/// Observer of [KeyAgent] state changes.
///
/// Callbacks run synchronously in registration order while the agent is locked. They must
/// not call back into the agent.
pub trait KeyAgentListener: Send + Sync {
    fn on_add_key(&self, _store: &KeyStore) {}
    fn on_delete_key(&self, _store: &KeyStore) {}
    fn on_delete_all_keys(&self, _store: &KeyStore) {}
    fn on_lock(&self, _store: &KeyStore) {}
    fn on_unlock(&self, _store: &KeyStore) {}
    fn on_key_operation(&self, _store: &KeyStore, _operation: &str) {}
}
