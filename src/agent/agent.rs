use super::*;
use crate::identity::*;

use std::sync::{Arc, Mutex, MutexGuard};

/// Custody of private keys with locking, usage constraints and change notification.
///
/// All operations are serialized by one agent-wide mutex. Listeners are notified before the
/// operation returns.
#[derive(Default)]
pub struct KeyAgent {
    state: Mutex<KeyAgentState>,
}

#[derive(Default)]
struct KeyAgentState {
    store: KeyStore,
    listeners: Vec<Arc<dyn KeyAgentListener>>,
}

impl KeyAgent {
    /// The operation name reported to listeners after each signature.
    pub const HASH_AND_SIGN: &'static str = "hash-and-sign";

    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, KeyAgentState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_listener(&self, listener: Arc<dyn KeyAgentListener>) {
        self.state().listeners.push(listener)
    }

    /// Remove a listener by identity. Returns false if it was not registered.
    pub fn remove_listener(&self, listener: &Arc<dyn KeyAgentListener>) -> bool {
        let ptr = Arc::as_ptr(listener) as *const ();
        let mut state = self.state();
        match state
            .listeners
            .iter()
            .position(|l| Arc::as_ptr(l) as *const () == ptr)
        {
            Some(i) => {
                state.listeners.remove(i);
                true
            }
            None => false,
        }
    }

    /// Add a key unless a key with the same public key is already present.
    ///
    /// Keys can be added while the agent is locked.
    pub fn add_key(
        &self,
        private_key: Box<dyn SigningKey>,
        public_key: Identity,
        description: &str,
        constraints: Box<dyn KeyConstraints>,
    ) -> bool {
        let mut state = self.state();
        let fingerprint = public_key.fingerprint();
        let record = KeyRecord {
            public_key,
            private_key,
            description: description.into(),
            constraints,
        };
        if !state.store.insert(record) {
            log::debug!("Key {} already present", fingerprint);
            return false;
        }
        log::debug!("Added key {} ({})", fingerprint, description);
        for l in &state.listeners {
            l.on_add_key(&state.store)
        }
        true
    }

    /// Delete a key. The description must match exactly.
    pub fn delete_key(&self, public_key: &Identity, description: &str) -> bool {
        let mut state = self.state();
        if !state.store.remove(public_key, description) {
            return false;
        }
        log::debug!("Deleted key {}", public_key.fingerprint());
        for l in &state.listeners {
            l.on_delete_key(&state.store)
        }
        true
    }

    pub fn delete_all_keys(&self) {
        let mut state = self.state();
        state.store.clear();
        log::debug!("Deleted all keys");
        for l in &state.listeners {
            l.on_delete_all_keys(&state.store)
        }
    }

    /// Lock the agent. Fails if it is already locked.
    pub fn lock(&self, password: &str) -> bool {
        let mut state = self.state();
        if !state.store.lock(password) {
            return false;
        }
        log::debug!("Agent locked");
        for l in &state.listeners {
            l.on_lock(&state.store)
        }
        true
    }

    /// Unlock the agent. Fails if it is not locked or the password does not match.
    pub fn unlock(&self, password: &str) -> bool {
        let mut state = self.state();
        if !state.store.unlock(password) {
            return false;
        }
        log::debug!("Agent unlocked");
        for l in &state.listeners {
            l.on_unlock(&state.store)
        }
        true
    }

    /// Sign `data` with the private key belonging to `public_key`.
    ///
    /// The forwarding path is only logged. A use is recorded before the private key is asked
    /// for the signature and stays recorded if signing fails.
    pub fn perform_hash_and_sign(
        &self,
        public_key: &Identity,
        forwarding_path: &[ForwardingNotice],
        data: &[u8],
    ) -> Result<Signature, AgentError> {
        let mut guard = self.state();
        let state = &mut *guard;
        let record = state
            .store
            .record_mut(public_key)
            .ok_or(AgentError::InvalidSshKey)?;
        if !record.constraints.can_use() || record.constraints.has_timed_out() {
            log::debug!("Key {} rejected by constraints", public_key.fingerprint());
            return Err(AgentError::KeyTimeout);
        }
        record.constraints.consume();
        for hop in forwarding_path {
            log::debug!("Signing request forwarded via {}", hop);
        }
        let signature = record.private_key.sign(data).map_err(|e| {
            log::warn!("Key {} failed to sign: {}", public_key.fingerprint(), e);
            AgentError::InvalidSshKeySignature
        })?;
        log::debug!("Signed with key {}", public_key.fingerprint());
        for l in &state.listeners {
            l.on_key_operation(&state.store, Self::HASH_AND_SIGN)
        }
        Ok(signature)
    }

    pub fn public_keys(&self) -> Vec<(Identity, String)> {
        self.state().store.public_keys()
    }

    pub fn index_of(&self, public_key: &Identity) -> Option<usize> {
        self.state().store.index_of(public_key)
    }

    pub fn element_at(&self, index: usize) -> Option<Identity> {
        self.state().store.element_at(index).cloned()
    }

    pub fn description(&self, public_key: &Identity) -> Option<String> {
        self.state().store.description(public_key).map(String::from)
    }

    /// Inspect the constraints of a key. Returns `None` if the key does not exist.
    pub fn with_constraints<R, F>(&self, public_key: &Identity, f: F) -> Option<R>
    where
        F: FnOnce(&dyn KeyConstraints) -> R,
    {
        self.state().store.constraints(public_key).map(f)
    }

    pub fn len(&self) -> usize {
        self.state().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().store.is_empty()
    }

    pub fn is_locked(&self) -> bool {
        self.state().store.is_locked()
    }
}

impl std::fmt::Debug for KeyAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("KeyAgent")
            .field("store", &state.store)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}
