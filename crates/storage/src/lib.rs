use std::collections::HashMap;
use std::sync::Arc;

use campus_core::Session;
use parking_lot::RwLock;

/// Session lookup keyed by session id. Every id maps to its own independent
/// `Session`; nothing is shared between sessions.
pub trait SessionStore: Send + Sync {
    fn load(&self, session_id: &str) -> Option<Session>;
    fn upsert(&self, session: &Session);
    fn remove(&self, session_id: &str) -> bool;
    fn session_count(&self) -> usize;
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().get(session_id).cloned()
    }

    fn upsert(&self, session: &Session) {
        self.sessions
            .write()
            .insert(session.session_id.clone(), session.clone());
    }

    fn remove(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
