use serde::{Deserialize, Serialize};

use crate::models::{Module, RoutedReply, Sender, TranscriptEntry};
use crate::router::{normalize_text, route};

/// Per-session presentation state: the active content panel plus the ordered
/// chat transcript. One instance per user; instances never share state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    active_module: Module,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            active_module: Module::Home,
            transcript: Vec::new(),
        }
    }

    /// Classifies one utterance and records the exchange: user entry first,
    /// assistant entry second, then the navigation hint is applied. Blank
    /// input is a no-op and returns `None`.
    pub fn submit(&mut self, utterance: &str) -> Option<RoutedReply> {
        let normalized = normalize_text(utterance);
        if normalized.is_empty() {
            return None;
        }

        let reply = route(&normalized);

        self.push_entry(Sender::User, normalized);
        self.push_entry(Sender::Assistant, reply.reply_text.clone());

        if let Some(target) = reply.navigation {
            self.active_module = target;
        }

        Some(reply)
    }

    /// Direct navigation, e.g. a menu click. Always overwrites, including a
    /// module set by an earlier submit.
    pub fn set_active_module(&mut self, target: Module) {
        self.active_module = target;
    }

    pub fn active_module(&self) -> Module {
        self.active_module
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    fn push_entry(&mut self, sender: Sender, message: String) {
        let position = self.transcript.len();
        self.transcript.push(TranscriptEntry {
            sender,
            message,
            position,
        });
    }
}
