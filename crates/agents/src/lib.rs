use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};
use campus_catalog::{
    facilities, sample_dining, sample_library, sample_schedule, search_library, submit_request,
    AdminReceipt, AdminRequest, AdminService, DiningVenue, Facility, LibraryRecord, ScheduleEntry,
};
use campus_core::{Intent, Module, RoutedReply, Session, TranscriptEntry};
use campus_observability::{AppMetrics, MetricsSnapshot};
use campus_storage::SessionStore;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    pub session_id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutcome {
    pub session_id: String,
    pub reply: Option<RoutedReply>,
    pub active_module: Module,
    pub transcript_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub target: Module,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "module", content = "content")]
pub enum ModuleView {
    Home {
        welcome: String,
        quick_actions: Vec<QuickAction>,
    },
    Schedule(Vec<ScheduleEntry>),
    Dining(Vec<DiningVenue>),
    Library(Vec<LibraryRecord>),
    Facilities(Vec<Facility>),
    Admin {
        services: Vec<AdminService>,
    },
}

/// Orchestrator tying the router, per-session state, catalog views, and
/// metrics together. Generic over the store so tests can swap it.
#[derive(Clone)]
pub struct CampusAssistant<S: SessionStore> {
    store: Arc<S>,
    metrics: Arc<AppMetrics>,
}

impl<S: SessionStore> CampusAssistant<S> {
    pub fn new(store: Arc<S>, metrics: Arc<AppMetrics>) -> Self {
        Self { store, metrics }
    }

    /// One chat turn: load or mint the session, run the utterance through
    /// it, persist, and report. Blank input leaves the session untouched and
    /// comes back with `reply: None`.
    #[instrument(skip(self, input))]
    pub fn handle_chat(&self, input: ChatInput) -> Result<ChatOutcome> {
        let started = Instant::now();
        self.metrics.inc_request();

        let session_id = input
            .session_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut session = self
            .store
            .load(&session_id)
            .unwrap_or_else(|| Session::new(session_id.clone()));

        let reply = session.submit(&input.text);

        if let Some(routed) = &reply {
            if routed.intent == Intent::Unknown {
                self.metrics.inc_fallback();
            }
            if routed.navigation.is_some() {
                self.metrics.inc_navigation();
            }
        }

        self.store.upsert(&session);
        self.metrics.observe_latency(started.elapsed());

        info!(
            session_id = %session_id,
            intent = ?reply.as_ref().map(|r| r.intent),
            active_module = %session.active_module().as_str(),
            transcript_len = session.transcript().len(),
            "chat handled"
        );

        Ok(ChatOutcome {
            session_id,
            reply,
            active_module: session.active_module(),
            transcript_len: session.transcript().len(),
        })
    }

    /// Direct menu navigation. A menu click may land before any chat turn,
    /// so the session is created on demand.
    pub fn set_active_module(&self, session_id: &str, target: Module) -> Module {
        let mut session = self
            .store
            .load(session_id)
            .unwrap_or_else(|| Session::new(session_id.to_string()));

        session.set_active_module(target);
        self.store.upsert(&session);

        info!(session_id = %session_id, module = %target.as_str(), "module selected");
        target
    }

    pub fn transcript(&self, session_id: &str) -> Result<Vec<TranscriptEntry>> {
        let Some(session) = self.store.load(session_id) else {
            bail!("unknown session: {session_id}");
        };

        Ok(session.transcript().to_vec())
    }

    pub fn active_module(&self, session_id: &str) -> Result<Module> {
        let Some(session) = self.store.load(session_id) else {
            bail!("unknown session: {session_id}");
        };

        Ok(session.active_module())
    }

    /// Read-only content for one panel. `today` anchors the schedule rows.
    pub fn module_view(&self, module: Module, today: NaiveDate) -> ModuleView {
        match module {
            Module::Home => ModuleView::Home {
                welcome: "Welcome back. Ask about schedules, dining, library, or admin services."
                    .to_string(),
                quick_actions: vec![
                    QuickAction {
                        label: "Show today's schedule".to_string(),
                        target: Module::Schedule,
                    },
                    QuickAction {
                        label: "What's for lunch".to_string(),
                        target: Module::Dining,
                    },
                    QuickAction {
                        label: "Search library".to_string(),
                        target: Module::Library,
                    },
                ],
            },
            Module::Schedule => ModuleView::Schedule(sample_schedule(today)),
            Module::Dining => ModuleView::Dining(sample_dining()),
            Module::Library => ModuleView::Library(sample_library()),
            Module::Facilities => ModuleView::Facilities(facilities()),
            Module::Admin => ModuleView::Admin {
                services: vec![
                    AdminService::Registration,
                    AdminService::Transcript,
                    AdminService::IdCard,
                    AdminService::Other,
                ],
            },
        }
    }

    pub fn search_library(&self, query: &str) -> Vec<LibraryRecord> {
        search_library(&sample_library(), query)
    }

    pub fn submit_admin_request(&self, request: &AdminRequest) -> Result<AdminReceipt> {
        let receipt = submit_request(request, Utc::now())?;
        self.metrics.inc_admin_request();

        info!(
            reference_id = %receipt.reference_id,
            service = %receipt.service.as_str(),
            "admin request accepted"
        );
        Ok(receipt)
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
