use std::sync::Arc;

use campus_agents::{CampusAssistant, ChatInput, ModuleView};
use campus_catalog::{AdminRequest, AdminService};
use campus_core::{Module, Sender};
use campus_observability::AppMetrics;
use campus_storage::MemoryStore;
use chrono::NaiveDate;

fn assistant() -> CampusAssistant<MemoryStore> {
    CampusAssistant::new(Arc::new(MemoryStore::new()), AppMetrics::shared())
}

fn chat(
    assistant: &CampusAssistant<MemoryStore>,
    session_id: Option<String>,
    text: &str,
) -> campus_agents::ChatOutcome {
    assistant
        .handle_chat(ChatInput {
            session_id,
            text: text.to_string(),
        })
        .expect("chat should succeed")
}

#[test]
fn schedule_query_navigates_and_logs_two_entries() {
    let assistant = assistant();
    let outcome = chat(&assistant, None, "show my schedule");

    assert_eq!(outcome.active_module, Module::Schedule);

    let transcript = assistant.transcript(&outcome.session_id).unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].sender, Sender::User);
    assert_eq!(transcript[0].message, "show my schedule");
    assert_eq!(transcript[1].sender, Sender::Assistant);
}

#[test]
fn n_submits_produce_2n_ordered_entries() {
    let assistant = assistant();
    let inputs = [
        "next class",
        "where can i get food",
        "search library for a book",
        "gym hours",
        "gibberish input",
    ];

    let mut session_id = None;
    for input in inputs {
        let outcome = chat(&assistant, session_id.clone(), input);
        session_id = Some(outcome.session_id);
    }

    let transcript = assistant.transcript(session_id.as_deref().unwrap()).unwrap();
    assert_eq!(transcript.len(), inputs.len() * 2);
    for (idx, entry) in transcript.iter().enumerate() {
        assert_eq!(entry.position, idx);
        let expected = if idx % 2 == 0 {
            Sender::User
        } else {
            Sender::Assistant
        };
        assert_eq!(entry.sender, expected);
    }
}

#[test]
fn dining_wins_tie_break_over_library() {
    let assistant = assistant();
    let outcome = chat(&assistant, None, "food options near the library");

    let reply = outcome.reply.expect("reply");
    assert_eq!(outcome.active_module, Module::Dining);
    assert!(reply.reply_text.contains("Central Canteen"));
}

#[test]
fn unknown_query_falls_back_without_navigation() {
    let assistant = assistant();
    let outcome = chat(&assistant, None, "flarb the wibble");

    let reply = outcome.reply.expect("reply");
    assert_eq!(outcome.active_module, Module::Home);
    assert!(reply.reply_text.contains("Try:"));
    assert!(reply.navigation.is_none());
}

#[test]
fn menu_selection_overrides_chat_navigation() {
    let assistant = assistant();
    let outcome = chat(&assistant, None, "take me to the library");
    assert_eq!(outcome.active_module, Module::Library);

    assistant.set_active_module(&outcome.session_id, Module::Admin);
    assert_eq!(
        assistant.active_module(&outcome.session_id).unwrap(),
        Module::Admin
    );
}

#[test]
fn sessions_do_not_leak_into_each_other() {
    let assistant = assistant();
    let first = chat(&assistant, None, "next class");
    let second = chat(&assistant, None, "what is open now");

    assert_ne!(first.session_id, second.session_id);
    assert_eq!(assistant.transcript(&first.session_id).unwrap().len(), 2);
    assert_eq!(assistant.transcript(&second.session_id).unwrap().len(), 2);
    assert_eq!(
        assistant.active_module(&second.session_id).unwrap(),
        Module::Home
    );
}

#[test]
fn module_views_render_sample_tables() {
    let assistant = assistant();
    let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();

    match assistant.module_view(Module::Schedule, today) {
        ModuleView::Schedule(rows) => {
            assert_eq!(rows.len(), 5);
            assert_eq!(rows[0].date, today);
        }
        other => panic!("expected schedule view, got {other:?}"),
    }

    match assistant.module_view(Module::Home, today) {
        ModuleView::Home { quick_actions, .. } => {
            assert_eq!(quick_actions.len(), 3);
            assert_eq!(quick_actions[0].target, Module::Schedule);
        }
        other => panic!("expected home view, got {other:?}"),
    }
}

#[test]
fn library_search_matches_demo_catalog() {
    let assistant = assistant();

    let hits = assistant.search_library("cormen");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Introduction to Algorithms");

    assert!(assistant.search_library("nonexistent title").is_empty());
}

#[test]
fn admin_request_yields_timestamped_reference() {
    let assistant = assistant();
    let receipt = assistant
        .submit_admin_request(&AdminRequest {
            name: "Avi Cohen".to_string(),
            email: "avi@campus.edu".to_string(),
            service: AdminService::IdCard,
            details: "Lost my student ID".to_string(),
        })
        .unwrap();

    assert!(receipt.reference_id.starts_with("R-"));
    let digits = &receipt.reference_id[2..];
    assert_eq!(digits.len(), 14);
    assert!(digits.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn metrics_count_requests_and_fallbacks() {
    let assistant = assistant();
    chat(&assistant, None, "next class");
    chat(&assistant, None, "complete gibberish");

    let snapshot = assistant.metrics_snapshot();
    assert_eq!(snapshot.requests_total, 2);
    assert_eq!(snapshot.fallback_total, 1);
    assert_eq!(snapshot.navigation_total, 1);
}
