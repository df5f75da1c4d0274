use crate::models::{Intent, Module, RoutedReply};

pub fn normalize_text(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
    reply: &'static str,
    navigation: Option<Module>,
}

/// Ordered rule table. Matching is substring containment against the
/// lowercased utterance; the first rule that hits wins, so the order here is
/// the tie-break policy.
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Schedule,
        keywords: &["next class", "my schedule"],
        reply: "I can show you your upcoming classes. Do you want today's schedule or the full week?",
        navigation: Some(Module::Schedule),
    },
    IntentRule {
        intent: Intent::Dining,
        keywords: &["dining", "food", "canteen"],
        reply: "Today's specials: Central Canteen - Grilled Veg Wrap. Want directions or menu?",
        navigation: Some(Module::Dining),
    },
    IntentRule {
        intent: Intent::Library,
        keywords: &["library", "book"],
        reply: "I can search the library catalog. What title or author are you looking for?",
        navigation: Some(Module::Library),
    },
    IntentRule {
        intent: Intent::FacilityHours,
        keywords: &["hours", "open"],
        reply: "Which facility are you asking about? Try: 'library hours' or 'gym hours'.",
        navigation: None,
    },
    IntentRule {
        intent: Intent::Admin,
        keywords: &["help", "admin"],
        reply: "Administrative services: registration, transcripts, ID cards. Which one do you need?",
        navigation: None,
    },
];

const FALLBACK_REPLY: &str =
    "Sorry, I didn't get that. Try: 'show my schedule', 'what's for lunch', or 'search library for Design Patterns'.";

/// Total over all inputs: anything that matches no rule falls through to the
/// fixed unknown reply with no navigation.
pub fn route(text: &str) -> RoutedReply {
    let lower = text.to_lowercase();

    for rule in RULES {
        if contains_any(&lower, rule.keywords) {
            return RoutedReply {
                intent: rule.intent,
                reply_text: rule.reply.to_string(),
                navigation: rule.navigation,
            };
        }
    }

    RoutedReply {
        intent: Intent::Unknown,
        reply_text: FALLBACK_REPLY.to_string(),
        navigation: None,
    }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
