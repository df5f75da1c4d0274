use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// Content panel currently shown to the user. A session always holds exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Home,
    Schedule,
    Dining,
    Library,
    Facilities,
    Admin,
}

impl Module {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "home" | "start" => Some(Self::Home),
            "schedule" | "classes" | "timetable" => Some(Self::Schedule),
            "dining" | "food" | "canteen" => Some(Self::Dining),
            "library" | "catalog" => Some(Self::Library),
            "facilities" | "buildings" => Some(Self::Facilities),
            "admin" | "services" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Schedule => "schedule",
            Self::Dining => "dining",
            Self::Library => "library",
            Self::Facilities => "facilities",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Schedule,
    Dining,
    Library,
    FacilityHours,
    Admin,
    Unknown,
}

/// Classification result for one utterance. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutedReply {
    pub intent: Intent,
    pub reply_text: String,
    pub navigation: Option<Module>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub message: String,
    pub position: usize,
}
