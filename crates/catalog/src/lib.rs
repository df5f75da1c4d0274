mod admin;
mod search;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use admin::{submit_request, AdminFormError, AdminReceipt, AdminRequest, AdminService};
pub use search::search_library;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub time: String,
    pub course: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningVenue {
    pub venue: String,
    pub open: String,
    pub today_special: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Available,
    OnLoan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    pub title: String,
    pub author: String,
    pub status: LoanStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub kind: String,
    pub building: String,
    pub open_hours: String,
}

/// Five demo rows starting from `today`. Sample data stands in for real
/// registrar queries; rows are not filtered by the current time.
pub fn sample_schedule(today: NaiveDate) -> Vec<ScheduleEntry> {
    (0..5)
        .map(|i| ScheduleEntry {
            date: today + chrono::Days::new(i as u64),
            time: format!("{}:00 - {}:30", 9 + i, 10 + i),
            course: format!("CS{}: Intro Topic {}", 100 + i, i + 1),
            location: format!("Bldg {} - Room {}", (b'A' + i as u8) as char, 100 + i),
        })
        .collect()
}

pub fn sample_dining() -> Vec<DiningVenue> {
    vec![
        DiningVenue {
            venue: "Central Canteen".to_string(),
            open: "7:30 - 20:00".to_string(),
            today_special: "Grilled Veg Wrap".to_string(),
        },
        DiningVenue {
            venue: "North Cafe".to_string(),
            open: "8:00 - 18:00".to_string(),
            today_special: "Masala Dosa".to_string(),
        },
        DiningVenue {
            venue: "South Dining".to_string(),
            open: "11:00 - 22:00".to_string(),
            today_special: "Paneer Butter Masala".to_string(),
        },
    ]
}

pub fn sample_library() -> Vec<LibraryRecord> {
    vec![
        LibraryRecord {
            title: "Introduction to Algorithms".to_string(),
            author: "Cormen".to_string(),
            status: LoanStatus::Available,
        },
        LibraryRecord {
            title: "Learning Python".to_string(),
            author: "Mark Lutz".to_string(),
            status: LoanStatus::OnLoan,
        },
        LibraryRecord {
            title: "Design Patterns".to_string(),
            author: "Gamma et al.".to_string(),
            status: LoanStatus::Available,
        },
    ]
}

pub fn facilities() -> Vec<Facility> {
    vec![
        Facility {
            name: "Main Library".to_string(),
            kind: "Library".to_string(),
            building: "Lib Block".to_string(),
            open_hours: "8:00-22:00".to_string(),
        },
        Facility {
            name: "Auditorium A".to_string(),
            kind: "Auditorium".to_string(),
            building: "Arts Center".to_string(),
            open_hours: "9:00-21:00".to_string(),
        },
        Facility {
            name: "Gym".to_string(),
            kind: "Sports".to_string(),
            building: "Sports Complex".to_string(),
            open_hours: "6:00-23:00".to_string(),
        },
    ]
}
