use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminService {
    Transcript,
    Registration,
    IdCard,
    Other,
}

impl AdminService {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "transcript" | "transcripts" => Some(Self::Transcript),
            "registration" | "register" => Some(Self::Registration),
            "id" | "id-card" | "id_card" | "idcard" => Some(Self::IdCard),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Registration => "registration",
            Self::IdCard => "id_card",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRequest {
    pub name: String,
    pub email: String,
    pub service: AdminService,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminReceipt {
    pub reference_id: String,
    pub service: AdminService,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminFormError {
    #[error("name is required")]
    MissingName,
    #[error("campus email is required")]
    MissingEmail,
    #[error("request details are required")]
    MissingDetails,
}

/// Accepts a request form and mints a reference id of the shape
/// `R-<YYYYMMDDHHMMSS>`. Routing to the right office happens downstream.
pub fn submit_request(
    request: &AdminRequest,
    now: DateTime<Utc>,
) -> Result<AdminReceipt, AdminFormError> {
    if request.name.trim().is_empty() {
        return Err(AdminFormError::MissingName);
    }
    if request.email.trim().is_empty() {
        return Err(AdminFormError::MissingEmail);
    }
    if request.details.trim().is_empty() {
        return Err(AdminFormError::MissingDetails);
    }

    Ok(AdminReceipt {
        reference_id: format!("R-{}", now.format("%Y%m%d%H%M%S")),
        service: request.service,
        submitted_at: now,
    })
}
