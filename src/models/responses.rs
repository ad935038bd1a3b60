use crate::models::domain::{Item, MatchCandidate, MatchNotification};
use serde::{Deserialize, Serialize};

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchCandidate>,
    pub total_candidates: usize,
}

/// Response for report submission
///
/// The notification is synthesized from the live match scan and is absent
/// when nothing cleared the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportItemResponse {
    pub item: Item,
    pub matches_found: usize,
    pub notification: Option<MatchNotification>,
}

/// Response for the notification badge endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeCountResponse {
    pub unread_count: i64,
    pub matched_items: usize,
    pub total_notifications: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
