use crate::models::domain::ItemCategory;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find matches for a report's text
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to submit a new lost or found item report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportItemRequest {
    pub category: ItemCategory,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    #[serde(alias = "contact_info", rename = "contactInfo")]
    pub contact_info: String,
    #[serde(alias = "reported_on", rename = "reportedOn")]
    pub reported_on: chrono::NaiveDate,
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
}

/// Query parameters for the notification badge endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeQuery {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
}
