// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Item, ItemCategory, ItemStatus, MatchCandidate, MatchNotification, NotificationKind};
pub use requests::{BadgeQuery, FindMatchesRequest, ReportItemRequest};
pub use responses::{BadgeCountResponse, ErrorResponse, FindMatchesResponse, HealthResponse, ReportItemResponse};
