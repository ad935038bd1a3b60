// Core algorithm exports
pub mod matcher;
pub mod notification;
pub mod similarity;

pub use matcher::{MatchResult, Matcher};
pub use notification::compose_notification;
pub use similarity::{similarity_ratio, SIMILARITY_THRESHOLD};
