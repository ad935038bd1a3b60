use serde::{Deserialize, Serialize};

/// Which side of the lost & found board an item was reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "item_category", rename_all = "lowercase")]
pub enum ItemCategory {
    Lost,
    Found,
}

impl ItemCategory {
    /// The opposite board, i.e. where match candidates for this category live
    pub fn counterpart(&self) -> ItemCategory {
        match self {
            ItemCategory::Lost => ItemCategory::Found,
            ItemCategory::Found => ItemCategory::Lost,
        }
    }

    /// The status meaning "still seeking a match" for items of this category
    pub fn active_status(&self) -> ItemStatus {
        match self {
            ItemCategory::Lost => ItemStatus::Lost,
            ItemCategory::Found => ItemStatus::Found,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Lost => "lost",
            ItemCategory::Found => "found",
        }
    }
}

impl std::str::FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemCategory::Lost),
            "found" => Ok(ItemCategory::Found),
            other => Err(format!("unknown item category: {}", other)),
        }
    }
}

/// Lifecycle status of an item report
///
/// Lost items move lost -> found | closed, found items move
/// found -> claimed | closed. Transitions happen outside this service;
/// only the owning user triggers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
    Closed,
}

/// A lost or found item report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub category: ItemCategory,
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: ItemStatus,
    #[serde(rename = "contactInfo")]
    pub contact_info: String,
    #[serde(rename = "reportedOn")]
    pub reported_on: chrono::NaiveDate,
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Item {
    /// Whether this item is still seeking a match
    pub fn is_active(&self) -> bool {
        self.status == self.category.active_status()
    }
}

/// A candidate match produced by the matcher
///
/// Transient computation result, rebuilt on every query and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub item: Item,
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
    #[serde(rename = "candidateCategory")]
    pub candidate_category: ItemCategory,
}

/// Kind of match notification shown to the reporting user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    MatchFound,
    LostMatchFound,
}

/// User-facing notification payload for a set of matches
///
/// Synthesized on demand from the ranked match list; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
    #[serde(rename = "topMatchId")]
    pub top_match_id: i64,
    #[serde(rename = "topMatchCategory")]
    pub top_match_category: ItemCategory,
}
