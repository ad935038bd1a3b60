use crate::core::similarity::{similarity_ratio, SIMILARITY_THRESHOLD};
use crate::models::{Item, ItemCategory, MatchCandidate};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchCandidate>,
    pub total_candidates: usize,
}

/// Cross-category text matcher
///
/// Given a reported item's title and description, scans the opposite-category
/// candidate pool and keeps every candidate whose averaged title/description
/// similarity clears the threshold, ranked best-first.
///
/// The scan is a read-only pass over a pool the caller fetched fresh; nothing
/// is cached between calls, so each invocation costs O(pool) similarity
/// computations.
#[derive(Debug, Clone)]
pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    /// Find matching items for a report from the opposite category
    ///
    /// # Arguments
    /// * `title` - The reported item's title
    /// * `description` - The reported item's description
    /// * `source_category` - Which board the report was posted on; candidates
    ///   come from the counterpart board
    /// * `candidates` - The candidate pool, freshly fetched by the caller
    ///
    /// # Returns
    /// MatchResult with candidates scoring at or above the threshold, sorted
    /// by similarity descending. Ineligible pool entries (same category as
    /// the source, or not in their category's active status) are skipped
    /// regardless of how well their text matches.
    pub fn find_matches(
        &self,
        title: &str,
        description: &str,
        source_category: ItemCategory,
        candidates: Vec<Item>,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let candidate_category = source_category.counterpart();

        let mut matches: Vec<MatchCandidate> = candidates
            .into_iter()
            .filter(|item| item.category == candidate_category && item.is_active())
            .filter_map(|item| {
                let title_sim = similarity_ratio(title, &item.title);
                let desc_sim = similarity_ratio(description, &item.description);
                let avg = (title_sim + desc_sim) / 2.0;

                if avg >= self.threshold {
                    Some(MatchCandidate {
                        item,
                        similarity_score: avg,
                        candidate_category,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort: ties keep the pool's order
        matches.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;
    use chrono::{NaiveDate, Utc};

    fn create_item(
        id: i64,
        category: ItemCategory,
        status: ItemStatus,
        title: &str,
        description: &str,
    ) -> Item {
        Item {
            id,
            category,
            title: title.to_string(),
            description: description.to_string(),
            location: "Main Library".to_string(),
            status,
            contact_info: "owner@example.com".to_string(),
            reported_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            owner_id: 1,
            owner_name: "jamie".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_near_identical_text_is_top_match() {
        let matcher = Matcher::new();
        let candidates = vec![
            create_item(
                1,
                ItemCategory::Found,
                ItemStatus::Found,
                "Black Wallet",
                "Leather wallet found near the library",
            ),
            create_item(
                2,
                ItemCategory::Found,
                ItemStatus::Found,
                "Red Umbrella",
                "Left behind at the bus stop after the rain",
            ),
        ];

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].item.id, 1);
        assert!(
            result.matches[0].similarity_score >= 0.85,
            "near-identical text should score high, got {}",
            result.matches[0].similarity_score
        );
    }

    #[test]
    fn test_unrelated_text_is_excluded() {
        let matcher = Matcher::new();
        let candidates = vec![create_item(
            1,
            ItemCategory::Found,
            ItemStatus::Found,
            "Red Umbrella",
            "Left behind at the bus stop after the rain",
        )];

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_claimed_item_never_matches() {
        let matcher = Matcher::new();
        // Identical text, but already claimed
        let candidates = vec![create_item(
            1,
            ItemCategory::Found,
            ItemStatus::Claimed,
            "Black Wallet",
            "Leather wallet lost near library",
        )];

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_same_category_never_matches() {
        let matcher = Matcher::new();
        let candidates = vec![create_item(
            1,
            ItemCategory::Lost,
            ItemStatus::Lost,
            "Black Wallet",
            "Leather wallet lost near library",
        )];

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::new();
        let candidates = vec![
            create_item(
                1,
                ItemCategory::Found,
                ItemStatus::Found,
                "Black wallet with zipper",
                "Leather wallet found close to the library",
            ),
            create_item(
                2,
                ItemCategory::Found,
                ItemStatus::Found,
                "Black Wallet",
                "Leather wallet found near the library",
            ),
        ];

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert_eq!(result.matches.len(), 2);
        for pair in result.matches.windows(2) {
            assert!(
                pair[0].similarity_score >= pair[1].similarity_score,
                "matches not sorted by score"
            );
        }
        assert_eq!(result.matches[0].item.id, 2);
    }

    #[test]
    fn test_found_report_scans_lost_pool() {
        let matcher = Matcher::new();
        let candidates = vec![create_item(
            1,
            ItemCategory::Lost,
            ItemStatus::Lost,
            "Silver house keys",
            "Three keys on a carabiner, lost by the gym entrance",
        )];

        let result = matcher.find_matches(
            "Silver house keys",
            "Three keys on a carabiner, found by the gym entrance",
            ItemCategory::Found,
            candidates,
        );

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].candidate_category, ItemCategory::Lost);
    }

    #[test]
    fn test_all_matches_clear_threshold() {
        let matcher = Matcher::new();
        let candidates = (0..6)
            .map(|i| {
                create_item(
                    i,
                    ItemCategory::Found,
                    ItemStatus::Found,
                    if i % 2 == 0 { "Black Wallet" } else { "Red Umbrella" },
                    if i % 2 == 0 {
                        "Leather wallet found near the library"
                    } else {
                        "Left behind at the bus stop"
                    },
                )
            })
            .collect();

        let result = matcher.find_matches(
            "Black Wallet",
            "Leather wallet lost near library",
            ItemCategory::Lost,
            candidates,
        );

        assert!(!result.matches.is_empty());
        for m in &result.matches {
            assert!(m.similarity_score >= SIMILARITY_THRESHOLD);
        }
    }

    #[test]
    fn test_empty_pool() {
        let matcher = Matcher::new();
        let result =
            matcher.find_matches("Black Wallet", "Leather wallet", ItemCategory::Lost, vec![]);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
