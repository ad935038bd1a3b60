use crate::models::{ItemCategory, MatchCandidate, MatchNotification, NotificationKind};

/// Build the user-facing notification for a ranked match list
///
/// Takes the first (highest-scoring) entry as the top match and counts every
/// qualifying match for the "we found N matching items" messaging. Returns
/// None when there is nothing to announce.
///
/// The similarity percentage is the score rounded to the nearest integer.
/// Wording varies by source category: a lost report announces a found item,
/// a found report announces a lost item someone may be looking for.
pub fn compose_notification(
    source_category: ItemCategory,
    matches: &[MatchCandidate],
) -> Option<MatchNotification> {
    let top = matches.first()?;
    let percent = (top.similarity_score * 100.0).round() as i64;
    let matched = &top.item;

    let (title, message, kind) = match source_category {
        ItemCategory::Lost => (
            format!("Found Match: {}", matched.title),
            format!(
                "Great news! We found a {}% match for your lost item.\n\n\
                 Found Item: {}\nLocation: {}\nFound by: {}\n\n\
                 Check it out and contact them if it's yours!",
                percent, matched.title, matched.location, matched.owner_name
            ),
            NotificationKind::MatchFound,
        ),
        ItemCategory::Found => (
            format!("Lost Item Match: {}", matched.title),
            format!(
                "Great news! We found a {}% match for the item you found.\n\n\
                 Lost Item: {}\nLost Location: {}\nLost by: {}\n\n\
                 They might be looking for this item!",
                percent, matched.title, matched.location, matched.owner_name
            ),
            NotificationKind::LostMatchFound,
        ),
    };

    Some(MatchNotification {
        title,
        message,
        kind,
        match_count: matches.len(),
        top_match_id: matched.id,
        top_match_category: top.candidate_category,
    })
}
