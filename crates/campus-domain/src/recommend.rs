//! Preference-based recommendation scoring.
//!
//! Pure functions over already-loaded collections; no index or ranking
//! structure is kept anywhere.

use std::collections::HashSet;

/// Maximum number of events returned by a recommendation query.
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Score an event against a user's preference labels.
///
/// +2 if the category is a preference, +1 if the club is a preference.
/// Matching is exact and case-sensitive.
pub fn preference_score(preferences: &HashSet<String>, category: &str, club: &str) -> u32 {
    let mut score = 0;
    if preferences.contains(category) {
        score += 2;
    }
    if preferences.contains(club) {
        score += 1;
    }
    score
}

/// Rank `items` descending by preference score and keep the top
/// [`RECOMMENDATION_LIMIT`].
///
/// The sort is stable: ties keep the original retrieval order, which is the
/// caller's responsibility (typically creation order).
pub fn rank_by_preference<T, F>(preferences: &HashSet<String>, mut items: Vec<T>, features: F) -> Vec<T>
where
    F: Fn(&T) -> (&str, &str),
{
    items.sort_by_key(|item| {
        let (category, club) = features(item);
        std::cmp::Reverse(preference_score(preferences, category, club))
    });
    items.truncate(RECOMMENDATION_LIMIT);
    items
}
