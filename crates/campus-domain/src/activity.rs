//! Activity-log domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a recorded activity entry.
///
/// Wire format: SCREAMING_SNAKE_CASE strings, stored verbatim in the
/// `activity_entries.kind` column and returned as-is by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    UserRegistered,
    EventCreated,
    EventUpdated,
    EventDeleted,
    UserRegisteredForEvent,
    EventBookmarked,
    UserCheckedIn,
    CommentPosted,
    RatingSubmitted,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserRegistered => "USER_REGISTERED",
            Self::EventCreated => "EVENT_CREATED",
            Self::EventUpdated => "EVENT_UPDATED",
            Self::EventDeleted => "EVENT_DELETED",
            Self::UserRegisteredForEvent => "USER_REGISTERED_FOR_EVENT",
            Self::EventBookmarked => "EVENT_BOOKMARKED",
            Self::UserCheckedIn => "USER_CHECKED_IN",
            Self::CommentPosted => "COMMENT_POSTED",
            Self::RatingSubmitted => "RATING_SUBMITTED",
        }
    }

    /// Parse the stored wire string back into a kind.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "USER_REGISTERED" => Some(Self::UserRegistered),
            "EVENT_CREATED" => Some(Self::EventCreated),
            "EVENT_UPDATED" => Some(Self::EventUpdated),
            "EVENT_DELETED" => Some(Self::EventDeleted),
            "USER_REGISTERED_FOR_EVENT" => Some(Self::UserRegisteredForEvent),
            "EVENT_BOOKMARKED" => Some(Self::EventBookmarked),
            "USER_CHECKED_IN" => Some(Self::UserCheckedIn),
            "COMMENT_POSTED" => Some(Self::CommentPosted),
            "RATING_SUBMITTED" => Some(Self::RatingSubmitted),
            _ => None,
        }
    }
}

/// One append-only audit entry. Payload shape depends on the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_kind_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::UserCheckedIn).unwrap(),
            "\"USER_CHECKED_IN\""
        );
        assert_eq!(
            serde_json::to_string(&ActivityKind::UserRegisteredForEvent).unwrap(),
            "\"USER_REGISTERED_FOR_EVENT\""
        );
    }

    #[test]
    fn should_match_as_str_with_serde_representation() {
        for kind in [
            ActivityKind::UserRegistered,
            ActivityKind::EventCreated,
            ActivityKind::EventUpdated,
            ActivityKind::EventDeleted,
            ActivityKind::UserRegisteredForEvent,
            ActivityKind::EventBookmarked,
            ActivityKind::UserCheckedIn,
            ActivityKind::CommentPosted,
            ActivityKind::RatingSubmitted,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn should_round_trip_kind_through_wire_string() {
        for kind in [
            ActivityKind::UserRegistered,
            ActivityKind::UserCheckedIn,
            ActivityKind::RatingSubmitted,
        ] {
            assert_eq!(ActivityKind::from_wire(kind.as_str()), Some(kind));
        }
        assert_eq!(ActivityKind::from_wire("NOT_A_KIND"), None);
    }

    #[test]
    fn should_deserialize_kind_from_stored_string() {
        assert_eq!(
            serde_json::from_str::<ActivityKind>("\"USER_CHECKED_IN\"").unwrap(),
            ActivityKind::UserCheckedIn
        );
    }
}
