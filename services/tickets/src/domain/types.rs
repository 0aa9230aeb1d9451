use chrono::{DateTime, Utc};
use uuid::Uuid;

use campus_domain::pagination::Sort;
use campus_domain::user::UserRole;

/// User profile owned by the tickets service. Credentials live in the
/// identity provider; `subject` ties the two together.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub subject: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event record. `checkin_token` is the shared secret embedded in the
/// event's QR code; it is generated once at creation and never changes.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub club: String,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
    pub checkin_token: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable event fields. The check-in token is deliberately absent.
#[derive(Debug, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub club: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.club.is_none()
            && self.venue.is_none()
            && self.starts_at.is_none()
    }
}

/// Optional filters for event list queries.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<String>,
    pub club: Option<String>,
}

/// One check-in record per `(event_id, user_id)` pair.
#[derive(Debug, Clone)]
pub struct Checkin {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub checked_in_at: DateTime<Utc>,
}

/// An event comment.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A user's rating of an event, 1–5.
#[derive(Debug, Clone)]
pub struct Rating {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub score: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sort options for event list queries.
#[derive(Debug, Clone, Copy)]
pub enum EventSortBy {
    StartsAt(Sort),
    CreatedAt(Sort),
}

impl Default for EventSortBy {
    fn default() -> Self {
        Self::StartsAt(Sort::Asc)
    }
}

impl EventSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "starts-at-asc" => Some(Self::StartsAt(Sort::Asc)),
            "starts-at-desc" => Some(Self::StartsAt(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            _ => None,
        }
    }
}

/// Validate a rating score: integer in 1–5.
pub fn valid_score(score: i16) -> bool {
    (1..=5).contains(&score)
}
