#![allow(async_fn_in_trait)]

use std::future::Future;

use uuid::Uuid;

use campus_domain::activity::ActivityEntry;
use campus_domain::pagination::PageRequest;

use crate::domain::types::{
    Checkin, Comment, Event, EventFilter, EventPatch, EventSortBy, Rating, User,
};
use crate::error::TicketsServiceError;

/// Repository for user profiles and their preference labels.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, TicketsServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TicketsServiceError>;
    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, TicketsServiceError>;
    async fn create(&self, user: &User) -> Result<(), TicketsServiceError>;
    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), TicketsServiceError>;

    async fn list_preferences(&self, user_id: Uuid) -> Result<Vec<String>, TicketsServiceError>;

    /// Replace the user's preference set atomically.
    async fn replace_preferences(
        &self,
        user_id: Uuid,
        labels: &[String],
    ) -> Result<(), TicketsServiceError>;
}

/// Repository for events.
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, TicketsServiceError>;

    async fn list(
        &self,
        filter: &EventFilter,
        sort_by: EventSortBy,
        page: PageRequest,
    ) -> Result<Vec<Event>, TicketsServiceError>;

    /// All events in creation order — the recommendation scoring input.
    async fn list_all_by_creation(&self) -> Result<Vec<Event>, TicketsServiceError>;

    async fn create(&self, event: &Event) -> Result<(), TicketsServiceError>;

    /// Apply a patch. Returns `false` when no such event exists.
    async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<bool, TicketsServiceError>;

    /// Delete an event. Returns `false` when no such event exists.
    async fn delete(&self, id: Uuid) -> Result<bool, TicketsServiceError>;
}

/// Registration ledger: the per-event set of registered user ids.
pub trait RegistrationRepository: Send + Sync {
    /// Conditional insert keyed by `(event_id, user_id)`.
    /// Returns `false` when the pair is already in the ledger.
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError>;

    async fn contains(&self, event_id: Uuid, user_id: Uuid)
    -> Result<bool, TicketsServiceError>;
}

/// Per-user event bookmarks.
pub trait BookmarkRepository: Send + Sync {
    /// Conditional insert. Returns `false` when already bookmarked.
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError>;
}

/// Check-in records. The single mutating operation is deliberately an atomic
/// create-if-absent: the existence check and the write must not be separate
/// calls (see the duplicate-scan race in the checkin usecase tests).
pub trait CheckinRepository: Send + Sync {
    /// Insert the record unless one exists for its `(event_id, user_id)` key.
    /// Returns `false` when a record was already present.
    async fn create_if_absent(&self, checkin: &Checkin) -> Result<bool, TicketsServiceError>;
}

/// Event comments. Append-only.
pub trait CommentRepository: Send + Sync {
    async fn list(
        &self,
        event_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, TicketsServiceError>;

    async fn create(&self, comment: &Comment) -> Result<(), TicketsServiceError>;
}

/// Event ratings, one row per `(event_id, user_id)`.
pub trait RatingRepository: Send + Sync {
    async fn list(&self, event_id: Uuid) -> Result<Vec<Rating>, TicketsServiceError>;

    /// Insert or replace the caller's rating in one statement. Concurrent
    /// submissions for the same `(event_id, user_id)` must both succeed.
    async fn upsert(&self, rating: &Rating) -> Result<(), TicketsServiceError>;
}

/// Append-only activity log.
pub trait ActivityLogRepository: Send + Sync {
    /// Append one entry.
    ///
    /// Declared with an explicit `Send` future because appends are dispatched
    /// via `tokio::spawn`, decoupled from the request that caused them.
    fn append(
        &self,
        entry: ActivityEntry,
    ) -> impl Future<Output = Result<(), TicketsServiceError>> + Send;

    async fn list(&self, page: PageRequest) -> Result<Vec<ActivityEntry>, TicketsServiceError>;
}

/// Port to the external identity provider holding the actual credentials.
pub trait IdentityProviderPort: Send + Sync {
    /// Create an account; returns the provider subject.
    async fn sign_up(&self, email: &str, password: &str) -> Result<String, TicketsServiceError>;

    /// Verify credentials; returns the provider subject.
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, TicketsServiceError>;
}
