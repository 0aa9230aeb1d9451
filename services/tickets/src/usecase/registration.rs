use uuid::Uuid;

use campus_domain::activity::ActivityKind;

use crate::domain::repository::{
    ActivityLogRepository, BookmarkRepository, EventRepository, RegistrationRepository,
};
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

// ── RegisterForEvent ─────────────────────────────────────────────────────────

pub struct RegisterForEventUseCase<E, R, A>
where
    E: EventRepository,
    R: RegistrationRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub registrations: R,
    pub activity: A,
}

impl<E, R, A> RegisterForEventUseCase<E, R, A>
where
    E: EventRepository,
    R: RegistrationRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), TicketsServiceError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        // Membership check and insert are a single conditional write; the
        // unique key decides duplicates, not a prior read.
        let added = self.registrations.add_if_absent(event_id, user_id).await?;
        if !added {
            return Err(TicketsServiceError::AlreadyRegistered);
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::UserRegisteredForEvent,
            serde_json::json!({
                "event_id": event_id,
                "user_id": user_id,
            }),
        );

        Ok(())
    }
}

// ── BookmarkEvent ────────────────────────────────────────────────────────────

pub struct BookmarkEventUseCase<E, B, A>
where
    E: EventRepository,
    B: BookmarkRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub bookmarks: B,
    pub activity: A,
}

impl<E, B, A> BookmarkEventUseCase<E, B, A>
where
    E: EventRepository,
    B: BookmarkRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(&self, event_id: Uuid, user_id: Uuid) -> Result<(), TicketsServiceError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        let added = self.bookmarks.add_if_absent(event_id, user_id).await?;
        if !added {
            return Err(TicketsServiceError::AlreadyBookmarked);
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::EventBookmarked,
            serde_json::json!({
                "event_id": event_id,
                "user_id": user_id,
            }),
        );

        Ok(())
    }
}
