use chrono::{DateTime, Utc};
use rand::RngExt;
use uuid::Uuid;

use campus_domain::activity::ActivityKind;
use campus_domain::pagination::PageRequest;
use campus_domain::user::UserRole;

use crate::domain::repository::{ActivityLogRepository, EventRepository};
use crate::domain::types::{Event, EventFilter, EventPatch, EventSortBy};
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

/// Charset for check-in tokens (mixed-case alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const CHECKIN_TOKEN_LEN: usize = 32;

fn generate_checkin_token() -> String {
    let mut rng = rand::rng();
    (0..CHECKIN_TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

// ── CreateEvent ──────────────────────────────────────────────────────────────

pub struct CreateEventInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub club: String,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
}

pub struct CreateEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub activity: A,
}

impl<E, A> CreateEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(
        &self,
        creator_id: Uuid,
        creator_role: UserRole,
        input: CreateEventInput,
    ) -> Result<Event, TicketsServiceError> {
        if !creator_role.can_manage_events() {
            return Err(TicketsServiceError::Forbidden);
        }

        if input.title.trim().is_empty()
            || input.category.trim().is_empty()
            || input.club.trim().is_empty()
        {
            return Err(TicketsServiceError::MissingData);
        }

        let now = Utc::now();
        let event = Event {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            category: input.category,
            club: input.club,
            venue: input.venue,
            starts_at: input.starts_at,
            checkin_token: generate_checkin_token(),
            created_by: creator_id,
            created_at: now,
            updated_at: now,
        };
        self.events.create(&event).await?;

        record_activity(
            self.activity.clone(),
            ActivityKind::EventCreated,
            serde_json::json!({
                "event_id": event.id,
                "title": event.title,
                "created_by": creator_id,
            }),
        );

        Ok(event)
    }
}

// ── GetEvent ─────────────────────────────────────────────────────────────────

pub struct GetEventUseCase<E: EventRepository> {
    pub events: E,
}

impl<E: EventRepository> GetEventUseCase<E> {
    pub async fn execute(&self, id: Uuid) -> Result<Event, TicketsServiceError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)
    }
}

// ── ListEvents ───────────────────────────────────────────────────────────────

pub struct ListEventsUseCase<E: EventRepository> {
    pub events: E,
}

impl<E: EventRepository> ListEventsUseCase<E> {
    pub async fn execute(
        &self,
        filter: EventFilter,
        sort_by: EventSortBy,
        page: PageRequest,
    ) -> Result<Vec<Event>, TicketsServiceError> {
        self.events.list(&filter, sort_by, page.clamped()).await
    }
}

// ── UpdateEvent ──────────────────────────────────────────────────────────────

pub struct UpdateEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub activity: A,
}

impl<E, A> UpdateEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(
        &self,
        id: Uuid,
        caller_role: UserRole,
        patch: EventPatch,
    ) -> Result<(), TicketsServiceError> {
        if !caller_role.can_manage_events() {
            return Err(TicketsServiceError::Forbidden);
        }
        if patch.is_empty() {
            return Err(TicketsServiceError::MissingData);
        }

        let updated = self.events.update(id, &patch).await?;
        if !updated {
            return Err(TicketsServiceError::EventNotFound);
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::EventUpdated,
            serde_json::json!({ "event_id": id }),
        );

        Ok(())
    }
}

// ── DeleteEvent ──────────────────────────────────────────────────────────────

pub struct DeleteEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub activity: A,
}

impl<E, A> DeleteEventUseCase<E, A>
where
    E: EventRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(
        &self,
        id: Uuid,
        caller_role: UserRole,
    ) -> Result<(), TicketsServiceError> {
        if !caller_role.can_manage_events() {
            return Err(TicketsServiceError::Forbidden);
        }

        let deleted = self.events.delete(id).await?;
        if !deleted {
            return Err(TicketsServiceError::EventNotFound);
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::EventDeleted,
            serde_json::json!({ "event_id": id }),
        );

        Ok(())
    }
}
