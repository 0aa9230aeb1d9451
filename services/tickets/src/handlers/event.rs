use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::Identity;
use campus_domain::pagination::PageRequest;

use crate::domain::types::{Event, EventFilter, EventPatch, EventSortBy};
use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::event::{
    CreateEventInput, CreateEventUseCase, DeleteEventUseCase, GetEventUseCase, ListEventsUseCase,
    UpdateEventUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub club: String,
    pub venue: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub created_by: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            category: event.category,
            club: event.club,
            venue: event.venue,
            starts_at: event.starts_at,
            created_by: event.created_by.to_string(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Create response is the only place the check-in token ever leaves the
/// service; the organizer embeds it in the QR code they print.
#[derive(Serialize)]
pub struct CreatedEventResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub checkin_token: String,
}

// ── POST /events ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub club: String,
    pub venue: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
}

pub async fn create_event(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedEventResponse>), TicketsServiceError> {
    let usecase = CreateEventUseCase {
        events: state.event_repo(),
        activity: state.activity_log(),
    };
    let event = usecase
        .execute(
            identity.user_id,
            identity.role,
            CreateEventInput {
                title: body.title,
                description: body.description.unwrap_or_default(),
                category: body.category,
                club: body.club,
                venue: body.venue.unwrap_or_default(),
                starts_at: body.starts_at,
            },
        )
        .await?;
    let checkin_token = event.checkin_token.clone();
    Ok((
        StatusCode::CREATED,
        Json(CreatedEventResponse {
            event: event.into(),
            checkin_token,
        }),
    ))
}

// ── GET /events ──────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct EventListQuery {
    pub category: Option<String>,
    pub club: Option<String>,
    pub sort_by: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

pub async fn get_events(
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<EventResponse>>, TicketsServiceError> {
    let query: EventListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| TicketsServiceError::MissingData)?
        .unwrap_or_default();

    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(EventSortBy::from_kebab_case)
        .unwrap_or_default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListEventsUseCase {
        events: state.event_repo(),
    };
    let events = usecase
        .execute(
            EventFilter {
                category: query.category,
                club: query.club,
            },
            sort_by,
            page,
        )
        .await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

// ── GET /events/{id} ─────────────────────────────────────────────────────────

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventResponse>, TicketsServiceError> {
    let usecase = GetEventUseCase {
        events: state.event_repo(),
    };
    let event = usecase.execute(id).await?;
    Ok(Json(event.into()))
}

// ── PUT /events/{id} ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub club: Option<String>,
    pub venue: Option<String>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub async fn update_event(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<StatusCode, TicketsServiceError> {
    let usecase = UpdateEventUseCase {
        events: state.event_repo(),
        activity: state.activity_log(),
    };
    usecase
        .execute(
            id,
            identity.role,
            EventPatch {
                title: body.title,
                description: body.description,
                category: body.category,
                club: body.club,
                venue: body.venue,
                starts_at: body.starts_at,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /events/{id} ──────────────────────────────────────────────────────

pub async fn delete_event(
    identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, TicketsServiceError> {
    let usecase = DeleteEventUseCase {
        events: state.event_repo(),
        activity: state.activity_log(),
    };
    usecase.execute(id, identity.role).await?;
    Ok(StatusCode::NO_CONTENT)
}
