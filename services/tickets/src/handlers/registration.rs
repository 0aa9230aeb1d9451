use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use campus_auth_types::identity::Identity;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::registration::{BookmarkEventUseCase, RegisterForEventUseCase};

// ── POST /events/{id}/register ───────────────────────────────────────────────

pub async fn register_for_event(
    identity: Identity,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, TicketsServiceError> {
    let usecase = RegisterForEventUseCase {
        events: state.event_repo(),
        registrations: state.registration_repo(),
        activity: state.activity_log(),
    };
    usecase.execute(event_id, identity.user_id).await?;
    Ok(StatusCode::CREATED)
}

// ── POST /events/{id}/bookmark ───────────────────────────────────────────────

pub async fn bookmark_event(
    identity: Identity,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, TicketsServiceError> {
    let usecase = BookmarkEventUseCase {
        events: state.event_repo(),
        bookmarks: state.bookmark_repo(),
        activity: state.activity_log(),
    };
    usecase.execute(event_id, identity.user_id).await?;
    Ok(StatusCode::CREATED)
}
