use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use campus_auth_types::identity::Identity;

use crate::error::TicketsServiceError;
use crate::handlers::event::EventResponse;
use crate::state::AppState;
use crate::usecase::recommendation::GetRecommendationsUseCase;

// ── GET /users/{user_id}/recommendations ─────────────────────────────────────

pub async fn get_recommendations(
    identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<EventResponse>>, TicketsServiceError> {
    let usecase = GetRecommendationsUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
    };
    let events = usecase
        .execute(user_id, identity.user_id, identity.role)
        .await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}
