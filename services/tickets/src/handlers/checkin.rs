use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::Identity;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::checkin::{CheckinInput, CheckinUseCase};

// ── POST /events/{id}/checkin ────────────────────────────────────────────────

/// Scanner contract: the body carries the attendee being checked in plus the
/// token read from the QR code. Both are required.
#[derive(Deserialize)]
pub struct CheckinRequest {
    pub user_id: Option<Uuid>,
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct CheckinResponse {
    pub message: &'static str,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub checked_in_at: chrono::DateTime<chrono::Utc>,
}

pub async fn checkin(
    _identity: Identity,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(body): Json<CheckinRequest>,
) -> Result<Json<CheckinResponse>, TicketsServiceError> {
    let (user_id, token) = match (body.user_id, body.token) {
        (Some(user_id), Some(token)) => (user_id, token),
        _ => return Err(TicketsServiceError::MissingData),
    };

    let usecase = CheckinUseCase {
        events: state.event_repo(),
        registrations: state.registration_repo(),
        checkins: state.checkin_repo(),
        activity: state.activity_log(),
    };
    let checkin = usecase
        .execute(CheckinInput {
            event_id,
            user_id,
            token,
        })
        .await?;
    Ok(Json(CheckinResponse {
        message: "checked in",
        checked_in_at: checkin.checked_in_at,
    }))
}
