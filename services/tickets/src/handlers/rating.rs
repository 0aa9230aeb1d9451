use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::Identity;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::rating::{GetRatingsUseCase, SubmitRatingUseCase};

// ── GET /events/{id}/ratings ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RatingEntryResponse {
    pub user_id: String,
    pub score: i16,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct RatingSummaryResponse {
    pub average: Option<f64>,
    pub count: usize,
    pub ratings: Vec<RatingEntryResponse>,
}

pub async fn get_ratings(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<RatingSummaryResponse>, TicketsServiceError> {
    let usecase = GetRatingsUseCase {
        events: state.event_repo(),
        ratings: state.rating_repo(),
    };
    let summary = usecase.execute(event_id).await?;
    Ok(Json(RatingSummaryResponse {
        average: summary.average,
        count: summary.ratings.len(),
        ratings: summary
            .ratings
            .into_iter()
            .map(|r| RatingEntryResponse {
                user_id: r.user_id.to_string(),
                score: r.score,
                updated_at: r.updated_at,
            })
            .collect(),
    }))
}

// ── POST /events/{id}/ratings ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitRatingRequest {
    pub score: Option<i16>,
}

pub async fn submit_rating(
    identity: Identity,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(body): Json<SubmitRatingRequest>,
) -> Result<StatusCode, TicketsServiceError> {
    let score = body.score.ok_or(TicketsServiceError::MissingData)?;
    let usecase = SubmitRatingUseCase {
        events: state.event_repo(),
        ratings: state.rating_repo(),
        activity: state.activity_log(),
    };
    usecase.execute(event_id, identity.user_id, score).await?;
    Ok(StatusCode::NO_CONTENT)
}
