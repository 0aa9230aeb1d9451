use axum::{Json, extract::State};
use serde::Serialize;

use campus_auth_types::identity::Identity;
use campus_domain::activity::{ActivityEntry, ActivityKind};
use campus_domain::pagination::PageRequest;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::activity::GetActivityFeedUseCase;

// ── GET /activity-feed ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ActivityEntryResponse {
    pub id: String,
    pub kind: ActivityKind,
    pub payload: serde_json::Value,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ActivityEntry> for ActivityEntryResponse {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            kind: entry.kind,
            payload: entry.payload,
            created_at: entry.created_at,
        }
    }
}

pub async fn get_activity_feed(
    _identity: Identity,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ActivityEntryResponse>>, TicketsServiceError> {
    let page: PageRequest = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| TicketsServiceError::MissingData)?
        .unwrap_or_default();

    let usecase = GetActivityFeedUseCase {
        log: state.activity_log(),
    };
    let entries = usecase.execute(page).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
