use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::Identity;
use campus_domain::pagination::PageRequest;

use crate::domain::types::Comment;
use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::comment::{ListCommentsUseCase, PostCommentUseCase};

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub body: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user_id: comment.user_id.to_string(),
            body: comment.body,
            created_at: comment.created_at,
        }
    }
}

// ── GET /events/{id}/comments ────────────────────────────────────────────────

pub async fn get_comments(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<CommentResponse>>, TicketsServiceError> {
    let page: PageRequest = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| TicketsServiceError::MissingData)?
        .unwrap_or_default();

    let usecase = ListCommentsUseCase {
        events: state.event_repo(),
        comments: state.comment_repo(),
    };
    let comments = usecase.execute(event_id, page).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

// ── POST /events/{id}/comments ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PostCommentRequest {
    pub body: String,
}

pub async fn post_comment(
    identity: Identity,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(body): Json<PostCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), TicketsServiceError> {
    let usecase = PostCommentUseCase {
        events: state.event_repo(),
        comments: state.comment_repo(),
        activity: state.activity_log(),
    };
    let comment = usecase
        .execute(event_id, identity.user_id, body.body)
        .await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}
