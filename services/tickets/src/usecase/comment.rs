use chrono::Utc;
use uuid::Uuid;

use campus_domain::activity::ActivityKind;
use campus_domain::pagination::PageRequest;

use crate::domain::repository::{ActivityLogRepository, CommentRepository, EventRepository};
use crate::domain::types::Comment;
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

// ── PostComment ──────────────────────────────────────────────────────────────

pub struct PostCommentUseCase<E, C, A>
where
    E: EventRepository,
    C: CommentRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub comments: C,
    pub activity: A,
}

impl<E, C, A> PostCommentUseCase<E, C, A>
where
    E: EventRepository,
    C: CommentRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        body: String,
    ) -> Result<Comment, TicketsServiceError> {
        if body.trim().is_empty() {
            return Err(TicketsServiceError::MissingData);
        }
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        let comment = Comment {
            id: Uuid::now_v7(),
            event_id,
            user_id,
            body,
            created_at: Utc::now(),
        };
        self.comments.create(&comment).await?;

        record_activity(
            self.activity.clone(),
            ActivityKind::CommentPosted,
            serde_json::json!({
                "event_id": event_id,
                "user_id": user_id,
                "comment_id": comment.id,
            }),
        );

        Ok(comment)
    }
}

// ── ListComments ─────────────────────────────────────────────────────────────

pub struct ListCommentsUseCase<E, C>
where
    E: EventRepository,
    C: CommentRepository,
{
    pub events: E,
    pub comments: C,
}

impl<E, C> ListCommentsUseCase<E, C>
where
    E: EventRepository,
    C: CommentRepository,
{
    pub async fn execute(
        &self,
        event_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, TicketsServiceError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;
        self.comments.list(event_id, page.clamped()).await
    }
}
