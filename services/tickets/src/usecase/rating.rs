use chrono::Utc;
use uuid::Uuid;

use campus_domain::activity::ActivityKind;

use crate::domain::repository::{ActivityLogRepository, EventRepository, RatingRepository};
use crate::domain::types::{Rating, valid_score};
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

/// Rating list plus the derived average, rounded to two decimals.
pub struct RatingSummary {
    pub ratings: Vec<Rating>,
    pub average: Option<f64>,
}

fn average_score(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(r.score)).sum();
    let avg = sum as f64 / ratings.len() as f64;
    Some((avg * 100.0).round() / 100.0)
}

// ── SubmitRating ─────────────────────────────────────────────────────────────

pub struct SubmitRatingUseCase<E, R, A>
where
    E: EventRepository,
    R: RatingRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub ratings: R,
    pub activity: A,
}

impl<E, R, A> SubmitRatingUseCase<E, R, A>
where
    E: EventRepository,
    R: RatingRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    /// Create or replace the caller's rating. Re-rating is not an error.
    pub async fn execute(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        score: i16,
    ) -> Result<(), TicketsServiceError> {
        if !valid_score(score) {
            return Err(TicketsServiceError::InvalidRating);
        }
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        let now = Utc::now();
        let rating = Rating {
            event_id,
            user_id,
            score,
            created_at: now,
            updated_at: now,
        };
        self.ratings.upsert(&rating).await?;

        record_activity(
            self.activity.clone(),
            ActivityKind::RatingSubmitted,
            serde_json::json!({
                "event_id": event_id,
                "user_id": user_id,
                "score": score,
            }),
        );

        Ok(())
    }
}

// ── GetRatings ───────────────────────────────────────────────────────────────

pub struct GetRatingsUseCase<E, R>
where
    E: EventRepository,
    R: RatingRepository,
{
    pub events: E,
    pub ratings: R,
}

impl<E, R> GetRatingsUseCase<E, R>
where
    E: EventRepository,
    R: RatingRepository,
{
    pub async fn execute(&self, event_id: Uuid) -> Result<RatingSummary, TicketsServiceError> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        let ratings = self.ratings.list(event_id).await?;
        let average = average_score(&ratings);
        Ok(RatingSummary { ratings, average })
    }
}
