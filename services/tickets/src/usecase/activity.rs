use chrono::Utc;
use uuid::Uuid;

use campus_domain::activity::{ActivityEntry, ActivityKind};
use campus_domain::pagination::PageRequest;

use crate::domain::repository::ActivityLogRepository;
use crate::error::TicketsServiceError;

/// Append an activity entry on a spawned task, fire-and-forget.
///
/// The append is decoupled from the request that caused it: a failure is
/// logged for operators and never surfaces to the caller.
pub fn record_activity<A>(log: A, kind: ActivityKind, payload: serde_json::Value)
where
    A: ActivityLogRepository + Send + 'static,
{
    let entry = ActivityEntry {
        id: Uuid::now_v7(),
        kind,
        payload,
        created_at: Utc::now(),
    };
    tokio::spawn(async move {
        if let Err(e) = log.append(entry).await {
            tracing::warn!(error = %e, kind = kind.as_str(), "activity append failed");
        }
    });
}

// ── GetActivityFeed ──────────────────────────────────────────────────────────

pub struct GetActivityFeedUseCase<A: ActivityLogRepository> {
    pub log: A,
}

impl<A: ActivityLogRepository> GetActivityFeedUseCase<A> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ActivityEntry>, TicketsServiceError> {
        self.log.list(page).await
    }
}
