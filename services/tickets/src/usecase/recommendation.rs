use std::collections::HashSet;

use uuid::Uuid;

use campus_domain::recommend::rank_by_preference;
use campus_domain::user::UserRole;

use crate::domain::repository::{EventRepository, UserRepository};
use crate::domain::types::Event;
use crate::error::TicketsServiceError;

/// Recommendations are personal: a user sees only their own feed, while
/// admins may inspect anyone's.
pub struct GetRecommendationsUseCase<U, E>
where
    U: UserRepository,
    E: EventRepository,
{
    pub users: U,
    pub events: E,
}

impl<U, E> GetRecommendationsUseCase<U, E>
where
    U: UserRepository,
    E: EventRepository,
{
    pub async fn execute(
        &self,
        target_user_id: Uuid,
        caller_id: Uuid,
        caller_role: UserRole,
    ) -> Result<Vec<Event>, TicketsServiceError> {
        if caller_id != target_user_id && caller_role != UserRole::Admin {
            return Err(TicketsServiceError::Forbidden);
        }

        self.users
            .find_by_id(target_user_id)
            .await?
            .ok_or(TicketsServiceError::UserNotFound)?;

        let preferences: HashSet<String> = self
            .users
            .list_preferences(target_user_id)
            .await?
            .into_iter()
            .collect();

        let events = self.events.list_all_by_creation().await?;
        Ok(rank_by_preference(&preferences, events, |e| {
            (e.category.as_str(), e.club.as_str())
        }))
    }
}
