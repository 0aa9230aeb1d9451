use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::TicketsServiceError;

pub struct Profile {
    pub user: User,
    pub preferences: Vec<String>,
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetProfileUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Profile, TicketsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(TicketsServiceError::UserNotFound)?;
        let preferences = self.users.list_preferences(user_id).await?;
        Ok(Profile { user, preferences })
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub preferences: Option<Vec<String>>,
}

/// Name and preference updates only. Role and email are fixed at
/// registration.
pub struct UpdateProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateProfileUseCase<U> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<Profile, TicketsServiceError> {
        if input.name.is_none() && input.preferences.is_none() {
            return Err(TicketsServiceError::MissingData);
        }

        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(TicketsServiceError::UserNotFound)?;

        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(TicketsServiceError::MissingData);
            }
            self.users.update_name(user_id, name).await?;
        }
        if let Some(preferences) = &input.preferences {
            self.users.replace_preferences(user_id, preferences).await?;
        }

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(TicketsServiceError::UserNotFound)?;
        let preferences = self.users.list_preferences(user_id).await?;
        Ok(Profile { user, preferences })
    }
}
