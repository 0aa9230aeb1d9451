use chrono::Utc;
use uuid::Uuid;

use campus_auth_types::token::issue_access_token;
use campus_domain::activity::ActivityKind;
use campus_domain::user::UserRole;

use crate::domain::repository::{ActivityLogRepository, IdentityProviderPort, UserRepository};
use crate::domain::types::User;
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

pub struct AuthOutput {
    pub user: User,
    pub access_token: String,
    pub expires_at: u64,
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub preferences: Vec<String>,
}

/// Credentials live in the identity provider; this service only ever sees the
/// password long enough to forward it.
pub struct RegisterUserUseCase<U, I, A>
where
    U: UserRepository,
    I: IdentityProviderPort,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub users: U,
    pub identity_provider: I,
    pub activity: A,
    pub jwt_secret: String,
}

impl<U, I, A> RegisterUserUseCase<U, I, A>
where
    U: UserRepository,
    I: IdentityProviderPort,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(&self, input: RegisterUserInput) -> Result<AuthOutput, TicketsServiceError> {
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(TicketsServiceError::MissingData);
        }
        // Admin accounts are provisioned out of band, never self-assigned.
        if input.role == UserRole::Admin {
            return Err(TicketsServiceError::Forbidden);
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(TicketsServiceError::EmailAlreadyRegistered);
        }

        let subject = self
            .identity_provider
            .sign_up(&input.email, &input.password)
            .await?;

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            subject,
            name: input.name,
            email: input.email,
            role: input.role,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        if !input.preferences.is_empty() {
            self.users
                .replace_preferences(user.id, &input.preferences)
                .await?;
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::UserRegistered,
            serde_json::json!({
                "user_id": user.id,
                "role": user.role,
            }),
        );

        let (access_token, expires_at) =
            issue_access_token(user.id, user.role, &self.jwt_secret)
                .map_err(|e| TicketsServiceError::Internal(e.into()))?;
        Ok(AuthOutput {
            user,
            access_token,
            expires_at,
        })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U, I>
where
    U: UserRepository,
    I: IdentityProviderPort,
{
    pub users: U,
    pub identity_provider: I,
    pub jwt_secret: String,
}

impl<U, I> LoginUseCase<U, I>
where
    U: UserRepository,
    I: IdentityProviderPort,
{
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, TicketsServiceError> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(TicketsServiceError::MissingData);
        }

        let subject = self
            .identity_provider
            .sign_in(&input.email, &input.password)
            .await?;

        // A verified subject without a profile row means the account was
        // created outside this service; treat it the same as a bad login.
        let user = self
            .users
            .find_by_subject(&subject)
            .await?
            .ok_or(TicketsServiceError::InvalidCredentials)?;

        let (access_token, expires_at) =
            issue_access_token(user.id, user.role, &self.jwt_secret)
                .map_err(|e| TicketsServiceError::Internal(e.into()))?;
        Ok(AuthOutput {
            user,
            access_token,
            expires_at,
        })
    }
}
