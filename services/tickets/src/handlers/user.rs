use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use campus_auth_types::identity::Identity;
use campus_domain::user::UserRole;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    GetProfileUseCase, Profile, UpdateProfileInput, UpdateProfileUseCase,
};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub preferences: Vec<String>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.user.id.to_string(),
            name: profile.user.name,
            email: profile.user.email,
            role: profile.user.role,
            preferences: profile.preferences,
            created_at: profile.user.created_at,
            updated_at: profile.user.updated_at,
        }
    }
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, TicketsServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
    };
    let profile = usecase.execute(identity.user_id).await?;
    Ok(Json(profile.into()))
}

// ── PATCH /users/@me ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub preferences: Option<Vec<String>>,
}

pub async fn update_me(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdateMeRequest>,
) -> Result<Json<ProfileResponse>, TicketsServiceError> {
    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
    };
    let profile = usecase
        .execute(
            identity.user_id,
            UpdateProfileInput {
                name: body.name,
                preferences: body.preferences,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}
