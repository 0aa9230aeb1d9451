use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use campus_domain::user::UserRole;

use crate::error::TicketsServiceError;
use crate::state::AppState;
use crate::usecase::auth::{
    AuthOutput, LoginInput, LoginUseCase, RegisterUserInput, RegisterUserUseCase,
};

#[derive(Serialize)]
pub struct AuthUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_at: u64,
    pub user: AuthUserResponse,
}

impl From<AuthOutput> for AuthResponse {
    fn from(out: AuthOutput) -> Self {
        Self {
            access_token: out.access_token,
            expires_at: out.expires_at,
            user: AuthUserResponse {
                id: out.user.id.to_string(),
                name: out.user.name,
                email: out.user.email,
                role: out.user.role,
            },
        }
    }
}

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
    #[serde(default)]
    pub preferences: Vec<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), TicketsServiceError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        identity_provider: state.identity_provider.clone(),
        activity: state.activity_log(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(RegisterUserInput {
            name: body.name,
            email: body.email,
            password: body.password,
            role: body.role.unwrap_or(UserRole::Student),
            preferences: body.preferences,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(out.into())))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, TicketsServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        identity_provider: state.identity_provider.clone(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(out.into()))
}
