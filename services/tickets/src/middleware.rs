use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use campus_auth_types::identity::Identity;
use campus_auth_types::token::validate_access_token;

use crate::error::TicketsServiceError;
use crate::state::AppState;

/// Bearer-token validation layer for protected routes.
///
/// On success the caller's [`Identity`] is inserted into request extensions,
/// where the `Identity` extractor picks it up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, TicketsServiceError> {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(TicketsServiceError::Unauthorized)?;

    let info = validate_access_token(token, &state.jwt_secret)
        .map_err(|_| TicketsServiceError::Unauthorized)?;

    request.extensions_mut().insert(Identity {
        user_id: info.user_id,
        role: info.role,
    });

    Ok(next.run(request).await)
}
