//! JWT access-token issuing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_domain::user::UserRole;

/// Access-token lifetime in seconds (24 hours).
pub const ACCESS_TOKEN_TTL_SECS: u64 = 60 * 60 * 24;

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub role: UserRole,
    pub exp: u64,
}

/// Errors returned by [`validate_access_token`] and [`issue_access_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthTokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user ID (UUID string) |
/// | `role` | custom | role wire value, see [`UserRole`] |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: i16,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue an HS256 access token for the given user. Returns `(token, exp)`.
pub fn issue_access_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
) -> Result<(String, u64), AuthTokenError> {
    let exp = now_secs() + ACCESS_TOKEN_TTL_SECS;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.as_i16(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthTokenError::Malformed)?;
    Ok((token, exp))
}

/// Decode and validate an access token.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway = 60s tolerates clock skew between services.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthTokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthTokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthTokenError::InvalidSignature,
        _ => AuthTokenError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthTokenError::Malformed)?;
    let role = UserRole::from_i16(data.claims.role).ok_or(AuthTokenError::Malformed)?;

    Ok(TokenInfo {
        user_id,
        role,
        exp: data.claims.exp,
    })
}
