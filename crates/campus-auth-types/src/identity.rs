//! Authenticated-caller identity extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use campus_domain::user::UserRole;

/// Identity of the authenticated caller.
///
/// Inserted into request extensions by the service's auth middleware after
/// Bearer-token validation; extracting it on a route the middleware does not
/// cover returns 401.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = parts.extensions.get::<Identity>().cloned();
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
