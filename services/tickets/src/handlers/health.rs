use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

// ── GET /healthz ─────────────────────────────────────────────────────────────

/// Process liveness. Always 200 once the server is accepting connections.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Readiness. The service is ready when its database answers a ping;
/// until then the load balancer should keep scanners away.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
