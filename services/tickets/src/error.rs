use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Tickets service domain error variants.
///
/// Status mapping follows the scanner-facing contract: conflict-style
/// rejections (`already-*`) are 400 so clients treat them like validation
/// failures, while token and membership rejections are 403.
#[derive(Debug, thiserror::Error)]
pub enum TicketsServiceError {
    #[error("missing data")]
    MissingData,
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    #[error("already registered for this event")]
    AlreadyRegistered,
    #[error("already bookmarked")]
    AlreadyBookmarked,
    #[error("already checked in")]
    AlreadyCheckedIn,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid check-in token")]
    InvalidCheckinToken,
    #[error("not registered for this event")]
    NotRegistered,
    #[error("forbidden")]
    Forbidden,
    #[error("event not found")]
    EventNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TicketsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingData => "MISSING_DATA",
            Self::InvalidRating => "INVALID_RATING",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::AlreadyBookmarked => "ALREADY_BOOKMARKED",
            Self::AlreadyCheckedIn => "ALREADY_CHECKED_IN",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidCheckinToken => "INVALID_CHECKIN_TOKEN",
            Self::NotRegistered => "NOT_REGISTERED",
            Self::Forbidden => "FORBIDDEN",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for TicketsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingData
            | Self::InvalidRating
            | Self::AlreadyRegistered
            | Self::AlreadyBookmarked
            | Self::AlreadyCheckedIn
            | Self::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidCheckinToken | Self::NotRegistered | Self::Forbidden => {
                StatusCode::FORBIDDEN
            }
            Self::EventNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: TicketsServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_400_for_missing_data() {
        assert_error(
            TicketsServiceError::MissingData,
            StatusCode::BAD_REQUEST,
            "MISSING_DATA",
            "missing data",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_400_for_already_checked_in() {
        assert_error(
            TicketsServiceError::AlreadyCheckedIn,
            StatusCode::BAD_REQUEST,
            "ALREADY_CHECKED_IN",
            "already checked in",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_400_for_already_registered() {
        assert_error(
            TicketsServiceError::AlreadyRegistered,
            StatusCode::BAD_REQUEST,
            "ALREADY_REGISTERED",
            "already registered for this event",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_401_for_invalid_credentials() {
        assert_error(
            TicketsServiceError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "invalid credentials",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_403_for_invalid_checkin_token() {
        assert_error(
            TicketsServiceError::InvalidCheckinToken,
            StatusCode::FORBIDDEN,
            "INVALID_CHECKIN_TOKEN",
            "invalid check-in token",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_403_for_not_registered() {
        assert_error(
            TicketsServiceError::NotRegistered,
            StatusCode::FORBIDDEN,
            "NOT_REGISTERED",
            "not registered for this event",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_404_for_event_not_found() {
        assert_error(
            TicketsServiceError::EventNotFound,
            StatusCode::NOT_FOUND,
            "EVENT_NOT_FOUND",
            "event not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_500_for_internal() {
        assert_error(
            TicketsServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
