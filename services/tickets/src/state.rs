use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActivityLogRepository, DbBookmarkRepository, DbCheckinRepository, DbCommentRepository,
    DbEventRepository, DbRatingRepository, DbRegistrationRepository, DbUserRepository,
};
use crate::infra::identity::HttpIdentityProvider;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity_provider: HttpIdentityProvider,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn registration_repo(&self) -> DbRegistrationRepository {
        DbRegistrationRepository {
            db: self.db.clone(),
        }
    }

    pub fn bookmark_repo(&self) -> DbBookmarkRepository {
        DbBookmarkRepository {
            db: self.db.clone(),
        }
    }

    pub fn checkin_repo(&self) -> DbCheckinRepository {
        DbCheckinRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn rating_repo(&self) -> DbRatingRepository {
        DbRatingRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_log(&self) -> DbActivityLogRepository {
        DbActivityLogRepository {
            db: self.db.clone(),
        }
    }
}
