use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use campus_domain::activity::{ActivityEntry, ActivityKind};
use campus_domain::pagination::{PageRequest, Sort};
use campus_tickets_schema::{
    activity_entries, checkins, comments, event_bookmarks, event_registrations, events, ratings,
    user_preferences, users,
};

use crate::domain::repository::{
    ActivityLogRepository, BookmarkRepository, CheckinRepository, CommentRepository,
    EventRepository, RatingRepository, RegistrationRepository, UserRepository,
};
use crate::domain::types::{
    Checkin, Comment, Event, EventFilter, EventPatch, EventSortBy, Rating, User,
};
use crate::error::TicketsServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, TicketsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TicketsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, TicketsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Subject.eq(subject))
            .one(&self.db)
            .await
            .context("find user by subject")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), TicketsServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            subject: Set(user.subject.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            role: Set(user.role.as_i16()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), TicketsServiceError> {
        users::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user name")?;
        Ok(())
    }

    async fn list_preferences(&self, user_id: Uuid) -> Result<Vec<String>, TicketsServiceError> {
        let models = user_preferences::Entity::find()
            .filter(user_preferences::Column::UserId.eq(user_id))
            .order_by_asc(user_preferences::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list user preferences")?;
        Ok(models.into_iter().map(|m| m.label).collect())
    }

    async fn replace_preferences(
        &self,
        user_id: Uuid,
        labels: &[String],
    ) -> Result<(), TicketsServiceError> {
        let txn = self.db.begin().await.context("begin preferences txn")?;

        user_preferences::Entity::delete_many()
            .filter(user_preferences::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .context("clear user preferences")?;

        if !labels.is_empty() {
            let now = Utc::now();
            let rows = labels.iter().map(|label| user_preferences::ActiveModel {
                user_id: Set(user_id),
                label: Set(label.clone()),
                created_at: Set(now),
            });
            // do_nothing tolerates duplicate labels in the request body.
            user_preferences::Entity::insert_many(rows)
                .on_conflict(
                    OnConflict::columns([
                        user_preferences::Column::UserId,
                        user_preferences::Column::Label,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .context("insert user preferences")?;
        }

        txn.commit().await.context("commit preferences txn")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, TicketsServiceError> {
    let role = campus_domain::user::UserRole::from_i16(model.role)
        .with_context(|| format!("unknown role value {} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        subject: model.subject,
        name: model.name,
        email: model.email,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Event repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: DatabaseConnection,
}

impl EventRepository for DbEventRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, TicketsServiceError> {
        let model = events::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find event by id")?;
        Ok(model.map(event_from_model))
    }

    async fn list(
        &self,
        filter: &EventFilter,
        sort_by: EventSortBy,
        page: PageRequest,
    ) -> Result<Vec<Event>, TicketsServiceError> {
        let page = page.clamped();
        let mut query = events::Entity::find();
        if let Some(category) = &filter.category {
            query = query.filter(events::Column::Category.eq(category));
        }
        if let Some(club) = &filter.club {
            query = query.filter(events::Column::Club.eq(club));
        }
        query = match sort_by {
            EventSortBy::StartsAt(Sort::Asc) => query.order_by_asc(events::Column::StartsAt),
            EventSortBy::StartsAt(Sort::Desc) => query.order_by_desc(events::Column::StartsAt),
            EventSortBy::CreatedAt(Sort::Asc) => query.order_by_asc(events::Column::CreatedAt),
            EventSortBy::CreatedAt(Sort::Desc) => query.order_by_desc(events::Column::CreatedAt),
        };
        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list events")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn list_all_by_creation(&self) -> Result<Vec<Event>, TicketsServiceError> {
        let models = events::Entity::find()
            .order_by_asc(events::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list all events by creation")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn create(&self, event: &Event) -> Result<(), TicketsServiceError> {
        events::ActiveModel {
            id: Set(event.id),
            title: Set(event.title.clone()),
            description: Set(event.description.clone()),
            category: Set(event.category.clone()),
            club: Set(event.club.clone()),
            venue: Set(event.venue.clone()),
            starts_at: Set(event.starts_at),
            checkin_token: Set(event.checkin_token.clone()),
            created_by: Set(event.created_by),
            created_at: Set(event.created_at),
            updated_at: Set(event.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create event")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<bool, TicketsServiceError> {
        let mut am = events::ActiveModel {
            ..Default::default()
        };
        if let Some(title) = &patch.title {
            am.title = Set(title.clone());
        }
        if let Some(description) = &patch.description {
            am.description = Set(description.clone());
        }
        if let Some(category) = &patch.category {
            am.category = Set(category.clone());
        }
        if let Some(club) = &patch.club {
            am.club = Set(club.clone());
        }
        if let Some(venue) = &patch.venue {
            am.venue = Set(venue.clone());
        }
        if let Some(starts_at) = patch.starts_at {
            am.starts_at = Set(starts_at);
        }
        am.updated_at = Set(Utc::now());

        // update_many + id filter reports the missing-row case through
        // rows_affected instead of a RecordNotFound error.
        let result = events::Entity::update_many()
            .set(am)
            .filter(events::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update event")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TicketsServiceError> {
        let result = events::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete event")?;
        Ok(result.rows_affected > 0)
    }
}

fn event_from_model(model: events::Model) -> Event {
    Event {
        id: model.id,
        title: model.title,
        description: model.description,
        category: model.category,
        club: model.club,
        venue: model.venue,
        starts_at: model.starts_at,
        checkin_token: model.checkin_token,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Registration ledger ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationRepository {
    pub db: DatabaseConnection,
}

impl RegistrationRepository for DbRegistrationRepository {
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError> {
        let inserted = event_registrations::Entity::insert(event_registrations::ActiveModel {
            event_id: Set(event_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                event_registrations::Column::EventId,
                event_registrations::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert event registration")?;
        Ok(inserted > 0)
    }

    async fn contains(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError> {
        let model = event_registrations::Entity::find_by_id((event_id, user_id))
            .one(&self.db)
            .await
            .context("find event registration")?;
        Ok(model.is_some())
    }
}

// ── Bookmarks ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookmarkRepository {
    pub db: DatabaseConnection,
}

impl BookmarkRepository for DbBookmarkRepository {
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError> {
        let inserted = event_bookmarks::Entity::insert(event_bookmarks::ActiveModel {
            event_id: Set(event_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                event_bookmarks::Column::EventId,
                event_bookmarks::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert event bookmark")?;
        Ok(inserted > 0)
    }
}

// ── Check-ins ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCheckinRepository {
    pub db: DatabaseConnection,
}

impl CheckinRepository for DbCheckinRepository {
    async fn create_if_absent(&self, checkin: &Checkin) -> Result<bool, TicketsServiceError> {
        // Single conditional INSERT: the composite PK resolves concurrent
        // duplicate scans, no prior SELECT involved.
        let inserted = checkins::Entity::insert(checkins::ActiveModel {
            event_id: Set(checkin.event_id),
            user_id: Set(checkin.user_id),
            checked_in_at: Set(checkin.checked_in_at),
        })
        .on_conflict(
            OnConflict::columns([checkins::Column::EventId, checkins::Column::UserId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("insert checkin")?;
        Ok(inserted > 0)
    }
}

// ── Comments ─────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn list(
        &self,
        event_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Comment>, TicketsServiceError> {
        let page = page.clamped();
        let models = comments::Entity::find()
            .filter(comments::Column::EventId.eq(event_id))
            .order_by_asc(comments::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list comments")?;
        Ok(models
            .into_iter()
            .map(|m| Comment {
                id: m.id,
                event_id: m.event_id,
                user_id: m.user_id,
                body: m.body,
                created_at: m.created_at,
            })
            .collect())
    }

    async fn create(&self, comment: &Comment) -> Result<(), TicketsServiceError> {
        comments::ActiveModel {
            id: Set(comment.id),
            event_id: Set(comment.event_id),
            user_id: Set(comment.user_id),
            body: Set(comment.body.clone()),
            created_at: Set(comment.created_at),
        }
        .insert(&self.db)
        .await
        .context("create comment")?;
        Ok(())
    }
}

// ── Ratings ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRatingRepository {
    pub db: DatabaseConnection,
}

impl RatingRepository for DbRatingRepository {
    async fn list(&self, event_id: Uuid) -> Result<Vec<Rating>, TicketsServiceError> {
        let models = ratings::Entity::find()
            .filter(ratings::Column::EventId.eq(event_id))
            .order_by_asc(ratings::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list ratings")?;
        Ok(models.into_iter().map(rating_from_model).collect())
    }

    async fn upsert(&self, rating: &Rating) -> Result<(), TicketsServiceError> {
        // Single INSERT .. ON CONFLICT DO UPDATE: concurrent first-time
        // submissions for the same (event_id, user_id) both succeed, the
        // later one wins.
        ratings::Entity::insert(ratings::ActiveModel {
            event_id: Set(rating.event_id),
            user_id: Set(rating.user_id),
            score: Set(rating.score),
            created_at: Set(rating.created_at),
            updated_at: Set(rating.updated_at),
        })
        .on_conflict(
            OnConflict::columns([ratings::Column::EventId, ratings::Column::UserId])
                .update_columns([ratings::Column::Score, ratings::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("upsert rating")?;
        Ok(())
    }
}

fn rating_from_model(model: ratings::Model) -> Rating {
    Rating {
        event_id: model.event_id,
        user_id: model.user_id,
        score: model.score,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Activity log ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityLogRepository {
    pub db: DatabaseConnection,
}

impl ActivityLogRepository for DbActivityLogRepository {
    async fn append(&self, entry: ActivityEntry) -> Result<(), TicketsServiceError> {
        activity_entries::ActiveModel {
            id: Set(entry.id),
            kind: Set(entry.kind.as_str().to_owned()),
            payload: Set(entry.payload),
            created_at: Set(entry.created_at),
        }
        .insert(&self.db)
        .await
        .context("append activity entry")?;
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ActivityEntry>, TicketsServiceError> {
        let page = page.clamped();
        let models = activity_entries::Entity::find()
            .order_by_desc(activity_entries::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list activity entries")?;

        let entries = models
            .into_iter()
            .map(|m| {
                let kind = ActivityKind::from_wire(&m.kind)
                    .with_context(|| format!("unknown activity kind {:?}", m.kind))?;
                Ok(ActivityEntry {
                    id: m.id,
                    kind,
                    payload: m.payload,
                    created_at: m.created_at,
                })
            })
            .collect::<Result<Vec<_>, TicketsServiceError>>()?;
        Ok(entries)
    }
}
