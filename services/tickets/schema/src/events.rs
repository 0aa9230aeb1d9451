use sea_orm::entity::prelude::*;

/// Event record. `checkin_token` is generated once at creation and is never
/// part of any UPDATE statement.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub club: String,
    pub venue: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub checkin_token: String,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_registrations::Entity")]
    EventRegistrations,
    #[sea_orm(has_many = "super::event_bookmarks::Entity")]
    EventBookmarks,
    #[sea_orm(has_many = "super::checkins::Entity")]
    Checkins,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::ratings::Entity")]
    Ratings,
}

impl Related<super::event_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRegistrations.def()
    }
}

impl Related<super::event_bookmarks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventBookmarks.def()
    }
}

impl Related<super::checkins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Checkins.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
