use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_user_preferences;
mod m20260801_000003_create_events;
mod m20260801_000004_create_event_registrations;
mod m20260801_000005_create_event_bookmarks;
mod m20260801_000006_create_checkins;
mod m20260801_000007_create_comments;
mod m20260801_000008_create_ratings;
mod m20260801_000009_create_activity_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_user_preferences::Migration),
            Box::new(m20260801_000003_create_events::Migration),
            Box::new(m20260801_000004_create_event_registrations::Migration),
            Box::new(m20260801_000005_create_event_bookmarks::Migration),
            Box::new(m20260801_000006_create_checkins::Migration),
            Box::new(m20260801_000007_create_comments::Migration),
            Box::new(m20260801_000008_create_ratings::Migration),
            Box::new(m20260801_000009_create_activity_entries::Migration),
        ]
    }
}
