//! sea-orm entities for the tickets service.

pub mod activity_entries;
pub mod checkins;
pub mod comments;
pub mod event_bookmarks;
pub mod event_registrations;
pub mod events;
pub mod ratings;
pub mod user_preferences;
pub mod users;
