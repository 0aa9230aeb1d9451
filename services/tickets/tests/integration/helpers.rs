use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use campus_domain::activity::ActivityEntry;
use campus_domain::pagination::PageRequest;
use campus_domain::user::UserRole;
use campus_tickets::domain::repository::{
    ActivityLogRepository, BookmarkRepository, CheckinRepository, EventRepository,
    RegistrationRepository, UserRepository,
};
use campus_tickets::domain::types::{
    Checkin, Event, EventFilter, EventPatch, EventSortBy, User,
};
use campus_tickets::error::TicketsServiceError;

// ── MockEventRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockEventRepo {
    pub rows: Arc<Mutex<Vec<Event>>>,
}

impl MockEventRepo {
    pub fn with(events: Vec<Event>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(events)),
        }
    }
}

impl EventRepository for MockEventRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn list(
        &self,
        _filter: &EventFilter,
        _sort_by: EventSortBy,
        _page: PageRequest,
    ) -> Result<Vec<Event>, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_all_by_creation(&self) -> Result<Vec<Event>, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, event: &Event) -> Result<(), TicketsServiceError> {
        self.rows.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, _patch: &EventPatch) -> Result<bool, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().iter().any(|e| e.id == id))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TicketsServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub preferences: Arc<Mutex<Vec<(Uuid, String)>>>,
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, TicketsServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TicketsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, TicketsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.subject == subject)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), TicketsServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), TicketsServiceError> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.name = name.to_owned();
        }
        Ok(())
    }

    async fn list_preferences(&self, user_id: Uuid) -> Result<Vec<String>, TicketsServiceError> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == user_id)
            .map(|(_, label)| label.clone())
            .collect())
    }

    async fn replace_preferences(
        &self,
        user_id: Uuid,
        labels: &[String],
    ) -> Result<(), TicketsServiceError> {
        let mut prefs = self.preferences.lock().unwrap();
        prefs.retain(|(id, _)| *id != user_id);
        prefs.extend(labels.iter().map(|l| (user_id, l.clone())));
        Ok(())
    }
}

// ── Conditional-insert ledgers ───────────────────────────────────────────────

/// Shared set with real insert-if-absent semantics, standing in for the
/// composite-primary-key tables.
#[derive(Clone, Default)]
pub struct MockLedger {
    pub rows: Arc<Mutex<HashSet<(Uuid, Uuid)>>>,
}

impl RegistrationRepository for MockLedger {
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().insert((event_id, user_id)))
    }

    async fn contains(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().contains(&(event_id, user_id)))
    }
}

impl BookmarkRepository for MockLedger {
    async fn add_if_absent(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, TicketsServiceError> {
        Ok(self.rows.lock().unwrap().insert((event_id, user_id)))
    }
}

impl CheckinRepository for MockLedger {
    async fn create_if_absent(&self, checkin: &Checkin) -> Result<bool, TicketsServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .insert((checkin.event_id, checkin.user_id)))
    }
}

// ── RecordingActivityLog ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingActivityLog {
    pub entries: Arc<Mutex<Vec<ActivityEntry>>>,
}

impl RecordingActivityLog {
    pub fn entries_handle(&self) -> Arc<Mutex<Vec<ActivityEntry>>> {
        Arc::clone(&self.entries)
    }
}

impl ActivityLogRepository for RecordingActivityLog {
    async fn append(&self, entry: ActivityEntry) -> Result<(), TicketsServiceError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<ActivityEntry>, TicketsServiceError> {
        let mut entries = self.entries.lock().unwrap().clone();
        entries.reverse();
        Ok(entries)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_event(title: &str, category: &str, club: &str, token: &str) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        description: format!("{title} description"),
        category: category.to_owned(),
        club: club.to_owned(),
        venue: "Student Center".to_owned(),
        starts_at: now + chrono::Duration::days(7),
        checkin_token: token.to_owned(),
        created_by: Uuid::now_v7(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_user(role: UserRole) -> User {
    let now = Utc::now();
    let id = Uuid::now_v7();
    User {
        id,
        subject: format!("sub-{id}"),
        name: "Alex".to_owned(),
        email: format!("{id}@campus.edu"),
        role,
        created_at: now,
        updated_at: now,
    }
}
