use chrono::Utc;
use uuid::Uuid;

use campus_domain::activity::ActivityKind;

use crate::domain::repository::{
    ActivityLogRepository, CheckinRepository, EventRepository, RegistrationRepository,
};
use crate::domain::types::Checkin;
use crate::error::TicketsServiceError;
use crate::usecase::activity::record_activity;

pub struct CheckinInput {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub token: String,
}

/// The QR check-in guard.
///
/// Checks run in a fixed order and short-circuit, so a scanner app can tell
/// the attendee exactly what went wrong: missing event, wrong/stale QR code,
/// never registered, or already scanned in.
pub struct CheckinUseCase<E, R, C, A>
where
    E: EventRepository,
    R: RegistrationRepository,
    C: CheckinRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub events: E,
    pub registrations: R,
    pub checkins: C,
    pub activity: A,
}

impl<E, R, C, A> CheckinUseCase<E, R, C, A>
where
    E: EventRepository,
    R: RegistrationRepository,
    C: CheckinRepository,
    A: ActivityLogRepository + Clone + Send + 'static,
{
    pub async fn execute(&self, input: CheckinInput) -> Result<Checkin, TicketsServiceError> {
        // 1. The event must exist.
        let event = self
            .events
            .find_by_id(input.event_id)
            .await?
            .ok_or(TicketsServiceError::EventNotFound)?;

        // 2. Exact, case-sensitive token match. Possession of the displayed
        //    QR code is the entire trust model here.
        if event.checkin_token != input.token {
            return Err(TicketsServiceError::InvalidCheckinToken);
        }

        // 3. Registration is a precondition for being checked in at all.
        if !self
            .registrations
            .contains(input.event_id, input.user_id)
            .await?
        {
            return Err(TicketsServiceError::NotRegistered);
        }

        // 4. Idempotency guard. The insert itself is the existence check:
        //    two concurrent scans race to one conditional insert, and the
        //    loser sees `false` here rather than creating a duplicate.
        let checkin = Checkin {
            event_id: input.event_id,
            user_id: input.user_id,
            checked_in_at: Utc::now(),
        };
        let created = self.checkins.create_if_absent(&checkin).await?;
        if !created {
            return Err(TicketsServiceError::AlreadyCheckedIn);
        }

        record_activity(
            self.activity.clone(),
            ActivityKind::UserCheckedIn,
            serde_json::json!({
                "event_id": input.event_id,
                "user_id": input.user_id,
            }),
        );

        Ok(checkin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use campus_domain::activity::ActivityEntry;
    use campus_domain::pagination::PageRequest;

    use crate::domain::types::{Event, EventFilter, EventPatch, EventSortBy};

    struct MockEventRepo {
        event: Option<Event>,
    }

    impl EventRepository for MockEventRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Event>, TicketsServiceError> {
            Ok(self.event.clone())
        }
        async fn list(
            &self,
            _filter: &EventFilter,
            _sort_by: EventSortBy,
            _page: PageRequest,
        ) -> Result<Vec<Event>, TicketsServiceError> {
            Ok(vec![])
        }
        async fn list_all_by_creation(&self) -> Result<Vec<Event>, TicketsServiceError> {
            Ok(vec![])
        }
        async fn create(&self, _event: &Event) -> Result<(), TicketsServiceError> {
            Ok(())
        }
        async fn update(
            &self,
            _id: Uuid,
            _patch: &EventPatch,
        ) -> Result<bool, TicketsServiceError> {
            Ok(true)
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, TicketsServiceError> {
            Ok(true)
        }
    }

    struct MockRegistrationRepo {
        registered: HashSet<(Uuid, Uuid)>,
    }

    impl RegistrationRepository for MockRegistrationRepo {
        async fn add_if_absent(
            &self,
            _event_id: Uuid,
            _user_id: Uuid,
        ) -> Result<bool, TicketsServiceError> {
            Ok(true)
        }
        async fn contains(
            &self,
            event_id: Uuid,
            user_id: Uuid,
        ) -> Result<bool, TicketsServiceError> {
            Ok(self.registered.contains(&(event_id, user_id)))
        }
    }

    /// Mock with real conditional-insert semantics over a shared set, so
    /// repeated and concurrent check-ins exercise the same guard the
    /// composite primary key provides in production.
    #[derive(Clone)]
    struct MockCheckinRepo {
        rows: Arc<Mutex<HashSet<(Uuid, Uuid)>>>,
    }

    impl MockCheckinRepo {
        fn new() -> Self {
            Self {
                rows: Arc::new(Mutex::new(HashSet::new())),
            }
        }
    }

    impl CheckinRepository for MockCheckinRepo {
        async fn create_if_absent(
            &self,
            checkin: &Checkin,
        ) -> Result<bool, TicketsServiceError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .insert((checkin.event_id, checkin.user_id)))
        }
    }

    #[derive(Clone)]
    struct NoopActivityLog;

    impl ActivityLogRepository for NoopActivityLog {
        async fn append(&self, _entry: ActivityEntry) -> Result<(), TicketsServiceError> {
            Ok(())
        }
        async fn list(
            &self,
            _page: PageRequest,
        ) -> Result<Vec<ActivityEntry>, TicketsServiceError> {
            Ok(vec![])
        }
    }

    fn test_event(token: &str) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::now_v7(),
            title: "Spring Concert".into(),
            description: "Open-air concert on the main lawn".into(),
            category: "Music".into(),
            club: "Orchestra".into(),
            venue: "Main Lawn".into(),
            starts_at: now,
            checkin_token: token.into(),
            created_by: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
        }
    }

    fn usecase(
        event: Option<Event>,
        registered: HashSet<(Uuid, Uuid)>,
        checkins: MockCheckinRepo,
    ) -> CheckinUseCase<MockEventRepo, MockRegistrationRepo, MockCheckinRepo, NoopActivityLog>
    {
        CheckinUseCase {
            events: MockEventRepo { event },
            registrations: MockRegistrationRepo { registered },
            checkins,
            activity: NoopActivityLog,
        }
    }

    #[tokio::test]
    async fn should_fail_with_event_not_found_for_unknown_event() {
        let uc = usecase(None, HashSet::new(), MockCheckinRepo::new());
        let result = uc
            .execute(CheckinInput {
                event_id: Uuid::now_v7(),
                user_id: Uuid::now_v7(),
                token: "whatever".into(),
            })
            .await;
        assert!(matches!(result, Err(TicketsServiceError::EventNotFound)));
    }

    #[tokio::test]
    async fn should_fail_with_invalid_token_on_single_character_mismatch() {
        let event = test_event("secret-token-123");
        let user_id = Uuid::now_v7();
        let registered = HashSet::from([(event.id, user_id)]);
        let event_id = event.id;
        let uc = usecase(Some(event), registered, MockCheckinRepo::new());

        let result = uc
            .execute(CheckinInput {
                event_id,
                user_id,
                token: "secret-token-124".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(TicketsServiceError::InvalidCheckinToken)
        ));
    }

    #[tokio::test]
    async fn should_match_token_case_sensitively() {
        let event = test_event("SecretToken");
        let user_id = Uuid::now_v7();
        let registered = HashSet::from([(event.id, user_id)]);
        let event_id = event.id;
        let uc = usecase(Some(event), registered, MockCheckinRepo::new());

        let result = uc
            .execute(CheckinInput {
                event_id,
                user_id,
                token: "secrettoken".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(TicketsServiceError::InvalidCheckinToken)
        ));
    }

    #[tokio::test]
    async fn should_fail_with_not_registered_even_when_token_is_valid() {
        let event = test_event("secret-token-123");
        let event_id = event.id;
        let uc = usecase(Some(event), HashSet::new(), MockCheckinRepo::new());

        let result = uc
            .execute(CheckinInput {
                event_id,
                user_id: Uuid::now_v7(),
                token: "secret-token-123".into(),
            })
            .await;
        assert!(matches!(result, Err(TicketsServiceError::NotRegistered)));
    }

    #[tokio::test]
    async fn should_succeed_once_then_fail_with_already_checked_in() {
        let event = test_event("secret-token-123");
        let user_id = Uuid::now_v7();
        let registered = HashSet::from([(event.id, user_id)]);
        let event_id = event.id;
        let uc = usecase(Some(event), registered, MockCheckinRepo::new());

        let first = uc
            .execute(CheckinInput {
                event_id,
                user_id,
                token: "secret-token-123".into(),
            })
            .await;
        assert!(first.is_ok());

        for _ in 0..3 {
            let again = uc
                .execute(CheckinInput {
                    event_id,
                    user_id,
                    token: "secret-token-123".into(),
                })
                .await;
            assert!(matches!(again, Err(TicketsServiceError::AlreadyCheckedIn)));
        }
    }

    #[tokio::test]
    async fn should_create_at_most_one_record_under_concurrent_duplicate_scans() {
        let event = test_event("secret-token-123");
        let user_id = Uuid::now_v7();
        let event_id = event.id;
        let registered = HashSet::from([(event_id, user_id)]);
        let checkins = MockCheckinRepo::new();

        let uc = Arc::new(usecase(Some(event), registered, checkins.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let uc = Arc::clone(&uc);
            handles.push(tokio::spawn(async move {
                uc.execute(CheckinInput {
                    event_id,
                    user_id,
                    token: "secret-token-123".into(),
                })
                .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(checkins.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_check_token_before_registration_membership() {
        // Wrong token AND not registered: the token failure must win, per
        // the fixed check order.
        let event = test_event("secret-token-123");
        let event_id = event.id;
        let uc = usecase(Some(event), HashSet::new(), MockCheckinRepo::new());

        let result = uc
            .execute(CheckinInput {
                event_id,
                user_id: Uuid::now_v7(),
                token: "wrong".into(),
            })
            .await;
        assert!(matches!(
            result,
            Err(TicketsServiceError::InvalidCheckinToken)
        ));
    }

    #[tokio::test]
    async fn should_allow_distinct_users_to_check_in_to_the_same_event() {
        let event = test_event("secret-token-123");
        let event_id = event.id;
        let alice = Uuid::now_v7();
        let bob = Uuid::now_v7();
        let registered = HashSet::from([(event_id, alice), (event_id, bob)]);
        let uc = usecase(Some(event), registered, MockCheckinRepo::new());

        for user_id in [alice, bob] {
            let result = uc
                .execute(CheckinInput {
                    event_id,
                    user_id,
                    token: "secret-token-123".into(),
                })
                .await;
            assert!(result.is_ok());
        }
    }
}
