use campus_domain::activity::ActivityKind;
use campus_tickets::domain::repository::RegistrationRepository;
use campus_tickets::error::TicketsServiceError;
use campus_tickets::usecase::checkin::{CheckinInput, CheckinUseCase};
use campus_tickets::usecase::registration::RegisterForEventUseCase;
use uuid::Uuid;

use crate::helpers::{MockEventRepo, MockLedger, RecordingActivityLog, test_event};

const TOKEN: &str = "Zx9kQ2mW7pL4nR8sT1vY5bC3dF6gH0jA";

#[tokio::test]
async fn should_check_in_registered_attendee_and_record_activity() {
    let event = test_event("Spring Concert", "Music", "Orchestra", TOKEN);
    let event_id = event.id;
    let user_id = Uuid::now_v7();

    let events = MockEventRepo::with(vec![event]);
    let registrations = MockLedger::default();
    let activity = RecordingActivityLog::default();
    let entries = activity.entries_handle();

    // Register through the real usecase, then scan.
    RegisterForEventUseCase {
        events: events.clone(),
        registrations: registrations.clone(),
        activity: activity.clone(),
    }
    .execute(event_id, user_id)
    .await
    .unwrap();

    let uc = CheckinUseCase {
        events,
        registrations,
        checkins: MockLedger::default(),
        activity,
    };
    let checkin = uc
        .execute(CheckinInput {
            event_id,
            user_id,
            token: TOKEN.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(checkin.event_id, event_id);
    assert_eq!(checkin.user_id, user_id);

    // Appends run on spawned tasks; give them a chance to land.
    tokio::task::yield_now().await;
    let entries = entries.lock().unwrap();
    assert!(
        entries
            .iter()
            .any(|e| e.kind == ActivityKind::UserCheckedIn),
        "expected a USER_CHECKED_IN entry, got {entries:?}"
    );
}

#[tokio::test]
async fn should_reject_second_scan_for_same_attendee() {
    let event = test_event("Spring Concert", "Music", "Orchestra", TOKEN);
    let event_id = event.id;
    let user_id = Uuid::now_v7();

    let registrations = MockLedger::default();
    RegistrationRepository::add_if_absent(&registrations, event_id, user_id)
        .await
        .unwrap();

    let uc = CheckinUseCase {
        events: MockEventRepo::with(vec![event]),
        registrations,
        checkins: MockLedger::default(),
        activity: RecordingActivityLog::default(),
    };

    let input = || CheckinInput {
        event_id,
        user_id,
        token: TOKEN.to_owned(),
    };
    uc.execute(input()).await.unwrap();

    let second = uc.execute(input()).await;
    assert!(
        matches!(second, Err(TicketsServiceError::AlreadyCheckedIn)),
        "expected AlreadyCheckedIn, got {second:?}"
    );
}

#[tokio::test]
async fn should_apply_guard_checks_in_order() {
    let event = test_event("Spring Concert", "Music", "Orchestra", TOKEN);
    let event_id = event.id;
    let registered_user = Uuid::now_v7();

    let registrations = MockLedger::default();
    RegistrationRepository::add_if_absent(&registrations, event_id, registered_user)
        .await
        .unwrap();

    let uc = CheckinUseCase {
        events: MockEventRepo::with(vec![event]),
        registrations,
        checkins: MockLedger::default(),
        activity: RecordingActivityLog::default(),
    };

    // Unknown event wins over everything else.
    let result = uc
        .execute(CheckinInput {
            event_id: Uuid::now_v7(),
            user_id: registered_user,
            token: TOKEN.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(TicketsServiceError::EventNotFound)));

    // Bad token wins over missing registration.
    let result = uc
        .execute(CheckinInput {
            event_id,
            user_id: Uuid::now_v7(),
            token: "wrong-token".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(TicketsServiceError::InvalidCheckinToken)
    ));

    // Valid token but no registration.
    let result = uc
        .execute(CheckinInput {
            event_id,
            user_id: Uuid::now_v7(),
            token: TOKEN.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(TicketsServiceError::NotRegistered)));
}

#[tokio::test]
async fn should_not_record_activity_for_rejected_scan() {
    let event = test_event("Spring Concert", "Music", "Orchestra", TOKEN);
    let event_id = event.id;

    let activity = RecordingActivityLog::default();
    let entries = activity.entries_handle();

    let uc = CheckinUseCase {
        events: MockEventRepo::with(vec![event]),
        registrations: MockLedger::default(),
        checkins: MockLedger::default(),
        activity,
    };

    let result = uc
        .execute(CheckinInput {
            event_id,
            user_id: Uuid::now_v7(),
            token: TOKEN.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(TicketsServiceError::NotRegistered)));

    tokio::task::yield_now().await;
    assert!(entries.lock().unwrap().is_empty());
}
