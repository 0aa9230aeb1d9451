use campus_domain::activity::ActivityKind;
use campus_tickets::error::TicketsServiceError;
use campus_tickets::usecase::registration::{BookmarkEventUseCase, RegisterForEventUseCase};
use uuid::Uuid;

use crate::helpers::{MockEventRepo, MockLedger, RecordingActivityLog, test_event};

#[tokio::test]
async fn should_register_once_and_reject_the_duplicate() {
    let event = test_event("Hack Night", "Tech", "CSClub", "tok");
    let event_id = event.id;
    let user_id = Uuid::now_v7();

    let activity = RecordingActivityLog::default();
    let entries = activity.entries_handle();
    let uc = RegisterForEventUseCase {
        events: MockEventRepo::with(vec![event]),
        registrations: MockLedger::default(),
        activity,
    };

    uc.execute(event_id, user_id).await.unwrap();
    let duplicate = uc.execute(event_id, user_id).await;
    assert!(
        matches!(duplicate, Err(TicketsServiceError::AlreadyRegistered)),
        "expected AlreadyRegistered, got {duplicate:?}"
    );

    // Only the successful attempt produces an activity entry.
    tokio::task::yield_now().await;
    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, ActivityKind::UserRegisteredForEvent);
}

#[tokio::test]
async fn should_reject_registration_for_unknown_event() {
    let uc = RegisterForEventUseCase {
        events: MockEventRepo::default(),
        registrations: MockLedger::default(),
        activity: RecordingActivityLog::default(),
    };

    let result = uc.execute(Uuid::now_v7(), Uuid::now_v7()).await;
    assert!(matches!(result, Err(TicketsServiceError::EventNotFound)));
}

#[tokio::test]
async fn should_bookmark_once_and_reject_the_duplicate() {
    let event = test_event("Poetry Slam", "Literature", "WritersGuild", "tok");
    let event_id = event.id;
    let user_id = Uuid::now_v7();

    let uc = BookmarkEventUseCase {
        events: MockEventRepo::with(vec![event]),
        bookmarks: MockLedger::default(),
        activity: RecordingActivityLog::default(),
    };

    uc.execute(event_id, user_id).await.unwrap();
    let duplicate = uc.execute(event_id, user_id).await;
    assert!(
        matches!(duplicate, Err(TicketsServiceError::AlreadyBookmarked)),
        "expected AlreadyBookmarked, got {duplicate:?}"
    );
}

#[tokio::test]
async fn should_track_registration_and_bookmark_ledgers_independently() {
    let event = test_event("Career Fair", "Career", "BusinessSociety", "tok");
    let event_id = event.id;
    let user_id = Uuid::now_v7();
    let events = MockEventRepo::with(vec![event]);

    let registrations = MockLedger::default();
    let bookmarks = MockLedger::default();

    RegisterForEventUseCase {
        events: events.clone(),
        registrations: registrations.clone(),
        activity: RecordingActivityLog::default(),
    }
    .execute(event_id, user_id)
    .await
    .unwrap();

    // A bookmark after registering must not collide with the registration.
    BookmarkEventUseCase {
        events,
        bookmarks: bookmarks.clone(),
        activity: RecordingActivityLog::default(),
    }
    .execute(event_id, user_id)
    .await
    .unwrap();

    assert_eq!(registrations.rows.lock().unwrap().len(), 1);
    assert_eq!(bookmarks.rows.lock().unwrap().len(), 1);
}
