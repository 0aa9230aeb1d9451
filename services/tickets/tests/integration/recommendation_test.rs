use campus_domain::user::UserRole;
use campus_tickets::domain::repository::UserRepository;
use campus_tickets::error::TicketsServiceError;
use campus_tickets::usecase::recommendation::GetRecommendationsUseCase;
use uuid::Uuid;

use crate::helpers::{MockEventRepo, MockUserRepo, test_event, test_user};

async fn seeded_user(users: &MockUserRepo, preferences: &[&str]) -> Uuid {
    let user = test_user(UserRole::Student);
    let id = user.id;
    users.create(&user).await.unwrap();
    let labels: Vec<String> = preferences.iter().map(|s| (*s).to_owned()).collect();
    users.replace_preferences(id, &labels).await.unwrap();
    id
}

#[tokio::test]
async fn should_score_category_higher_than_club_and_keep_ties_stable() {
    let events = vec![
        test_event("concert", "Music", "X", "t1"),
        test_event("match", "Sports", "DramaClub", "t2"),
        test_event("scrimmage", "Sports", "Y", "t3"),
    ];
    let expected: Vec<Uuid> = events.iter().map(|e| e.id).collect();

    let users = MockUserRepo::default();
    let user_id = seeded_user(&users, &["Music", "DramaClub"]).await;

    let uc = GetRecommendationsUseCase {
        users,
        events: MockEventRepo::with(events),
    };
    let feed = uc
        .execute(user_id, user_id, UserRole::Student)
        .await
        .unwrap();

    let got: Vec<Uuid> = feed.iter().map(|e| e.id).collect();
    assert_eq!(got, expected, "category hit (+2) must outrank club hit (+1)");
}

#[tokio::test]
async fn should_return_at_most_five_events() {
    let events: Vec<_> = (0..9)
        .map(|i| test_event(&format!("event-{i}"), "Music", "X", "t"))
        .collect();

    let users = MockUserRepo::default();
    let user_id = seeded_user(&users, &["Music"]).await;

    let uc = GetRecommendationsUseCase {
        users,
        events: MockEventRepo::with(events),
    };
    let feed = uc
        .execute(user_id, user_id, UserRole::Student)
        .await
        .unwrap();
    assert_eq!(feed.len(), 5);
}

#[tokio::test]
async fn should_let_admin_but_not_peers_read_someone_elses_feed() {
    let users = MockUserRepo::default();
    let user_id = seeded_user(&users, &[]).await;

    let uc = GetRecommendationsUseCase {
        users,
        events: MockEventRepo::default(),
    };

    let peer = Uuid::now_v7();
    let denied = uc.execute(user_id, peer, UserRole::Student).await;
    assert!(matches!(denied, Err(TicketsServiceError::Forbidden)));

    let allowed = uc.execute(user_id, peer, UserRole::Admin).await;
    assert!(allowed.is_ok());
}

#[tokio::test]
async fn should_return_user_not_found_for_unknown_target() {
    let uc = GetRecommendationsUseCase {
        users: MockUserRepo::default(),
        events: MockEventRepo::default(),
    };

    let ghost = Uuid::now_v7();
    let result = uc.execute(ghost, ghost, UserRole::Student).await;
    assert!(matches!(result, Err(TicketsServiceError::UserNotFound)));
}
