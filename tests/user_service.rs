use std::sync::Arc;

use user_registry::{DomainError, InMemoryUserRepository, User, UserId, UserKey, UserService};

fn create_service() -> UserService<InMemoryUserRepository> {
    UserService::new(Arc::new(InMemoryUserRepository::new()))
}

#[tokio::test]
async fn test_add_then_get_by_id() {
    let service = create_service();

    let created = service.add_user("alice", "a@x.com").await.unwrap();
    assert_eq!(created.id(), UserId::new(1));

    let fetched = service.get_user_by_id(UserId::new(1)).await.unwrap();
    assert_eq!(fetched, User::new(UserId::new(1), "alice", "a@x.com"));
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let service = create_service();
    service.add_user("alice", "a@x.com").await.unwrap();

    let err = service.add_user("alice", "dup@x.com").await.unwrap_err();

    assert!(matches!(&err, DomainError::AlreadyExists { username } if username == "alice"));
    assert_eq!(service.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_id_on_empty_table() {
    let service = create_service();

    let err = service.get_user_by_id(UserId::new(999)).await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { key: UserKey::Id(id) } if id == UserId::new(999)));
}

#[tokio::test]
async fn test_get_all_returns_users_in_id_order() {
    let service = create_service();
    service.add_user("zed", "z@x.com").await.unwrap();
    service.add_user("amy", "amy@x.com").await.unwrap();

    let users = service.get_all_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username(), "zed");
    assert_eq!(users[1].username(), "amy");
}

#[tokio::test]
async fn test_ordering_survives_deletes() {
    let service = create_service();
    let a = service.add_user("a", "a@x.com").await.unwrap();
    let b = service.add_user("b", "b@x.com").await.unwrap();
    service.remove_user(a.id()).await.unwrap();
    let c = service.add_user("c", "c@x.com").await.unwrap();
    let d = service.add_user("a", "a2@x.com").await.unwrap();

    let ids: Vec<UserId> = service
        .get_all_users()
        .await
        .unwrap()
        .iter()
        .map(|u| u.id())
        .collect();

    assert_eq!(ids, vec![b.id(), c.id(), d.id()]);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_remove_then_get_fails() {
    let service = create_service();
    let user = service.add_user("temp", "temp@x.com").await.unwrap();

    service.remove_user(user.id()).await.unwrap();

    let err = service.get_user_by_id(user.id()).await.unwrap_err();
    assert_eq!(err.to_string(), format!("User not found with id: {}", user.id()));

    let err = service.remove_user(user.id()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_change_email() {
    let service = create_service();
    let user = service.add_user("bob", "old@x.com").await.unwrap();

    let changed = service.change_email(user.id(), "new@x.com").await.unwrap();
    assert_eq!(changed, User::new(user.id(), "bob", "new@x.com"));

    let by_name = service.get_user_by_username("bob").await.unwrap();
    assert_eq!(by_name.email(), "new@x.com");
}

#[tokio::test]
async fn test_change_email_missing_user() {
    let service = create_service();

    let err = service.change_email(UserId::new(5), "x@x.com").await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { key: UserKey::Id(_) }));
    assert!(service.get_all_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_service_shared_across_tasks() {
    let service = create_service();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .add_user(&format!("user{}", i), &format!("user{}@x.com", i))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let users = service.get_all_users().await.unwrap();
    assert_eq!(users.len(), 8);
    assert!(users.windows(2).all(|w| w[0].id() < w[1].id()));
}
