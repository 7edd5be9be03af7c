//! Postgres adapter tests.
//!
//! These need a running Postgres reachable through `DATABASE_URL` and are
//! ignored by default: `cargo test --test repository_tests -- --ignored`.

mod common;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use common::TestDb;
use user_service::domain::user::models::NewUser;
use user_service::domain::user::models::UserId;
use user_service::domain::user::ports::UserRepository;
use user_service::outbound::repositories::PostgresUserRepository;
use user_service::user::errors::RepositoryError;
use user_service::user::errors::UserError;

// Whole seconds survive the round trip through TIMESTAMPTZ unchanged
fn fixed_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn new_user(username: &str, password_hash: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_insert_then_find_round_trip() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let id = repository
        .insert(new_user("alice", "$2b$04$hash"))
        .await
        .unwrap();
    let user = repository.find_by_username("alice").await.unwrap().unwrap();

    assert_eq!(user.id, id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "$2b$04$hash");
    assert_eq!(user.created_at, fixed_time());
    assert_eq!(user.updated_at, fixed_time());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_find_unknown_username_is_none() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    assert!(repository.find_by_username("ghost").await.unwrap().is_none());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_duplicate_insert_is_unique_violation() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let first = repository
        .insert(new_user("alice", "$2b$04$first"))
        .await
        .unwrap();
    let second = repository.insert(new_user("alice", "$2b$04$second")).await;

    assert_eq!(
        second,
        Err(RepositoryError::UniqueViolation("alice".to_string()))
    );
    assert_eq!(
        UserError::from(second.unwrap_err()),
        UserError::DuplicateUsername("alice".to_string())
    );

    let stored = repository.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.id, first);
    assert_eq!(stored.password_hash, "$2b$04$first");

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_insert_assigns_distinct_ids() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let alice = repository.insert(new_user("alice", "h")).await.unwrap();
    let bob = repository.insert(new_user("bob", "h")).await.unwrap();

    assert_ne!(alice, bob);

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_update_password_replaces_hash_and_advances_updated_at() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    let id = repository
        .insert(new_user("alice", "$2b$04$old"))
        .await
        .unwrap();

    repository
        .update_password_by_id(id, "$2b$04$new")
        .await
        .unwrap();

    let user = repository.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.password_hash, "$2b$04$new");
    assert_eq!(user.created_at, fixed_time());
    assert!(user.updated_at > fixed_time());

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires Postgres at DATABASE_URL"]
async fn test_update_missing_id_is_not_found() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let result = repository
        .update_password_by_id(UserId(4242), "$2b$04$new")
        .await;

    assert_eq!(result, Err(RepositoryError::NotFound("4242".to_string())));

    db.cleanup().await;
}
