//! Behavioural tests for [`AccountService`] over the in-memory store.

use std::sync::Arc;

use rstest::rstest;

use super::accounts::AccountService;
use super::error::AccountError;
use super::ports::InMemoryUserStore;
use super::user::User;

fn ada() -> User {
    User::new("Ada Lovelace", "9876543210", "ada", "secret1")
}

fn service_with(records: Vec<User>) -> AccountService {
    AccountService::new(Arc::new(InMemoryUserStore::with_records(records)))
}

#[tokio::test]
async fn created_account_appears_in_listing() {
    let service = service_with(Vec::new());
    let created = service.create_account(ada()).await.expect("create account");
    assert_eq!(created, ada());

    let all = service.list_all().await.expect("list records");
    assert_eq!(all, vec![ada()]);
}

#[tokio::test]
async fn duplicate_username_rejected_and_set_unchanged() {
    let service = service_with(vec![ada()]);
    let second = User::new("Other Ada", "9123456789", "ada", "different");

    let err = service.create_account(second).await.expect_err("duplicate");
    assert_eq!(err, AccountError::DuplicateUsername);
    assert_eq!(service.list_all().await.expect("list records"), vec![ada()]);
}

#[tokio::test]
async fn duplicate_mobile_number_rejected() {
    let service = service_with(vec![ada()]);
    let second = User::new("Grace Hopper", "9876543210", "grace", "different");

    let err = service.create_account(second).await.expect_err("duplicate");
    assert_eq!(err, AccountError::DuplicateMobileNumber);
}

#[tokio::test]
async fn username_collision_wins_over_mobile_collision() {
    let service = service_with(vec![ada()]);
    let both = User::new("Other Ada", "9876543210", "ada", "different");

    let err = service.create_account(both).await.expect_err("duplicate");
    assert_eq!(err, AccountError::DuplicateUsername);
}

#[tokio::test]
async fn find_by_username_returns_file_order_first_match() {
    let service = service_with(vec![ada(), User::new("Grace", "6123456789", "grace", "pw12345")]);

    let found = service
        .find_by_username("grace")
        .await
        .expect("read records")
        .expect("record present");
    assert_eq!(found.name, "Grace");

    assert!(
        service
            .find_by_username("nobody")
            .await
            .expect("read records")
            .is_none()
    );
}

#[tokio::test]
async fn find_by_mobile_number_matches_exactly() {
    let service = service_with(vec![ada()]);

    let found = service
        .find_by_mobile_number("9876543210")
        .await
        .expect("read records");
    assert_eq!(found, Some(ada()));

    assert!(
        service
            .find_by_mobile_number("9876543211")
            .await
            .expect("read records")
            .is_none()
    );
}

#[rstest]
#[case("ada", "secret1", true)]
#[case("ada", "wrong", false)]
#[case("nobody", "secret1", false)]
#[tokio::test]
async fn verify_credentials_requires_exact_match(
    #[case] username: &str,
    #[case] password: &str,
    #[case] expected: bool,
) {
    let service = service_with(vec![ada()]);
    let verified = service
        .verify_credentials(username, password)
        .await
        .expect("read records");
    assert_eq!(verified.is_some(), expected);
}
