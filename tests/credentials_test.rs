//! Integration tests for operator authentication and default-account seeding.

mod common;

use common::TestStores;
use sea_orm::{EntityTrait, PaginatorTrait};
use stockroom_core::entities::operator_account;

async fn operator_count(t: &TestStores) -> u64 {
    operator_account::Entity::find()
        .count(t.stores.db())
        .await
        .expect("count failed")
}

#[tokio::test]
async fn default_operators_authenticate_after_initialization() {
    let t = TestStores::new().await;

    assert!(t
        .stores
        .credentials
        .authenticate("operator1", "password123")
        .await
        .expect("authenticate failed"));
    assert!(t
        .stores
        .credentials
        .authenticate("operator2", "password123")
        .await
        .expect("authenticate failed"));
}

#[tokio::test]
async fn wrong_password_is_denied() {
    let t = TestStores::new().await;

    assert!(!t
        .stores
        .credentials
        .authenticate("operator1", "wrong")
        .await
        .expect("authenticate failed"));
}

#[tokio::test]
async fn unknown_user_is_denied_without_error() {
    let t = TestStores::new().await;

    assert!(!t
        .stores
        .credentials
        .authenticate("nobody", "")
        .await
        .expect("unknown user must be a clean denial, not an error"));
}

#[tokio::test]
async fn username_match_is_case_sensitive() {
    let t = TestStores::new().await;

    assert!(!t
        .stores
        .credentials
        .authenticate("Operator1", "password123")
        .await
        .expect("authenticate failed"));
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let t = TestStores::new().await;
    assert_eq!(operator_count(&t).await, 2);

    t.stores
        .credentials
        .seed_default_operators()
        .await
        .expect("re-seeding failed");
    assert_eq!(operator_count(&t).await, 2);
}

#[tokio::test]
async fn stored_credential_is_a_hash_not_the_plaintext() {
    let t = TestStores::new().await;

    let accounts = operator_account::Entity::find()
        .all(t.stores.db())
        .await
        .expect("query failed");
    assert_eq!(accounts.len(), 2);

    for account in accounts {
        assert_ne!(account.password_hash, "password123");
        assert!(account.password_hash.starts_with("$argon2"));
    }
}
