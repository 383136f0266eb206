mod common;

use sqlx::SqlitePool;
use std::sync::Arc;

use pawliday::domain::entities::{NewOwner, OwnerPatch};
use pawliday::domain::repositories::OwnerRepository;
use pawliday::error::AppError;
use pawliday::infrastructure::persistence::SqliteOwnerRepository;

fn make_repo(pool: SqlitePool) -> SqliteOwnerRepository {
    SqliteOwnerRepository::new(Arc::new(pool))
}

fn new_owner(sitter_id: i64, email: &str, phone: &str) -> NewOwner {
    NewOwner {
        sitter_id,
        first_name: "Max".to_string(),
        last_name: "Mustermann".to_string(),
        email: email.to_string(),
        phone_number: phone.to_string(),
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: SqlitePool) {
    let sitter_id = common::create_test_sitter(&pool, "ada@example.com").await;
    let repo = make_repo(pool);

    let created = repo
        .create(new_owner(sitter_id, "max@example.com", "+4915123456789"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.sitter_id, sitter_id);

    let found = repo.find_by_id(created.id, sitter_id).await.unwrap().unwrap();
    assert_eq!(found.email, "max@example.com");
    assert_eq!(found.phone_number, "+4915123456789");
}

#[sqlx::test]
async fn test_find_is_scoped_to_sitter(pool: SqlitePool) {
    let sitter_a = common::create_test_sitter(&pool, "a@example.com").await;
    let sitter_b = common::create_test_sitter(&pool, "b@example.com").await;
    let owner_id = common::create_test_owner(&pool, sitter_a, "max@example.com", "+4915111111").await;

    let repo = make_repo(pool);

    assert!(repo.find_by_id(owner_id, sitter_a).await.unwrap().is_some());
    // The same id is invisible to another sitter.
    assert!(repo.find_by_id(owner_id, sitter_b).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_for_sitter_only_lists_own_owners(pool: SqlitePool) {
    let sitter_a = common::create_test_sitter(&pool, "a@example.com").await;
    let sitter_b = common::create_test_sitter(&pool, "b@example.com").await;
    common::create_test_owner(&pool, sitter_a, "one@example.com", "+4915111111").await;
    common::create_test_owner(&pool, sitter_a, "two@example.com", "+4915122222").await;
    common::create_test_owner(&pool, sitter_b, "other@example.com", "+4915133333").await;

    let repo = make_repo(pool);

    let owners = repo.list_for_sitter(sitter_a).await.unwrap();
    assert_eq!(owners.len(), 2);
    assert!(owners.iter().all(|o| o.sitter_id == sitter_a));
}

#[sqlx::test]
async fn test_duplicate_email_and_phone_are_validation_errors(pool: SqlitePool) {
    let sitter_id = common::create_test_sitter(&pool, "ada@example.com").await;
    let repo = make_repo(pool);

    repo.create(new_owner(sitter_id, "max@example.com", "+4915111111"))
        .await
        .unwrap();

    let dup_email = repo
        .create(new_owner(sitter_id, "max@example.com", "+4915122222"))
        .await
        .unwrap_err();
    assert!(matches!(dup_email, AppError::Validation { .. }));

    let dup_phone = repo
        .create(new_owner(sitter_id, "other@example.com", "+4915111111"))
        .await
        .unwrap_err();
    assert!(matches!(dup_phone, AppError::Validation { .. }));
}

#[sqlx::test]
async fn test_update_merges_patch(pool: SqlitePool) {
    let sitter_id = common::create_test_sitter(&pool, "ada@example.com").await;
    let owner_id = common::create_test_owner(&pool, sitter_id, "max@example.com", "+4915111111").await;

    let repo = make_repo(pool);

    let updated = repo
        .update(
            owner_id,
            sitter_id,
            OwnerPatch {
                first_name: Some("Moritz".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Moritz");
    assert_eq!(updated.last_name, "Mustermann");
    assert_eq!(updated.email, "max@example.com");
}

#[sqlx::test]
async fn test_update_foreign_owner_is_not_found(pool: SqlitePool) {
    let sitter_a = common::create_test_sitter(&pool, "a@example.com").await;
    let sitter_b = common::create_test_sitter(&pool, "b@example.com").await;
    let owner_id = common::create_test_owner(&pool, sitter_a, "max@example.com", "+4915111111").await;

    let repo = make_repo(pool);

    let err = repo
        .update(owner_id, sitter_b, OwnerPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_cascades_to_dogs(pool: SqlitePool) {
    let sitter_id = common::create_test_sitter(&pool, "ada@example.com").await;
    let owner_id = common::create_test_owner(&pool, sitter_id, "max@example.com", "+4915111111").await;
    common::create_test_dog(&pool, owner_id, 1001, "Rex").await;
    common::create_test_dog(&pool, owner_id, 1002, "Bella").await;

    let repo = make_repo(pool.clone());
    assert!(repo.delete(owner_id, sitter_id).await.unwrap());

    assert_eq!(common::count_rows(&pool, "owners").await, 0);
    assert_eq!(common::count_rows(&pool, "dogs").await, 0);
}

#[sqlx::test]
async fn test_delete_foreign_owner_returns_false(pool: SqlitePool) {
    let sitter_a = common::create_test_sitter(&pool, "a@example.com").await;
    let sitter_b = common::create_test_sitter(&pool, "b@example.com").await;
    let owner_id = common::create_test_owner(&pool, sitter_a, "max@example.com", "+4915111111").await;
    common::create_test_dog(&pool, owner_id, 1001, "Rex").await;

    let repo = make_repo(pool.clone());
    assert!(!repo.delete(owner_id, sitter_b).await.unwrap());

    // Nothing of the foreign sitter's data is touched.
    assert_eq!(common::count_rows(&pool, "owners").await, 1);
    assert_eq!(common::count_rows(&pool, "dogs").await, 1);
}
