//! SeaORM storage backend tests
//!
//! Exercises the SQLite backend end-to-end against a temporary database,
//! including the commit-time unique constraint behavior the service layer
//! depends on.

use serde_json::json;
use tempfile::TempDir;

use shortgic::errors::ShortgicError;
use shortgic::storage::backend::infer_backend_from_url;
use shortgic::storage::{InsertOutcome, LinkStore, NewLink, SeaOrmLinkStore};

async fn temp_store() -> (TempDir, SeaOrmLinkStore) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}/links.db", dir.path().display());
    let store = SeaOrmLinkStore::new(&url, "sqlite").await.unwrap();
    (dir, store)
}

fn new_link(link: &str, target: &str) -> NewLink {
    NewLink {
        link: link.to_string(),
        target: target.to_string(),
        extras: None,
    }
}

#[tokio::test]
async fn test_insert_and_get() {
    let (_dir, store) = temp_store().await;

    let outcome = store
        .insert(NewLink {
            link: "ABC12".to_string(),
            target: "https://example.com/".to_string(),
            extras: Some(json!({"k": "v"})),
        })
        .await
        .unwrap();

    let created = match outcome {
        InsertOutcome::Inserted(link) => link,
        other => panic!("expected Inserted, got {:?}", other),
    };
    assert_eq!(created.link, "ABC12");

    let fetched = store.get("ABC12").await.unwrap().unwrap();
    assert_eq!(fetched.link, "ABC12");
    assert_eq!(fetched.target, "https://example.com/");
    assert_eq!(fetched.extras, Some(json!({"k": "v"})));
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let (_dir, store) = temp_store().await;
    assert!(store.get("ZZZZZ").await.unwrap().is_none());
}

#[tokio::test]
async fn test_exists_link_probe() {
    let (_dir, store) = temp_store().await;

    assert!(!store.exists_link("ABC12").await.unwrap());

    store
        .insert(new_link("ABC12", "https://example.com/"))
        .await
        .unwrap();

    assert!(store.exists_link("ABC12").await.unwrap());
    // Case-sensitive as generated
    assert!(!store.exists_link("abc12").await.unwrap());
}

#[tokio::test]
async fn test_find_by_target_exact_string() {
    let (_dir, store) = temp_store().await;

    store
        .insert(new_link("ABC12", "https://example.com/page"))
        .await
        .unwrap();

    let found = store
        .find_by_target("https://example.com/page")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.link, "ABC12");

    // Exact comparison, no normalization at this layer
    assert!(
        store
            .find_by_target("https://example.com/page/")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_identifier_is_rejected_at_commit() {
    let (_dir, store) = temp_store().await;

    store
        .insert(new_link("ABC12", "https://example.com/one"))
        .await
        .unwrap();

    let outcome = store
        .insert(new_link("ABC12", "https://example.com/two"))
        .await
        .unwrap();

    assert!(matches!(outcome, InsertOutcome::DuplicateLink));

    // The original record is untouched
    let fetched = store.get("ABC12").await.unwrap().unwrap();
    assert_eq!(fetched.target, "https://example.com/one");
}

#[tokio::test]
async fn test_duplicate_target_is_rejected_at_commit() {
    let (_dir, store) = temp_store().await;

    store
        .insert(new_link("ABC12", "https://example.com/same"))
        .await
        .unwrap();

    let outcome = store
        .insert(new_link("XYZ89", "https://example.com/same"))
        .await
        .unwrap();

    assert!(matches!(outcome, InsertOutcome::DuplicateTarget));
    assert!(!store.exists_link("XYZ89").await.unwrap());
}

#[tokio::test]
async fn test_maximum_length_target_is_stored_and_deduplicated() {
    let (_dir, store) = temp_store().await;

    // Longer than any index key limit; uniqueness must still hold.
    let target = format!("https://example.com/{}", "a".repeat(2000));

    store.insert(new_link("ABC12", &target)).await.unwrap();

    let found = store.find_by_target(&target).await.unwrap().unwrap();
    assert_eq!(found.link, "ABC12");
    assert_eq!(found.target, target);

    let outcome = store.insert(new_link("XYZ89", &target)).await.unwrap();
    assert!(matches!(outcome, InsertOutcome::DuplicateTarget));

    // A different long target is not confused with the first
    let other = format!("https://example.com/{}", "b".repeat(2000));
    assert!(store.find_by_target(&other).await.unwrap().is_none());
}

#[tokio::test]
async fn test_remove_is_hard_delete() {
    let (_dir, store) = temp_store().await;

    store
        .insert(new_link("ABC12", "https://example.com/"))
        .await
        .unwrap();

    store.remove("ABC12").await.unwrap();
    assert!(store.get("ABC12").await.unwrap().is_none());
    assert!(!store.exists_link("ABC12").await.unwrap());
}

#[tokio::test]
async fn test_remove_missing_is_not_found() {
    let (_dir, store) = temp_store().await;

    let err = store.remove("ABC12").await.unwrap_err();
    assert!(matches!(err, ShortgicError::NotFound(_)));
}

#[tokio::test]
async fn test_extras_round_trip_verbatim() {
    let (_dir, store) = temp_store().await;

    let extras = json!({
        "nested": {"a": [1, 2, 3]},
        "flag": true,
        "note": "unicode \u{2713}"
    });

    store
        .insert(NewLink {
            link: "ABC12".to_string(),
            target: "https://example.com/".to_string(),
            extras: Some(extras.clone()),
        })
        .await
        .unwrap();

    let fetched = store.get("ABC12").await.unwrap().unwrap();
    assert_eq!(fetched.extras, Some(extras));
}

#[tokio::test]
async fn test_backend_name() {
    let (_dir, store) = temp_store().await;
    assert_eq!(store.backend_name().await, "sqlite");
}

#[test]
fn test_infer_backend_from_url() {
    assert_eq!(infer_backend_from_url("sqlite://links.db").unwrap(), "sqlite");
    assert_eq!(infer_backend_from_url("links.db").unwrap(), "sqlite");
    assert_eq!(infer_backend_from_url(":memory:").unwrap(), "sqlite");
    assert_eq!(
        infer_backend_from_url("mysql://root@localhost/db").unwrap(),
        "mysql"
    );
    assert_eq!(
        infer_backend_from_url("mariadb://root@localhost/db").unwrap(),
        "mysql"
    );
    assert_eq!(
        infer_backend_from_url("postgres://root@localhost/db").unwrap(),
        "postgres"
    );

    let err = infer_backend_from_url("redis://localhost").unwrap_err();
    assert!(matches!(err, ShortgicError::DatabaseConfig(_)));
}
