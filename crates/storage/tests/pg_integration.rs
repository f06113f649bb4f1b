//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p unidir-storage --features postgres -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use unidir_core::{NewUniversity, UniversityFilter, UniversityPatch, prepare_for_create, prepare_for_update};
use unidir_storage::{PgStorage, UniversityStore};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

/// Names are randomized so repeated runs against one database don't collide.
fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_create_get_update() {
    let storage = create_pg_storage().await;
    let name = unique_name("Pg University");
    let prepared = prepare_for_create(
        NewUniversity::new(name.as_str(), "desc", "addr").contact("website", "https://pg.edu"),
    )
    .unwrap();

    let created = storage.create(&prepared).await.unwrap();
    assert_eq!(created.slug, prepared.slug);

    let fetched = storage.get(&UniversityFilter::Slug(created.slug.clone())).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    let renamed = unique_name("Pg Renamed");
    let update = prepare_for_update(UniversityPatch::default().name(renamed.as_str()).fees(1.5));
    let updated =
        storage.update_one(&UniversityFilter::Id(created.id.clone()), &update).await.unwrap();
    assert_eq!(updated.name, renamed);
    assert_eq!(updated.slug, renamed.replace(' ', "-").to_lowercase());
    assert_eq!(updated.fees, Some(1.5));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_slug_collision_is_duplicate() {
    let storage = create_pg_storage().await;
    let suffix = Uuid::new_v4().simple().to_string();
    let spaced = format!("A B {suffix}");
    let hyphenated = format!("a-b-{suffix}");

    let first = prepare_for_create(NewUniversity::new(spaced, "d", "a")).unwrap();
    let second = prepare_for_create(NewUniversity::new(hyphenated, "d", "a")).unwrap();
    storage.create(&first).await.unwrap();

    let err = storage.create(&second).await.unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(err.duplicate_field(), Some("slug"));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn pg_update_missing_is_not_found() {
    let storage = create_pg_storage().await;
    let update = prepare_for_update(UniversityPatch::default().fees(2.0));
    let err = storage
        .update_one(&UniversityFilter::Id(Uuid::new_v4().to_string()), &update)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
