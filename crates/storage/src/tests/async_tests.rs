use std::sync::Arc;

use super::{create_test_storage, prepared};
use crate::{StorageBackend, UniversityStore};
use unidir_core::{UniversityFilter, UniversityPatch, prepare_for_update};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_backend_round_trip_through_trait() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    assert_eq!(backend.kind(), "sqlite");

    let created = backend.create(&prepared("Boston University")).await.unwrap();
    let update = prepare_for_update(UniversityPatch::default().name("BU Main Campus"));
    let updated =
        backend.update_one(&UniversityFilter::Id(created.id.clone()), &update).await.unwrap();
    assert_eq!(updated.slug, "bu-main-campus");

    let old_slug = backend.get(&UniversityFilter::Slug("boston-university".to_owned())).await;
    assert!(old_slug.unwrap().is_none());
    assert_eq!(backend.count().await.unwrap(), 1);
    assert_eq!(backend.list(10).await.unwrap(), vec![updated]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_colliding_creates_exactly_one_wins() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = Arc::new(StorageBackend::Sqlite(storage));

    let first = {
        let backend = Arc::clone(&backend);
        tokio::spawn(async move { backend.create(&prepared("A B")).await })
    };
    let second = {
        let backend = Arc::clone(&backend);
        tokio::spawn(async move { backend.create(&prepared("a-b")).await })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates =
        results.iter().filter(|r| r.as_ref().is_err_and(|e| e.is_duplicate())).count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 1);
    assert_eq!(backend.count().await.unwrap(), 1);
}
