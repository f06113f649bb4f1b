//! Test utilities and module declarations for storage tests.

use crate::Storage;
use tempfile::TempDir;
use unidir_core::{NewUniversity, PreparedUniversity, prepare_for_create};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn prepared(name: &str) -> PreparedUniversity {
    prepare_for_create(
        NewUniversity::new(name, format!("About {name}"), "1 College Ave")
            .contact("website", "https://example.edu"),
    )
    .unwrap()
}

mod async_tests;
