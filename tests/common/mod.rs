//! Seed-reset fixture shared by the integration suites.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roster::db::JsonFileStore;
use rstest::fixture;
use tempfile::TempDir;

pub const SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/seed-data.json");

/// A live store file that starts as a copy of the seed. The file lives in a
/// temp dir owned by the test case, so no case observes another's writes.
pub struct SeededStore {
    _dir: TempDir,
    path: PathBuf,
    pub store: Arc<JsonFileStore>,
}

impl SeededStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("mock-data.json");
        std::fs::copy(SEED_PATH, &path).expect("failed to copy seed data");

        Self {
            store: Arc::new(JsonFileStore::new(path.clone())),
            path,
            _dir: dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn reset(&self) {
        std::fs::copy(SEED_PATH, &self.path).expect("failed to restore seed data");
    }
}

#[fixture]
pub fn seeded() -> SeededStore {
    SeededStore::new()
}
