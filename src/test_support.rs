use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::catalog::Catalog;

/// Scratch directory holding one SQLite file and one seed file per test.
pub struct TestDir(TempDir);

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    pub fn new() -> Self {
        Self(TempDir::new().unwrap())
    }

    pub fn path(&self) -> &Path {
        self.0.path()
    }

    pub fn database_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path().join("movies.db").display())
    }

    pub fn write_seed(&self, json: &str) -> PathBuf {
        let path = self.path().join("movies_owned.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    pub async fn catalog(&self, json: &str) -> Catalog {
        let seed = self.write_seed(json);
        Catalog::initialize(&self.database_url(), &seed).await.unwrap()
    }
}
