//! Test infrastructure for filesystem-backed tests.
//!
//! Provides RAII-based cleanup so test data is removed even when a test
//! panics.

use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use super::JsonPurchaseRepository;

/// A temporary directory holding a data file path, cleaned up on drop.
pub struct TestEnvironment {
    data_path: PathBuf,
    _temp_dir: TempDir, // keep alive until the environment drops
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let data_path = temp_dir.path().join("purchases.json");
        Ok(Self {
            data_path,
            _temp_dir: temp_dir,
        })
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_path.clone()
    }

    pub fn repository(&self) -> JsonPurchaseRepository {
        JsonPurchaseRepository::new(&self.data_path)
    }
}
