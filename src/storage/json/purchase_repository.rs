//! JSON file repository for purchase records.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::models::PurchaseRecord;
use crate::error::StoreError;
use crate::storage::traits::PurchaseStorage;

/// File-backed repository persisting all records as one JSON array.
#[derive(Debug, Clone)]
pub struct JsonPurchaseRepository {
    path: PathBuf,
}

impl JsonPurchaseRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file used for atomic saves. Kept next to the target
    /// so the final rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl PurchaseStorage for JsonPurchaseRepository {
    fn load_all(&self) -> Result<Vec<PurchaseRecord>, StoreError> {
        if !self.path.exists() {
            info!("data file {} not found, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        // A present-but-blank file counts as a fresh start, not corruption.
        if contents.trim().is_empty() {
            info!("data file {} is empty, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let records: Vec<PurchaseRecord> =
            serde_json::from_str(&contents).map_err(|source| StoreError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "loaded {} purchase records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save_all(&self, records: &[PurchaseRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|source| StoreError::Io(source.into()))?;

        // Write to a temp file and rename it over the target, so an
        // interrupted save never truncates the existing file.
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;

        debug!(
            "saved {} purchase records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    fn record(id: u64, item: &str, category: &str, cost: f64) -> PurchaseRecord {
        PurchaseRecord {
            id,
            item_name: item.to_string(),
            category: category.to_string(),
            cost,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();
        assert_eq!(repo.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn blank_file_loads_as_empty() {
        let env = TestEnvironment::new().unwrap();
        std::fs::write(env.data_path(), "  \n").unwrap();
        let repo = env.repository();
        assert_eq!(repo.load_all().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();

        let records = vec![
            record(1, "Coffee beans", "Groceries", 14.50),
            record(2, "USB cable", "Electronics", 7.99),
            record(4, "Paperback", "Books", 12.00),
        ];
        repo.save_all(&records).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn corrupt_file_is_reported_not_silently_emptied() {
        let env = TestEnvironment::new().unwrap();
        std::fs::write(env.data_path(), "{ this is not a record list").unwrap();

        let repo = env.repository();
        match repo.load_all() {
            Err(StoreError::CorruptData { path, .. }) => {
                assert_eq!(path, env.data_path());
            }
            other => panic!("expected CorruptData, got {other:?}"),
        }
    }

    #[test]
    fn wrong_json_shape_is_corruption() {
        let env = TestEnvironment::new().unwrap();
        // Valid JSON, but an object instead of the expected array.
        std::fs::write(env.data_path(), r#"{"id": 1}"#).unwrap();

        let repo = env.repository();
        assert!(matches!(
            repo.load_all(),
            Err(StoreError::CorruptData { .. })
        ));
    }

    #[test]
    fn save_replaces_file_without_leaving_temp_behind() {
        let env = TestEnvironment::new().unwrap();
        let repo = env.repository();

        repo.save_all(&[record(1, "Milk", "Groceries", 2.50)]).unwrap();
        repo.save_all(&[record(1, "Milk", "Groceries", 2.50), record(2, "Bread", "Groceries", 3.10)])
            .unwrap();

        assert_eq!(repo.load_all().unwrap().len(), 2);
        assert!(!repo.temp_path().exists());
    }
}
