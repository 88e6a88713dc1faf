//! The purchase store: owner of the in-memory record sequence.
//!
//! The store loads the full sequence once at construction, keeps it in
//! insertion order, and persists through its [`PurchaseStorage`] backend
//! after every successful mutation (and again on clean exit, via
//! [`persist`]). A crash therefore loses at most the input in flight,
//! never an applied mutation.
//!
//! [`persist`]: PurchaseStore::persist

use chrono::Local;
use tracing::info;

use crate::domain::commands::{NewPurchase, PurchaseUpdate};
use crate::domain::models::purchase::{validate_cost, validate_label, PurchaseRecord};
use crate::error::StoreError;
use crate::storage::PurchaseStorage;

pub struct PurchaseStore<S: PurchaseStorage> {
    storage: S,
    records: Vec<PurchaseRecord>,
    /// Next id to hand out. Seeded above the max persisted id, so ids
    /// are never reused within a process lifetime, even after deletes.
    next_id: u64,
}

impl<S: PurchaseStorage> PurchaseStore<S> {
    /// Load the persisted sequence and seed the id counter from it.
    ///
    /// A corrupt data file surfaces as [`StoreError::CorruptData`]; the
    /// caller decides whether to abort (the CLI does, to avoid silently
    /// discarding data).
    pub fn load(storage: S) -> Result<Self, StoreError> {
        let records = storage.load_all()?;
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Ok(Self {
            storage,
            records,
            next_id,
        })
    }

    /// Validate and append a new record, assigning the next unused id.
    pub fn add(&mut self, new: NewPurchase) -> Result<PurchaseRecord, StoreError> {
        let item_name = validate_label("item name", &new.item_name)?;
        let category = validate_label("category", &new.category)?;
        let cost = validate_cost(new.cost)?;
        let date = new.date.unwrap_or_else(|| Local::now().date_naive());

        let record = PurchaseRecord {
            id: self.next_id,
            item_name,
            category,
            cost,
            date,
        };
        self.next_id += 1;
        self.records.push(record.clone());
        self.persist()?;

        info!("added purchase {} ({})", record.id, record.item_name);
        Ok(record)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[PurchaseRecord] {
        &self.records
    }

    /// Case-insensitive substring search over item name and category,
    /// preserving insertion order. No match is an empty result, not an
    /// error.
    pub fn find(&self, keyword: &str) -> Vec<&PurchaseRecord> {
        let needle = keyword.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.item_name.to_lowercase().contains(&needle)
                    || r.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Look up a single record by id.
    pub fn get(&self, id: u64) -> Option<&PurchaseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Apply field changes to an existing record.
    ///
    /// Every changed field is validated with the same rules as [`add`]
    /// before anything is mutated, so a rejected update leaves the
    /// record exactly as it was. The id itself cannot change.
    ///
    /// [`add`]: PurchaseStore::add
    pub fn update(
        &mut self,
        id: u64,
        changes: PurchaseUpdate,
    ) -> Result<PurchaseRecord, StoreError> {
        // Validate everything up front; only then touch the record.
        let item_name = changes
            .item_name
            .map(|v| validate_label("item name", &v))
            .transpose()?;
        let category = changes
            .category
            .map(|v| validate_label("category", &v))
            .transpose()?;
        let cost = changes.cost.map(validate_cost).transpose()?;

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(item_name) = item_name {
            record.item_name = item_name;
        }
        if let Some(category) = category {
            record.category = category;
        }
        if let Some(cost) = cost {
            record.cost = cost;
        }
        if let Some(date) = changes.date {
            record.date = date;
        }

        let updated = record.clone();
        self.persist()?;

        info!("updated purchase {}", updated.id);
        Ok(updated)
    }

    /// Remove a record. Surviving records keep their ids; the counter
    /// never moves backwards, so the deleted id is not handed out again.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(pos);
        self.persist()?;

        info!("deleted purchase {}", id);
        Ok(())
    }

    /// Rewrite the full sequence through the storage backend.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.storage.save_all(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
