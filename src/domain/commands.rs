//! Command structs carried from the CLI layer into the store.

use chrono::NaiveDate;

/// Input for creating a purchase record. The store assigns the id;
/// a missing `date` defaults to today's local calendar date.
#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub item_name: String,
    pub category: String,
    pub cost: f64,
    pub date: Option<NaiveDate>,
}

/// Field changes for an existing record. `None` keeps the current
/// value; the id itself can never be changed.
#[derive(Debug, Clone, Default)]
pub struct PurchaseUpdate {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub cost: Option<f64>,
    pub date: Option<NaiveDate>,
}

impl PurchaseUpdate {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none()
            && self.category.is_none()
            && self.cost.is_none()
            && self.date.is_none()
    }
}
