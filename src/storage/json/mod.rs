//! # JSON Storage Module
//!
//! File-based persistence for purchase records: the full record sequence
//! lives in a single JSON array, rewritten atomically on every save.
//!
//! ## File Format
//!
//! ```json
//! [
//!   { "id": 1, "item_name": "Coffee beans", "category": "Groceries",
//!     "cost": 14.5, "date": "2024-03-15" }
//! ]
//! ```
//!
//! There is no schema version field; any structural deviation is treated
//! as corruption and surfaced to the caller.

pub mod purchase_repository;

#[cfg(test)]
pub mod test_utils;

pub use purchase_repository::JsonPurchaseRepository;
