//! # Purchase Tracker
//!
//! A single-user command-line purchase tracker. Records live in memory
//! in insertion order, persist to one local JSON file, and can be
//! summarized into per-category spending totals.
//!
//! The crate splits into a domain layer (the [`PurchaseStore`] owning
//! the record sequence, plus the stateless summary aggregator) and a
//! storage layer (the JSON file repository behind the
//! [`PurchaseStorage`] seam).
//!
//! [`PurchaseStore`]: domain::store::PurchaseStore
//! [`PurchaseStorage`]: storage::traits::PurchaseStorage

pub mod cli;
pub mod domain;
pub mod error;
pub mod storage;

pub use domain::{summarize, NewPurchase, PurchaseRecord, PurchaseStore, PurchaseUpdate, SummaryReport};
pub use error::StoreError;
pub use storage::JsonPurchaseRepository;
