pub mod commands;
pub mod models;
pub mod store;
pub mod summary;

pub use commands::{NewPurchase, PurchaseUpdate};
pub use models::PurchaseRecord;
pub use store::PurchaseStore;
pub use summary::{summarize, CategorySummary, SummaryReport};
