pub mod purchase;

pub use purchase::PurchaseRecord;
