pub mod json;
pub mod traits;

pub use json::JsonPurchaseRepository;
pub use traits::PurchaseStorage;
