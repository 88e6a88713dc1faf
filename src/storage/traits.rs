//! Storage abstraction for the purchase store.
//!
//! The store talks to its persistence backend through this trait so the
//! domain layer stays file-format agnostic and tests can swap in a
//! throwaway backend.

use crate::domain::models::PurchaseRecord;
use crate::error::StoreError;

/// Interface for loading and persisting the full record sequence.
///
/// Both operations work on the whole sequence at once; there is no
/// partial update at this layer. Order is preserved in both directions.
pub trait PurchaseStorage {
    /// Read every persisted record, in stored order.
    ///
    /// A backend with nothing persisted yet returns an empty vec, not an
    /// error.
    fn load_all(&self) -> Result<Vec<PurchaseRecord>, StoreError>;

    /// Replace the persisted sequence with `records`.
    ///
    /// A failed save must leave the previously persisted data intact.
    fn save_all(&self, records: &[PurchaseRecord]) -> Result<(), StoreError>;
}
