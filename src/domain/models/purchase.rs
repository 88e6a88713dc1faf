//! Domain model for a single purchase record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// One recorded purchase.
///
/// The shape mirrors the persisted JSON directly: `id` (integer),
/// `item_name` (string), `category` (string), `cost` (number), `date`
/// (`YYYY-MM-DD` string). Ids are assigned by [`PurchaseStore`] and are
/// immutable for the record's lifetime.
///
/// [`PurchaseStore`]: crate::domain::store::PurchaseStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: u64,
    pub item_name: String,
    pub category: String,
    pub cost: f64,
    pub date: NaiveDate,
}

/// Validate and normalize an item name or category label.
///
/// Labels are stored trimmed; an empty or whitespace-only value is
/// rejected.
pub fn validate_label(field: &str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Validate a cost value: must be a finite number and not negative.
pub fn validate_cost(cost: f64) -> Result<f64, StoreError> {
    if !cost.is_finite() {
        return Err(StoreError::validation(format!(
            "cost must be a finite number, got {cost}"
        )));
    }
    if cost < 0.0 {
        return Err(StoreError::validation(format!(
            "cost must not be negative, got {cost}"
        )));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_trimmed() {
        assert_eq!(validate_label("item name", "  Coffee  ").unwrap(), "Coffee");
    }

    #[test]
    fn blank_label_is_rejected() {
        assert!(matches!(
            validate_label("category", "   "),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_label("category", ""),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn zero_cost_is_valid() {
        assert_eq!(validate_cost(0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_and_non_finite_costs_are_rejected() {
        assert!(matches!(validate_cost(-5.0), Err(StoreError::Validation(_))));
        assert!(matches!(
            validate_cost(f64::NAN),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_cost(f64::INFINITY),
            Err(StoreError::Validation(_))
        ));
    }
}
