//! Category-level spending summaries.
//!
//! The aggregator is stateless: it reads a record slice and builds a
//! fresh report, never touching the store. Reports are derived data,
//! recomputed on demand and never persisted.

use std::collections::HashMap;

use crate::domain::models::PurchaseRecord;

/// Spend statistics for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub total_cost: f64,
    pub record_count: usize,
    pub average_cost: f64,
}

/// Per-category totals plus the overall picture.
///
/// `categories` is an unordered mapping; any display ordering is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub categories: HashMap<String, CategorySummary>,
    pub grand_total: f64,
    pub record_count: usize,
}

/// Single-pass aggregation, grouping by exact category as stored
/// (case-sensitive). Empty input yields an empty mapping and a grand
/// total of zero.
pub fn summarize(records: &[PurchaseRecord]) -> SummaryReport {
    let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
    let mut grand_total = 0.0;

    for record in records {
        let entry = totals.entry(record.category.clone()).or_insert((0.0, 0));
        entry.0 += record.cost;
        entry.1 += 1;
        grand_total += record.cost;
    }

    let categories = totals
        .into_iter()
        .map(|(category, (total_cost, record_count))| {
            // record_count >= 1 here: empty groups are never created.
            let average_cost = total_cost / record_count as f64;
            (
                category,
                CategorySummary {
                    total_cost,
                    record_count,
                    average_cost,
                },
            )
        })
        .collect();

    SummaryReport {
        categories,
        grand_total,
        record_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: &str, cost: f64) -> PurchaseRecord {
        PurchaseRecord {
            id: 1,
            item_name: "item".to_string(),
            category: category.to_string(),
            cost,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = summarize(&[]);
        assert!(report.categories.is_empty());
        assert_eq!(report.grand_total, 0.0);
        assert_eq!(report.record_count, 0);
    }

    #[test]
    fn groups_totals_counts_and_averages() {
        let records = vec![
            record("Food", 10.0),
            record("Food", 20.0),
            record("Books", 5.0),
        ];
        let report = summarize(&records);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.record_count, 3);
        assert_eq!(report.grand_total, 35.0);

        let food = &report.categories["Food"];
        assert_eq!(food.total_cost, 30.0);
        assert_eq!(food.record_count, 2);
        assert_eq!(food.average_cost, 15.0);

        let books = &report.categories["Books"];
        assert_eq!(books.total_cost, 5.0);
        assert_eq!(books.record_count, 1);
        assert_eq!(books.average_cost, 5.0);
    }

    #[test]
    fn categories_group_case_sensitively_as_stored() {
        let records = vec![record("food", 1.0), record("Food", 2.0)];
        let report = summarize(&records);

        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.categories["food"].total_cost, 1.0);
        assert_eq!(report.categories["Food"].total_cost, 2.0);
        assert_eq!(report.grand_total, 3.0);
    }
}
