//! Interactive menu loop and console rendering.
//!
//! This layer owns all prompt text and table formatting; the store and
//! aggregator know nothing about presentation. Every store error is
//! reported to the user and the loop continues, except load/save
//! failures which propagate out of [`run`].

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::domain::store::PurchaseStore;
use crate::domain::summary::summarize;
use crate::domain::{NewPurchase, PurchaseRecord, PurchaseUpdate};
use crate::error::StoreError;
use crate::storage::PurchaseStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Drive the menu loop until the user exits or stdin closes.
///
/// Returns an error only for failures the session cannot continue
/// from (a save that fails on exit); per-operation errors are printed
/// and the menu comes back.
pub fn run<S: PurchaseStorage>(store: &mut PurchaseStore<S>) -> anyhow::Result<()> {
    println!("Loaded {} purchase records.", store.len());

    loop {
        print_menu();
        let Some(choice) = prompt("Enter your choice (0-6): ")? else {
            // stdin closed; behave like a normal exit.
            break;
        };

        match choice.as_str() {
            "1" => add_purchase(store)?,
            "2" => view_all(store),
            "3" => search(store)?,
            "4" => update_purchase(store)?,
            "5" => delete_purchase(store)?,
            "6" => summary_report(store),
            "0" => break,
            _ => println!("Invalid choice, please enter a number between 0 and 6."),
        }
    }

    store.persist()?;
    println!("Saved {} records. Goodbye!", store.len());
    Ok(())
}

fn print_menu() {
    println!();
    println!("=============================================");
    println!("          Purchase Tracker");
    println!("=============================================");
    println!("1. Add a purchase");
    println!("2. View all purchases");
    println!("3. Search by item or category");
    println!("4. Update a purchase");
    println!("5. Delete a purchase");
    println!("6. Category spending summary");
    println!("0. Exit and save");
    println!("=============================================");
}

fn add_purchase<S: PurchaseStorage>(store: &mut PurchaseStore<S>) -> anyhow::Result<()> {
    println!();
    println!("--- Add a purchase ---");

    let Some(item_name) = prompt("Item name: ")? else {
        return Ok(());
    };
    let Some(category) = prompt("Category (e.g. Groceries, Electronics): ")? else {
        return Ok(());
    };
    // With no default a blank line re-prompts, so the inner value is
    // always present here.
    let Some(Some(cost)) = prompt_cost("Cost: ", None)? else {
        return Ok(());
    };
    let Some(date) = prompt_date("Date (YYYY-MM-DD, blank for today): ", None)? else {
        return Ok(());
    };

    match store.add(NewPurchase {
        item_name,
        category,
        cost,
        date,
    }) {
        Ok(record) => println!("Added '{}' with id {}.", record.item_name, record.id),
        Err(e) => report(&e),
    }
    Ok(())
}

fn view_all<S: PurchaseStorage>(store: &PurchaseStore<S>) {
    println!();
    println!("--- All purchases ---");
    let records: Vec<&PurchaseRecord> = store.list_all().iter().collect();
    render_table(&records);
}

fn search<S: PurchaseStorage>(store: &PurchaseStore<S>) -> anyhow::Result<()> {
    println!();
    println!("--- Search purchases ---");
    let Some(keyword) = prompt("Keyword (item name or category): ")? else {
        return Ok(());
    };
    if keyword.is_empty() {
        println!("Search cancelled.");
        return Ok(());
    }

    let matches = store.find(&keyword);
    println!();
    println!("--- Results for '{keyword}' ---");
    render_table(&matches);
    Ok(())
}

fn update_purchase<S: PurchaseStorage>(store: &mut PurchaseStore<S>) -> anyhow::Result<()> {
    println!();
    println!("--- Update a purchase ---");
    if store.is_empty() {
        println!("Nothing to update, the list is empty.");
        return Ok(());
    }
    view_all(store);

    let Some(id) = prompt_id("Id of the record to update (blank to cancel): ")? else {
        return Ok(());
    };
    let Some(current) = store.get(id).cloned() else {
        println!("No record with id {id}.");
        return Ok(());
    };

    println!("Editing '{}' (id {}); leave a field blank to keep its value.", current.item_name, current.id);

    let Some(item_name) = prompt(&format!("Item name [{}]: ", current.item_name))? else {
        return Ok(());
    };
    let Some(category) = prompt(&format!("Category [{}]: ", current.category))? else {
        return Ok(());
    };
    let Some(cost) = prompt_cost(&format!("Cost [{:.2}]: ", current.cost), Some(None))? else {
        return Ok(());
    };
    let Some(date) = prompt_date(
        &format!("Date [{}]: ", current.date.format(DATE_FORMAT)),
        Some(None),
    )?
    else {
        return Ok(());
    };

    let changes = PurchaseUpdate {
        item_name: (!item_name.is_empty()).then_some(item_name),
        category: (!category.is_empty()).then_some(category),
        cost,
        date,
    };
    if changes.is_empty() {
        println!("No changes entered, record {id} left as is.");
        return Ok(());
    }

    match store.update(id, changes) {
        Ok(record) => println!("Updated record {}.", record.id),
        Err(e) => report(&e),
    }
    Ok(())
}

fn delete_purchase<S: PurchaseStorage>(store: &mut PurchaseStore<S>) -> anyhow::Result<()> {
    println!();
    println!("--- Delete a purchase ---");
    if store.is_empty() {
        println!("Nothing to delete, the list is empty.");
        return Ok(());
    }
    view_all(store);

    let Some(id) = prompt_id("Id of the record to delete (blank to cancel): ")? else {
        return Ok(());
    };

    match store.delete(id) {
        Ok(()) => println!("Deleted record {id}."),
        Err(e) => report(&e),
    }
    Ok(())
}

fn summary_report<S: PurchaseStorage>(store: &PurchaseStore<S>) {
    println!();
    println!("--- Category spending summary ---");
    if store.is_empty() {
        println!("No purchases recorded yet.");
        return;
    }

    let report = summarize(store.list_all());

    // The report itself is unordered; sort names for stable output.
    let mut names: Vec<&String> = report.categories.keys().collect();
    names.sort();

    println!("{:-<58}", "");
    println!("{:<20} | {:>7} | {:>11} | {:>11}", "Category", "Count", "Total", "Avg");
    println!("{:-<58}", "");
    for name in names {
        let summary = &report.categories[name];
        println!(
            "{:<20} | {:>7} | {:>11} | {:>11}",
            truncate(name, 20),
            summary.record_count,
            format!("${:.2}", summary.total_cost),
            format!("${:.2}", summary.average_cost),
        );
    }
    println!("{:-<58}", "");
    println!(
        "{:<20} | {:>7} | {:>11} |",
        "GRAND TOTAL",
        report.record_count,
        format!("${:.2}", report.grand_total),
    );
    println!("{:-<58}", "");
}

fn render_table(records: &[&PurchaseRecord]) {
    if records.is_empty() {
        println!("No purchases found.");
        return;
    }

    println!("{:-<72}", "");
    println!(
        "{:<4} | {:<25} | {:<15} | {:>10} | {:<10}",
        "Id", "Item", "Category", "Cost", "Date"
    );
    println!("{:-<72}", "");
    for record in records {
        println!(
            "{:<4} | {:<25} | {:<15} | {:>10} | {:<10}",
            record.id,
            truncate(&record.item_name, 25),
            truncate(&record.category, 15),
            format!("${:.2}", record.cost),
            record.date.format(DATE_FORMAT),
        );
    }
    println!("{:-<72}", "");
    println!("{} record(s) shown.", records.len());
}

fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn report(error: &StoreError) {
    println!("Error: {error}");
}

/// Print `label` and read one trimmed line. `None` means stdin closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a non-negative cost, re-asking on unparseable input.
///
/// With `default: None` a value is required; with `default: Some(d)` a
/// blank line answers `d` (used by the update flow, where blank keeps
/// the current value). The outer `None` means stdin closed.
fn prompt_cost(label: &str, default: Option<Option<f64>>) -> io::Result<Option<Option<f64>>> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        if input.is_empty() {
            match default {
                Some(d) => return Ok(Some(d)),
                None => {
                    println!("A cost is required.");
                    continue;
                }
            }
        }
        match input.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(Some(Some(value))),
            Ok(_) => println!("Cost must be a non-negative number."),
            Err(_) => println!("Please enter a numeric value, e.g. 19.99."),
        }
    }
}

/// Prompt for a `YYYY-MM-DD` date with the same blank-line semantics as
/// [`prompt_cost`].
fn prompt_date(
    label: &str,
    default: Option<Option<NaiveDate>>,
) -> io::Result<Option<Option<NaiveDate>>> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        if input.is_empty() {
            // In the add flow a blank date means "today", resolved by
            // the store; in the update flow it keeps the current value.
            return Ok(Some(default.unwrap_or(None)));
        }
        match NaiveDate::parse_from_str(&input, DATE_FORMAT) {
            Ok(date) => return Ok(Some(Some(date))),
            Err(_) => println!("Please enter a date as YYYY-MM-DD."),
        }
    }
}

/// Prompt for a record id; blank cancels the operation.
fn prompt_id(label: &str) -> io::Result<Option<u64>> {
    loop {
        let Some(input) = prompt(label)? else {
            return Ok(None);
        };
        if input.is_empty() {
            println!("Cancelled.");
            return Ok(None);
        }
        match input.parse::<u64>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => println!("Please enter a numeric id."),
        }
    }
}
