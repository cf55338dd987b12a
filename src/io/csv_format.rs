//! CSV format handling for expense input and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Balance, settlement and expense output serialization
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Input format
//!
//! ```text
//! date,description,category,payers,participants
//! 2024-05-01,Dinner,food,Ana:60;Ben:30,Ana;Ben;Cy
//! ```
//!
//! `payers` holds `name:amount` pairs separated by `;`. The amount follows the
//! last `:`, so names may themselves contain colons. `participants` holds
//! names separated by `;`.

use super::report::format_currency;
use crate::core::merge_payers;
use crate::core::money::round_cents;
use crate::types::{
    BalanceSheet, ExpenseCategory, ExpenseRecord, PayerContribution, Settlement, SplitError,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Separator between payer pairs and between participant names
const LIST_SEPARATOR: char = ';';

/// Separator between a payer name and the amount paid
const AMOUNT_SEPARATOR: char = ':';

/// CSV record structure for deserialization
///
/// This is a direct mapping from CSV columns. Every field is kept as raw
/// text; parsing happens in [`convert_csv_record`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// `name:amount` pairs separated by `;`
    pub payers: String,

    /// Participant names separated by `;`
    pub participants: String,
}

/// Convert a CSV record to an `ExpenseRecord`
///
/// Names are trimmed, blank list entries are dropped and repeated payers are
/// merged. Blank optional columns become `None`, as does an unknown category.
///
/// # Arguments
///
/// * `csv_record` - The raw CSV record
/// * `line` - Line number of the record, used in error messages
///
/// # Errors
///
/// - `ParseError` if a payer entry has no `:` separator
/// - `InvalidAmount` if a payer amount is not a decimal number
///
/// Roster membership and positive amounts are not checked here; see
/// [`crate::core::validate_expense`].
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<ExpenseRecord, SplitError> {
    let payers = parse_payers(&csv_record.payers, line)?;
    let participants = parse_names(&csv_record.participants);

    Ok(ExpenseRecord {
        payers: merge_payers(payers),
        participants,
        description: non_blank(csv_record.description),
        category: csv_record
            .category
            .as_deref()
            .and_then(ExpenseCategory::parse),
        date: non_blank(csv_record.date),
    })
}

fn parse_payers(field: &str, line: u64) -> Result<Vec<PayerContribution>, SplitError> {
    let mut payers = Vec::new();

    for entry in field.split(LIST_SEPARATOR) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let Some((name, amount)) = entry.rsplit_once(AMOUNT_SEPARATOR) else {
            return Err(SplitError::parse_error(
                Some(line),
                format!("Payer entry '{}' must be in the form name:amount", entry),
            ));
        };

        let amount = amount.trim();
        let amount = Decimal::from_str(amount)
            .map_err(|_| SplitError::invalid_amount(amount, Some(line)))?;

        payers.push(PayerContribution::new(name.trim(), amount));
    }

    Ok(payers)
}

fn parse_names(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_error(error: csv::Error) -> SplitError {
    SplitError::IoError {
        message: format!("Failed to write CSV record: {}", error),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Format an amount with exactly two decimals
///
/// Rounds half away from zero and never prints a negative zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    if rounded.is_zero() {
        return format!("{:.2}", Decimal::ZERO);
    }
    format!("{:.2}", rounded)
}

/// Write balances to CSV format
///
/// Writes one row per participant in sheet (roster) order with the columns
/// `participant,paid,share,balance`, amounts rounded to cents.
///
/// # Errors
///
/// Returns `SplitError::IoError` if writing fails
pub fn write_balances_csv(
    balances: &BalanceSheet,
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["participant", "paid", "share", "balance"])
        .map_err(write_error)?;

    for balance in balances {
        writer
            .write_record(&[
                balance.participant.clone(),
                format_amount(balance.total_paid),
                format_amount(balance.total_owed),
                format_amount(balance.net_balance),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write settlements to CSV format
///
/// Columns are `from,to,amount`, in planning order.
///
/// # Errors
///
/// Returns `SplitError::IoError` if writing fails
pub fn write_settlements_csv(
    settlements: &[Settlement],
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record(["from", "to", "amount"])
        .map_err(write_error)?;

    for settlement in settlements {
        writer
            .write_record(&[
                settlement.from.clone(),
                settlement.to.clone(),
                format_amount(settlement.amount),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write expenses in the export format
///
/// Columns are `Date,Description,Category,Payers,Amount,Participants`.
/// Payers are written as `Ana: ¤60.00; Ben: ¤30.00` and participants as
/// `Ana, Ben, Cy`.
///
/// # Errors
///
/// Returns `SplitError::IoError` if writing fails
pub fn write_expenses_csv(
    expenses: &[ExpenseRecord],
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    let mut writer = csv::Writer::from_writer(output);

    writer
        .write_record([
            "Date",
            "Description",
            "Category",
            "Payers",
            "Amount",
            "Participants",
        ])
        .map_err(write_error)?;

    for expense in expenses {
        let payers = expense
            .payers
            .iter()
            .map(|p| format!("{}: {}", p.name, format_currency(p.amount, false)))
            .collect::<Vec<_>>()
            .join("; ");

        writer
            .write_record(&[
                expense.date.clone().unwrap_or_default(),
                expense.description.clone().unwrap_or_default(),
                expense
                    .category
                    .map(|c| c.as_str().to_string())
                    .unwrap_or_default(),
                payers,
                expense.total_amount().map(format_amount).unwrap_or_default(),
                expense.participants.join(", "),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}
