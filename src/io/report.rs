//! Report rendering
//!
//! Dispatches a [`ReportKind`] to the matching writer. CSV reports live in
//! `csv_format`; the plain-text summary is rendered here.

use super::csv_format::{
    format_amount, write_balances_csv, write_expenses_csv, write_settlements_csv,
};
use crate::cli::ReportKind;
use crate::core::money::round_cents;
use crate::types::{BalanceSheet, ExpenseRecord, Settlement, SplitError};
use rust_decimal::Decimal;
use std::io::Write;

/// Generic currency symbol used by the summary and the expense export
pub const CURRENCY_SYMBOL: char = '¤';

/// Format an amount as currency, e.g. `¤12.50` or `-¤3.00`
///
/// With `signed`, non-negative amounts get a leading `+`.
pub fn format_currency(amount: Decimal, signed: bool) -> String {
    let rounded = round_cents(amount);
    let digits = format_amount(rounded.abs());

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", CURRENCY_SYMBOL, digits)
    } else if signed {
        format!("+{}{}", CURRENCY_SYMBOL, digits)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, digits)
    }
}

/// Write a human-readable summary of balances and settlements
///
/// # Errors
///
/// Returns `SplitError::IoError` if writing fails
pub fn write_summary(
    balances: &BalanceSheet,
    settlements: &[Settlement],
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    writeln!(output, "Balances")?;
    for balance in balances {
        let net = round_cents(balance.net_balance);
        let status = if net.is_zero() {
            "settled"
        } else if net > Decimal::ZERO {
            "gets back"
        } else {
            "owes"
        };

        writeln!(
            output,
            "  {}: paid {}, share {}, balance {} ({})",
            balance.participant,
            format_currency(balance.total_paid, false),
            format_currency(balance.total_owed, false),
            format_currency(net, true),
            status
        )?;
    }

    writeln!(output)?;
    writeln!(output, "Settlements")?;
    if settlements.is_empty() {
        writeln!(output, "  All settled up.")?;
    }
    for settlement in settlements {
        writeln!(
            output,
            "  {} pays {} {}",
            settlement.from,
            settlement.to,
            format_currency(settlement.amount, false)
        )?;
    }

    output.flush()?;
    Ok(())
}

/// Write the selected report
///
/// # Arguments
///
/// * `kind` - Which report to produce
/// * `balances` - Final balance sheet in roster order
/// * `settlements` - Planned settlements
/// * `expenses` - Accepted expenses in input order (used by `ReportKind::Expenses`)
/// * `output` - Destination writer
pub fn write_report(
    kind: ReportKind,
    balances: &BalanceSheet,
    settlements: &[Settlement],
    expenses: &[ExpenseRecord],
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    match kind {
        ReportKind::Summary => write_summary(balances, settlements, output),
        ReportKind::Balances => write_balances_csv(balances, output),
        ReportKind::Settlements => write_settlements_csv(settlements, output),
        ReportKind::Expenses => write_expenses_csv(expenses, output),
    }
}
