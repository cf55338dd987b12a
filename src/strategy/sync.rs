use super::settle_and_report;
use crate::cli::ReportKind;
use crate::core::{validate_expense, BalanceCalculator};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{Roster, SplitError};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Streams rows one at a time through the validator into a single
/// `BalanceCalculator`.
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        roster: &Roster,
        input_path: &Path,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), SplitError> {
        let mut calculator = BalanceCalculator::new(roster.names());
        let mut expenses = Vec::new();

        let reader = SyncReader::new(input_path)?;

        for result in reader {
            match result {
                Ok(expense) => match validate_expense(roster, &expense) {
                    Ok(()) => {
                        calculator.try_apply(&expense)?;
                        expenses.push(expense);
                    }
                    Err(e) => {
                        tracing::warn!(
                            description = expense.description.as_deref().unwrap_or_default(),
                            error = %e,
                            "skipping invalid expense"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed row");
                }
            }
        }

        let balances = calculator.finish();
        settle_and_report(&balances, &expenses, report, output)
    }
}
