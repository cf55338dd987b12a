//! Processing strategy module for expense processing
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! encompassing CSV parsing, validation, balance calculation, settlement
//! planning and report output. This allows different processing
//! implementations (synchronous, asynchronous batch) to be selected at runtime.

use crate::cli::{ReportKind, StrategyType};
use crate::core::{plan_settlements, verify_settlements};
use crate::io::write_report;
use crate::types::{BalanceSheet, ExpenseRecord, Roster, SplitError};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete expense processing pipelines
///
/// Each strategy must be able to read expenses from a CSV file, validate them
/// against the roster, compute balances and settlements, and write the
/// selected report to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process expenses from input file and write the report to output
    ///
    /// # Arguments
    ///
    /// * `roster` - Validated event participants
    /// * `input_path` - Path to the input CSV file containing expense records
    /// * `report` - Which report to write
    /// * `output` - Mutable reference to a writer for the report
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Malformed rows and invalid expenses are logged and skipped; they do
    /// not cause this method to return an error.
    fn process(
        &self,
        roster: &Roster,
        input_path: &Path,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), SplitError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

/// Plan settlements for the final balances and write the report
///
/// Shared tail of every strategy. A plan that leaves a residual is logged at
/// error level; the report is still written.
fn settle_and_report(
    balances: &BalanceSheet,
    expenses: &[ExpenseRecord],
    report: ReportKind,
    output: &mut dyn Write,
) -> Result<(), SplitError> {
    let settlements = plan_settlements(balances);

    if let Err(e) = verify_settlements(balances, &settlements) {
        tracing::error!(error = %e, "settlement plan does not balance");
    }

    tracing::info!(
        participants = balances.len(),
        expenses = expenses.len(),
        settlements = settlements.len(),
        "settlement planned"
    );

    write_report(report, balances, &settlements, expenses, output)
}
