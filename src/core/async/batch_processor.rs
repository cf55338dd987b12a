//! Batch processing for the async strategy
//!
//! A `BatchProcessor` takes one batch of parsed expenses, validates each one
//! against the roster, folds the valid ones into a partial `BalanceSheet` and
//! hands that sheet to the shared `AsyncBalanceLedger`.
//!
//! Batches are independent of each other, so the async strategy can run
//! several `process_batch` calls on spawned tasks at the same time.

use std::sync::Arc;

use super::AsyncBalanceLedger;
use crate::core::{validate_expense, BalanceCalculator};
use crate::types::{ExpenseRecord, Roster, SplitError};

/// Result of processing one batch
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Expenses that passed validation, in batch order
    pub accepted: Vec<ExpenseRecord>,

    /// Number of expenses rejected by validation
    pub rejected: usize,
}

/// Validates and folds batches of expenses into a shared ledger
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    roster: Arc<Roster>,
    ledger: Arc<AsyncBalanceLedger>,
}

impl BatchProcessor {
    pub fn new(roster: Arc<Roster>, ledger: Arc<AsyncBalanceLedger>) -> Self {
        Self { roster, ledger }
    }

    /// Process one batch of expenses
    ///
    /// Invalid expenses are logged and skipped. Only the accepted ones reach
    /// the ledger.
    ///
    /// # Arguments
    ///
    /// * `batch` - Expenses in input order
    ///
    /// # Returns
    ///
    /// The accepted expenses (in input order) and the number rejected
    ///
    /// # Errors
    ///
    /// Returns `SplitError::AmountOverflow` if the batch or ledger totals
    /// leave the `Decimal` range. The ledger is then incomplete.
    pub async fn process_batch(
        &self,
        batch: Vec<ExpenseRecord>,
    ) -> Result<BatchOutcome, SplitError> {
        let mut calculator = BalanceCalculator::new(self.roster.names());
        let mut outcome = BatchOutcome {
            accepted: Vec::with_capacity(batch.len()),
            rejected: 0,
        };

        for expense in batch {
            match validate_expense(&self.roster, &expense) {
                Ok(()) => {
                    calculator.try_apply(&expense)?;
                    outcome.accepted.push(expense);
                }
                Err(e) => {
                    tracing::warn!(
                        description = expense.description.as_deref().unwrap_or_default(),
                        error = %e,
                        "skipping invalid expense"
                    );
                    outcome.rejected += 1;
                }
            }
        }

        if !outcome.accepted.is_empty() {
            self.ledger.absorb(&calculator.finish())?;
        }

        Ok(outcome)
    }
}
