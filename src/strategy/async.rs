//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous, multi-threaded implementation of the
//! ProcessingStrategy trait. Expenses are read in batches and each batch is
//! validated and folded on its own task.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (validation + per-batch balance fold)
//!     └── AsyncBalanceLedger (DashMap of per-participant totals)
//! ```
//!
//! # Parallelism
//!
//! - Batches are read sequentially from the file
//! - Each batch is processed on a spawned tokio task
//! - At most `max_concurrent_batches` batches are in flight at once
//! - Totals are order-independent, so batches may finish in any order
//! - Tasks are joined in spawn order, which keeps accepted expenses in file order
//! - A batch that fails or panics fails the whole run; no partial report is written

use crate::cli::ReportKind;
use crate::core::r#async::{AsyncBalanceLedger, BatchProcessor};
use crate::io::async_reader::AsyncReader;
use crate::strategy::{settle_and_report, ProcessingStrategy};
use crate::types::{Roster, SplitError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Configuration for async batch processing
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of expenses to read per batch
    pub batch_size: usize,

    /// Maximum number of batches processed concurrently
    ///
    /// Also used as the number of runtime worker threads.
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing zero values with defaults
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Expenses per batch
    /// * `max_concurrent_batches` - Batches in flight at once
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid concurrency limit, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        roster: &Roster,
        input_path: &Path,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), SplitError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()?;

        runtime.block_on(async {
            let roster = Arc::new(roster.clone());
            let ledger = Arc::new(AsyncBalanceLedger::new(&roster));
            let processor = BatchProcessor::new(Arc::clone(&roster), Arc::clone(&ledger));
            let permits = Arc::new(Semaphore::new(self.config.max_concurrent_batches));

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| SplitError::open_error(input_path, e))?;

            // csv-async reads futures::io::AsyncRead
            let mut reader = AsyncReader::new(file.compat());

            let mut tasks = Vec::new();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                let permit = Arc::clone(&permits)
                    .acquire_owned()
                    .await
                    .map_err(|e| SplitError::IoError {
                        message: format!("Batch scheduler closed: {}", e),
                    })?;

                let processor = processor.clone();
                tasks.push(tokio::spawn(async move {
                    let outcome = processor.process_batch(batch).await;
                    drop(permit);
                    outcome
                }));
            }

            let mut expenses = Vec::new();
            let mut rejected = 0;
            for task in tasks {
                let outcome = task.await.map_err(|e| SplitError::BatchFailed {
                    message: e.to_string(),
                })??;
                rejected += outcome.rejected;
                expenses.extend(outcome.accepted);
            }

            tracing::debug!(
                accepted = expenses.len(),
                rejected,
                malformed = reader.skipped(),
                "all batches processed"
            );

            let balances = ledger.snapshot();
            settle_and_report(&balances, &expenses, report, output)
        })
    }
}
