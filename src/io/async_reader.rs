//! Asynchronous CSV reader with stream interface
//!
//! Provides a streaming interface over expense records from a CSV source.
//! Supports batch reading for the async processing strategy.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures `AsyncRead` as the source, so tokio files (via the compat layer)
//!   and in-memory cursors work alike
//!
//! # Architecture
//!
//! ```text
//! CSV source → AsyncReader → Batches of ExpenseRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{ExpenseRecord, SplitError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over expense records.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    line_num: u64,
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// Fields are trimmed and rows may have a varying number of columns.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            line_num: 1,
            skipped: 0,
        }
    }

    /// Read a batch of expense records
    ///
    /// Reads up to `batch_size` rows, converting them to ExpenseRecords.
    /// Rows that fail to parse are logged with their line number and skipped.
    ///
    /// # Returns
    ///
    /// A vector of successfully converted expense records in file order.
    /// Returns an empty vector when the end of the input is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<ExpenseRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let Some(next) = records.next().await else {
                break;
            };
            self.line_num += 1;

            let converted = next
                .map_err(|e| SplitError::parse_error(Some(self.line_num), e.to_string()))
                .and_then(|csv_record| convert_csv_record(csv_record, self.line_num));

            match converted {
                Ok(expense) => batch.push(expense),
                Err(e) => {
                    tracing::warn!(line = self.line_num, error = %e, "skipping malformed row");
                    self.skipped += 1;
                }
            }
        }

        batch
    }

    /// Number of rows skipped so far because they could not be parsed
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
