//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over expense records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<ExpenseRecord, SplitError>` for each CSV row:
//!
//! ```no_run
//! use bill_splitter::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("expenses.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(expense) => println!("Expense: {:?}", expense),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator
//! - Line numbers are included in errors for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{ExpenseRecord, SplitError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one row at a time; memory use does not grow with the file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (optional trailing columns)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `SplitError::FileNotFound` if the path does not exist
    /// * `SplitError::IoError` if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, SplitError> {
        let file = File::open(path).map_err(|e| SplitError::open_error(path, e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<ExpenseRecord, SplitError>;

    /// Get the next expense record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ExpenseRecord))` - Successfully parsed row
    /// * `Some(Err(SplitError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let next = deserializer.next()?;
        self.line_num += 1;

        match next {
            Ok(csv_record) => Some(convert_csv_record(csv_record, self.line_num)),
            Err(e) => Some(Err(SplitError::parse_error(
                Some(self.line_num),
                e.to_string(),
            ))),
        }
    }
}
