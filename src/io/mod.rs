//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, CSV report serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `report` - Report selection and the plain-text summary

pub mod async_reader;
pub mod csv_format;
pub mod report;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_csv_record, format_amount, write_balances_csv, write_expenses_csv,
    write_settlements_csv, CsvRecord,
};
pub use report::{format_currency, write_report, write_summary};
pub use sync_reader::SyncReader;
