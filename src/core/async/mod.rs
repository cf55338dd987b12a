//! Concurrent components for the async processing strategy
//!
//! The pure balance calculator stays single-threaded. Concurrency comes from
//! running it over several batches at once and merging the partial results:
//!
//! - **AsyncBalanceLedger**: DashMap-backed accumulator of partial balance sheets
//! - **BatchProcessor**: validates one batch and folds it into the ledger
//!
//! # Thread Safety
//!
//! - Batches touching different participants proceed in parallel
//! - Updates to the same participant are serialized per entry
//! - No global lock is held while a batch is folded

pub mod balance_ledger;
pub mod batch_processor;

pub use balance_ledger::AsyncBalanceLedger;
pub use batch_processor::{BatchOutcome, BatchProcessor};
