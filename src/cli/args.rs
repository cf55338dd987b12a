use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Split shared expenses and suggest who pays whom
#[derive(Parser, Debug)]
#[command(name = "bill-splitter")]
#[command(about = "Split shared expenses and suggest who pays whom", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing expense records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Participants of the event, in display order
    #[arg(
        short = 'p',
        long = "participants",
        value_name = "NAMES",
        env = "BILL_SPLITTER_PARTICIPANTS",
        value_delimiter = ',',
        required = true,
        help = "Comma-separated participant names (2-10)"
    )]
    pub participants: Vec<String>,

    /// Processing strategy to use for reading expenses
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        env = "BILL_SPLITTER_STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Report written to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        env = "BILL_SPLITTER_REPORT",
        default_value = "summary",
        help = "Report to print: summary, balances, settlements or expenses"
    )]
    pub report: ReportKind,

    /// Number of expenses per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of expenses per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent batches (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of batches processing concurrently (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies for CSV input
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available output reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Human-readable balances and settlements
    Summary,
    /// CSV: participant,paid,share,balance
    Balances,
    /// CSV: from,to,amount
    Settlements,
    /// CSV export of the accepted expenses
    Expenses,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the CLI values if provided, or falls back to default values.
    /// Zero values are replaced by defaults (with a warning) in `BatchConfig::new`.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }
}
