//! Bill Splitter CLI
//!
//! Command-line interface for splitting shared expenses read from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- -p Ana,Ben,Cy expenses.csv
//! cargo run -- -p Ana,Ben,Cy --report settlements expenses.csv > settlements.csv
//! cargo run -- -p Ana,Ben,Cy --strategy async --batch-size 2000 --max-concurrent 8 expenses.csv
//! BILL_SPLITTER_PARTICIPANTS=Ana,Ben,Cy cargo run -- expenses.csv
//! ```
//!
//! The program validates the participant list, reads expense records from the
//! input CSV file using the selected processing strategy, and prints the
//! selected report to stdout. Diagnostics go to stderr; set `RUST_LOG` to
//! change their level (default `warn`).
//!
//! # Processing Strategies
//!
//! - **sync**: Synchronous CSV parsing with single-threaded processing (default)
//! - **async**: Asynchronous batch processing with multi-threaded parallelism
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid participants, file not found, file not readable, etc.)

use bill_splitter::cli;
use bill_splitter::core::validate_roster;
use bill_splitter::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let roster = match validate_roster(&args.participants) {
        Ok(roster) => roster,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Report goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&roster, &args.input_file, args.report, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
