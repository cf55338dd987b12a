//! Benchmark suite for balance computation and processing strategies
//!
//! Uses the divan benchmarking framework. Input data is generated on the fly:
//! core benchmarks work on in-memory expenses, strategy benchmarks on a
//! temporary CSV file with the same rows.
//!
//! ```bash
//! cargo bench
//! ```

use bill_splitter::cli::{ReportKind, StrategyType};
use bill_splitter::core::{compute_balances, plan_settlements};
use bill_splitter::strategy::{create_strategy, BatchConfig};
use bill_splitter::types::{ExpenseRecord, PayerContribution, Roster};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

const ROSTER: [&str; 8] = ["Ana", "Ben", "Cy", "Dee", "Eve", "Fay", "Gus", "Hal"];

fn main() {
    divan::main();
}

/// Deterministic expense rows: rotating payers, splits of two to eight people
fn generate_expenses(count: usize) -> Vec<ExpenseRecord> {
    (0..count)
        .map(|i| {
            let payer = ROSTER[i % ROSTER.len()];
            let amount = Decimal::new(((i * 7919) % 50_000 + 1) as i64, 2);
            let split = 2 + i % (ROSTER.len() - 1);
            let participants: Vec<&str> = (0..split)
                .map(|offset| ROSTER[(i + offset) % ROSTER.len()])
                .collect();
            ExpenseRecord::new(vec![PayerContribution::new(payer, amount)], participants)
        })
        .collect()
}

fn generate_csv(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "date,description,category,payers,participants").expect("Failed to write");
    for (i, expense) in generate_expenses(count).iter().enumerate() {
        let payer = &expense.payers[0];
        writeln!(
            file,
            "2024-01-01,Item {},food,{}:{},{}",
            i,
            payer.name,
            payer.amount,
            expense.participants.join(";")
        )
        .expect("Failed to write");
    }
    file.flush().expect("Failed to flush temp file");
    file
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn compute_balances_in_memory(bencher: divan::Bencher, count: usize) {
    let roster = Roster::new(ROSTER);
    let expenses = generate_expenses(count);

    bencher.bench(|| compute_balances(roster.names(), divan::black_box(&expenses)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn plan_settlements_in_memory(bencher: divan::Bencher, count: usize) {
    let roster = Roster::new(ROSTER);
    let balances = compute_balances(roster.names(), &generate_expenses(count));

    bencher.bench(|| plan_settlements(divan::black_box(&balances)));
}

/// Synchronous strategy end to end, settlements report
#[divan::bench(args = [100, 1_000, 10_000])]
fn sync_strategy(bencher: divan::Bencher, count: usize) {
    let roster = Roster::new(ROSTER);
    let file = generate_csv(count);
    let strategy = create_strategy(StrategyType::Sync, None);

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(&roster, file.path(), ReportKind::Settlements, &mut output)
            .expect("Processing failed");
        output
    });
}

/// Asynchronous strategy end to end, settlements report
#[divan::bench(args = [100, 1_000, 10_000])]
fn async_strategy(bencher: divan::Bencher, count: usize) {
    let roster = Roster::new(ROSTER);
    let file = generate_csv(count);
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));

    bencher.bench(|| {
        let mut output = Vec::new();
        strategy
            .process(&roster, file.path(), ReportKind::Settlements, &mut output)
            .expect("Processing failed");
        output
    });
}
