//! Bill Splitter Library
//! # Overview
//!
//! This library splits shared expenses between the participants of an event
//! and suggests the payments that settle everyone up. Expenses are read from
//! CSV with either a sync or an async processing strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Roster, ExpenseRecord, BalanceSheet, Settlement, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::balance_calculator`] - Folds expenses into per-participant balances
//!   - [`core::settlement_planner`] - Greedy debtor-to-creditor payment planning
//!   - [`core::validation`] - Roster and expense rules
//! - [`io`] - CSV reading and report output
//! - [`strategy`] - Sync and async processing pipelines
//!
//! # Balances
//!
//! Every expense is split equally among its participants, whoever paid it.
//! Each participant ends up with:
//! - `total_paid`: Sum of what they paid as a payer
//! - `total_owed`: Sum of their equal shares
//! - `net_balance`: `total_paid - total_owed`; positive gets money back,
//!   negative owes money
//!
//! # Settlements
//!
//! The planner matches the largest creditor with the largest debtor until
//! every balance is within one cent of zero. Amounts are rounded to cents.
//!
//! ```
//! use bill_splitter::{compute_balances, plan_settlements, ExpenseRecord, PayerContribution};
//! use rust_decimal::Decimal;
//!
//! let roster = vec!["A".to_string(), "B".to_string(), "C".to_string()];
//! let expenses = vec![ExpenseRecord::new(
//!     vec![PayerContribution::new("A", Decimal::from(90))],
//!     ["A", "B", "C"],
//! )];
//!
//! let balances = compute_balances(&roster, &expenses);
//! let settlements = plan_settlements(&balances);
//!
//! assert_eq!(settlements.len(), 2);
//! assert!(settlements.iter().all(|s| s.to == "A" && s.amount == Decimal::from(30)));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{compute_balances, plan_settlements, validate_expense, validate_roster};
pub use io::write_report;
pub use types::{
    Balance, BalanceSheet, ExpenseCategory, ExpenseRecord, PayerContribution, ParticipantName,
    Roster, Settlement, SplitError,
};
