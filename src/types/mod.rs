//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `participant`: Participant names and the event roster
//! - `expense`: Expense records, payer contributions and categories
//! - `balance`: Per-participant balances and the balance sheet
//! - `settlement`: Suggested debtor-to-creditor payments
//! - `error`: Error types for the bill splitter

pub mod balance;
pub mod error;
pub mod expense;
pub mod participant;
pub mod settlement;

pub use balance::{Balance, BalanceSheet};
pub use error::SplitError;
pub use expense::{ExpenseCategory, ExpenseRecord, PayerContribution};
pub use participant::{ParticipantName, Roster};
pub use settlement::Settlement;
