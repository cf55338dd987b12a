//! Core business logic module
//!
//! This module contains the bill splitting components:
//! - `money` - Cent rounding and the settled threshold
//! - `balance_calculator` - Folds expenses into per-participant balances
//! - `settlement_planner` - Turns balances into suggested payments
//! - `validation` - Roster and expense rules enforced before the calculator
//! - `async` - Concurrent batch processing for the async strategy

pub mod r#async;
pub mod balance_calculator;
pub mod money;
pub mod settlement_planner;
pub mod validation;

pub use balance_calculator::{compute_balances, BalanceCalculator};
pub use r#async::{AsyncBalanceLedger, BatchOutcome, BatchProcessor};
pub use settlement_planner::{plan_settlements, residual_balances, verify_settlements};
pub use validation::{
    merge_payers, validate_expense, validate_roster, MAX_PARTICIPANTS, MIN_PARTICIPANTS,
};
