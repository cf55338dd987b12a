//! Error types for the bill splitter
//!
//! This module defines all error types that can occur while reading expenses,
//! validating them against the event roster, and checking settlement plans.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed rows, invalid amounts
//! - **Expense Validation Errors**: Missing payers or participants, unknown names, etc.
//! - **Roster Validation Errors**: Duplicate names, participant count limits
//! - **Overflow Errors**: Amounts whose sum exceeds the `Decimal` range
//! - **Batch Errors**: Async batch tasks that did not complete
//! - **Invariant Errors**: Settlements that leave a balance unsettled

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bill splitter
///
/// Each variant includes relevant context to help diagnose the issue.
/// The settlement planner never returns errors; these are raised by the
/// validation, accumulation and I/O layers around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplitError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed row is skipped
    /// and processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount could not be parsed as a decimal number
    #[error("Invalid amount '{amount}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// Expense has no payers
    #[error("Expense has no payers")]
    EmptyPayers,

    /// Expense has no participants to share the cost
    #[error("Please select at least one participant")]
    EmptyParticipants,

    /// A payer contribution is zero or negative
    #[error("Amount paid by {payer} must be greater than 0, got {amount}")]
    NonPositiveAmount {
        /// Payer name
        payer: String,
        /// The offending amount
        amount: Decimal,
    },

    /// Payer is not a participant of the event
    #[error("Payer '{name}' is not a participant of this event")]
    UnknownPayer {
        /// Payer name
        name: String,
    },

    /// Expense participant is not a participant of the event
    #[error("'{name}' is not a participant of this event")]
    UnknownParticipant {
        /// Participant name
        name: String,
    },

    /// The same payer appears twice in one expense
    #[error("Payer '{name}' is listed more than once")]
    DuplicatePayer {
        /// Payer name
        name: String,
    },

    /// The same participant appears twice in a roster or expense
    #[error("Duplicate participant name '{name}'")]
    DuplicateParticipant {
        /// Participant name
        name: String,
    },

    /// A sum of amounts does not fit in a `Decimal`
    #[error("Amount overflow: {context}")]
    AmountOverflow {
        /// What was being summed
        context: String,
    },

    /// Roster has fewer participants than allowed
    #[error("At least {min} participants required, got {count}")]
    TooFewParticipants {
        /// Number of participants given
        count: usize,
        /// Minimum allowed
        min: usize,
    },

    /// Roster has more participants than allowed
    #[error("You can only have up to {max} participants, got {count}")]
    TooManyParticipants {
        /// Number of participants given
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A batch task of the async strategy did not complete
    ///
    /// Fatal: the balances would be missing the batch's expenses.
    #[error("Batch processing failed: {message}")]
    BatchFailed {
        /// Why the batch failed
        message: String,
    },

    /// Applying the settlements left a participant unsettled
    ///
    /// This signals a logic error in balance calculation or settlement planning.
    #[error("Settlements leave {participant} with residual balance {residual}")]
    ResidualImbalance {
        /// Participant left unsettled
        participant: String,
        /// Remaining balance after applying the settlements
        residual: Decimal,
    },
}

impl From<std::io::Error> for SplitError {
    fn from(error: std::io::Error) -> Self {
        SplitError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SplitError {
    /// Create a ParseError
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        SplitError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Map an error from opening an input file
    ///
    /// A missing file becomes `FileNotFound`; anything else is an `IoError`.
    pub fn open_error(path: &std::path::Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => SplitError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => SplitError::from(error),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, line: Option<u64>) -> Self {
        SplitError::InvalidAmount {
            amount: amount.to_string(),
            line,
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(payer: &str, amount: Decimal) -> Self {
        SplitError::NonPositiveAmount {
            payer: payer.to_string(),
            amount,
        }
    }

    /// Create an UnknownPayer error
    pub fn unknown_payer(name: &str) -> Self {
        SplitError::UnknownPayer {
            name: name.to_string(),
        }
    }

    /// Create an UnknownParticipant error
    pub fn unknown_participant(name: &str) -> Self {
        SplitError::UnknownParticipant {
            name: name.to_string(),
        }
    }

    /// Create a DuplicatePayer error
    pub fn duplicate_payer(name: &str) -> Self {
        SplitError::DuplicatePayer {
            name: name.to_string(),
        }
    }

    /// Create a DuplicateParticipant error
    pub fn duplicate_participant(name: &str) -> Self {
        SplitError::DuplicateParticipant {
            name: name.to_string(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(context: impl Into<String>) -> Self {
        SplitError::AmountOverflow {
            context: context.into(),
        }
    }

    /// Create a ResidualImbalance error
    pub fn residual_imbalance(participant: &str, residual: Decimal) -> Self {
        SplitError::ResidualImbalance {
            participant: participant.to_string(),
            residual,
        }
    }
}
