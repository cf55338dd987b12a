//! Expense-related types for the bill splitter
//!
//! This module defines the expense record consumed by the balance calculator,
//! the payer contributions it is made of, and the optional expense category.

use super::participant::ParticipantName;
use rust_decimal::Decimal;

/// A single payer's contribution toward an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerContribution {
    /// Name of the participant who paid
    pub name: ParticipantName,

    /// Amount paid by this participant (expected to be positive)
    pub amount: Decimal,
}

impl PayerContribution {
    pub fn new(name: impl Into<ParticipantName>, amount: Decimal) -> Self {
        PayerContribution {
            name: name.into(),
            amount,
        }
    }
}

/// Expense categories
///
/// Categories are informational only; they never affect balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Accommodation,
    Entertainment,
    Shopping,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Accommodation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    /// Machine-readable value, as written to CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Other => "other",
        }
    }

    /// Parse a category value, case-insensitively
    ///
    /// Returns `None` for blank or unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

/// Expense record, the input of the balance calculator
///
/// The cost of the expense (the sum of all payer amounts) is divided equally
/// among `participants`, regardless of who paid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseRecord {
    /// Who paid and how much, in input order
    ///
    /// Expected to be non-empty with one entry per payer; see
    /// [`crate::core::validation::merge_payers`].
    pub payers: Vec<PayerContribution>,

    /// Participants sharing the cost
    ///
    /// Expected to be non-empty and free of duplicates.
    pub participants: Vec<ParticipantName>,

    /// Free-text description
    pub description: Option<String>,

    /// Optional category
    pub category: Option<ExpenseCategory>,

    /// Date as entered (not interpreted)
    pub date: Option<String>,
}

impl ExpenseRecord {
    /// Create an expense with payers and participants only
    pub fn new<P, S>(payers: Vec<PayerContribution>, participants: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<ParticipantName>,
    {
        ExpenseRecord {
            payers,
            participants: participants.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Sum of all payer amounts
    ///
    /// Returns `None` if the sum does not fit in a `Decimal`.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.payers
            .iter()
            .try_fold(Decimal::ZERO, |total, payer| total.checked_add(payer.amount))
    }

    /// Equal per-participant share of the total
    ///
    /// Returns `None` when the expense has no participants or its total
    /// overflows.
    pub fn share(&self) -> Option<Decimal> {
        if self.participants.is_empty() {
            return None;
        }
        self.total_amount()?
            .checked_div(Decimal::from(self.participants.len()))
    }
}
