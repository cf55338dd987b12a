//! Balance-related types for the bill splitter
//!
//! This module defines the per-participant `Balance` and the `BalanceSheet`
//! holding one balance for every roster participant.

use super::participant::ParticipantName;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Net position of one participant
///
/// Derived from the expense list; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    /// The participant this balance belongs to
    pub participant: ParticipantName,

    /// Sum of everything this participant paid as a payer
    pub total_paid: Decimal,

    /// Sum of the equal shares attributed to this participant
    pub total_owed: Decimal,

    /// `total_paid - total_owed`
    ///
    /// Positive means the participant is owed money (creditor), negative
    /// means the participant owes money (debtor).
    pub net_balance: Decimal,
}

impl Balance {
    /// Create a zero balance for a participant
    pub fn new(participant: impl Into<ParticipantName>) -> Self {
        Balance {
            participant: participant.into(),
            total_paid: Decimal::ZERO,
            total_owed: Decimal::ZERO,
            net_balance: Decimal::ZERO,
        }
    }

    /// Recompute `net_balance` from the paid and owed totals
    pub fn refresh_net(&mut self) {
        self.net_balance = self.total_paid - self.total_owed;
    }
}

/// One balance per roster participant, in roster order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BalanceSheet {
    entries: Vec<Balance>,
    index: HashMap<ParticipantName, usize>,
}

impl BalanceSheet {
    /// Create a sheet with a zero balance for every participant
    ///
    /// A repeated name keeps its first position and is otherwise ignored.
    pub fn new(participants: &[ParticipantName]) -> Self {
        Self::from_balances(participants.iter().map(Balance::new))
    }

    /// Build a sheet from existing balances, keeping their order
    ///
    /// A repeated participant keeps its first balance.
    pub fn from_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = Balance>,
    {
        let mut sheet = BalanceSheet::default();
        for balance in balances {
            if sheet.index.contains_key(&balance.participant) {
                continue;
            }
            sheet
                .index
                .insert(balance.participant.clone(), sheet.entries.len());
            sheet.entries.push(balance);
        }
        sheet
    }

    pub fn get(&self, participant: &str) -> Option<&Balance> {
        self.index.get(participant).map(|&i| &self.entries[i])
    }

    pub(crate) fn get_mut(&mut self, participant: &str) -> Option<&mut Balance> {
        match self.index.get(participant) {
            Some(&i) => Some(&mut self.entries[i]),
            None => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Balance> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all net balances (zero up to rounding for a consistent sheet)
    pub fn total_net(&self) -> Decimal {
        self.entries.iter().map(|b| b.net_balance).sum()
    }

    /// Recompute every net balance
    pub(crate) fn refresh_net(&mut self) {
        self.entries.iter_mut().for_each(Balance::refresh_net);
    }
}

impl<'a> IntoIterator for &'a BalanceSheet {
    type Item = &'a Balance;
    type IntoIter = std::slice::Iter<'a, Balance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
