//! Thread-safe balance accumulation for async batch processing
//!
//! This module provides the `AsyncBalanceLedger`, which collects the partial
//! balance sheets produced by concurrently processed batches.
//!
//! # Design
//!
//! Each batch is folded into its own `BalanceSheet` by the pure
//! `BalanceCalculator`. The ledger only adds up `total_paid` and `total_owed`
//! of those partial sheets, so the order in which batches finish does not
//! change the result. Net balances are computed once, when the final
//! snapshot is taken.
//!
//! # Thread Safety
//!
//! Balances live in a `DashMap` keyed by participant name. Absorbing two
//! sheets concurrently only serializes on the entries both of them touch.

use crate::types::{Balance, BalanceSheet, ParticipantName, Roster, SplitError};
use dashmap::DashMap;

/// Concurrent accumulator of per-participant totals
///
/// The roster is fixed at construction: every participant starts at zero and
/// names outside the roster are never added.
#[derive(Debug)]
pub struct AsyncBalanceLedger {
    /// Participants in roster order, used to order the snapshot
    order: Vec<ParticipantName>,

    /// Running totals by participant name
    balances: DashMap<ParticipantName, Balance>,
}

impl AsyncBalanceLedger {
    /// Create a ledger with a zero balance for every roster participant
    pub fn new(roster: &Roster) -> Self {
        let balances = DashMap::new();
        for name in roster {
            balances
                .entry(name.clone())
                .or_insert_with(|| Balance::new(name.as_str()));
        }

        Self {
            order: roster.names().to_vec(),
            balances,
        }
    }

    /// Add a partial sheet's paid and owed totals into the ledger
    ///
    /// Entries for participants outside the roster are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::AmountOverflow` if a running total would leave
    /// the `Decimal` range. Entries absorbed before the failing one keep
    /// their new totals, so the ledger should be discarded.
    ///
    /// # Thread Safety
    ///
    /// Each entry is updated while holding its shard lock, so concurrent
    /// calls never lose an addition.
    pub fn absorb(&self, partial: &BalanceSheet) -> Result<(), SplitError> {
        for balance in partial {
            if let Some(mut entry) = self.balances.get_mut(&balance.participant) {
                let total_paid = entry.total_paid.checked_add(balance.total_paid);
                let total_owed = entry.total_owed.checked_add(balance.total_owed);
                let (Some(total_paid), Some(total_owed)) = (total_paid, total_owed) else {
                    return Err(SplitError::amount_overflow(format!(
                        "running total for {}",
                        balance.participant
                    )));
                };
                entry.total_paid = total_paid;
                entry.total_owed = total_owed;
            }
        }
        Ok(())
    }

    /// Take the accumulated balances as a sheet in roster order
    ///
    /// Net balances are computed on the returned sheet. The snapshot does not
    /// reflect sheets absorbed after the call returns.
    pub fn snapshot(&self) -> BalanceSheet {
        let mut sheet = BalanceSheet::from_balances(self.order.iter().filter_map(|name| {
            self.balances.get(name).map(|entry| entry.value().clone())
        }));
        sheet.refresh_net();
        sheet
    }
}
