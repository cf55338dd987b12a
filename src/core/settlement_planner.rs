//! Settlement planning module
//!
//! Turns a balance sheet into a short list of debtor-to-creditor payments
//! using greedy largest-creditor / largest-debtor matching:
//!
//! 1. Round every net balance to cents and drop those within a cent of zero
//! 2. Sort creditors and debtors by magnitude, largest first
//! 3. Repeatedly pay the smaller of the current creditor's credit and the
//!    current debtor's debt, moving past whichever side is exhausted
//!
//! This is the usual minimum-transfer heuristic. It is not guaranteed to be
//! globally minimal but uses at most `creditors + debtors - 1` payments.
//!
//! Ties between equal magnitudes keep roster order (stable sort), so the
//! output is deterministic for a given roster.

use crate::core::money::{is_settled, residual_tolerance, round_cents};
use crate::types::{BalanceSheet, ParticipantName, Settlement, SplitError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Remaining credit or debt of one participant while matching
#[derive(Debug)]
struct Position<'a> {
    name: &'a str,
    remaining: Decimal,
}

/// Plan the payments that settle every balance on the sheet
///
/// Returns an empty list when everyone is settled.
///
/// # Examples
///
/// ```
/// use bill_splitter::core::{compute_balances, plan_settlements};
/// use bill_splitter::types::{ExpenseRecord, PayerContribution};
/// use rust_decimal::Decimal;
///
/// let roster = vec!["A".to_string(), "B".to_string()];
/// let expenses = vec![ExpenseRecord::new(
///     vec![PayerContribution::new("A", Decimal::from(100))],
///     ["A", "B"],
/// )];
///
/// let settlements = plan_settlements(&compute_balances(&roster, &expenses));
/// assert_eq!(settlements.len(), 1);
/// assert_eq!(settlements[0].from, "B");
/// assert_eq!(settlements[0].to, "A");
/// assert_eq!(settlements[0].amount, Decimal::from(50));
/// ```
pub fn plan_settlements(balances: &BalanceSheet) -> Vec<Settlement> {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for balance in balances {
        let net = round_cents(balance.net_balance);
        if is_settled(net) {
            continue;
        }

        let position = Position {
            name: &balance.participant,
            remaining: net.abs(),
        };
        if net > Decimal::ZERO {
            creditors.push(position);
        } else {
            debtors.push(position);
        }
    }

    // sort_by is stable: equal magnitudes stay in roster order
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
    let mut c = 0;
    let mut d = 0;

    while c < creditors.len() && d < debtors.len() {
        let creditor = &mut creditors[c];
        let debtor = &mut debtors[d];

        let amount = round_cents(creditor.remaining.min(debtor.remaining));
        if !is_settled(amount) {
            settlements.push(Settlement::new(debtor.name, creditor.name, amount));
        }

        creditor.remaining = round_cents(creditor.remaining - amount);
        debtor.remaining = round_cents(debtor.remaining - amount);

        if is_settled(creditor.remaining) {
            c += 1;
        }
        if is_settled(debtor.remaining) {
            d += 1;
        }
    }

    settlements
}

/// Apply settlements to the rounded balances and return what is left
///
/// Paying reduces the debtor's debt and the creditor's credit, so a complete
/// plan leaves every residual near zero. Residuals are listed in sheet order.
pub fn residual_balances(
    balances: &BalanceSheet,
    settlements: &[Settlement],
) -> Vec<(ParticipantName, Decimal)> {
    let mut remaining: HashMap<&str, Decimal> = balances
        .iter()
        .map(|b| (b.participant.as_str(), round_cents(b.net_balance)))
        .collect();

    for settlement in settlements {
        if let Some(debt) = remaining.get_mut(settlement.from.as_str()) {
            *debt += settlement.amount;
        }
        if let Some(credit) = remaining.get_mut(settlement.to.as_str()) {
            *credit -= settlement.amount;
        }
    }

    balances
        .iter()
        .map(|b| {
            let residual = remaining
                .get(b.participant.as_str())
                .copied()
                .unwrap_or_default();
            (b.participant.clone(), residual)
        })
        .collect()
}

/// Check that a settlement plan zeroes every balance
///
/// # Errors
///
/// Returns `SplitError::ResidualImbalance` for the first participant whose
/// residual exceeds the rounding tolerance for the sheet's size. That can
/// only happen when the balances do not sum to zero or the plan is wrong.
pub fn verify_settlements(
    balances: &BalanceSheet,
    settlements: &[Settlement],
) -> Result<(), SplitError> {
    let tolerance = residual_tolerance(balances.len());

    for (participant, residual) in residual_balances(balances, settlements) {
        if residual.abs() > tolerance {
            return Err(SplitError::residual_imbalance(&participant, residual));
        }
    }

    Ok(())
}
