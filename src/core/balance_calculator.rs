//! Balance calculation module
//!
//! This module provides the `BalanceCalculator` which folds expense records
//! into one net balance per participant:
//!
//! ```text
//! net_balance = total_paid - total_owed
//! ```
//!
//! where `total_owed` is the sum of the participant's equal shares
//! (`expense total / number of participants`) over every expense they take
//! part in.
//!
//! The calculator is pure and `apply` never fails. Its inputs are expected to have
//! passed `core::validation`; anything that did not is handled leniently:
//! - payers and participants missing from the roster are ignored
//! - an expense without participants is skipped entirely

use crate::types::{Balance, BalanceSheet, ExpenseRecord, ParticipantName, SplitError};

/// Incremental balance fold over expense records
///
/// Expenses can be applied one at a time, which lets streaming readers feed
/// the calculator without collecting the whole file first.
///
/// # Examples
///
/// ```
/// use bill_splitter::core::BalanceCalculator;
/// use bill_splitter::types::{ExpenseRecord, PayerContribution};
/// use rust_decimal::Decimal;
///
/// let roster = vec!["A".to_string(), "B".to_string()];
/// let mut calculator = BalanceCalculator::new(&roster);
/// calculator.apply(&ExpenseRecord::new(
///     vec![PayerContribution::new("A", Decimal::from(100))],
///     ["A", "B"],
/// ));
///
/// let sheet = calculator.finish();
/// assert_eq!(sheet.get("A").unwrap().net_balance, Decimal::from(50));
/// assert_eq!(sheet.get("B").unwrap().net_balance, Decimal::from(-50));
/// ```
#[derive(Debug, Clone)]
pub struct BalanceCalculator {
    sheet: BalanceSheet,
}

impl BalanceCalculator {
    /// Create a calculator with a zero balance for every participant
    pub fn new(participants: &[ParticipantName]) -> Self {
        BalanceCalculator {
            sheet: BalanceSheet::new(participants),
        }
    }

    /// Fold one expense into the running totals
    ///
    /// Adds each payer's amount to their `total_paid` and the equal share to
    /// every participant's `total_owed`. An expense that would overflow a
    /// running total is left out; use [`Self::try_apply`] to detect that.
    pub fn apply(&mut self, expense: &ExpenseRecord) {
        let _ = self.try_apply(expense);
    }

    /// Fold one expense, failing if any running total would overflow
    ///
    /// Either every total is updated or none is.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::AmountOverflow` naming the first total that does
    /// not fit in a `Decimal`.
    pub fn try_apply(&mut self, expense: &ExpenseRecord) -> Result<(), SplitError> {
        if expense.participants.is_empty() {
            return Ok(());
        }
        let share = expense
            .share()
            .ok_or_else(|| SplitError::amount_overflow("expense total"))?;

        let mut staged: Vec<Balance> = Vec::new();

        for payer in &expense.payers {
            if let Some(balance) = staged_entry(&self.sheet, &mut staged, &payer.name) {
                balance.total_paid = balance
                    .total_paid
                    .checked_add(payer.amount)
                    .ok_or_else(|| overflow("paid", &payer.name))?;
            }
        }

        for participant in &expense.participants {
            if let Some(balance) = staged_entry(&self.sheet, &mut staged, participant) {
                balance.total_owed = balance
                    .total_owed
                    .checked_add(share)
                    .ok_or_else(|| overflow("owed", participant))?;
            }
        }

        for updated in staged {
            if let Some(balance) = self.sheet.get_mut(&updated.participant) {
                *balance = updated;
            }
        }

        Ok(())
    }

    /// Fold a sequence of expenses
    pub fn apply_all<'a, I>(&mut self, expenses: I)
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        for expense in expenses {
            self.apply(expense);
        }
    }

    /// Finish the fold and compute every net balance
    pub fn finish(mut self) -> BalanceSheet {
        self.sheet.refresh_net();
        self.sheet
    }
}

/// Working copy of a roster participant's balance, copied from the sheet on
/// first use
fn staged_entry<'a>(
    sheet: &BalanceSheet,
    staged: &'a mut Vec<Balance>,
    name: &str,
) -> Option<&'a mut Balance> {
    match staged.iter().position(|b| b.participant == name) {
        Some(i) => Some(&mut staged[i]),
        None => {
            staged.push(sheet.get(name)?.clone());
            staged.last_mut()
        }
    }
}

fn overflow(total: &str, name: &str) -> SplitError {
    SplitError::amount_overflow(format!("total {} by {}", total, name))
}

/// Compute balances for a roster from a list of expenses
///
/// Every participant gets an entry, including those who appear in no expense.
pub fn compute_balances(
    participants: &[ParticipantName],
    expenses: &[ExpenseRecord],
) -> BalanceSheet {
    let mut calculator = BalanceCalculator::new(participants);
    calculator.apply_all(expenses);
    calculator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::money::round_cents;
    use crate::types::PayerContribution;
    use rust_decimal::Decimal;

    fn roster(names: &[&str]) -> Vec<ParticipantName> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn expense(payers: &[(&str, i64)], participants: &[&str]) -> ExpenseRecord {
        ExpenseRecord::new(
            payers
                .iter()
                .map(|(name, amount)| PayerContribution::new(*name, Decimal::from(*amount)))
                .collect(),
            participants.iter().copied(),
        )
    }

    #[test]
    fn test_single_payer_two_participants() {
        let sheet = compute_balances(
            &roster(&["A", "B"]),
            &[expense(&[("A", 100)], &["A", "B"])],
        );

        let a = sheet.get("A").unwrap();
        assert_eq!(a.total_paid, Decimal::from(100));
        assert_eq!(a.total_owed, Decimal::from(50));
        assert_eq!(a.net_balance, Decimal::from(50));
        assert_eq!(sheet.get("B").unwrap().net_balance, Decimal::from(-50));
    }

    #[test]
    fn test_single_payer_three_participants() {
        let sheet = compute_balances(
            &roster(&["A", "B", "C"]),
            &[expense(&[("A", 90)], &["A", "B", "C"])],
        );

        assert_eq!(sheet.get("A").unwrap().net_balance, Decimal::from(60));
        assert_eq!(sheet.get("B").unwrap().net_balance, Decimal::from(-30));
        assert_eq!(sheet.get("C").unwrap().net_balance, Decimal::from(-30));
    }

    #[test]
    fn test_multiple_payers_uneven_split() {
        let sheet = compute_balances(
            &roster(&["A", "B", "C"]),
            &[expense(&[("A", 50), ("B", 50)], &["A", "B", "C"])],
        );

        assert_eq!(
            round_cents(sheet.get("A").unwrap().net_balance),
            Decimal::new(1667, 2)
        );
        assert_eq!(
            round_cents(sheet.get("B").unwrap().net_balance),
            Decimal::new(1667, 2)
        );
        assert_eq!(
            round_cents(sheet.get("C").unwrap().net_balance),
            Decimal::new(-3333, 2)
        );
        assert!(sheet.total_net().abs() <= Decimal::new(1, 2));
    }

    #[test]
    fn test_fully_balanced_expense() {
        let sheet = compute_balances(
            &roster(&["A", "B"]),
            &[expense(&[("A", 50), ("B", 50)], &["A", "B"])],
        );

        assert!(sheet.iter().all(|b| b.net_balance.is_zero()));
    }

    #[test]
    fn test_participant_without_expenses_stays_zero() {
        let sheet = compute_balances(
            &roster(&["A", "B", "Idle"]),
            &[expense(&[("A", 100)], &["A", "B"])],
        );

        let idle = sheet.get("Idle").unwrap();
        assert_eq!(idle.total_paid, Decimal::ZERO);
        assert_eq!(idle.total_owed, Decimal::ZERO);
        assert_eq!(idle.net_balance, Decimal::ZERO);
    }

    #[test]
    fn test_no_expenses_gives_zero_sheet() {
        let sheet = compute_balances(&roster(&["A", "B"]), &[]);
        assert_eq!(sheet.len(), 2);
        assert!(sheet.iter().all(|b| b.net_balance.is_zero()));
    }

    #[test]
    fn test_unknown_payer_is_ignored() {
        let sheet = compute_balances(
            &roster(&["A", "B"]),
            &[expense(&[("Stranger", 100)], &["A", "B"])],
        );

        assert!(sheet.get("Stranger").is_none());
        assert_eq!(sheet.get("A").unwrap().total_paid, Decimal::ZERO);
        assert_eq!(sheet.get("A").unwrap().total_owed, Decimal::from(50));
    }

    #[test]
    fn test_unknown_participant_share_is_dropped() {
        let sheet = compute_balances(
            &roster(&["A", "B"]),
            &[expense(&[("A", 90)], &["A", "B", "Stranger"])],
        );

        // The share is still computed over all three listed participants
        assert_eq!(sheet.get("A").unwrap().total_owed, Decimal::from(30));
        assert_eq!(sheet.get("B").unwrap().total_owed, Decimal::from(30));
    }

    #[test]
    fn test_expense_without_participants_is_skipped() {
        let sheet = compute_balances(&roster(&["A", "B"]), &[expense(&[("A", 100)], &[])]);

        assert_eq!(sheet.get("A").unwrap().total_paid, Decimal::ZERO);
        assert!(sheet.iter().all(|b| b.net_balance.is_zero()));
    }

    #[test]
    fn test_accumulates_across_expenses() {
        let sheet = compute_balances(
            &roster(&["A", "B", "C"]),
            &[
                expense(&[("A", 90)], &["A", "B", "C"]),
                expense(&[("B", 40)], &["B", "C"]),
                expense(&[("C", 10)], &["A"]),
            ],
        );

        assert_eq!(sheet.get("A").unwrap().net_balance, Decimal::from(50));
        assert_eq!(sheet.get("B").unwrap().net_balance, Decimal::from(-10));
        assert_eq!(sheet.get("C").unwrap().net_balance, Decimal::from(-40));
        assert_eq!(sheet.total_net(), Decimal::ZERO);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let participants = roster(&["A", "B", "C"]);
        let expenses = vec![
            expense(&[("A", 50), ("B", 50)], &["A", "B", "C"]),
            expense(&[("C", 20)], &["A", "C"]),
        ];

        let first = compute_balances(&participants, &expenses);
        let second = compute_balances(&participants, &expenses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let participants = roster(&["A", "B"]);
        let expenses = vec![
            expense(&[("A", 30)], &["A", "B"]),
            expense(&[("B", 12)], &["A", "B"]),
        ];

        let mut calculator = BalanceCalculator::new(&participants);
        for e in &expenses {
            calculator.apply(e);
        }

        assert_eq!(calculator.finish(), compute_balances(&participants, &expenses));
    }

    #[test]
    fn test_try_apply_rejects_overflowing_running_total() {
        let participants = roster(&["A", "B"]);
        let big = ExpenseRecord::new(
            vec![PayerContribution::new("A", Decimal::MAX - Decimal::ONE)],
            ["A", "B"],
        );

        let mut calculator = BalanceCalculator::new(&participants);
        assert!(calculator.try_apply(&big).is_ok());

        let result = calculator.try_apply(&expense(&[("A", 10)], &["A", "B"]));
        assert_eq!(result, Err(SplitError::amount_overflow("total paid by A")));

        // Nothing from the rejected expense is kept, not even B's share
        let sheet = calculator.finish();
        assert_eq!(sheet.get("A").unwrap().total_paid, Decimal::MAX - Decimal::ONE);
        assert_eq!(
            sheet.get("B").unwrap().total_owed,
            (Decimal::MAX - Decimal::ONE) / Decimal::from(2)
        );
    }

    #[test]
    fn test_try_apply_rejects_overflowing_expense_total() {
        let mut calculator = BalanceCalculator::new(&roster(&["A", "B"]));
        let huge = ExpenseRecord::new(
            vec![
                PayerContribution::new("A", Decimal::MAX),
                PayerContribution::new("B", Decimal::MAX),
            ],
            ["A", "B"],
        );

        assert_eq!(
            calculator.try_apply(&huge),
            Err(SplitError::amount_overflow("expense total"))
        );
        assert!(calculator.finish().iter().all(|b| b.total_paid.is_zero()));
    }

    #[test]
    fn test_apply_skips_overflowing_expense() {
        let huge = ExpenseRecord::new(
            vec![
                PayerContribution::new("A", Decimal::MAX),
                PayerContribution::new("B", Decimal::MAX),
            ],
            ["A", "B"],
        );
        let sheet = compute_balances(
            &roster(&["A", "B"]),
            &[huge, expense(&[("A", 10)], &["A", "B"])],
        );

        assert_eq!(sheet.get("A").unwrap().net_balance, Decimal::from(5));
    }
}
