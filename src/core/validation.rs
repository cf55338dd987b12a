//! Input validation for rosters and expenses
//!
//! The balance calculator and settlement planner trust their inputs. This
//! module is the boundary that enforces the event rules before anything
//! reaches them:
//!
//! - a roster has between [`MIN_PARTICIPANTS`] and [`MAX_PARTICIPANTS`]
//!   distinct, non-blank names (compared case-insensitively)
//! - an expense has at least one payer and one participant
//! - every payer amount is strictly positive and their sum fits in a `Decimal`
//! - every payer and participant is on the roster
//! - no payer or participant is listed twice

use crate::types::{ExpenseRecord, PayerContribution, Roster, SplitError};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Fewest participants an event can have
pub const MIN_PARTICIPANTS: usize = 2;

/// Most participants an event can have
pub const MAX_PARTICIPANTS: usize = 10;

/// Build a roster from user-entered names
///
/// Names are trimmed and blank entries dropped before counting.
///
/// # Errors
///
/// - `DuplicateParticipant` if two names differ only in case or padding
/// - `TooFewParticipants` / `TooManyParticipants` outside the allowed range
///
/// # Examples
///
/// ```
/// use bill_splitter::core::validate_roster;
///
/// let roster = validate_roster([" Ana ", "Ben", ""]).unwrap();
/// assert_eq!(roster.names(), &["Ana".to_string(), "Ben".to_string()]);
///
/// assert!(validate_roster(["Ana", "ana"]).is_err());
/// ```
pub fn validate_roster<I, S>(names: I) -> Result<Roster, SplitError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(SplitError::duplicate_participant(name));
        }
        cleaned.push(name.to_string());
    }

    if cleaned.len() < MIN_PARTICIPANTS {
        return Err(SplitError::TooFewParticipants {
            count: cleaned.len(),
            min: MIN_PARTICIPANTS,
        });
    }
    if cleaned.len() > MAX_PARTICIPANTS {
        return Err(SplitError::TooManyParticipants {
            count: cleaned.len(),
            max: MAX_PARTICIPANTS,
        });
    }

    Ok(Roster::new(cleaned))
}

/// Collapse payer contributions to one entry per name
///
/// Names are trimmed, blank names dropped, and amounts of repeated names
/// summed. The first occurrence fixes each payer's position. A repeat whose
/// sum would overflow is kept as a separate entry.
pub fn merge_payers<I>(payers: I) -> Vec<PayerContribution>
where
    I: IntoIterator<Item = PayerContribution>,
{
    let mut merged: Vec<PayerContribution> = Vec::new();

    for payer in payers {
        let name = payer.name.trim();
        if name.is_empty() {
            continue;
        }
        let existing = merged.iter_mut().find(|p| p.name == name);
        match existing.and_then(|p| p.amount.checked_add(payer.amount).map(|sum| (p, sum))) {
            Some((existing, sum)) => existing.amount = sum,
            // New name, or a sum out of range: left for validate_expense to report
            None => merged.push(PayerContribution::new(name, payer.amount)),
        }
    }

    merged
}

/// Check an expense against the event roster
///
/// # Errors
///
/// Returns the first rule the expense breaks, checking payers before
/// participants.
pub fn validate_expense(roster: &Roster, expense: &ExpenseRecord) -> Result<(), SplitError> {
    if expense.payers.is_empty() {
        return Err(SplitError::EmptyPayers);
    }
    if expense.participants.is_empty() {
        return Err(SplitError::EmptyParticipants);
    }

    let mut payers = HashSet::new();
    for payer in &expense.payers {
        if payer.amount <= Decimal::ZERO {
            return Err(SplitError::non_positive_amount(&payer.name, payer.amount));
        }
        if !roster.contains(&payer.name) {
            return Err(SplitError::unknown_payer(&payer.name));
        }
        if !payers.insert(payer.name.as_str()) {
            return Err(SplitError::duplicate_payer(&payer.name));
        }
    }
    if expense.total_amount().is_none() {
        return Err(SplitError::amount_overflow("expense total"));
    }

    let mut participants = HashSet::new();
    for participant in &expense.participants {
        if !roster.contains(participant) {
            return Err(SplitError::unknown_participant(participant));
        }
        if !participants.insert(participant.as_str()) {
            return Err(SplitError::duplicate_participant(participant));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roster() -> Roster {
        Roster::new(["Ana", "Ben", "Cy"])
    }

    fn payer(name: &str, amount: i64) -> PayerContribution {
        PayerContribution::new(name, Decimal::from(amount))
    }

    #[test]
    fn test_validate_roster_trims_and_drops_blanks() {
        let roster = validate_roster(["  Ana", "Ben  ", "   ", "Cy"]).unwrap();
        assert_eq!(roster.names(), &["Ana", "Ben", "Cy"]);
    }

    #[rstest]
    #[case::exact_duplicate(vec!["Ana", "Ana"], SplitError::duplicate_participant("Ana"))]
    #[case::case_insensitive(vec!["Ana", "ANA"], SplitError::duplicate_participant("ANA"))]
    #[case::padded_duplicate(vec!["Ana", " Ana "], SplitError::duplicate_participant("Ana"))]
    #[case::single(vec!["Ana"], SplitError::TooFewParticipants { count: 1, min: 2 })]
    #[case::blank_only(vec!["", " "], SplitError::TooFewParticipants { count: 0, min: 2 })]
    #[case::too_many(
        vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"],
        SplitError::TooManyParticipants { count: 11, max: 10 }
    )]
    fn test_validate_roster_rejects(#[case] names: Vec<&str>, #[case] expected: SplitError) {
        assert_eq!(validate_roster(names), Err(expected));
    }

    #[test]
    fn test_validate_roster_accepts_bounds() {
        assert!(validate_roster(["a", "b"]).is_ok());
        let ten: Vec<String> = (0..10).map(|i| format!("p{}", i)).collect();
        assert_eq!(validate_roster(&ten).unwrap().len(), 10);
    }

    #[test]
    fn test_merge_payers_sums_repeated_names() {
        let merged = merge_payers(vec![
            payer("Ben", 10),
            payer(" Ana ", 5),
            payer("Ben", 15),
            payer("  ", 99),
        ]);

        assert_eq!(merged, vec![payer("Ben", 25), payer("Ana", 5)]);
    }

    #[test]
    fn test_merge_payers_keeps_overflowing_repeat_apart() {
        let merged = merge_payers(vec![
            PayerContribution::new("Ana", Decimal::MAX),
            PayerContribution::new("Ana", Decimal::ONE),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(
            validate_expense(&roster(), &ExpenseRecord::new(merged, ["Ana"])),
            Err(SplitError::duplicate_payer("Ana"))
        );
    }

    #[test]
    fn test_merge_payers_empty() {
        assert!(merge_payers(Vec::new()).is_empty());
    }

    #[test]
    fn test_valid_expense_passes() {
        let expense = ExpenseRecord::new(vec![payer("Ana", 30), payer("Ben", 20)], ["Ana", "Cy"]);
        assert_eq!(validate_expense(&roster(), &expense), Ok(()));
    }

    #[rstest]
    #[case::no_payers(vec![], vec!["Ana"], SplitError::EmptyPayers)]
    #[case::no_participants(vec![payer("Ana", 10)], vec![], SplitError::EmptyParticipants)]
    #[case::zero_amount(
        vec![payer("Ana", 0)],
        vec!["Ana"],
        SplitError::non_positive_amount("Ana", Decimal::ZERO)
    )]
    #[case::negative_amount(
        vec![payer("Ana", -5)],
        vec!["Ana"],
        SplitError::non_positive_amount("Ana", Decimal::from(-5))
    )]
    #[case::unknown_payer(vec![payer("Zed", 10)], vec!["Ana"], SplitError::unknown_payer("Zed"))]
    #[case::payer_case_differs(
        vec![payer("ana", 10)],
        vec!["Ana"],
        SplitError::unknown_payer("ana")
    )]
    #[case::duplicate_payer(
        vec![payer("Ana", 10), payer("Ana", 5)],
        vec!["Ana"],
        SplitError::duplicate_payer("Ana")
    )]
    #[case::unknown_participant(
        vec![payer("Ana", 10)],
        vec!["Ana", "Zed"],
        SplitError::unknown_participant("Zed")
    )]
    #[case::duplicate_participant(
        vec![payer("Ana", 10)],
        vec!["Ben", "Ben"],
        SplitError::duplicate_participant("Ben")
    )]
    #[case::total_overflows(
        vec![
            PayerContribution::new("Ana", Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0)),
            PayerContribution::new("Ben", Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0)),
        ],
        vec!["Ana", "Ben"],
        SplitError::amount_overflow("expense total")
    )]
    fn test_invalid_expense(
        #[case] payers: Vec<PayerContribution>,
        #[case] participants: Vec<&str>,
        #[case] expected: SplitError,
    ) {
        let expense = ExpenseRecord::new(payers, participants);
        assert_eq!(validate_expense(&roster(), &expense), Err(expected));
    }

    #[test]
    fn test_merged_payers_pass_validation() {
        let expense = ExpenseRecord::new(
            merge_payers(vec![payer("Ana", 10), payer("Ana", 5)]),
            ["Ana", "Ben"],
        );
        assert!(validate_expense(&roster(), &expense).is_ok());
        assert_eq!(expense.total_amount(), Some(Decimal::from(15)));
    }
}
