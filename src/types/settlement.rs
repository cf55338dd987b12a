//! Settlement type for the bill splitter

use super::participant::ParticipantName;
use rust_decimal::Decimal;

/// A suggested payment from a debtor to a creditor
///
/// `from` should pay `amount` to `to`. Amounts are rounded to cents and
/// always positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Debtor
    pub from: ParticipantName,

    /// Creditor
    pub to: ParticipantName,

    /// Amount to transfer
    pub amount: Decimal,
}

impl Settlement {
    pub fn new(
        from: impl Into<ParticipantName>,
        to: impl Into<ParticipantName>,
        amount: Decimal,
    ) -> Self {
        Settlement {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}
