//! Participant-related types for the bill splitter
//!
//! Participants are identified by their exact name. Comparison is
//! case-sensitive and no normalization happens here; trimming and duplicate
//! detection belong to the validation layer (`core::validation`).

/// Participant name
///
/// Identity is by exact string match.
pub type ParticipantName = String;

/// Ordered list of the participants of one event
///
/// The order is significant: balance sheets list participants in roster order
/// and the settlement planner uses it to break ties between equal balances.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    names: Vec<ParticipantName>,
}

impl Roster {
    /// Create a roster from names without any validation
    ///
    /// Use [`crate::core::validation::validate_roster`] for user input.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ParticipantName>,
    {
        Roster {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[ParticipantName] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticipantName> {
        self.names.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a ParticipantName;
    type IntoIter = std::slice::Iter<'a, ParticipantName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_preserves_order() {
        let roster = Roster::new(["Carol", "Alice", "Bob"]);
        assert_eq!(roster.names(), &["Carol", "Alice", "Bob"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_roster_contains_is_case_sensitive() {
        let roster = Roster::new(["Alice"]);
        assert!(roster.contains("Alice"));
        assert!(!roster.contains("alice"));
        assert!(!roster.contains("Alice "));
    }
}
