use crate::betting::Action;
use crate::betting::Round;

/// An ordered run of action labels, as recorded by the enumerator.
///
/// Displayed as space-separated labels, which is also the line format of
/// sequence files.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Vec<Action>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
    /// True if `self` is a prefix of `history`.
    pub fn leads(&self, history: &[Action]) -> bool {
        history.starts_with(&self.0)
    }
}

/// The label sequence recorded for a decided round: its history minus the
/// action that closed it.
impl From<&Round> for Sequence {
    fn from(round: &Round) -> Self {
        let history = round.history();
        let n = history.len().saturating_sub(1);
        Self(history[..n].to_vec())
    }
}

impl From<Vec<Action>> for Sequence {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Action::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self.0.iter().map(|a| a.label()).collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_closing_action() {
        let round = Round::default()
            .apply(Action::SBlind)
            .apply(Action::BBlind)
            .apply(Action::Fold)
            .apply(Action::Fold);
        assert!(round.is_terminal());
        let sequence = Sequence::from(&round);
        assert_eq!(sequence.to_string(), "POST_SB POST_BB FOLD");
        assert!(sequence.leads(round.history()));
        assert_eq!(sequence.len() + 1, round.history().len());
    }

    #[test]
    fn empty_history() {
        assert!(Sequence::from(&Round::default()).is_empty());
    }

    #[test]
    fn parse_line() {
        let line = "POST_SB POST_BB CALL BET_2 ALL_IN FOLD";
        let sequence = Sequence::try_from(line).unwrap();
        assert_eq!(sequence.len(), 6);
        assert_eq!(sequence.actions()[3], Action::Raise);
        assert_eq!(sequence.to_string(), line);
        assert!(Sequence::try_from("POST_SB LIMP").is_err());
    }
}
