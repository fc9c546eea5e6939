use crate::Chips;
use crate::config::Config;

/// A betting decision in the preflop abstraction.
///
/// Unlike a full no-limit engine, none of the variants carry an amount:
/// blinds and the single raise are sized by the table [`Config`], and
/// calls and shoves are sized by the state they are applied to.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
    Shove,
    SBlind,
    BBlind,
}

impl Action {
    /// Every label, in the order they are offered to a seat.
    pub const ALL: [Self; 7] = [
        Self::Fold,
        Self::Check,
        Self::Call,
        Self::Raise,
        Self::Shove,
        Self::SBlind,
        Self::BBlind,
    ];

    /// The fixed amount attached to this action.
    ///
    /// Blinds and the raise are sized by the table. Everything else is
    /// sized by the seat that takes it, so it carries no fixed amount.
    pub fn amount(&self, config: &Config) -> Chips {
        match self {
            Self::SBlind => config.sblind,
            Self::BBlind => config.bblind,
            Self::Raise => config.raise,
            _ => 0.,
        }
    }
    pub fn is_blind(&self) -> bool {
        matches!(self, Self::SBlind | Self::BBlind)
    }
    pub fn is_aggro(&self) -> bool {
        matches!(self, Self::Raise | Self::Shove)
    }
    /// The label written to sequence files.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fold => "FOLD",
            Self::Check => "CHECK",
            Self::Call => "CALL",
            Self::Raise => "BET_2",
            Self::Shove => "ALL_IN",
            Self::SBlind => "POST_SB",
            Self::BBlind => "POST_BB",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|a| a.label() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("invalid action label: {:?}", s))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_label() {
        for action in Action::ALL {
            assert_eq!(Action::try_from(action.label()).unwrap(), action);
        }
    }

    #[test]
    fn unknown_label() {
        assert!(Action::try_from("RAISE_3").is_err());
        assert!(Action::try_from("").is_err());
    }

    #[test]
    fn fixed_amounts() {
        let config = Config::default();
        assert_eq!(Action::SBlind.amount(&config), 0.5);
        assert_eq!(Action::BBlind.amount(&config), 1.0);
        assert_eq!(Action::Raise.amount(&config), 2.0);
        assert_eq!(Action::Call.amount(&config), 0.0);
        assert_eq!(Action::Shove.amount(&config), 0.0);
    }

    #[test]
    fn kinds() {
        let aggro = Action::ALL.iter().filter(|a| a.is_aggro()).count();
        let blind = Action::ALL.iter().filter(|a| a.is_blind()).count();
        assert_eq!(aggro, 2);
        assert_eq!(blind, 2);
    }
}
