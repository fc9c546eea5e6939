/// Which betting round a state belongs to.
///
/// Only the blind-posting round is played out. When it completes the state
/// moves to `Closed` instead of dealing a flop.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Preflop,
    Closed,
}

impl Phase {
    pub fn is_preflop(&self) -> bool {
        *self == Self::Preflop
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
