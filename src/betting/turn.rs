use crate::Position;

/// Whose move it is.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Choice(Position),
}

impl Turn {
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Choice(c) => Some(*c),
            Self::Terminal => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "XX"),
        }
    }
}

impl TryFrom<&str> for Turn {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "XX" => Ok(Self::Terminal),
            turn => match turn.strip_prefix('P') {
                Some(n) => n
                    .parse::<Position>()
                    .map(Self::Choice)
                    .map_err(|_| "invalid player turn"),
                None => Err("invalid turn input"),
            },
        }
    }
}
