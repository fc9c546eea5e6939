/// Suits, ordered the way the feature encoder lays out its suit counts.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Heart = 0,
    Diamond = 1,
    Club = 2,
    Spade = 3,
}

impl Suit {
    pub const COUNT: usize = 4;
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Heart, Self::Diamond, Self::Club, Self::Spade]
    }
}

impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Heart),
            'd' => Ok(Suit::Diamond),
            'c' => Ok(Suit::Club),
            's' => Ok(Suit::Spade),
            _ => Err(anyhow::anyhow!("invalid suit char: {:?}", c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Heart => "h",
                Suit::Diamond => "d",
                Suit::Club => "c",
                Suit::Spade => "s",
            }
        )
    }
}
