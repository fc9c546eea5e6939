use super::rank::Rank;
use super::suit::Suit;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Parses whitespace-separated cards, e.g. `"Ah Kd"`.
    pub fn parse_many(s: &str) -> anyhow::Result<Vec<Self>> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// str isomorphism
/// rank char followed by suit char
/// Ts
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                suit: Suit::try_from(u)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card str: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for rank in Rank::all() {
            for suit in Suit::all() {
                let card = Card::from((rank, suit));
                assert_eq!(Card::try_from(card.to_string().as_str()).unwrap(), card);
            }
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Card::try_from("A").is_err());
        assert!(Card::try_from("Ahh").is_err());
        assert!(Card::try_from("1h").is_err());
        assert!(Card::try_from("Ax").is_err());
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse_many("Ah  Td 2c").unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].rank(), Rank::Ten);
        assert_eq!(cards[2].suit(), Suit::Club);
        assert!(Card::parse_many("Ah Zz").is_err());
    }
}
