use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Flat numeric encoding of a hole + board card multiset.
///
/// Layout (21 entries):
/// - 13 rank counts, Two through Ace
/// - 4 suit counts, hearts diamonds clubs spades
/// - has a pair, has trips, has quads (0 or 1)
/// - number of aces
///
/// The pair/trips/quads flags look for a rank with exactly that many
/// cards, so quads alone do not set the pair flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Features([u8; Self::LEN]);

impl Features {
    pub const LEN: usize = Rank::COUNT + Suit::COUNT + 4;

    pub fn ranks(&self) -> &[u8] {
        &self.0[..Rank::COUNT]
    }
    pub fn suits(&self) -> &[u8] {
        &self.0[Rank::COUNT..Rank::COUNT + Suit::COUNT]
    }
    pub fn has_pair(&self) -> bool {
        self.0[Rank::COUNT + Suit::COUNT] == 1
    }
    pub fn has_trips(&self) -> bool {
        self.0[Rank::COUNT + Suit::COUNT + 1] == 1
    }
    pub fn has_quads(&self) -> bool {
        self.0[Rank::COUNT + Suit::COUNT + 2] == 1
    }
    pub fn aces(&self) -> u8 {
        self.0[Self::LEN - 1]
    }
}

impl From<(&[Card], &[Card])> for Features {
    fn from((hole, board): (&[Card], &[Card])) -> Self {
        let mut ranks = [0u8; Rank::COUNT];
        let mut suits = [0u8; Suit::COUNT];
        for card in hole.iter().chain(board.iter()) {
            ranks[u8::from(card.rank()) as usize] += 1;
            suits[u8::from(card.suit()) as usize] += 1;
        }
        let mut features = [0u8; Self::LEN];
        features[..Rank::COUNT].copy_from_slice(&ranks);
        features[Rank::COUNT..Rank::COUNT + Suit::COUNT].copy_from_slice(&suits);
        for (i, n) in [2, 3, 4].into_iter().enumerate() {
            features[Rank::COUNT + Suit::COUNT + i] = ranks.contains(&n) as u8;
        }
        features[Self::LEN - 1] = ranks[Rank::Ace as usize];
        Self(features)
    }
}

impl From<Features> for Vec<u8> {
    fn from(features: Features) -> Self {
        features.0.to_vec()
    }
}

impl std::fmt::Display for Features {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cells = self.0.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cells.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(hole: &str, board: &str) -> Features {
        let hole = Card::parse_many(hole).unwrap();
        let board = Card::parse_many(board).unwrap();
        Features::from((hole.as_slice(), board.as_slice()))
    }

    #[test]
    fn quad_aces_with_two_pair_board() {
        let features = encode("Ah Ad", "Ac As 3c 3h 2d");
        assert_eq!(
            Vec::from(features),
            vec![1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 2, 2, 2, 1, 1, 0, 1, 4]
        );
        assert!(features.has_pair());
        assert!(!features.has_trips());
        assert!(features.has_quads());
        assert_eq!(features.aces(), 4);
    }

    #[test]
    fn quads_alone_is_not_a_pair() {
        let features = encode("Ah Ad", "Ac As 3c 3h");
        assert_eq!(features.ranks()[1], 2);
        assert_eq!(features.suits(), &[2, 1, 2, 1]);
        assert!(features.has_pair());
        let features = encode("Ah Ad", "Ac As");
        assert!(!features.has_pair());
        assert!(features.has_quads());
    }

    #[test]
    fn empty_board() {
        let features = encode("Kh Qh", "");
        assert_eq!(features.ranks().iter().sum::<u8>(), 2);
        assert_eq!(features.suits(), &[2, 0, 0, 0]);
        assert!(!features.has_pair());
        assert_eq!(features.aces(), 0);
        assert_eq!(features.to_string().split(' ').count(), Features::LEN);
    }
}
