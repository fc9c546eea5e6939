use super::action::Action;
use crate::Chips;

/// A player's position in the betting round.
///
/// # Fields
///
/// - `stack` — Chips behind (not yet committed)
/// - `stake` — Chips committed this round
/// - `last` — Most recent action taken from this seat, if any
///
/// Whether the seat is still contesting the pot is tracked by the
/// round's active set, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seat {
    stack: Chips,
    stake: Chips,
    last: Option<Action>,
}

impl From<Chips> for Seat {
    fn from(stack: Chips) -> Self {
        Self {
            stack,
            stake: 0.,
            last: None,
        }
    }
}

impl Seat {
    /// Chips behind (not committed to pot).
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips committed this round.
    pub fn stake(&self) -> Chips {
        self.stake
    }
    /// Most recent action, `None` before the seat has acted.
    pub fn last(&self) -> Option<Action> {
        self.last
    }
    /// No chips behind.
    pub fn is_shoved(&self) -> bool {
        self.stack == 0.
    }
    /// Commits chips from stack to pot.
    pub fn bet(&mut self, bet: Chips) {
        debug_assert!(bet <= self.stack);
        self.stack -= bet;
        self.stake += bet;
    }
    /// Tops the stake up to `level`, paying the difference from the stack.
    pub fn match_to(&mut self, level: Chips) {
        let shortfall = level - self.stake;
        if shortfall > 0. {
            self.bet(shortfall);
        }
    }
    /// Commits everything behind.
    pub fn shove(&mut self) {
        self.bet(self.stack);
    }
    pub fn reset_last(&mut self, action: Action) {
        self.last = Some(action);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>7} {:>5} {}",
            format!("${:.1}", self.stack),
            format!("{:.1}", self.stake),
            self.last.map(|a| a.label()).unwrap_or("-")
        )
    }
}
