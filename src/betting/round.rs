use super::*;
use crate::BB_SEAT;
use crate::Chips;
use crate::Position;
use crate::SB_SEAT;
use crate::config::Config;
use std::collections::BTreeSet;

/// The state of a single preflop betting round.
///
/// `Round` is a value type: [`apply`](Self::apply) returns a new state and
/// leaves the original untouched, so a search frontier can hold any number
/// of independent snapshots without undo logic.
///
/// # Fields
///
/// - `config` — Table parameters (seat count, blinds, raise, stacks)
/// - `seats` — Per-player stack, stake and last action
/// - `active` — Seats that have not folded, in seat order
/// - `ticker` — Seat whose turn it is while the round is open
/// - `bet` — Stake every active seat must reach to stay in
/// - `phase` — Preflop until the round completes
/// - `terminal` — Set once the round is decided
/// - `history` — Every action applied since the first blind
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    config: Config,
    seats: Vec<Seat>,
    active: BTreeSet<Position>,
    ticker: Position,
    bet: Chips,
    phase: Phase,
    terminal: bool,
    history: Vec<Action>,
}

impl Default for Round {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

/// The root of the search: blinds unposted, every stack full.
impl From<Config> for Round {
    fn from(config: Config) -> Self {
        Self {
            seats: vec![Seat::from(config.stack); config.seats],
            active: (0..config.seats).collect(),
            ticker: SB_SEAT,
            bet: 0.,
            phase: Phase::Preflop,
            terminal: false,
            history: Vec::new(),
            config,
        }
    }
}

/// Public state accessors.
impl Round {
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn active(&self) -> &BTreeSet<Position> {
        &self.active
    }
    /// The current bet every active seat must match.
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// Total chips committed this round, folded seats included.
    pub fn pot(&self) -> Chips {
        self.seats.iter().map(|s| s.stake()).sum()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
    pub fn turn(&self) -> Turn {
        if self.terminal {
            Turn::Terminal
        } else {
            Turn::Choice(self.ticker)
        }
    }
    /// The seat to act, or `None` once the round is decided.
    pub fn seat_to_act(&self) -> Option<Position> {
        self.turn().position()
    }
    /// The seat of the player to act.
    pub fn actor(&self) -> &Seat {
        self.actor_ref()
    }
}

/// Action validation and application.
impl Round {
    /// Returns all legal actions in the current state.
    ///
    /// Empty once the round is decided. Exactly one action while a blind
    /// is owed. Otherwise the options come out as fold-or-check, call,
    /// raise, shove.
    pub fn legal(&self) -> Vec<Action> {
        if self.terminal {
            return vec![];
        }
        if self.must_post_sblind() {
            return vec![Action::SBlind];
        }
        if self.must_post_bblind() {
            return vec![Action::BBlind];
        }
        let mut options = Vec::new();
        if self.may_check() {
            options.push(Action::Check);
        } else {
            options.push(Action::Fold);
        }
        if self.may_call() {
            options.push(Action::Call);
        }
        if self.may_raise() {
            options.push(Action::Raise);
        }
        if self.may_shove() {
            options.push(Action::Shove);
        }
        options
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.legal().contains(action)
    }
    /// Returns a new round with the action applied.
    ///
    /// Panics if the action is not legal in the current state. Use
    /// [`try_apply`](Self::try_apply) to get the error instead.
    pub fn apply(&self, action: Action) -> Self {
        match self.try_apply(action) {
            Ok(child) => child,
            Err(e) => panic!("{}", e),
        }
    }
    /// Fallible version of [`apply`](Self::apply).
    pub fn try_apply(&self, action: Action) -> Result<Self, RoundError> {
        if !self.is_allowed(&action) {
            return Err(RoundError::IllegalAction {
                seat: self.ticker,
                action,
            });
        }
        let mut child = self.clone();
        child.act(action)?;
        Ok(child)
    }
}

/// Private mutation methods.
impl Round {
    fn act(&mut self, action: Action) -> Result<(), RoundError> {
        debug_assert!(self.is_allowed(&action));
        let amount = action.amount(&self.config);
        self.actor_mut().reset_last(action);
        self.history.push(action);
        match action {
            Action::Check => {}
            Action::Fold => self.fold(),
            Action::Call => self.call(),
            Action::Shove => self.shove(),
            Action::Raise => self.raise(amount),
            Action::SBlind | Action::BBlind => self.post(amount),
        }
        if self.terminal || self.is_complete() {
            self.close();
            Ok(())
        } else {
            self.next_player()
        }
    }
    fn fold(&mut self) {
        self.active.remove(&self.ticker);
        if self.active.len() == 1 {
            self.terminal = true;
        }
    }
    fn call(&mut self) {
        let bet = self.bet;
        self.actor_mut().match_to(bet);
    }
    fn raise(&mut self, size: Chips) {
        self.bet = size;
        self.actor_mut().match_to(size);
    }
    fn post(&mut self, blind: Chips) {
        self.actor_mut().bet(blind);
        self.bet = self.bet.max(blind);
    }
    fn shove(&mut self) {
        self.actor_mut().shove();
        self.bet = self.bet.max(self.actor_ref().stake());
    }
    fn close(&mut self) {
        self.terminal = true;
        self.phase = Phase::Closed;
    }
    /// Lowest active seat after the current one, wrapping around. A seat
    /// that just folded hands the turn to the lowest active seat.
    fn next_player(&mut self) -> Result<(), RoundError> {
        let lowest = *self.active.first().ok_or(RoundError::NoActiveSeats)?;
        self.ticker = if self.active.contains(&self.ticker) {
            self.active
                .range(self.ticker + 1..)
                .next()
                .copied()
                .unwrap_or(lowest)
        } else {
            lowest
        };
        Ok(())
    }
}

/// Termination predicates.
impl Round {
    /// True once the betting round is over: every active seat is all-in,
    /// or every active seat is in for the same amount and has acted.
    pub fn is_complete(&self) -> bool {
        self.is_everyone_shoving() || (self.is_everyone_matched() && self.is_everyone_touched())
    }
    /// All active seats have nothing behind.
    fn is_everyone_shoving(&self) -> bool {
        self.active.iter().all(|&i| self.seats[i].is_shoved())
    }
    /// All active seats are in for the same amount.
    fn is_everyone_matched(&self) -> bool {
        let mut stakes = self.active.iter().map(|&i| self.seats[i].stake());
        match stakes.next() {
            Some(first) => stakes.all(|stake| stake == first),
            None => true,
        }
    }
    /// Both blinds are in and every active seat has acted since.
    ///
    /// Posting a blind from its own seat counts as acting; a seat that has
    /// not acted, or holds a blind it does not own, has not.
    fn is_everyone_touched(&self) -> bool {
        if !self.phase.is_preflop() {
            return true;
        }
        self.is_everyone_posted() && self.active.iter().all(|&i| self.has_acted(i))
    }
    fn is_everyone_posted(&self) -> bool {
        self.seats[SB_SEAT].stake() >= self.config.sblind
            && self.seats[BB_SEAT].stake() >= self.config.bblind
    }
    fn has_acted(&self, position: Position) -> bool {
        match self.seats[position].last() {
            None => false,
            Some(Action::SBlind) => position == SB_SEAT,
            Some(Action::BBlind) => position == BB_SEAT,
            Some(_) => true,
        }
    }
}

/// Legality predicates for the seat to act.
impl Round {
    /// Small blind seat is first to act on an empty pot.
    fn must_post_sblind(&self) -> bool {
        self.phase.is_preflop() && self.ticker == SB_SEAT && self.pot() == 0.
    }
    /// Big blind seat is next, facing only the small blind.
    fn must_post_bblind(&self) -> bool {
        self.phase.is_preflop() && self.ticker == BB_SEAT && self.pot() == self.config.sblind
    }
    fn may_check(&self) -> bool {
        self.actor_ref().stake() == self.bet
    }
    fn may_call(&self) -> bool {
        self.to_call() > 0. && self.actor_ref().stack() >= self.to_call()
    }
    /// The single raise size is only reachable once, from below.
    fn may_raise(&self) -> bool {
        self.bet > 0. && self.actor_ref().stack() > self.config.raise && self.bet < self.config.raise
    }
    fn may_shove(&self) -> bool {
        self.actor_ref().stack() > 0.
    }
    /// Chips needed to call the current bet.
    pub fn to_call(&self) -> Chips {
        self.bet - self.actor_ref().stake()
    }
    fn actor_ref(&self) -> &Seat {
        &self.seats[self.ticker]
    }
    fn actor_mut(&mut self) -> &mut Seat {
        &mut self.seats[self.ticker]
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, seat) in self.seats.iter().enumerate() {
            let mark = if self.active.contains(&i) { ' ' } else { 'x' };
            writeln!(f, "{}{} {}", mark, i, seat)?;
        }
        write!(f, "{} @ {:.1} {} [", self.turn(), self.bet, self.phase)?;
        for (i, action) in self.history.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", action)?;
        }
        write!(f, "]")
    }
}
