use super::action::Action;
use crate::Position;

/// Rule violations raised by [`Round`](super::Round).
///
/// Both variants indicate a defect in the caller or in the state machine
/// itself, never a recoverable game situation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("illegal action {action} for seat {seat}")]
    IllegalAction { seat: Position, action: Action },
    #[error("no active seats left to act")]
    NoActiveSeats,
}
