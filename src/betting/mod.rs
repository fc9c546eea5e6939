pub mod action;
pub use action::*;

pub mod error;
pub use error::*;

pub mod phase;
pub use phase::*;

pub mod round;
pub use round::*;

pub mod seat;
pub use seat::*;

pub mod turn;
pub use turn::*;
