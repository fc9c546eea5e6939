pub mod card;
pub use card::*;

pub mod features;
pub use features::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
