pub mod enumerator;
pub use enumerator::*;

pub mod error;
pub use error::*;

pub mod sequence;
pub use sequence::*;

pub mod uniqueness;
pub use uniqueness::*;
