//! Merging of strategy tables written by independent training runs.

pub mod aggregate;
pub use aggregate::*;

pub mod infoset;
pub use infoset::*;

pub mod policy;
pub use policy::*;
