//! Per-cluster equity summaries for clustered hand tables.

pub mod equity;
pub use equity::*;
