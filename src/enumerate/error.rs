use crate::betting::RoundError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("invalid table: {0}")]
    Config(#[from] ConfigError),
    #[error("state machine fault: {0}")]
    Round(#[from] RoundError),
    #[error("search frontier exceeded {0} states")]
    FrontierOverflow(usize),
    #[error("search visited more than {0} states")]
    VisitLimit(usize),
    #[error("failed to record sequence: {0}")]
    Sink(#[from] std::io::Error),
}
