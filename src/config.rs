use crate::Chips;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Table parameters for one enumeration run.
///
/// Every field falls back to the crate defaults, so a JSON file only has to
/// name the values it overrides:
///
/// ```json
/// { "stack": 20.0, "raise": 2.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seats: usize,
    pub stack: Chips,
    pub sblind: Chips,
    pub bblind: Chips,
    pub raise: Chips,
    /// upper bound on queued states
    pub frontier: usize,
    /// upper bound on dequeued states
    pub visits: usize,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("need at least 2 seats, got {0}")]
    TooFewSeats(usize),
    #[error("{name} must be positive and finite, got {value}")]
    BadAmount { name: &'static str, value: Chips },
    #[error("small blind {sblind} exceeds big blind {bblind}")]
    InvertedBlinds { sblind: Chips, bblind: Chips },
    #[error("starting stack {stack} cannot cover the big blind {bblind}")]
    ShortStack { stack: Chips, bblind: Chips },
    #[error("search limits must be non-zero")]
    NoBudget,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seats: crate::N,
            stack: crate::STACK,
            sblind: crate::S_BLIND,
            bblind: crate::B_BLIND,
            raise: crate::RAISE,
            frontier: crate::MAX_FRONTIER,
            visits: crate::MAX_VISITS,
        }
    }
}

impl Config {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats < 2 {
            return Err(ConfigError::TooFewSeats(self.seats));
        }
        for (name, value) in [
            ("stack", self.stack),
            ("sblind", self.sblind),
            ("bblind", self.bblind),
            ("raise", self.raise),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::BadAmount { name, value });
            }
        }
        if self.sblind > self.bblind {
            return Err(ConfigError::InvertedBlinds {
                sblind: self.sblind,
                bblind: self.bblind,
            });
        }
        if self.stack < self.bblind {
            return Err(ConfigError::ShortStack {
                stack: self.stack,
                bblind: self.bblind,
            });
        }
        if self.frontier == 0 || self.visits == 0 {
            return Err(ConfigError::NoBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.seats, 3);
        assert_eq!(config.stack, 15.0);
        assert_eq!(config.sblind, 0.5);
        assert_eq!(config.bblind, 1.0);
        assert_eq!(config.raise, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = serde_json::from_str::<Config>(r#"{ "stack": 20.0 }"#).unwrap();
        assert_eq!(config.stack, 20.0);
        assert_eq!(config.seats, 3);
        assert_eq!(config.raise, 2.0);
    }

    #[test]
    fn rejects_bad_tables() {
        let base = Config::default();
        let one = Config { seats: 1, ..base };
        let neg = Config { raise: -2.0, ..base };
        let inv = Config { sblind: 2.0, ..base };
        let short = Config { stack: 0.5, ..base };
        assert_eq!(one.validate(), Err(ConfigError::TooFewSeats(1)));
        assert!(matches!(neg.validate(), Err(ConfigError::BadAmount { name: "raise", .. })));
        assert!(matches!(inv.validate(), Err(ConfigError::InvertedBlinds { .. })));
        assert!(matches!(short.validate(), Err(ConfigError::ShortStack { .. })));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join("spingo-config-load.json");
        std::fs::write(&path, r#"{ "seats": 4, "bblind": 2.0, "sblind": 1.0 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.seats, 4);
        assert_eq!(config.bblind, 2.0);
        assert_eq!(config.stack, 15.0);
    }
}
