use super::*;
use crate::betting::Round;
use crate::config::Config;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

/// Breadth-first walk over every line of play in one betting round.
///
/// Starting from the root [`Round`], each dequeued state is either recorded
/// (if decided) or expanded into one child per legal action. Children are
/// independent clones, so the frontier never shares state between branches.
///
/// Recorded sequences are deduplicated: many terminal states collapse onto
/// the same label sequence once the closing action is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enumerator {
    config: Config,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Enumerator {
    pub fn new(config: Config) -> Result<Self, EnumerationError> {
        config.validate()?;
        Ok(Self { config })
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn root(&self) -> Round {
        Round::from(self.config)
    }

    /// Runs the search to completion and collects every unique sequence.
    pub fn run(&self) -> Result<Enumeration, EnumerationError> {
        self.run_with(|_| Ok(()))
    }

    /// Runs the search, handing each sequence to `sink` the first time it
    /// is discovered. The sink only observes; it cannot steer the search.
    pub fn run_with<F>(&self, mut sink: F) -> Result<Enumeration, EnumerationError>
    where
        F: FnMut(&Sequence) -> std::io::Result<()>,
    {
        let mut found = Enumeration::default();
        let mut seen = HashSet::<Sequence>::new();
        let mut frontier = VecDeque::from([self.root()]);
        while let Some(round) = frontier.pop_front() {
            found.visited += 1;
            if found.visited > self.config.visits {
                return Err(EnumerationError::VisitLimit(self.config.visits));
            }
            if round.is_terminal() {
                found.terminals += 1;
                let sequence = Sequence::from(&round);
                if seen.insert(sequence.clone()) {
                    log::debug!("{:>6} {}", found.sequences.len() + 1, sequence);
                    sink(&sequence)?;
                    found.sequences.push(sequence);
                }
                continue;
            }
            for action in round.legal() {
                frontier.push_back(round.try_apply(action)?);
            }
            if frontier.len() > self.config.frontier {
                return Err(EnumerationError::FrontierOverflow(self.config.frontier));
            }
        }
        log::info!(
            "visited {} states, {} terminal, {} unique sequences",
            found.visited,
            found.terminals,
            found.count()
        );
        Ok(found)
    }

    /// Runs the search and streams each new sequence to `path`, one per
    /// line. The file is truncated first.
    pub fn write_to(&self, path: impl AsRef<Path>) -> anyhow::Result<Enumeration> {
        use anyhow::Context;
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("create sequence file {}", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        let found = self
            .run_with(|sequence| writeln!(writer, "{}", sequence))
            .with_context(|| format!("enumerate into {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("flush sequence file {}", path.display()))?;
        log::info!("wrote {} sequences to {}", found.count(), path.display());
        Ok(found)
    }
}

/// Outcome of one search: unique sequences in discovery order plus
/// traversal counters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Enumeration {
    sequences: Vec<Sequence>,
    visited: usize,
    terminals: usize,
}

impl Enumeration {
    /// Number of unique sequences.
    pub fn count(&self) -> usize {
        self.sequences.len()
    }
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }
    /// States dequeued, decided or not.
    pub fn visited(&self) -> usize {
        self.visited
    }
    /// Decided states dequeued, duplicates included.
    pub fn terminals(&self) -> usize {
        self.terminals
    }
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.sequences.contains(sequence)
    }
}

impl std::fmt::Display for Enumeration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Total number of unique preflop action sequences: {}",
            self.count()
        )
    }
}
