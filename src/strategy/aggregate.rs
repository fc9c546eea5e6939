use super::*;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Header shared by every strategy table, input and output.
pub const HEADER: &str =
    "Round,Player,Abstraction,PreviousActions,Strategy,CumulatedPot,StrategyUpdateCount";

/// One parsed line of a strategy table.
///
/// `updates` has already had the initialization count removed: a table
/// written by the trainer counts every infoset once at creation, so a raw
/// count of `n` stands for `n - 1` real updates (never below zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub infoset: Infoset,
    pub policy: Policy,
    pub updates: u64,
}

impl TryFrom<&str> for Row {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let cols = line.split(',').collect::<Vec<_>>();
        if cols.len() < 7 {
            anyhow::bail!("expected 7 columns, found {}", cols.len());
        }
        let raw = cols[6]
            .trim()
            .parse::<i64>()
            .with_context(|| format!("bad update count {:?}", cols[6]))?;
        Ok(Self {
            infoset: Infoset {
                round: cols[0].to_string(),
                player: cols[1].to_string(),
                abstraction: cols[2].to_string(),
                history: cols[3].to_string(),
                pot: cols[5].to_string(),
            },
            policy: Policy::try_from(cols[4])?,
            updates: raw.saturating_sub(1).max(0) as u64,
        })
    }
}

/// Count-weighted merge of strategy tables from independent training runs.
///
/// The first occurrence of an infoset seeds its entry. Every later
/// occurrence is folded in with [`Policy::merge`], weighted by update
/// counts, and its count is added to the entry's total.
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    table: BTreeMap<String, Row>,
    skipped: usize,
}

impl Aggregator {
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    /// Rows rejected so far across all inputs.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
    pub fn get(&self, infoset: &Infoset) -> Option<&Row> {
        self.table.get(&infoset.key())
    }

    pub fn absorb(&mut self, row: Row) {
        match self.table.get_mut(&row.infoset.key()) {
            None => {
                self.table.insert(row.infoset.key(), row);
            }
            Some(entry) => {
                entry.policy.merge(&row.policy, entry.updates, row.updates);
                entry.updates += row.updates;
            }
        }
    }

    /// Absorbs every row after the header. Malformed rows are logged and
    /// skipped; only a read failure aborts.
    pub fn absorb_reader<R: BufRead>(&mut self, reader: R, name: &str) -> std::io::Result<()> {
        for (i, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Row::try_from(line.as_str()) {
                Ok(row) => self.absorb(row),
                Err(e) => {
                    self.skipped += 1;
                    log::warn!("{}:{} skipping row: {:#}", name, i + 1, e);
                }
            }
        }
        Ok(())
    }

    pub fn absorb_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        log::info!("processing file: {}", path.display());
        let file = std::fs::File::open(path)
            .with_context(|| format!("open strategy table {}", path.display()))?;
        self.absorb_reader(std::io::BufReader::new(file), &path.display().to_string())
            .with_context(|| format!("read strategy table {}", path.display()))
    }

    /// Absorbs each file in turn. A file that cannot be read is logged and
    /// left out of the merge.
    pub fn absorb_files<P: AsRef<Path>>(&mut self, paths: &[P]) {
        for path in paths {
            if let Err(e) = self.absorb_file(path) {
                log::error!("{:#}", e);
            }
        }
    }

    /// Writes the merged table. Counts get the initialization count back.
    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", HEADER)?;
        for row in self.table.values() {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                row.infoset.round,
                row.infoset.player,
                row.infoset.abstraction,
                row.infoset.history,
                row.policy,
                row.infoset.pot,
                row.updates + 1
            )?;
        }
        writer.flush()
    }

    pub fn write_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("create output {}", path.display()))?;
        self.write(std::io::BufWriter::new(file))
            .with_context(|| format!("write output {}", path.display()))?;
        log::info!("aggregated {} strategies to {}", self.len(), path.display());
        Ok(())
    }
}

/// Every `.csv` file directly inside `dir`, sorted by path.
pub fn tables_in(dir: impl AsRef<Path>) -> anyhow::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("list directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect::<Vec<_>>();
    paths.sort();
    if paths.is_empty() {
        anyhow::bail!("no CSV files found in directory: {}", dir.display());
    }
    Ok(paths)
}

/// Merges every strategy table in `dir` into `out`.
pub fn aggregate_dir(dir: impl AsRef<Path>, out: impl AsRef<Path>) -> anyhow::Result<Aggregator> {
    let paths = tables_in(dir)?;
    let mut aggregator = Aggregator::default();
    aggregator.absorb_files(&paths);
    aggregator.write_file(out)?;
    Ok(aggregator)
}
