use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

/// Result of scanning a sequence file for repeated lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Uniqueness {
    lines: usize,
    duplicates: Vec<(usize, String)>,
}

impl Uniqueness {
    /// Scans line by line, noting each line at its second occurrence.
    pub fn scan<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut counts = HashMap::<String, usize>::new();
        let mut report = Self::default();
        for line in reader.lines() {
            let line = line?;
            report.lines += 1;
            let count = counts.entry(line.clone()).or_default();
            *count += 1;
            if *count == 2 {
                log::warn!("duplicate found at line {}: {:?}", report.lines, line);
                report.duplicates.push((report.lines, line));
            }
        }
        Ok(report)
    }
    pub fn scan_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open sequence file {}", path.display()))?;
        Self::scan(std::io::BufReader::new(file))
            .with_context(|| format!("read sequence file {}", path.display()))
    }
    pub fn is_unique(&self) -> bool {
        self.duplicates.is_empty()
    }
    pub fn lines(&self) -> usize {
        self.lines
    }
    /// (line number, text) of each repeated line, at its second occurrence.
    pub fn duplicates(&self) -> &[(usize, String)] {
        &self.duplicates
    }
}
