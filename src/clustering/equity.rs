use anyhow::Context;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Suffix appended to the input stem when naming the averaged table.
pub const SUFFIX: &str = "_with_avg_equity.csv";

/// One kept row of a clustered-hands table.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    line: String,
    heads: f64,
    three: f64,
    cluster: i64,
}

impl Hand {
    pub fn line(&self) -> &str {
        &self.line
    }
    pub fn cluster(&self) -> i64 {
        self.cluster
    }
    /// Equity against one opponent.
    pub fn heads(&self) -> f64 {
        self.heads
    }
    /// Equity against two opponents.
    pub fn three(&self) -> f64 {
        self.three
    }
}

/// Columns are `hand,equity2P,equity3P,cluster,...`; anything after the
/// cluster is carried through untouched.
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut cols = line.split(',').skip(1);
        let mut next = |name: &str| match cols.next().map(str::trim) {
            Some(col) if !col.is_empty() => Ok(col),
            _ => Err(anyhow::anyhow!("missing {}", name)),
        };
        let heads = next("equity2P")?;
        let three = next("equity3P")?;
        let cluster = next("cluster")?;
        Ok(Self {
            line: line.to_string(),
            heads: heads.parse().with_context(|| format!("bad equity2P {:?}", heads))?,
            three: three.parse().with_context(|| format!("bad equity3P {:?}", three))?,
            cluster: cluster.parse().with_context(|| format!("bad cluster {:?}", cluster))?,
        })
    }
}

/// Mean two- and three-player equity of every cluster in a table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterEquity {
    header: String,
    hands: Vec<Hand>,
    means: BTreeMap<i64, (f64, f64)>,
}

impl ClusterEquity {
    /// Reads the header and every parsable row. Rows that fail to parse are
    /// logged and left out of both the means and the output.
    pub fn read<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut lines = reader.lines();
        let header = lines.next().transpose()?.unwrap_or_default();
        let mut hands = Vec::new();
        for line in lines {
            let line = line?;
            match Hand::try_from(line.as_str()) {
                Ok(hand) => hands.push(hand),
                Err(e) => log::warn!("skipping line {:?}: {:#}", line, e),
            }
        }
        let mut sums = BTreeMap::<i64, (f64, f64, usize)>::new();
        for hand in hands.iter() {
            let sum = sums.entry(hand.cluster).or_default();
            sum.0 += hand.heads;
            sum.1 += hand.three;
            sum.2 += 1;
        }
        let means = sums
            .into_iter()
            .map(|(k, (a, b, n))| (k, (a / n as f64, b / n as f64)))
            .collect();
        Ok(Self {
            header,
            hands,
            means,
        })
    }
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    pub fn clusters(&self) -> usize {
        self.means.len()
    }
    /// (equity2P, equity3P) averaged over the cluster's kept rows.
    pub fn mean(&self, cluster: i64) -> Option<(f64, f64)> {
        self.means.get(&cluster).copied()
    }

    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{},avg_equity2P,avg_equity3P", self.header)?;
        for hand in self.hands.iter() {
            let (heads, three) = self.means[&hand.cluster];
            writeln!(writer, "{},{},{}", hand.line, heads, three)?;
        }
        writer.flush()
    }
}

/// `dir/name.csv` becomes `dir/name_with_avg_equity.csv`.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, SUFFIX))
}

/// Averages one table and writes it next to the input.
pub fn average_file(input: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
    let input = input.as_ref();
    let output = output_path(input);
    let file = std::fs::File::open(input)
        .with_context(|| format!("open clustered hands {}", input.display()))?;
    let table = ClusterEquity::read(std::io::BufReader::new(file))
        .with_context(|| format!("read clustered hands {}", input.display()))?;
    let file = std::fs::File::create(&output)
        .with_context(|| format!("create output {}", output.display()))?;
    table
        .write(std::io::BufWriter::new(file))
        .with_context(|| format!("write output {}", output.display()))?;
    log::info!(
        "processed {} and saved to {} ({} clusters)",
        input.display(),
        output.display(),
        table.clusters()
    );
    Ok(output)
}
