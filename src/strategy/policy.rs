use crate::Probability;
use std::collections::BTreeMap;

/// Action probabilities at one infoset, keyed by action name.
///
/// Serialized as `ACTION:prob` pairs joined by `|`, actions sorted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Policy(BTreeMap<String, Probability>);

impl Policy {
    pub fn get(&self, action: &str) -> Option<Probability> {
        self.0.get(action).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Folds `other`, seen `new` times, into this policy, seen `old` times.
    ///
    /// Actions missing from `self` start at zero. Actions missing from
    /// `other` keep their current probability.
    pub fn merge(&mut self, other: &Self, old: u64, new: u64) {
        let total = (old + new) as Probability;
        for (action, &p) in other.0.iter() {
            let q = self.0.entry(action.clone()).or_insert(0.);
            if total > 0. {
                *q = (*q * old as Probability + p * new as Probability) / total;
            }
        }
    }
}

impl FromIterator<(String, Probability)> for Policy {
    fn from_iter<I: IntoIterator<Item = (String, Probability)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Pairs without a `:` separator are ignored; a probability that does not
/// parse is an error.
impl TryFrom<&str> for Policy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split('|')
            .filter_map(|pair| pair.split_once(':'))
            .map(|(action, p)| {
                p.trim()
                    .parse::<Probability>()
                    .map(|p| (action.to_string(), p))
                    .map_err(|e| anyhow::anyhow!("bad probability {:?} for {}: {}", p, action, e))
            })
            .collect()
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let pairs = self
            .0
            .iter()
            .map(|(action, p)| format!("{}:{:.6}", action, p))
            .collect::<Vec<_>>();
        write!(f, "{}", pairs.join("|"))
    }
}
