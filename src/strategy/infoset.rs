/// Key of one row in a strategy table.
///
/// Rows from different training runs describe the same decision point when
/// all five columns agree. The fields are kept as the raw column text so
/// that a merged table writes them back exactly as read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Infoset {
    pub round: String,
    pub player: String,
    pub abstraction: String,
    pub history: String,
    pub pot: String,
}

impl Infoset {
    /// Pipe-joined key. Merged tables are sorted by this string, so two
    /// rows order the same way however their columns split.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Infoset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.round, self.player, self.abstraction, self.history, self.pot
        )
    }
}
