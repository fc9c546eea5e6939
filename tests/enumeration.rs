use spingo::enumerate::Enumerator;
use spingo::enumerate::Sequence;
use spingo::enumerate::Uniqueness;

const REFERENCE: &str = include_str!("data/preflop_sequences.txt");

#[test]
fn matches_reference_listing() {
    let found = Enumerator::default().run().unwrap();
    let expected = REFERENCE.lines().collect::<Vec<_>>();
    let actual = found
        .sequences()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    assert_eq!(actual, expected);
}

#[test]
fn reference_lines_parse_back() {
    let found = Enumerator::default().run().unwrap();
    for line in REFERENCE.lines() {
        let sequence = Sequence::try_from(line).unwrap();
        assert!(found.contains(&sequence), "missing {}", line);
    }
}

#[test]
fn written_file_matches_reference() {
    let path = std::env::temp_dir().join("spingo-enumeration-written.txt");
    std::fs::write(&path, "stale contents that must disappear\n").unwrap();
    let found = Enumerator::default().write_to(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let report = Uniqueness::scan(text.as_bytes()).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(text, REFERENCE);
    assert!(report.is_unique());
    assert_eq!(report.lines(), found.count());
}

/// Recorded sequences drop the closing action, so the round's last move
/// never shows up. A walk of blinds, fold and fold is recorded without the
/// final fold, which is why no line ends in two consecutive folds.
#[test]
fn closing_action_is_dropped() {
    let found = Enumerator::default().run().unwrap();
    assert!(found
        .sequences()
        .iter()
        .all(|s| !s.to_string().ends_with("FOLD FOLD")));
    assert!(found
        .contains(&Sequence::try_from("POST_SB POST_BB FOLD").unwrap()));
}
