criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        enumerating_default_table,
        enumerating_deep_stacks,
        listing_first_decision,
        applying_blinds,
        encoding_river_features,
}

fn enumerating_default_table(c: &mut criterion::Criterion) {
    c.bench_function("enumerate 3-handed 15bb preflop sequences", |b| {
        let enumerator = Enumerator::default();
        b.iter(|| enumerator.run().map(|found| found.count()))
    });
}

fn enumerating_deep_stacks(c: &mut criterion::Criterion) {
    let config = Config {
        stack: 100.,
        ..Config::default()
    };
    c.bench_function("enumerate 3-handed 100bb preflop sequences", |b| {
        let enumerator = Enumerator::new(config).expect("valid config");
        b.iter(|| enumerator.run().map(|found| found.count()))
    });
}

fn listing_first_decision(c: &mut criterion::Criterion) {
    let round = Round::default()
        .apply(Action::SBlind)
        .apply(Action::BBlind);
    c.bench_function("list legal actions at the first decision", |b| {
        b.iter(|| criterion::black_box(&round).legal())
    });
}

fn applying_blinds(c: &mut criterion::Criterion) {
    let root = Round::default();
    c.bench_function("apply both blinds to a fresh round", |b| {
        b.iter(|| root.apply(Action::SBlind).apply(Action::BBlind))
    });
}

fn encoding_river_features(c: &mut criterion::Criterion) {
    let hole = Card::parse_many("Ah Kd").expect("valid hole");
    let board = Card::parse_many("Ac Kc 7s 7h 2d").expect("valid board");
    c.bench_function("encode a 7-card feature vector", |b| {
        b.iter(|| Features::from((hole.as_slice(), board.as_slice())))
    });
}

use spingo::betting::Action;
use spingo::betting::Round;
use spingo::cards::Card;
use spingo::cards::Features;
use spingo::config::Config;
use spingo::enumerate::Enumerator;
