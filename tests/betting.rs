use proptest::prelude::*;
use spingo::betting::Action;
use spingo::betting::Round;
use spingo::config::Config;

/// Longest walk any reasonable table can take before the round closes.
const STEPS: usize = 256;

fn table() -> impl Strategy<Value = Config> {
    (2usize..=3, prop::sample::select(vec![2.0f32, 3.0, 5.0, 15.0, 20.0])).prop_map(
        |(seats, stack)| Config {
            seats,
            stack,
            ..Config::default()
        },
    )
}

/// Plays `choices` through the round, picking `legal[choice % len]` at
/// each step, and returns every state visited.
fn walk(config: Config, choices: &[usize]) -> Vec<Round> {
    let mut rounds = vec![Round::from(config)];
    for choice in choices.iter().cycle().take(STEPS) {
        let round = rounds.last().unwrap();
        if round.is_terminal() {
            break;
        }
        let legal = round.legal();
        assert!(!legal.is_empty(), "undecided round with no moves: {}", round);
        let next = round.apply(legal[choice % legal.len()]);
        rounds.push(next);
    }
    rounds
}

proptest! {
    #[test]
    fn walks_reach_a_decision(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        let rounds = walk(config, &choices);
        prop_assert!(rounds.last().unwrap().is_terminal());
    }

    #[test]
    fn chips_are_conserved(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        for round in walk(config, &choices) {
            for seat in round.seats() {
                prop_assert_eq!(seat.stack() + seat.stake(), config.stack);
                prop_assert!(seat.stack() >= 0.);
            }
            let staked = round.seats().iter().map(|s| s.stake()).sum::<f32>();
            prop_assert_eq!(round.pot(), staked);
        }
    }

    #[test]
    fn history_grows_by_one(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        let rounds = walk(config, &choices);
        for pair in rounds.windows(2) {
            let (parent, child) = (&pair[0], &pair[1]);
            prop_assert_eq!(child.history().len(), parent.history().len() + 1);
            prop_assert_eq!(&child.history()[..parent.history().len()], parent.history());
        }
    }

    #[test]
    fn folds_are_final(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        let rounds = walk(config, &choices);
        for pair in rounds.windows(2) {
            let (parent, child) = (&pair[0], &pair[1]);
            prop_assert!(child.active().is_subset(parent.active()));
            prop_assert!(child.bet() >= parent.bet());
            prop_assert!(!child.active().is_empty());
        }
    }

    #[test]
    fn decided_rounds_are_settled(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        let round = walk(config, &choices).pop().unwrap();
        for &p in round.active() {
            let seat = round.seat(p);
            prop_assert!(seat.stake() == round.bet() || seat.stack() == 0.);
        }
    }

    #[test]
    fn blinds_open_every_round(config in table(), choices in prop::collection::vec(0usize..8, 1..32)) {
        let rounds = walk(config, &choices);
        let history = rounds.last().unwrap().history();
        prop_assert_eq!(&history[..2], &[Action::SBlind, Action::BBlind]);
        prop_assert!(history[2..].iter().all(|a| !a.is_blind()));
    }
}
