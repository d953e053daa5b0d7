use std::time::Duration;

use handcricket::core::clock::{Clock, ManualClock};
use handcricket::games::cricket::{resolve, settle, Fingers, GameState, OpponentHand, Phase, Resolver};
use handcricket::{GameConfig, TickGame};
use proptest::prelude::*;

const WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
enum Step {
    Round { player: Option<u8>, opponent: u8 },
    Wait(u64),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (prop::option::of(1u8..=6), 1u8..=6).prop_map(|(player, opponent)| Step::Round { player, opponent }),
        1 => (0u64..2500).prop_map(Step::Wait),
    ]
}

fn fingers(n: u8) -> Fingers {
    Fingers::try_from(n).unwrap()
}

/// Cycles through a fixed list of numbers
struct Cycle {
    numbers: Vec<u8>,
    at: usize,
}

impl OpponentHand for Cycle {
    fn next(&mut self) -> Fingers {
        let n = self.numbers[self.at % self.numbers.len()];
        self.at += 1;
        fingers(n)
    }
}

proptest! {
    #[test]
    fn transitions_keep_game_invariants(steps in prop::collection::vec(arb_step(), 0..200)) {
        let clock = ManualClock::new();
        let mut state = GameState::new();
        let mut role_changes = 0;

        for step in steps {
            let before = state.clone();
            match step {
                Step::Round { player, opponent } => {
                    state = resolve(&before, player.map(fingers), fingers(opponent), clock.now());

                    let changed = u8::from(state.player_score != before.player_score)
                        + u8::from(state.computer_score != before.computer_score);
                    prop_assert!(changed <= 1);

                    if before.phase != Phase::Ready {
                        prop_assert_eq!(&state, &before);
                    } else if player == Some(opponent) {
                        let expected = if before.is_player_batting { Phase::Dismissed } else { Phase::GameOver };
                        prop_assert_eq!(state.phase, expected);
                        prop_assert_eq!(state.player_score, before.player_score);
                        prop_assert_eq!(state.computer_score, before.computer_score);
                    } else {
                        prop_assert_eq!(state.phase, Phase::Ready);
                        prop_assert_eq!(state.last_opponent_number, opponent);
                    }

                    if player.is_none() {
                        prop_assert_eq!(state.phase, before.phase);
                        prop_assert_eq!(state.player_score, before.player_score);
                    }
                }
                Step::Wait(ms) => {
                    clock.advance(Duration::from_millis(ms));
                    state = settle(&before, clock.now(), WINDOW);

                    if state.phase != before.phase || state.result != before.result {
                        let since = before.dismissed_at.expect("timed exit without a dismissal");
                        prop_assert!(clock.now().duration_since(since) >= WINDOW);
                    }
                    prop_assert_eq!(state.player_score, before.player_score);
                    prop_assert_eq!(state.computer_score, before.computer_score);
                }
            }

            prop_assert!(state.player_score >= before.player_score);
            prop_assert!(state.computer_score >= before.computer_score);
            if state.player_score > before.player_score {
                prop_assert!(before.is_player_batting);
            }
            if state.computer_score > before.computer_score {
                prop_assert!(!before.is_player_batting);
            }
            if state.is_player_batting != before.is_player_batting {
                prop_assert!(before.is_player_batting);
                role_changes += 1;
            }
            if before.phase == Phase::GameOver {
                prop_assert_eq!(state.phase, Phase::GameOver);
                prop_assert_eq!(state.is_player_batting, before.is_player_batting);
                prop_assert_eq!(state.player_score, before.player_score);
                prop_assert_eq!(state.computer_score, before.computer_score);
            }
            if before.result.is_some() {
                prop_assert_eq!(state.result, before.result);
            }
        }

        prop_assert!(role_changes <= 1);
    }

    #[test]
    fn resolver_never_leaves_dismissal_early(
        numbers in prop::collection::vec(1u8..=6, 1..12),
        readings in prop::collection::vec(prop::option::of(1u8..=6), 1..300),
        step_ms in 1u64..400,
    ) {
        let clock = ManualClock::new();
        let config = GameConfig { ticks_per_round: 3, ..Default::default() };
        let mut resolver = Resolver::new(config, Cycle { numbers, at: 0 }, &clock);

        for reading in readings {
            let before = resolver.state().clone();
            resolver.sample(reading.map(fingers));
            let after = resolver.state();

            let left_dismissal = before.phase == Phase::Dismissed && after.phase != Phase::Dismissed;
            let finished = before.result.is_none() && after.result.is_some();
            if left_dismissal || finished {
                let since = before.dismissed_at.expect("dismissal without a timestamp");
                prop_assert!(clock.now().duration_since(since) >= WINDOW);
            }
            if before.phase != Phase::Ready {
                prop_assert_eq!(after.player_score, before.player_score);
                prop_assert_eq!(after.computer_score, before.computer_score);
                prop_assert!((1..=6).contains(&after.last_opponent_number));
            }
            if resolver.is_finished() {
                break;
            }
            clock.advance(Duration::from_millis(step_ms));
        }
    }
}
