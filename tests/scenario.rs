use std::collections::VecDeque;
use std::time::Duration;

use handcricket::core::clock::ManualClock;
use handcricket::games::cricket::{Fingers, OpponentHand, Outcome, Phase, Resolver, RoundReport};
use handcricket::{GameConfig, TickGame};

struct Scripted(VecDeque<u8>);

impl OpponentHand for Scripted {
    fn next(&mut self) -> Fingers {
        Fingers::try_from(self.0.pop_front().expect("opponent script exhausted")).unwrap()
    }
}

fn shown(n: u8) -> Option<Fingers> {
    Some(Fingers::try_from(n).unwrap())
}

/// Keep showing `reading` until a round resolves
fn play_round<C: handcricket::core::clock::Clock>(
    resolver: &mut Resolver<Scripted, C>,
    reading: Option<Fingers>,
) -> RoundReport {
    for _ in 0..GameConfig::default().ticks_per_round {
        if let Some(report) = resolver.sample(reading) {
            return report;
        }
    }
    panic!("no round resolved within one round's worth of ticks");
}

#[test]
fn full_game_scenario() {
    let clock = ManualClock::new();
    let mut resolver = Resolver::new(GameConfig::default(), Scripted(VecDeque::from([5, 5, 2])), &clock);

    // 29 sampling ticks pass without a round
    for _ in 0..29 {
        assert!(resolver.sample(shown(3)).is_none());
    }
    let report = resolver.sample(shown(3)).unwrap();
    assert_eq!(report, RoundReport { player: 3, opponent: 5, runs: 3, phase: Phase::Ready });
    assert_eq!(resolver.state().player_score, 3);

    let report = play_round(&mut resolver, shown(5));
    assert_eq!(report.phase, Phase::Dismissed);
    assert_eq!(resolver.state().player_score, 3);

    clock.advance(Duration::from_secs(1));
    resolver.sample(None);
    assert_eq!(resolver.state().phase, Phase::Dismissed);
    assert!(resolver.state().is_player_batting);

    clock.advance(Duration::from_secs(1));
    resolver.sample(None);
    assert_eq!(resolver.state().phase, Phase::Ready);
    assert!(!resolver.state().is_player_batting);

    let report = play_round(&mut resolver, shown(2));
    assert_eq!(report.phase, Phase::GameOver);
    assert!(!resolver.is_finished());

    clock.advance(Duration::from_millis(1999));
    resolver.sample(None);
    assert!(!resolver.is_finished());

    clock.advance(Duration::from_millis(1));
    resolver.sample(None);
    assert!(resolver.is_finished());
    assert_eq!(resolver.outcome(), Some(Outcome::PlayerWin));

    let snapshot = resolver.snapshot();
    assert_eq!(snapshot.player_score, 3);
    assert_eq!(snapshot.computer_score, 0);
    assert_eq!(snapshot.final_result, Some(Outcome::PlayerWin));
    assert_eq!(snapshot.phase, Phase::GameOver);
}

#[test]
fn computer_chases_down_the_target() {
    let clock = ManualClock::new();
    let config = GameConfig { ticks_per_round: 1, ..Default::default() };
    let mut resolver = Resolver::new(config, Scripted(VecDeque::from([2, 1, 3, 6, 6, 4, 5])), &clock);

    // Bat: 4 runs, then out on 1
    assert_eq!(resolver.sample(shown(4)).unwrap().runs, 4);
    assert_eq!(resolver.sample(shown(1)).unwrap().phase, Phase::Dismissed);
    clock.advance(Duration::from_secs(2));
    assert!(resolver.sample(None).is_none());
    assert_eq!(resolver.state().last_opponent_number, 3);
    assert_eq!(resolver.state().player_score, 4);

    // Bowl: computer scores 6 + 6, then out
    assert_eq!(resolver.sample(shown(3)).unwrap().runs, 6);
    assert_eq!(resolver.sample(None).unwrap().runs, 6);
    assert_eq!(resolver.sample(shown(4)).unwrap().phase, Phase::GameOver);

    assert_eq!(resolver.final_outcome(), Some(Outcome::ComputerWin));

    clock.advance(Duration::from_secs(2));
    assert!(resolver.sample(None).is_none());
    assert_eq!(resolver.state().last_opponent_number, 5);
    assert_eq!(resolver.outcome(), Some(Outcome::ComputerWin));
    assert_eq!((resolver.state().player_score, resolver.state().computer_score), (4, 12));
}
