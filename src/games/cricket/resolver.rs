//! Round resolution for hand cricket.
//!
//! Two cadences drive the game. Every sampling tick carries the latest
//! gesture reading (or none) and only updates what is displayed. Every
//! `ticks_per_round` sampling ticks a round tick draws the opponent's
//! number and resolves runs, dismissal or game over. After a dismissal
//! or game over the state holds for the configured display window
//! before moving on.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::clock::Clock;
use crate::core::config::GameConfig;
use crate::core::game::TickGame;
use crate::games::cricket::opponent::OpponentHand;
use crate::games::cricket::state::{Fingers, GameState, Outcome, Phase, Snapshot};

/// Resolve one round tick against `state`.
///
/// A missing reading counts as 0. Opponent numbers are never 0, so it can
/// score nothing but can never be out.
pub fn resolve(state: &GameState, player: Option<Fingers>, opponent: Fingers, now: Instant) -> GameState {
    let mut next = state.clone();
    if state.phase != Phase::Ready {
        return next;
    }

    let shown = player.map_or(0, Fingers::get);
    next.last_opponent_number = opponent.get();
    let out = shown == opponent.get();

    match (state.is_player_batting, out) {
        (true, true) => {
            next.phase = Phase::Dismissed;
            next.dismissed_at = Some(now);
        }
        (true, false) => next.player_score = next.player_score.saturating_add(u32::from(shown)),
        (false, true) => {
            next.phase = Phase::GameOver;
            next.dismissed_at = Some(now);
        }
        (false, false) => {
            next.computer_score = next.computer_score.saturating_add(u32::from(opponent.get()))
        }
    }
    next
}

/// Leave DISMISSED or GAME_OVER once `window` has elapsed since the
/// dismissal. A settled game over records the result exactly once.
pub fn settle(state: &GameState, now: Instant, window: Duration) -> GameState {
    let mut next = state.clone();
    let Some(since) = state.dismissed_at else {
        return next;
    };
    if now.saturating_duration_since(since) < window {
        return next;
    }

    match state.phase {
        Phase::Dismissed => {
            next.is_player_batting = false;
            next.phase = Phase::Ready;
            next.dismissed_at = None;
        }
        Phase::GameOver if state.result.is_none() => {
            next.result = Some(Outcome::from_scores(state.player_score, state.computer_score));
        }
        _ => {}
    }
    next
}

/// What a resolved round tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub player: u8,
    pub opponent: u8,
    pub runs: u32,
    pub phase: Phase,
}

/// Drives the pure transitions from a stream of sampling ticks.
pub struct Resolver<O, C> {
    config: GameConfig,
    opponent: O,
    clock: C,
    state: GameState,
    current: Option<Fingers>,
    ticks: u32,
    rounds: u64,
}

impl<O: OpponentHand, C: Clock> Resolver<O, C> {
    pub fn new(config: GameConfig, opponent: O, clock: C) -> Self {
        Self {
            config,
            opponent,
            clock,
            state: GameState::new(),
            current: None,
            ticks: 0,
            rounds: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.result
    }

    /// The recorded result, or once the computer is out the one its
    /// display window would record. Scores cannot change after GAME_OVER.
    pub fn final_outcome(&self) -> Option<Outcome> {
        match self.state.phase {
            Phase::GameOver => Some(
                self.state
                    .result
                    .unwrap_or_else(|| Outcome::from_scores(self.state.player_score, self.state.computer_score)),
            ),
            _ => self.state.result,
        }
    }

    /// Round ticks resolved so far, ones drawn during DISMISSED/GAME_OVER excluded
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    fn round_due(&self, reading: Option<Fingers>) -> bool {
        self.ticks >= self.config.ticks_per_round
            && (reading.is_some() || !self.config.skip_rounds_without_hand)
    }

    fn round_tick(&mut self, reading: Option<Fingers>) -> Option<RoundReport> {
        let opponent = self.opponent.next();
        if self.state.phase != Phase::Ready {
            self.state.last_opponent_number = opponent.get();
            debug!(phase = ?self.state.phase, opponent = opponent.get(), "round tick not resolved");
            return None;
        }

        let before = (self.state.player_score, self.state.computer_score);
        self.state = resolve(&self.state, reading, opponent, self.clock.now());
        self.rounds += 1;

        let report = RoundReport {
            player: reading.map_or(0, Fingers::get),
            opponent: opponent.get(),
            runs: (self.state.player_score - before.0) + (self.state.computer_score - before.1),
            phase: self.state.phase,
        };
        match report.phase {
            Phase::Dismissed => info!(
                player = report.player,
                opponent = report.opponent,
                score = self.state.player_score,
                "player out"
            ),
            Phase::GameOver => info!(
                player = report.player,
                opponent = report.opponent,
                target = self.state.player_score,
                score = self.state.computer_score,
                "computer out, game over"
            ),
            Phase::Ready => debug!(
                round = self.rounds,
                player = report.player,
                opponent = report.opponent,
                runs = report.runs,
                batting = self.state.is_player_batting,
                "round resolved"
            ),
        }
        Some(report)
    }

    fn settle_window(&mut self) {
        let settled = settle(&self.state, self.clock.now(), self.config.dismissal_window());
        if settled.phase != self.state.phase {
            info!("innings over, computer batting");
        }
        if let (None, Some(result)) = (self.state.result, settled.result) {
            info!(
                player = settled.player_score,
                computer = settled.computer_score,
                ?result,
                "game finished"
            );
        }
        self.state = settled;
    }
}

impl<O: OpponentHand, C: Clock> TickGame for Resolver<O, C> {
    type Reading = Fingers;
    type Report = RoundReport;
    type Snapshot = Snapshot;

    /// One sampling tick: store the provisional reading, resolve a round
    /// when one is due, then let a pending dismissal window expire.
    fn sample(&mut self, reading: Option<Fingers>) -> Option<RoundReport> {
        if self.state.is_finished() {
            return None;
        }

        self.current = reading;
        self.ticks = self.ticks.saturating_add(1);

        let report = if self.round_due(reading) {
            self.ticks = 0;
            self.round_tick(reading)
        } else {
            None
        };

        self.settle_window();
        report
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.state, self.current)
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}
