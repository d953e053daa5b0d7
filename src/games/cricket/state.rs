use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

/// A number shown with one hand, always in `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Fingers(u8);

impl Fingers {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Pull an already bounded count into range without an error path
    pub(crate) fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Validate a count reported by an external classifier, which may be
    /// any integer.
    pub fn from_count(count: i64) -> Result<Self, GameError> {
        u8::try_from(count)
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .ok_or(GameError::InputValidation { value: count, min: Self::MIN, max: Self::MAX })
    }
}

impl TryFrom<u8> for Fingers {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::InputValidation { value: i64::from(value), min: Self::MIN, max: Self::MAX })
        }
    }
}

impl From<Fingers> for u8 {
    fn from(f: Fingers) -> u8 {
        f.0
    }
}

impl fmt::Display for Fingers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Ready,
    Dismissed,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    pub fn from_scores(player: u32, computer: u32) -> Self {
        match player.cmp(&computer) {
            Ordering::Greater => Outcome::PlayerWin,
            Ordering::Less => Outcome::ComputerWin,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Everything the round resolver mutates. Created once per game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player_score: u32,
    pub computer_score: u32,
    pub is_player_batting: bool,
    /// 0 until the first round is resolved
    pub last_opponent_number: u8,
    pub phase: Phase,
    pub dismissed_at: Option<Instant>,
    /// Recorded once, when the game-over window has elapsed
    pub result: Option<Outcome>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            is_player_batting: true,
            last_opponent_number: 0,
            phase: Phase::Ready,
            dismissed_at: None,
            result: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view polled by the presentation layer once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_score: u32,
    pub computer_score: u32,
    pub is_player_batting: bool,
    pub last_opponent_number: u8,
    pub phase: Phase,
    /// Provisional reading of the latest sampling tick, 0 when none
    pub current_player_number: u8,
    pub final_result: Option<Outcome>,
}

impl Snapshot {
    pub fn new(state: &GameState, current: Option<Fingers>) -> Self {
        Self {
            player_score: state.player_score,
            computer_score: state.computer_score,
            is_player_batting: state.is_player_batting,
            last_opponent_number: state.last_opponent_number,
            phase: state.phase,
            current_player_number: current.map_or(0, Fingers::get),
            final_result: state.result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingers_accepts_one_through_six() {
        for n in 1..=6u8 {
            assert_eq!(Fingers::try_from(n).unwrap().get(), n);
        }
    }

    #[test]
    fn fingers_rejects_out_of_range() {
        assert_eq!(
            Fingers::try_from(0),
            Err(GameError::InputValidation { value: 0, min: 1, max: 6 })
        );
        assert!(Fingers::try_from(7).is_err());
        assert!(Fingers::try_from(u8::MAX).is_err());
    }

    #[test]
    fn counts_outside_u8_still_fail_validation() {
        assert_eq!(Fingers::from_count(4).map(Fingers::get), Ok(4));
        for count in [300, -1, 256, i64::MIN] {
            assert_eq!(
                Fingers::from_count(count),
                Err(GameError::InputValidation { value: count, min: 1, max: 6 })
            );
        }
    }

    #[test]
    fn fingers_deserialize_validates() {
        assert_eq!(serde_json::from_str::<Fingers>("4").unwrap().get(), 4);
        assert!(serde_json::from_str::<Fingers>("9").is_err());
    }

    #[test]
    fn outcome_from_literal_scores() {
        assert_eq!(Outcome::from_scores(42, 30), Outcome::PlayerWin);
        assert_eq!(Outcome::from_scores(10, 10), Outcome::Tie);
        assert_eq!(Outcome::from_scores(5, 20), Outcome::ComputerWin);
        assert_eq!(Outcome::from_scores(0, 0), Outcome::Tie);
    }

    #[test]
    fn fresh_state() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::Ready);
        assert!(state.is_player_batting);
        assert_eq!((state.player_score, state.computer_score), (0, 0));
        assert_eq!(state.last_opponent_number, 0);
        assert!(state.dismissed_at.is_none());
        assert!(!state.is_finished());
    }

    #[test]
    fn snapshot_shows_zero_without_reading() {
        let state = GameState::new();
        assert_eq!(Snapshot::new(&state, None).current_player_number, 0);

        let three = Fingers::try_from(3).unwrap();
        assert_eq!(Snapshot::new(&state, Some(three)).current_player_number, 3);
    }
}
