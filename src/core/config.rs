use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

pub const DEFAULT_TICKS_PER_ROUND: u32 = 30;
pub const DEFAULT_DISMISSAL_SECONDS: f64 = 2.0;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 33;

/// Tunables for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Sampling ticks between round resolutions
    pub ticks_per_round: u32,
    /// Real-time pause while dismissed or game over
    pub dismissal_display_seconds: f64,
    /// Sampling cadence of the terminal engine
    pub poll_interval_ms: u64,
    /// Hold a due round until a hand is actually shown
    pub skip_rounds_without_hand: bool,
    /// Seed for the opponent, random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticks_per_round: DEFAULT_TICKS_PER_ROUND,
            dismissal_display_seconds: DEFAULT_DISMISSAL_SECONDS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            skip_rounds_without_hand: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.ticks_per_round == 0 {
            return Err(GameError::InvalidConfig("ticks_per_round must be at least 1".into()));
        }
        if !self.dismissal_display_seconds.is_finite() || self.dismissal_display_seconds < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "dismissal_display_seconds must be a non-negative number, got {}",
                self.dismissal_display_seconds
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(GameError::InvalidConfig("poll_interval_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn dismissal_window(&self) -> Duration {
        Duration::from_secs_f64(self.dismissal_display_seconds)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
