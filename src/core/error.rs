use thiserror::Error;

/// Errors surfaced by the game library. Terminal and file plumbing
/// stays on `anyhow`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("input validation failed: {value} is outside {min}..={max}")]
    InputValidation { value: i64, min: u8, max: u8 },
    #[error("input unavailable: {0}")]
    Acquisition(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Acquisition failures are recovered locally as a "no reading" tick.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Acquisition(_))
    }
}
