/// Core game interface: a tick-driven game plus the capabilities it is fed
/// by (samplers) and drawn through (presenters).
use crossterm::event::KeyEvent;

use crate::core::error::GameError;

/// A game advanced one sampling tick at a time by an outer polling loop.
pub trait TickGame {
    /// Validated reading produced by a sampler
    type Reading;

    /// Per-tick outcome handed back to the caller, if any
    type Report;

    /// Read-only view handed to the presenter
    type Snapshot;

    /// Feed one sampling tick. `None` means no reading was available.
    fn sample(&mut self, reading: Option<Self::Reading>) -> Option<Self::Report>;

    fn snapshot(&self) -> Self::Snapshot;

    /// True once the outer loop should stop requesting ticks
    fn is_finished(&self) -> bool;
}

/// Produces one reading per sampling tick.
pub trait Sampler<R> {
    /// `Ok(None)` is "no reading". `GameError::Acquisition` is recovered
    /// by the engine; any other error ends the session.
    fn poll(&mut self) -> Result<Option<R>, GameError>;

    /// Keyboard-driven samplers receive every key the engine does not consume
    fn handle_key(&mut self, _key: KeyEvent) {}
}

/// Renderer trait for drawing a game snapshot using Ratatui
pub trait Presenter<S> {
    /// Draw the in-game view
    fn render(&self, frame: &mut ratatui::Frame, snapshot: &S);

    /// Draw the end screen once the game has finished
    fn render_result(&self, frame: &mut ratatui::Frame, snapshot: &S);
}
