use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::core::game::{Presenter, Sampler, TickGame};

/// Result of draining pending terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal polling loop. Owns the sampling cadence and drives the game
/// synchronously, one sampling tick per interval.
pub struct Engine<G, S, P> {
    game: G,
    sampler: S,
    presenter: P,
    poll_interval: Duration,
}

impl<G, S, P> Engine<G, S, P>
where
    G: TickGame,
    S: Sampler<G::Reading>,
    P: Presenter<G::Snapshot>,
{
    pub fn new(game: G, sampler: S, presenter: P, poll_interval: Duration) -> Self {
        Self { game, sampler, presenter, poll_interval }
    }

    /// Run until the game finishes or the user quits. Hands the game back
    /// so the caller can report the final state.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if self.drain_events()? == Flow::Quit {
                info!("quit requested");
                return Ok(self.game);
            }

            let reading = match self.sampler.poll() {
                Ok(reading) => reading,
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "no reading this tick");
                    None
                }
                Err(e) => return Err(e.into()),
            };
            self.game.sample(reading);

            let snapshot = self.game.snapshot();
            terminal.draw(|f| self.presenter.render(f, &snapshot))?;

            if self.game.is_finished() {
                break;
            }
        }

        let snapshot = self.game.snapshot();
        terminal.draw(|f| self.presenter.render_result(f, &snapshot))?;
        wait_for_key()?;
        Ok(self.game)
    }

    // Non-blocking: consume every pending key before this tick samples
    fn drain_events(&mut self) -> Result<Flow> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(Flow::Quit),
                    _ => {
                        debug!(key = ?key.code, "key forwarded to sampler");
                        self.sampler.handle_key(key);
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
