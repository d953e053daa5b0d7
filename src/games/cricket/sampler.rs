use std::io::{BufRead, Lines};

use crossterm::event::{KeyCode, KeyEvent};
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::error::GameError;
use crate::core::game::Sampler;
use crate::games::cricket::gesture::{Classifier, HandLandmarks, Landmark};
use crate::games::cricket::state::Fingers;

/// Stands in for the camera: digits `1`-`6` raise that many fingers,
/// `0` or space lowers the hand. The shown number holds until changed.
#[derive(Debug, Clone, Default)]
pub struct KeySampler {
    held: Option<Fingers>,
}

impl KeySampler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sampler<Fingers> for KeySampler {
    fn poll(&mut self) -> Result<Option<Fingers>, GameError> {
        Ok(self.held)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('0') | KeyCode::Char(' ') => self.held = None,
            KeyCode::Char(c) => {
                if let Some(n) = c.to_digit(10) {
                    if let Ok(fingers) = Fingers::try_from(n as u8) {
                        self.held = Some(fingers);
                    }
                }
            }
            _ => {}
        }
    }
}

/// One line of a recorded feed
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedFrame {
    /// Output of an external classifier
    Fingers { fingers: i64 },
    /// Raw detector output, classified locally
    Landmarks { landmarks: Vec<Landmark> },
}

/// Replays a JSON-lines feed, one line per sampling tick. `null` or a blank
/// line means no hand was detected.
pub struct FeedSampler<R, C> {
    lines: Lines<R>,
    classifier: C,
    line_no: usize,
    exhausted: bool,
}

impl<R: BufRead, C: Classifier> FeedSampler<R, C> {
    pub fn new(reader: R, classifier: C) -> Self {
        Self {
            lines: reader.lines(),
            classifier,
            line_no: 0,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R: BufRead, C: Classifier> Sampler<Fingers> for FeedSampler<R, C> {
    fn poll(&mut self) -> Result<Option<Fingers>, GameError> {
        if self.exhausted {
            return Ok(None);
        }

        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(GameError::Acquisition(format!("feed read failed: {e}"))),
            None => {
                self.exhausted = true;
                info!(frames = self.line_no, "feed exhausted");
                return Ok(None);
            }
        };
        self.line_no += 1;

        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let frame: Option<FeedFrame> = serde_json::from_str(line)
            .map_err(|e| GameError::Acquisition(format!("feed line {}: {e}", self.line_no)))?;

        match frame {
            None => Ok(None),
            Some(FeedFrame::Fingers { fingers }) => Fingers::from_count(fingers).map(Some),
            Some(FeedFrame::Landmarks { landmarks }) => {
                let hand = HandLandmarks::try_from(landmarks)?;
                let reading = self.classifier.classify(&hand);
                debug!(line = self.line_no, ?reading, "classified hand");
                Ok(reading)
            }
        }
    }
}
