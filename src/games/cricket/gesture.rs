use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::games::cricket::state::Fingers;

/// Number of points in a tracked hand skeleton
pub const HAND_POINTS: usize = 21;

const THUMB_TIP: usize = 4;
const THUMB_BASE: usize = 2;
const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
const FINGER_BASES: [usize; 4] = [6, 10, 14, 18];

/// Normalized image coordinates, `y` grows downward. Extra fields such as
/// depth are ignored when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// One hand's landmark set.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks([Landmark; HAND_POINTS]);

impl HandLandmarks {
    pub fn new(points: [Landmark; HAND_POINTS]) -> Self {
        Self(points)
    }

    fn raised(&self, tip: usize, base: usize) -> bool {
        self.0[tip].y < self.0[base].y
    }
}

impl TryFrom<Vec<Landmark>> for HandLandmarks {
    type Error = GameError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let len = points.len();
        let points: [Landmark; HAND_POINTS] = points.try_into().map_err(|_| {
            GameError::Acquisition(format!("expected {HAND_POINTS} hand landmarks, got {len}"))
        })?;
        Ok(Self(points))
    }
}

/// Turns a detected hand into a shown number.
pub trait Classifier {
    /// `None` for an ambiguous gesture
    fn classify(&self, hand: &HandLandmarks) -> Option<Fingers>;
}

/// Counts raised fingers. An open palm with the thumb up is five, a lone
/// raised thumb is six.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerCounter;

impl FingerCounter {
    /// Raw count in `0..=6`
    pub fn count(hand: &HandLandmarks) -> u8 {
        let fingers_up = FINGER_TIPS
            .iter()
            .zip(FINGER_BASES.iter())
            .filter(|&(&tip, &base)| hand.raised(tip, base))
            .count() as u8;

        let thumb_up = hand.raised(THUMB_TIP, THUMB_BASE);
        match (fingers_up, thumb_up) {
            (0, true) => 6,
            (4, true) => 5,
            (n, _) => n,
        }
    }
}

impl Classifier for FingerCounter {
    fn classify(&self, hand: &HandLandmarks) -> Option<Fingers> {
        match Self::count(hand) {
            0 => None,
            n => Some(Fingers::clamped(n)),
        }
    }
}
