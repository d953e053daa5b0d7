use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::games::cricket::state::Fingers;

/// Source of the computer's number, drawn once per round.
pub trait OpponentHand {
    fn next(&mut self) -> Fingers;
}

/// Uniform draw from `1..=6` over an injected RNG.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<StdRng> {
    /// Seeded when `seed` is given, otherwise from OS entropy
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> OpponentHand for RandomOpponent<R> {
    fn next(&mut self) -> Fingers {
        Fingers::clamped(self.rng.random_range(Fingers::MIN..=Fingers::MAX))
    }
}
