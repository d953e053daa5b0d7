//! Hand cricket: show 1-6 fingers against the computer's number.

pub mod gesture;
pub mod opponent;
pub mod renderer;
pub mod resolver;
pub mod sampler;
pub mod state;

pub use gesture::{Classifier, FingerCounter, HandLandmarks, Landmark};
pub use opponent::{OpponentHand, RandomOpponent};
pub use renderer::Scoreboard;
pub use resolver::{resolve, settle, Resolver, RoundReport};
pub use sampler::{FeedSampler, KeySampler};
pub use state::{Fingers, GameState, Outcome, Phase, Snapshot};

pub const RULES: &str = "\
Hand cricket against the computer.

Every round you show 1-6 fingers and the computer picks a number.
You bat first: each round you score the number you show, unless it
matches the computer's number and you are out. Then you bowl: the
computer scores its number each round until you match it, which ends
the game. Showing no hand scores nothing but can never get you out.";
