pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::config::GameConfig;
pub use crate::core::error::GameError;
pub use crate::core::game::{Presenter, Sampler, TickGame};
