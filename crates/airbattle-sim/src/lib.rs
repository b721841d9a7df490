//! Reference game board and match runner.
//!
//! Owns the hidden airplane deployment, resolves attacks, and plays seeded
//! solo matches against any difficulty tier. Strategies only ever see the
//! board through `BoardQuery`.

pub mod airplane;
pub mod board;
pub mod error;
pub mod runner;

pub use airbattle_ai;
pub use airbattle_core;
pub use board::Board;
pub use error::{BoardError, MatchError};
pub use runner::{MatchConfig, MatchReport, MatchRunner};
