//! Targeting AI for the air-battle game.
//!
//! Implements candidate-placement enumeration, evidence-driven pruning,
//! the Search/Lock/Kill phase machine, and the scorers that pick the next
//! cell to strike. Everything here reads the opponent board only through
//! [`airbattle_core::BoardQuery`].

pub mod candidates;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod filter;
pub mod phase;
pub mod probe;
pub mod scoring;
pub mod strategy;

pub use airbattle_core;
pub use engine::{EngineState, TargetSource, TargetingEngine};
pub use error::TargetingError;
pub use strategy::Strategy;

#[cfg(test)]
mod tests;
