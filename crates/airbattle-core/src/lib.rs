//! Core types and definitions for the air-battle targeting engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid positions, the airplane shape catalog, attack outcomes, the
//! read-only board capability, game modes, and tuning constants.
//! It has no RNG and holds no mutable game state.

pub mod board;
pub mod constants;
pub mod coords;
pub mod enums;
pub mod modes;
pub mod outcome;
pub mod shape;
pub mod types;

pub use board::BoardQuery;
pub use modes::ConfigError;
pub use types::Position;
