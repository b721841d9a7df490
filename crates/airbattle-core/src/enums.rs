//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Direction the airplane's head points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];
}

/// Role of a single cell within the airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Hitting the head destroys the airplane instantly.
    Head,
    Body,
    Wing,
    Tail,
}

/// Result of resolving one attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackResult {
    Miss,
    Hit,
    Kill,
    /// Cell was attacked before; nothing is recorded.
    AlreadyAttacked,
    /// Position outside the board; nothing is recorded.
    Invalid,
}

impl AttackResult {
    /// Whether the result lands on an airplane.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackResult::Hit | AttackResult::Kill)
    }
}

/// Opponent strength tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Uniform random over unattacked cells.
    Easy,
    /// Random search with neighbour follow-up after hits.
    Medium,
    /// Candidate-pruning head hunter.
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Random attacks",
            Difficulty::Medium => "Random + smart follow-up",
            Difficulty::Hard => "Intelligent head targeting",
        }
    }
}

/// Targeting phase of the hard engine, derived from current uncertainty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetingPhase {
    /// Wide uncertainty: heat-map search.
    #[default]
    Search,
    /// Narrowed: information-gain scoring.
    Lock,
    /// Near-certain: enumerate and finish.
    Kill,
}

/// Display state of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Empty,
    Airplane,
    Hit,
    Miss,
    Killed,
}
