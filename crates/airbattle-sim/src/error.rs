use thiserror::Error;

use airbattle_ai::TargetingError;
use airbattle_core::types::Position;
use airbattle_core::ConfigError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("airplane {id} extends outside the board")]
    OutOfBounds { id: u32 },
    #[error("airplane {id} overlaps airplane {other} at {at}")]
    Overlap { id: u32, other: u32, at: Position },
    #[error("fleet already holds {capacity} airplanes")]
    FleetFull { capacity: usize },
    #[error("could not place {count} airplanes on a {size}x{size} board")]
    PlacementFailed { count: usize, size: i32 },
    #[error("no airplane with id {0}")]
    UnknownAirplane(u32),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Targeting(#[from] TargetingError),
    #[error("invalid match config: {0}")]
    Json(#[from] serde_json::Error),
}
