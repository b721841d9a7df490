//! Game modes and fleet-size validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_BOARD_SIZE, MAX_OCCUPANCY, MIN_BOARD_SIZE, PLANE_CELL_COUNT};

/// Errors raised while building a game configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size {size} is outside {min}..={max}")]
    BoardSize { size: i32, min: i32, max: i32 },
    #[error("{count} airplanes is outside {min}..={max} for this mode")]
    AirplaneCount { count: usize, min: usize, max: usize },
    #[error(
        "{count} airplanes would occupy {percent:.1}% of the {size}x{size} board; \
         at most {recommended} fit"
    )]
    Occupancy {
        count: usize,
        size: i32,
        percent: f64,
        recommended: usize,
    },
    #[error("{mode:?} mode plays on a {expected}x{expected} board, not {size}x{size}")]
    FixedBoardSize {
        mode: GameMode,
        size: i32,
        expected: i32,
    },
    #[error("unknown game mode `{0}`")]
    UnknownMode(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// 10x10 board, 3 airplanes.
    #[default]
    Standard,
    /// 15x15 board, 6 airplanes.
    Extended,
    /// Player-chosen board (10..=20) and fleet (1..=10).
    Custom,
}

impl GameMode {
    pub fn from_id(id: &str) -> Result<Self, ConfigError> {
        match id {
            "standard" => Ok(GameMode::Standard),
            "extended" => Ok(GameMode::Extended),
            "custom" => Ok(GameMode::Custom),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
            GameMode::Extended => "extended",
            GameMode::Custom => "custom",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Standard => "Standard Mode",
            GameMode::Extended => "Extended Mode",
            GameMode::Custom => "Custom Mode",
        }
    }

    /// Inclusive airplane-count range allowed in this mode.
    pub fn airplane_range(&self) -> (usize, usize) {
        match self {
            GameMode::Standard => (3, 3),
            GameMode::Extended => (6, 6),
            GameMode::Custom => (1, 10),
        }
    }
}

/// Board and fleet dimensions for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub mode: GameMode,
    pub board_size: i32,
    pub airplanes: usize,
}

impl ModeConfig {
    /// Default dimensions for a mode.
    pub fn for_mode(mode: GameMode) -> Self {
        let (board_size, airplanes) = match mode {
            GameMode::Standard => (10, 3),
            GameMode::Extended => (15, 6),
            GameMode::Custom => (15, 3),
        };
        Self {
            mode,
            board_size,
            airplanes,
        }
    }

    /// A validated custom configuration.
    pub fn custom(board_size: i32, airplanes: usize) -> Result<Self, ConfigError> {
        let config = Self {
            mode: GameMode::Custom,
            board_size,
            airplanes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == GameMode::Custom {
            validate_board_size(self.board_size)?;
        } else {
            let expected = Self::for_mode(self.mode).board_size;
            if self.board_size != expected {
                return Err(ConfigError::FixedBoardSize {
                    mode: self.mode,
                    size: self.board_size,
                    expected,
                });
            }
        }
        let (min, max) = self.mode.airplane_range();
        if !(min..=max).contains(&self.airplanes) {
            return Err(ConfigError::AirplaneCount {
                count: self.airplanes,
                min,
                max,
            });
        }
        validate_airplane_count(self.airplanes, self.board_size)
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::for_mode(GameMode::default())
    }
}

pub fn validate_board_size(size: i32) -> Result<(), ConfigError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::BoardSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        })
    }
}

/// Reject fleets that would cover more than 40% of the board.
pub fn validate_airplane_count(count: usize, board_size: i32) -> Result<(), ConfigError> {
    let total_cells = (board_size.max(0) * board_size.max(0)) as f64;
    let occupancy = (count * PLANE_CELL_COUNT) as f64 / total_cells;
    if occupancy > MAX_OCCUPANCY {
        let recommended = (total_cells * MAX_OCCUPANCY / PLANE_CELL_COUNT as f64).floor() as usize;
        return Err(ConfigError::Occupancy {
            count,
            size: board_size,
            percent: occupancy * 100.0,
            recommended,
        });
    }
    Ok(())
}
