use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetingError {
    /// Every cell has been attacked. Terminal signal, not a fault.
    #[error("no legal move: every cell has been attacked")]
    NoMoveAvailable,
    #[error("a {size}x{size} board cannot hold a single airplane")]
    BoardTooSmall { size: i32 },
}
