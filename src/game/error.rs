use super::components::Status;

/// All the possible recoverable errors produced by the game.
///
/// `InvalidColumn`, `ColumnFull` and `GameOver` are rejected drops: nothing changed and
/// the input can simply be ignored.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("column {column} does not exist (board is {width} wide)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is already full")]
    ColumnFull(usize),

    #[error("the game is over ({0:?})")]
    GameOver(Status),

    #[error("invalid board dimensions {width}x{height}")]
    InvalidDim { width: usize, height: usize },

    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for drops that were refused without touching the game.
    pub fn is_rejected_drop(&self) -> bool {
        matches!(
            self,
            Error::InvalidColumn { .. } | Error::ColumnFull(_) | Error::GameOver(_)
        )
    }
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;
