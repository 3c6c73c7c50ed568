//! Error types for board construction, coordinate parsing and move requests.
//!
//! Every error here is a rejected request. None of them leave a board or game
//! state half-modified, so all are recoverable at the call site.

/// Reasons a move request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended.
    #[error("Illegal move: game is over")]
    GameOver,
    /// The index or coordinate does not name a cell on the board.
    #[error("Illegal move: {0} is off the board")]
    OutOfBounds(String),
    /// The target cell already holds a disc.
    #[error("Illegal move: cell {0} is not empty")]
    Occupied(usize),
    /// Placing at the target would not capture anything.
    #[error("Illegal move: cell {0} captures nothing")]
    NoCaptures(usize),
}

/// Reasons a board cannot be built from raw cell data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("invalid cell value {value} at index {index}")]
    InvalidValue { index: usize, value: i8 },
}

/// A coordinate string that does not follow the board's notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {0:?}")]
pub struct ParseCoordError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::GameOver.to_string(), "Illegal move: game is over");
        assert_eq!(
            MoveError::Occupied(27).to_string(),
            "Illegal move: cell 27 is not empty"
        );
        assert_eq!(
            MoveError::OutOfBounds("index 64".to_string()).to_string(),
            "Illegal move: index 64 is off the board"
        );
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidValue { index: 3, value: 2 };
        assert_eq!(err.to_string(), "invalid cell value 2 at index 3");
    }

    #[test]
    fn test_parse_coord_error_display() {
        let err = ParseCoordError("Z9".to_string());
        assert_eq!(err.to_string(), "invalid coordinate: \"Z9\"");
    }
}
