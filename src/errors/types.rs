use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, BoardError>;
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("no boards")]
    NoBoards,
    #[error("no next board")]
    NoNextBoard,
    #[error("no previous board")]
    NoPreviousBoard,
    #[error("board index {index} out of range (history has {len} boards)")]
    OutOfRange { index: usize, len: usize },
    #[error("no current board selected")]
    NoCurrentBoard,
    #[error("cannot list {path:?}: {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },
}
impl BoardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoBoards => ErrorCode::NoBoards,
            Self::NoNextBoard => ErrorCode::NoNextBoard,
            Self::NoPreviousBoard => ErrorCode::NoPreviousBoard,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
            Self::NoCurrentBoard => ErrorCode::NoCurrentBoard,
            Self::Listing { .. } => ErrorCode::ListingFailed,
            Self::NotADirectory { .. } => ErrorCode::InvalidPath,
        }
    }
    /// True when the error only means there is nowhere to move; UI callers
    /// usually disable the control instead of surfacing these.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self, Self::NoBoards | Self::NoNextBoard | Self::NoPreviousBoard |
            Self::OutOfRange { .. } | Self::NoCurrentBoard
        )
    }
}
/// Stable error codes, usable in logs and JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    NoBoards,
    NoNextBoard,
    NoPreviousBoard,
    OutOfRange,
    NoCurrentBoard,
    ListingFailed,
    InvalidPath,
}
impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::NoBoards => "NO_BOARDS",
            ErrorCode::NoNextBoard => "NO_NEXT_BOARD",
            ErrorCode::NoPreviousBoard => "NO_PREVIOUS_BOARD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::NoCurrentBoard => "NO_CURRENT_BOARD",
            ErrorCode::ListingFailed => "LISTING_FAILED",
            ErrorCode::InvalidPath => "INVALID_PATH",
        };
        f.write_str(s)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_navigation_classification() {
        assert!(BoardError::NoBoards.is_navigation());
        assert!(BoardError::OutOfRange { index: 3, len: 1 }.is_navigation());
        let err = BoardError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        };
        assert!(! err.is_navigation());
        assert_eq!(err.code(), ErrorCode::InvalidPath);
    }
    #[test]
    fn test_messages() {
        assert_eq!(BoardError::NoNextBoard.to_string(), "no next board");
        assert_eq!(
            BoardError::OutOfRange { index: 5, len: 2 }.to_string(),
            "board index 5 out of range (history has 2 boards)"
        );
        assert_eq!(ErrorCode::NoPreviousBoard.to_string(), "NO_PREVIOUS_BOARD");
    }
}
