use crate::{MAX_DEPTH, MIN_DEPTH};

/// The error type for constructing a [`Board`](crate::Board).
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The requested subdivision depth is outside `MIN_DEPTH..=MAX_DEPTH`.
    DepthOutOfRange { max_depth: u8 },
    /// A tree description subdivides further than the board's depth allows.
    TreeTooDeep { depth: u8, max_depth: u8 },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::DepthOutOfRange { max_depth } => write!(
                f,
                "Subdivision depth {} is outside the allowed range {}..={}",
                max_depth, MIN_DEPTH, MAX_DEPTH
            ),
            BoardError::TreeTooDeep { depth, max_depth } => write!(
                f,
                "Tree description has depth {}, which exceeds the board's maximum depth {}",
                depth, max_depth
            ),
        }
    }
}
