//! The [`PathError`] taxonomy shared by grid construction and search.

use std::fmt;

use crate::geom::Position;

/// Errors reported by grid construction and path searches.
///
/// Every variant is recoverable; none of them terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A coordinate lies outside the grid.
    OutOfBounds(Position),
    /// The start or end of a search sits on a blocked cell.
    BlockedEndpoint(Position),
    /// Width or height is not strictly positive.
    InvalidSize { width: i32, height: i32 },
    /// A buffer of `cells` elements could not be reserved.
    AllocationFailure { cells: usize },
    /// The open set was exhausted before reaching the goal.
    NoPathFound,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the grid"),
            Self::BlockedEndpoint(p) => write!(f, "endpoint {p} is blocked"),
            Self::InvalidSize { width, height } => {
                write!(f, "invalid grid size {width}x{height}")
            }
            Self::AllocationFailure { cells } => {
                write!(f, "failed to allocate buffer for {cells} cells")
            }
            Self::NoPathFound => f.write_str("no path found"),
        }
    }
}

impl std::error::Error for PathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PathError::OutOfBounds(Position::new(-1, 4)).to_string(),
            "position (-1, 4) is outside the grid"
        );
        assert_eq!(
            PathError::InvalidSize {
                width: 0,
                height: 3
            }
            .to_string(),
            "invalid grid size 0x3"
        );
        assert_eq!(PathError::NoPathFound.to_string(), "no path found");
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PathError::NoPathFound);
        assert_eq!(err.to_string(), "no path found");
    }
}
