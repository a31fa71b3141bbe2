//! Occupancy maps written as text.
//!
//! Each line is a row; `#` marks a blocked cell and `.` a free one:
//!
//! ```text
//! ...##..
//! .#..#.#
//! ..#....
//! #.##.#.
//! ```

use std::fmt;

use crate::error::PathError;
use crate::geom::Position;
use crate::grid::Grid;

/// Character marking a blocked cell.
pub const BLOCKED_CHAR: char = '#';
/// Character marking a free cell.
pub const FREE_CHAR: char = '.';

/// Obstacles and dimensions parsed from a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    obstacles: Vec<Position>,
    width: i32,
    height: i32,
}

impl AsciiMap {
    /// Parse a text map.
    ///
    /// Leading/trailing whitespace of the whole string is trimmed, but not of
    /// individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, AsciiMapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AsciiMapError::Empty);
        }

        let mut obstacles = Vec::new();
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                match ch {
                    BLOCKED_CHAR => obstacles.push(Position::new(x, y)),
                    FREE_CHAR => {}
                    _ => {
                        return Err(AsciiMapError::InvalidChar {
                            ch,
                            pos: Position::new(x, y),
                        });
                    }
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(AsciiMapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            obstacles,
            width: width.unwrap_or(0),
            height,
        })
    }

    /// Blocked positions in row-major order.
    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    /// Width of every row.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Build the occupancy grid described by this map.
    pub fn to_grid(&self) -> Result<Grid, PathError> {
        Grid::with_obstacles(self.width, self.height, &self.obstacles)
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsciiMapError {
    /// The map has no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character other than `#` or `.` was found.
    InvalidChar { ch: char, pos: Position },
}

impl fmt::Display for AsciiMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for AsciiMapError {}
