//! The [`Grid`] type — a fixed-size occupancy map.
//!
//! A `Grid` owns one byte per cell in row-major order: `0` is free, `1` is
//! blocked. Cell `(x, y)` lives at index `y * width + x`.

use crate::alloc::try_filled;
use crate::error::PathError;
use crate::geom::Position;

const FREE: u8 = 0;
const BLOCKED: u8 = 1;

/// A 2D occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell free.
    pub fn new(width: i32, height: i32) -> Result<Self, PathError> {
        if width <= 0 || height <= 0 {
            return Err(PathError::InvalidSize { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(PathError::AllocationFailure { cells: usize::MAX })?;
        let cells = try_filled(len, FREE)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Create a grid and mark every obstacle blocked.
    ///
    /// Duplicate obstacles are tolerated. The first obstacle outside the
    /// grid aborts construction with [`PathError::OutOfBounds`].
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: &[Position],
    ) -> Result<Self, PathError> {
        let mut grid = Self::new(width, height)?;
        for &p in obstacles {
            grid.set(p, true).inspect_err(|_| {
                log::warn!("obstacle {p} lies outside {width}x{height} grid");
            })?;
        }
        Ok(grid)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells, which only happens after
    /// [`release`](Grid::release).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](Grid::index), or `None` if `idx` is not a cell.
    #[inline]
    pub fn position(&self, idx: usize) -> Option<Position> {
        if idx >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Position::new((idx % w) as i32, (idx / w) as i32))
    }

    /// Mark `p` blocked or free. Leaves the grid untouched on error.
    pub fn set(&mut self, p: Position, blocked: bool) -> Result<(), PathError> {
        let idx = self.index(p).ok_or(PathError::OutOfBounds(p))?;
        self.cells[idx] = if blocked { BLOCKED } else { FREE };
        Ok(())
    }

    /// Whether `p` is an in-bounds blocked cell.
    #[inline]
    pub fn is_blocked(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.cells[i] != FREE)
    }

    /// Whether `p` is an in-bounds free cell, i.e. walkable.
    #[inline]
    pub fn is_free(&self, p: Position) -> bool {
        self.index(p).is_some_and(|i| self.cells[i] == FREE)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != FREE).count()
    }

    /// Iterate over blocked positions in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != FREE)
            .filter_map(|(i, _)| self.position(i))
    }

    /// Free the occupancy buffer. Calling it again is a no-op.
    ///
    /// A released grid has zero size and contains no positions.
    pub fn release(&mut self) {
        self.cells = Vec::new();
        self.width = 0;
        self.height = 0;
    }
}
