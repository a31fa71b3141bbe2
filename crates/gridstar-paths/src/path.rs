use gridstar_core::Position;

/// A found path, stored goal first and start last.
///
/// Use [`iter_forward`](Path::iter_forward) or
/// [`into_forward`](Path::into_forward) for start-to-goal order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub(crate) fn from_goal_to_start(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// Positions in goal→start order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells, both endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    pub fn cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// The goal cell.
    pub fn goal(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// The start cell.
    pub fn start(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Iterate in start→goal order.
    pub fn iter_forward(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().rev().copied()
    }

    /// Consume the path, returning positions in start→goal order.
    pub fn into_forward(mut self) -> Vec<Position> {
        self.cells.reverse();
        self.cells
    }
}
