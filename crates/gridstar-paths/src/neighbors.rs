use gridstar_core::{Grid, Position};

/// Cached neighbor computation helper.
///
/// Enumerates the walkable cardinal neighbors of a cell in the fixed order
/// west, east, north, south, reusing one buffer across calls.
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return cardinal neighbors of `p`, keeping only those for which `keep`
    /// returns `true`.
    pub fn cardinal(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Cardinal neighbors of `p` that are in bounds and unblocked in `grid`.
    pub fn walkable(&mut self, grid: &Grid, p: Position) -> &[Position] {
        self.cardinal(p, |n| grid.is_free(n))
    }
}
