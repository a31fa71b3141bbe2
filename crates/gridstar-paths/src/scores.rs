use gridstar_core::{PathError, try_filled};

/// Per-cell search bookkeeping, indexed by [`Grid::index`](gridstar_core::Grid::index).
///
/// `None` in the score arrays means "infinite"; `None` in `predecessor`
/// means the cell has no recorded parent (the start, or never reached).
#[derive(Clone, Debug)]
pub struct ScoreTables {
    predecessor: Vec<Option<usize>>,
    g: Vec<Option<i32>>,
    f: Vec<Option<i32>>,
    open: Vec<bool>,
}

impl ScoreTables {
    /// Allocate tables for `len` cells, all unknown.
    pub fn new(len: usize) -> Result<Self, PathError> {
        Ok(Self {
            predecessor: try_filled(len, None)?,
            g: try_filled(len, None)?,
            f: try_filled(len, None)?,
            open: try_filled(len, false)?,
        })
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.g.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.g.is_empty()
    }

    /// Forget everything, then seed `start` with `g = 0` and `f = h`.
    pub(crate) fn reset(&mut self, start: usize, h: i32) {
        self.predecessor.fill(None);
        self.g.fill(None);
        self.f.fill(None);
        self.open.fill(false);
        self.g[start] = Some(0);
        self.f[start] = Some(h);
        self.open[start] = true;
    }

    /// Best known cost from the start, `None` if unreached.
    #[inline]
    pub fn g(&self, idx: usize) -> Option<i32> {
        self.g[idx]
    }

    /// `g + heuristic`, `None` if unreached.
    #[inline]
    pub fn f(&self, idx: usize) -> Option<i32> {
        self.f[idx]
    }

    /// The cell currently offering the best known path into `idx`.
    #[inline]
    pub fn predecessor(&self, idx: usize) -> Option<usize> {
        self.predecessor[idx]
    }

    /// Whether `idx` has a live node in the open set.
    #[inline]
    pub fn is_open(&self, idx: usize) -> bool {
        self.open[idx]
    }

    #[inline]
    pub(crate) fn set_open(&mut self, idx: usize, open: bool) {
        self.open[idx] = open;
    }

    /// Record `from` as the parent of `idx` if `g` beats the known cost.
    ///
    /// Returns the new f-score on improvement.
    pub(crate) fn relax(&mut self, idx: usize, from: usize, g: i32, h: i32) -> Option<i32> {
        if self.g[idx].is_some_and(|known| g >= known) {
            return None;
        }
        let f = g + h;
        self.predecessor[idx] = Some(from);
        self.g[idx] = Some(g);
        self.f[idx] = Some(f);
        Some(f)
    }
}
