use gridstar_core::{Grid, PathError, Position};

use crate::config::{Membership, SearchConfig};
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::open_set::OpenSet;
use crate::path::Path;
use crate::reconstruct::reconstruct_into;
use crate::scores::ScoreTables;

/// Where an [`AstarSearch`] stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// The open set is non-empty and the goal has not been pulled yet.
    Searching,
    /// The goal was pulled; a shortest path is available.
    Found,
    /// The open set ran dry; no path exists.
    Exhausted,
}

/// A position awaiting expansion together with its f-score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Position,
    pub f: i32,
}

/// One A* search from `start` to `goal` over a borrowed [`Grid`].
///
/// Movement is 4-directional with unit cost and neighbors are expanded in
/// west, east, north, south order, so identical inputs always produce the
/// same path. The search can be driven to completion with
/// [`run`](AstarSearch::run) or advanced one expansion at a time with
/// [`step`](AstarSearch::step).
pub struct AstarSearch<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Position,
    goal_idx: usize,
    config: SearchConfig,
    open: OpenSet<Position>,
    tables: ScoreTables,
    nbuf: Neighbors,
    state: SearchState,
    expansions: usize,
}

impl<'g> AstarSearch<'g> {
    /// Prepare a search. Fails if an endpoint is outside the grid or blocked,
    /// or if the score tables cannot be allocated.
    pub fn new(
        grid: &'g Grid,
        start: Position,
        goal: Position,
        config: SearchConfig,
    ) -> Result<Self, PathError> {
        let start_idx = grid.index(start).ok_or(PathError::OutOfBounds(start))?;
        let goal_idx = grid.index(goal).ok_or(PathError::OutOfBounds(goal))?;
        if let Some(p) = [start, goal].into_iter().find(|&p| grid.is_blocked(p)) {
            return Err(PathError::BlockedEndpoint(p));
        }

        let h = manhattan(start, goal);
        let mut tables = ScoreTables::new(grid.len())?;
        tables.reset(start_idx, h);
        let mut open = OpenSet::new();
        open.insert(start, h);

        Ok(Self {
            grid,
            start,
            goal,
            goal_idx,
            config,
            open,
            tables,
            nbuf: Neighbors::new(),
            state: SearchState::Searching,
            expansions: 0,
        })
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of entries in the open set, superseded ones included.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Live open-set nodes, in unspecified order.
    pub fn open_nodes(&self) -> impl Iterator<Item = SearchNode> + '_ {
        self.open.iter().filter_map(|(&pos, f)| {
            let i = self.grid.index(pos)?;
            (self.tables.is_open(i) && self.tables.f(i) == Some(f)).then_some(SearchNode { pos, f })
        })
    }

    /// Best known cost from the start to `p`.
    pub fn g_score(&self, p: Position) -> Option<i32> {
        self.grid.index(p).and_then(|i| self.tables.g(i))
    }

    /// Current f-score of `p`.
    pub fn f_score(&self, p: Position) -> Option<i32> {
        self.grid.index(p).and_then(|i| self.tables.f(i))
    }

    /// Length of the shortest path in moves, once [`SearchState::Found`].
    pub fn cost(&self) -> Option<i32> {
        match self.state {
            SearchState::Found => self.tables.g(self.goal_idx),
            _ => None,
        }
    }

    /// Read-only view of the score tables.
    pub fn tables(&self) -> &ScoreTables {
        &self.tables
    }

    /// Pull the next node and either finish or expand it.
    ///
    /// Does nothing once the search is in a terminal state.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Searching {
            return self.state;
        }

        let Some(current) = self.pull_live() else {
            self.state = SearchState::Exhausted;
            log::debug!(
                "A* {} -> {}: exhausted after {} expansions",
                self.start,
                self.goal,
                self.expansions
            );
            return self.state;
        };

        if current == self.goal {
            self.state = SearchState::Found;
            log::debug!(
                "A* {} -> {}: found after {} expansions (cost {:?})",
                self.start,
                self.goal,
                self.expansions,
                self.tables.g(self.goal_idx)
            );
            return self.state;
        }

        self.expand(current);
        self.state
    }

    /// Step until the search reaches a terminal state.
    pub fn run(&mut self) -> SearchState {
        while self.step() == SearchState::Searching {}
        self.state
    }

    /// Append the found path to `out` in goal→start order and return the
    /// number of positions appended.
    pub fn reconstruct_into(&self, out: &mut Vec<Position>) -> Result<usize, PathError> {
        if self.state != SearchState::Found {
            return Err(PathError::NoPathFound);
        }
        Ok(reconstruct_into(&self.tables, self.grid, self.goal, out))
    }

    /// The found path, goal first.
    pub fn path(&self) -> Result<Path, PathError> {
        let len = self.cost().map_or(1, |c| c as usize + 1);
        let mut cells = Vec::with_capacity(len);
        self.reconstruct_into(&mut cells)?;
        Ok(Path::from_goal_to_start(cells))
    }

    /// Pop until a node whose position is still open; superseded nodes are
    /// dropped.
    fn pull_live(&mut self) -> Option<Position> {
        while let Some((p, f)) = self.open.pull_min() {
            let Some(i) = self.grid.index(p) else {
                continue;
            };
            if !self.tables.is_open(i) {
                log::trace!("skipping superseded node {p} (f = {f})");
                continue;
            }
            self.tables.set_open(i, false);
            return Some(p);
        }
        None
    }

    fn expand(&mut self, current: Position) {
        let Some(ci) = self.grid.index(current) else {
            return;
        };
        let Some(current_g) = self.tables.g(ci) else {
            return;
        };
        self.expansions += 1;
        log::trace!("expanding {current} (g = {current_g})");

        let mut nbuf = std::mem::take(&mut self.nbuf);
        for &np in nbuf.walkable(self.grid, current) {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            let h = manhattan(np, self.goal);
            if let Some(f) = self.tables.relax(ni, ci, current_g + 1, h) {
                self.push_open(np, ni, f);
            }
        }
        self.nbuf = nbuf;
    }

    fn push_open(&mut self, p: Position, idx: usize, f: i32) {
        match self.config.membership {
            Membership::Table => {
                // Any older node for `p` has a larger key and is skipped later.
                self.open.insert(p, f);
                self.tables.set_open(idx, true);
            }
            Membership::Scan => match self.open.find(|&q| q == p) {
                Some(slot) => {
                    self.open.decrease_key(slot, f);
                }
                None => {
                    self.open.insert(p, f);
                    self.tables.set_open(idx, true);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn initial_state_holds_only_start() {
        let grid = Grid::new(4, 4).unwrap();
        let search = AstarSearch::new(&grid, p(0, 0), p(3, 2), SearchConfig::default()).unwrap();
        assert_eq!(search.state(), SearchState::Searching);
        assert_eq!(search.g_score(p(0, 0)), Some(0));
        assert_eq!(search.f_score(p(0, 0)), Some(5));
        assert_eq!(search.g_score(p(1, 0)), None);
        assert_eq!(
            search.open_nodes().collect::<Vec<_>>(),
            vec![SearchNode { pos: p(0, 0), f: 5 }]
        );
    }

    #[test]
    fn first_step_expands_start_neighbors() {
        let grid = Grid::new(3, 3).unwrap();
        let mut search =
            AstarSearch::new(&grid, p(1, 1), p(2, 2), SearchConfig::default()).unwrap();
        assert_eq!(search.step(), SearchState::Searching);
        assert_eq!(search.expansions(), 1);
        assert_eq!(search.open_len(), 4);
        for n in p(1, 1).neighbors_4() {
            assert_eq!(search.g_score(n), Some(1));
        }
        assert_eq!(search.tables().predecessor(grid.index(p(2, 1)).unwrap()), grid.index(p(1, 1)));
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(2, 2).unwrap();
        let mut search =
            AstarSearch::new(&grid, p(1, 1), p(1, 1), SearchConfig::default()).unwrap();
        assert_eq!(search.run(), SearchState::Found);
        assert_eq!(search.cost(), Some(0));
        assert_eq!(search.path().unwrap().cells(), &[p(1, 1)]);
        assert_eq!(search.expansions(), 0);
    }

    #[test]
    fn terminal_states_are_sticky() {
        let grid = Grid::with_obstacles(3, 1, &[p(1, 0)]).unwrap();
        let mut search =
            AstarSearch::new(&grid, p(0, 0), p(2, 0), SearchConfig::default()).unwrap();
        assert_eq!(search.run(), SearchState::Exhausted);
        assert_eq!(search.step(), SearchState::Exhausted);
        assert_eq!(search.cost(), None);
        assert_eq!(search.path(), Err(PathError::NoPathFound));
    }

    #[test]
    fn path_unavailable_while_searching() {
        let grid = Grid::new(5, 5).unwrap();
        let search = AstarSearch::new(&grid, p(0, 0), p(4, 4), SearchConfig::default()).unwrap();
        let mut out = Vec::new();
        assert_eq!(search.reconstruct_into(&mut out), Err(PathError::NoPathFound));
        assert!(out.is_empty());
    }

    #[test]
    fn endpoints_are_validated() {
        let grid = Grid::with_obstacles(3, 3, &[p(2, 2)]).unwrap();
        let cfg = SearchConfig::default();
        assert_eq!(
            AstarSearch::new(&grid, p(-1, 0), p(1, 1), cfg).err(),
            Some(PathError::OutOfBounds(p(-1, 0)))
        );
        assert_eq!(
            AstarSearch::new(&grid, p(0, 0), p(0, 3), cfg).err(),
            Some(PathError::OutOfBounds(p(0, 3)))
        );
        assert_eq!(
            AstarSearch::new(&grid, p(0, 0), p(2, 2), cfg).err(),
            Some(PathError::BlockedEndpoint(p(2, 2)))
        );
    }

    #[test]
    fn detour_around_wall_is_optimal() {
        // .....
        // .###.
        // S#G#.
        // .....
        let walls = [p(1, 1), p(2, 1), p(3, 1), p(1, 2), p(3, 2)];
        let grid = Grid::with_obstacles(5, 4, &walls).unwrap();
        for membership in [Membership::Table, Membership::Scan] {
            let cfg = SearchConfig::default().with_membership(membership);
            let mut search = AstarSearch::new(&grid, p(0, 2), p(2, 2), cfg).unwrap();
            assert_eq!(search.run(), SearchState::Found);
            assert_eq!(search.cost(), Some(4));
            let path = search.path().unwrap();
            assert_eq!(path.len(), 5);
            assert_eq!(path.cells()[1], p(2, 3));
        }
    }

    #[test]
    fn cost_matches_g_score_of_goal() {
        let grid = Grid::with_obstacles(6, 6, &[p(2, 0), p(2, 1), p(2, 2), p(2, 3)]).unwrap();
        let mut search =
            AstarSearch::new(&grid, p(0, 0), p(5, 0), SearchConfig::default()).unwrap();
        search.run();
        let path = search.path().unwrap();
        assert_eq!(search.g_score(p(5, 0)), search.cost());
        assert_eq!(path.len() as i32, search.cost().unwrap() + 1);
        assert_eq!(path.len(), 14);
    }
}
