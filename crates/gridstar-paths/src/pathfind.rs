//! One-call entry points: build a grid, search it, return the path.

use gridstar_core::{Grid, PathError, Position};

use crate::astar::{AstarSearch, SearchState};
use crate::config::SearchConfig;
use crate::path::Path;

/// Find a shortest path from `start` to `end` on a `width`×`height` grid
/// with the given obstacles, using the default [`SearchConfig`].
///
/// The returned [`Path`] lists positions goal first. Grid construction
/// errors ([`PathError::InvalidSize`], [`PathError::AllocationFailure`],
/// [`PathError::OutOfBounds`]) are reported before any search runs.
pub fn pathfind(
    obstacles: &[Position],
    width: i32,
    height: i32,
    start: Position,
    end: Position,
) -> Result<Path, PathError> {
    pathfind_with(SearchConfig::default(), obstacles, width, height, start, end)
}

/// [`pathfind`] with an explicit configuration.
pub fn pathfind_with(
    config: SearchConfig,
    obstacles: &[Position],
    width: i32,
    height: i32,
    start: Position,
    end: Position,
) -> Result<Path, PathError> {
    let grid = Grid::with_obstacles(width, height, obstacles)?;
    find_path_with(config, &grid, start, end)
}

/// [`pathfind`] that appends the goal→start positions to `out` instead of
/// allocating a [`Path`]. Returns the number of positions appended; `out` is
/// left untouched on error.
pub fn pathfind_into(
    obstacles: &[Position],
    width: i32,
    height: i32,
    start: Position,
    end: Position,
    out: &mut Vec<Position>,
) -> Result<usize, PathError> {
    pathfind_into_with(SearchConfig::default(), obstacles, width, height, start, end, out)
}

/// [`pathfind_into`] with an explicit configuration.
pub fn pathfind_into_with(
    config: SearchConfig,
    obstacles: &[Position],
    width: i32,
    height: i32,
    start: Position,
    end: Position,
    out: &mut Vec<Position>,
) -> Result<usize, PathError> {
    let grid = Grid::with_obstacles(width, height, obstacles)?;
    search_then(config, &grid, start, end, |search| search.reconstruct_into(out))
}

/// Search an existing grid with the default [`SearchConfig`].
pub fn find_path(grid: &Grid, start: Position, end: Position) -> Result<Path, PathError> {
    find_path_with(SearchConfig::default(), grid, start, end)
}

/// Search an existing grid.
pub fn find_path_with(
    config: SearchConfig,
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<Path, PathError> {
    search_then(config, grid, start, end, |search| search.path())
}

/// Run a search to completion and hand the finished engine to `finish`.
fn search_then<T>(
    config: SearchConfig,
    grid: &Grid,
    start: Position,
    end: Position,
    finish: impl FnOnce(&AstarSearch<'_>) -> Result<T, PathError>,
) -> Result<T, PathError> {
    let mut search = AstarSearch::new(grid, start, end, config)?;
    match search.run() {
        SearchState::Found => finish(&search),
        _ => Err(PathError::NoPathFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Membership;
    use crate::distance::manhattan;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn empty_five_by_five_corner_to_corner() {
        let path = pathfind(&[], 5, 5, p(0, 0), p(4, 4)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.goal(), Some(p(4, 4)));
        assert_eq!(path.start(), Some(p(0, 0)));
        // Monotonic staircase: every step moves east or south.
        for w in path.iter_forward().collect::<Vec<_>>().windows(2) {
            let step = (w[1].x - w[0].x, w[1].y - w[0].y);
            assert!(step == (1, 0) || step == (0, 1), "unexpected step {step:?}");
        }
    }

    #[test]
    fn blocking_column_has_no_path() {
        let wall = [p(1, 0), p(1, 1), p(1, 2)];
        assert_eq!(
            pathfind(&wall, 3, 3, p(0, 0), p(2, 2)),
            Err(PathError::NoPathFound)
        );
    }

    #[test]
    fn single_row_blocked_in_middle() {
        assert_eq!(
            pathfind(&[p(1, 0)], 3, 1, p(0, 0), p(2, 0)),
            Err(PathError::NoPathFound)
        );
    }

    #[test]
    fn endpoints_outside_grid() {
        assert_eq!(
            pathfind(&[], 3, 3, p(3, 0), p(0, 0)),
            Err(PathError::OutOfBounds(p(3, 0)))
        );
        assert_eq!(
            pathfind(&[], 3, 3, p(0, 0), p(0, -1)),
            Err(PathError::OutOfBounds(p(0, -1)))
        );
    }

    #[test]
    fn obstacle_outside_grid_aborts_construction() {
        assert_eq!(
            pathfind(&[p(0, 5)], 3, 3, p(0, 0), p(2, 2)),
            Err(PathError::OutOfBounds(p(0, 5)))
        );
    }

    #[test]
    fn invalid_size() {
        assert_eq!(
            pathfind(&[], 0, 3, p(0, 0), p(0, 0)),
            Err(PathError::InvalidSize {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn blocked_endpoint_is_an_error() {
        assert_eq!(
            pathfind(&[p(2, 2)], 3, 3, p(0, 0), p(2, 2)),
            Err(PathError::BlockedEndpoint(p(2, 2)))
        );
        assert_eq!(
            pathfind(&[p(0, 0)], 3, 3, p(0, 0), p(2, 2)),
            Err(PathError::BlockedEndpoint(p(0, 0)))
        );
    }

    #[test]
    fn start_equals_end() {
        let path = pathfind(&[p(0, 0)], 2, 2, p(1, 1), p(1, 1)).unwrap();
        assert_eq!(path.cells(), &[p(1, 1)]);
    }

    #[test]
    fn into_appends_to_caller_buffer() {
        let mut out = vec![p(-9, -9)];
        let n = pathfind_into(&[], 4, 1, p(0, 0), p(3, 0), &mut out).unwrap();
        assert_eq!(n, 4);
        assert_eq!(out, vec![p(-9, -9), p(3, 0), p(2, 0), p(1, 0), p(0, 0)]);
    }

    #[test]
    fn into_leaves_buffer_alone_on_failure() {
        let mut out = Vec::new();
        assert_eq!(
            pathfind_into(&[p(1, 0)], 3, 1, p(0, 0), p(2, 0), &mut out),
            Err(PathError::NoPathFound)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn into_with_either_membership_matches_find_path() {
        let obstacles = [p(1, 0), p(1, 1), p(3, 2), p(3, 3), p(0, 3)];
        let grid = Grid::with_obstacles(5, 5, &obstacles).unwrap();
        let expected = find_path(&grid, p(0, 0), p(4, 4)).unwrap();
        for membership in [Membership::Table, Membership::Scan] {
            let config = SearchConfig::default().with_membership(membership);
            let mut out = Vec::new();
            let n = pathfind_into_with(config, &obstacles, 5, 5, p(0, 0), p(4, 4), &mut out)
                .unwrap();
            assert_eq!(n, out.len());
            assert_eq!(n, expected.len(), "{membership:?}");
            assert_eq!(out.first(), Some(&p(4, 4)));
            assert_eq!(out.last(), Some(&p(0, 0)));
        }
    }

    #[test]
    fn into_with_reports_no_path_for_scan_too() {
        let config = SearchConfig::default().with_membership(Membership::Scan);
        let mut out = Vec::new();
        assert_eq!(
            pathfind_into_with(config, &[p(1, 0)], 3, 1, p(0, 0), p(2, 0), &mut out),
            Err(PathError::NoPathFound)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn empty_grid_paths_are_manhattan_long() {
        let grid = Grid::new(7, 5).unwrap();
        for (s, e) in [(p(0, 0), p(6, 4)), (p(6, 0), p(0, 4)), (p(3, 2), p(3, 2)), (p(5, 1), p(1, 3))] {
            let path = find_path(&grid, s, e).unwrap();
            assert_eq!(path.len() as i32, manhattan(s, e) + 1);
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        let obstacles = [p(2, 1), p(2, 2), p(4, 3), p(1, 4)];
        let a = pathfind(&obstacles, 6, 6, p(0, 0), p(5, 5)).unwrap();
        let b = pathfind(&obstacles, 6, 6, p(0, 0), p(5, 5)).unwrap();
        assert_eq!(a, b);
    }
}
