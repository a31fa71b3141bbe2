use gridstar_core::{Grid, Position};

use crate::scores::ScoreTables;

/// Append the path ending at `goal` to `out`, goal first.
///
/// Follows `predecessor` links until a cell without one (the start).
/// Returns the number of positions appended, always at least 1.
pub fn reconstruct_into(
    tables: &ScoreTables,
    grid: &Grid,
    goal: Position,
    out: &mut Vec<Position>,
) -> usize {
    let before = out.len();
    out.push(goal);
    let mut ci = grid.index(goal);
    while let Some(prev) = ci.and_then(|i| tables.predecessor(i)) {
        let Some(p) = grid.position(prev) else {
            break;
        };
        out.push(p);
        ci = Some(prev);
    }
    out.len() - before
}
