//! A* shortest paths on 4-connected occupancy grids.
//!
//! Movement is restricted to the four cardinal directions with unit cost,
//! and the search is guided by the Manhattan distance, which never
//! overestimates on such grids, so every returned path is a shortest one.
//!
//! - [`pathfind`] builds a [`Grid`](gridstar_core::Grid) from dimensions and
//!   obstacles and searches it in one call.
//! - [`AstarSearch`] exposes the search as a state machine that can be
//!   stepped and inspected.
//!
//! Paths are reported goal first; see [`Path::iter_forward`] for the other
//! direction.
//!
//! ```
//! use gridstar_core::Position;
//! use gridstar_paths::pathfind;
//!
//! let wall = [Position::new(1, 0), Position::new(1, 1)];
//! let path = pathfind(&wall, 3, 3, Position::new(0, 0), Position::new(2, 0)).unwrap();
//! assert_eq!(path.len(), 7);
//! ```

mod astar;
mod config;
mod distance;
mod neighbors;
mod open_set;
mod path;
mod pathfind;
mod reconstruct;
mod scores;

pub use astar::{AstarSearch, SearchNode, SearchState};
pub use config::{Membership, SearchConfig};
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use open_set::OpenSet;
pub use path::Path;
pub use pathfind::{
    find_path, find_path_with, pathfind, pathfind_into, pathfind_into_with, pathfind_with,
};
pub use reconstruct::reconstruct_into;
pub use scores::ScoreTables;
