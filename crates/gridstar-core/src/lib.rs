//! **gridstar-core** — occupancy grids for 4-connected pathfinding.
//!
//! This crate provides the foundational types used by `gridstar-paths`:
//! the [`Position`] coordinate, the [`Grid`] occupancy map, the shared
//! [`PathError`] taxonomy, and a parser for `#`/`.` text maps.

pub mod alloc;
pub mod ascii;
pub mod error;
pub mod geom;
pub mod grid;

pub use crate::alloc::try_filled;
pub use ascii::{AsciiMap, AsciiMapError};
pub use error::PathError;
pub use geom::Position;
pub use grid::Grid;
