//! **hexhop-core**: geometry and terrain types for hexagonal ponds.
//!
//! This crate provides the foundational types shared by the *hexhop*
//! workspace: offset hex coordinates with six-way adjacency, the closed set
//! of pond terrains, and a dense row-major grid.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Direction, InvalidDirection, Point};
pub use grid::Grid;
pub use terrain::Terrain;
