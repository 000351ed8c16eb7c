//! Text pond maps for hexhop.
//!
//! A pond file holds one character per cell:
//!
//! | Char | Terrain |
//! |---|---|
//! | `S` | start (exactly one) |
//! | `E` | goal |
//! | `.` | water |
//! | `L` | lily pad |
//! | `R` | reeds |
//! | `M` | mud |
//! | `A` | alligator |
//! | `1` `2` `3` | flies |
//!
//! Odd rows sit half a cell to the right of even rows.

use std::path::Path;

use hexhop_paths::PathEngine;

mod error;
mod pond;

pub use error::PondError;
pub use pond::Pond;

/// Load the pond at `path` and wrap it in an engine with the default
/// scoring.
pub fn open_engine(path: impl AsRef<Path>) -> Result<PathEngine<Pond>, PondError> {
    Pond::load(path).map(PathEngine::new)
}
