use std::io;
use std::path::PathBuf;

use hexhop_core::Point;

/// Why a pond map could not be built.
#[derive(Debug, thiserror::Error)]
pub enum PondError {
    /// The map file could not be read.
    #[error("failed to read pond map {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The map has no cells at all.
    #[error("pond map is empty")]
    Empty,

    /// Rows differ in width.
    #[error("pond map row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character that does not name a terrain.
    #[error("pond map contains invalid character {ch:?} at {pos}")]
    InvalidRune { ch: char, pos: Point },

    /// No `S` cell.
    #[error("pond map has no start cell")]
    MissingStart,

    /// More than one `S` cell.
    #[error("pond map has more than one start cell: {first} and {second}")]
    MultipleStarts { first: Point, second: Point },
}
