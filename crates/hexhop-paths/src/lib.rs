//! Route planning across hexagonal ponds.
//!
//! The planner walks from the start cell towards a goal, always taking the
//! best-ranked move and backing out of dead ends (a depth-first search that
//! never re-enters a cell):
//!
//! - [`UniquePriorityQueue`] ranks the candidate moves from one cell
//! - [`Traversal`] holds the path stack and per-cell marks of one search
//! - [`PathEngine`] owns a map and a [`Scoring`] table and runs searches
//!
//! # Map interface
//!
//! | Trait | Provides |
//! |---|---|
//! | [`HexMap`] | start cell, cell indices, terrain, six-way adjacency |

mod distance;
mod engine;
mod error;
mod queue;
mod ranking;
mod route;
mod score;
mod stack;
mod traits;
mod traversal;

#[cfg(test)]
mod test_support;

pub use distance::hex_distance;
pub use engine::PathEngine;
pub use error::CollectionError;
pub use queue::{GROWTH_INCREMENT, INITIAL_CAPACITY, UniquePriorityQueue};
pub use route::Route;
pub use score::Scoring;
pub use stack::PathStack;
pub use traits::HexMap;
pub use traversal::Traversal;
