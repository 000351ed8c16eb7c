use hexhop_core::Point;

use crate::error::CollectionError;
use crate::route::Route;
use crate::score::Scoring;
use crate::traits::HexMap;
use crate::traversal::Traversal;

/// Route planner over an owned map.
///
/// `PathEngine` holds only immutable inputs; every query builds a fresh
/// [`Traversal`], so repeated searches are independent of each other.
#[derive(Debug, Clone)]
pub struct PathEngine<M> {
    map: M,
    scoring: Scoring,
}

impl<M: HexMap> PathEngine<M> {
    /// Create an engine with the default [`Scoring`].
    pub fn new(map: M) -> Self {
        Self {
            map,
            scoring: Scoring::default(),
        }
    }

    /// Replace the scoring table (builder).
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// A new search positioned on the start cell.
    pub fn traversal(&self) -> Traversal<'_, M> {
        Traversal::new(&self.map, &self.scoring)
    }

    /// Best first move from `position` before any search has run.
    pub fn find_best(&self, position: Point) -> Option<Point> {
        self.traversal().find_best(position)
    }

    /// Search from the start cell to a goal cell.
    ///
    /// The search is greedy, always taking the best-ranked move, and backs
    /// out of dead ends. An error means the search broke its own stack
    /// discipline.
    pub fn find_path(&self) -> Result<Route, CollectionError> {
        self.traversal().run()
    }
}
