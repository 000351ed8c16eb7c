//! Per-call search state and the backtracking driver.
//!
//! A [`Traversal`] owns everything that changes during one route search:
//! the path stack, the route recorded so far, the fly count and a flat
//! table of per-cell marks indexed like the map. The map itself is only
//! borrowed, so a new traversal always starts from a clean slate.

use hexhop_core::{Point, Terrain};

use crate::distance::hex_distance;
use crate::error::CollectionError;
use crate::route::Route;
use crate::score::Scoring;
use crate::stack::PathStack;
use crate::traits::HexMap;

/// Per-cell search marks.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Mark {
    /// On the stack right now.
    pub(crate) on_path: bool,
    /// Popped after running out of moves; never entered again.
    pub(crate) exhausted: bool,
    /// Flies already eaten.
    pub(crate) eaten: bool,
}

/// State of one depth-first route search over a [`HexMap`].
///
/// Created with the start cell already on the path. Call
/// [`run`](Self::run) to search to completion, or inspect candidate moves
/// with [`rank_moves`](Self::rank_moves) / [`find_best`](Self::find_best).
pub struct Traversal<'a, M: ?Sized> {
    pub(crate) map: &'a M,
    pub(crate) scoring: &'a Scoring,
    pub(crate) marks: Vec<Mark>,
    stack: PathStack<Point>,
    cells: Vec<usize>,
    flies: u32,
}

impl<'a, M: HexMap + ?Sized> Traversal<'a, M> {
    /// Start a search on `map` at its start cell.
    pub fn new(map: &'a M, scoring: &'a Scoring) -> Self {
        let mut t = Self {
            map,
            scoring,
            marks: vec![Mark::default(); map.len()],
            stack: PathStack::new(),
            cells: Vec::new(),
            flies: 0,
        };
        t.advance_to(map.start());
        t
    }

    /// The cell on top of the path, or `None` once the search has backed
    /// out of the start cell.
    pub fn current(&self) -> Option<Point> {
        self.stack.peek().ok().copied()
    }

    /// Cells on the path, from the start cell to the current one.
    pub fn path(&self) -> impl Iterator<Item = Point> + '_ {
        self.stack.iter().copied()
    }

    /// Flies eaten so far.
    pub fn flies(&self) -> u32 {
        self.flies
    }

    pub fn is_on_path(&self, p: Point) -> bool {
        self.mark(p).is_some_and(|m| m.on_path)
    }

    pub fn is_exhausted(&self, p: Point) -> bool {
        self.mark(p).is_some_and(|m| m.exhausted)
    }

    /// Flies still waiting at `p`.
    pub fn flies_left(&self, p: Point) -> u8 {
        match (self.map.terrain(p), self.mark(p)) {
            (Some(t), Some(m)) if !m.eaten => t.flies(),
            _ => 0,
        }
    }

    /// Eat the flies left at `p` and return how many there were. Eating at
    /// the same cell again yields nothing.
    pub fn eat(&mut self, p: Point) -> u8 {
        let left = self.flies_left(p);
        if left > 0 {
            if let Some(m) = self.mark_mut(p) {
                m.eaten = true;
            }
            self.flies += u32::from(left);
        }
        left
    }

    /// Search until the goal is reached or every option is exhausted.
    pub fn run(mut self) -> Result<Route, CollectionError> {
        while let Some(current) = self.current() {
            if self.map.terrain(current).is_some_and(Terrain::is_goal) {
                log::info!(
                    "reached goal {current} after {} cells, {} flies",
                    self.cells.len(),
                    self.flies
                );
                return Ok(Route::Found {
                    cells: self.cells,
                    flies: self.flies,
                });
            }

            let eaten = self.eat(current);
            if eaten > 0 {
                log::debug!("ate {eaten} flies at {current}");
            }

            match self.find_best(current) {
                Some(next) => {
                    log::debug!(
                        "advance {current} -> {next} ({} hop)",
                        hex_distance(current, next)
                    );
                    self.advance_to(next);
                }
                None => {
                    log::debug!("backtrack from {current}");
                    self.backtrack()?;
                }
            }
        }

        log::info!("no route from {}", self.map.start());
        Ok(Route::NoSolution)
    }

    fn advance_to(&mut self, p: Point) {
        self.stack.push(p);
        if let Some(m) = self.mark_mut(p) {
            m.on_path = true;
        }
        if let Some(id) = self.map.id(p) {
            self.cells.push(id);
        }
    }

    fn backtrack(&mut self) -> Result<Point, CollectionError> {
        let p = self.stack.pop()?;
        if let Some(m) = self.mark_mut(p) {
            m.on_path = false;
            m.exhausted = true;
        }
        Ok(p)
    }

    pub(crate) fn mark(&self, p: Point) -> Option<&Mark> {
        self.map.index(p).and_then(|i| self.marks.get(i))
    }

    fn mark_mut(&mut self, p: Point) -> Option<&mut Mark> {
        self.map.index(p).and_then(|i| self.marks.get_mut(i))
    }
}
