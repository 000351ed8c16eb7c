//! Candidate move generation and ranking.

use hexhop_core::{Direction, Point, Terrain};

use crate::queue::UniquePriorityQueue;
use crate::traits::HexMap;
use crate::traversal::Traversal;

impl<M: HexMap + ?Sized> Traversal<'_, M> {
    /// Rank every legal move from `position`.
    ///
    /// Direct neighbours come first, in direction order. From the start cell
    /// or a lily pad, two-cell jumps follow: for each neighbour, straight on
    /// and then bending counter-clockwise and clockwise. Jumps cost their
    /// target's base score plus a penalty, and never displace a cell that is
    /// already ranked.
    pub fn rank_moves(&self, position: Point) -> UniquePriorityQueue<Point> {
        let mut moves = UniquePriorityQueue::new();
        let mut neighbors = [None; Direction::COUNT];

        for (i, slot) in neighbors.iter_mut().enumerate() {
            *slot = self.neighbor(position, i);
            if let Some(n) = *slot {
                if let Some(score) = self.score(n) {
                    moves.insert(n, score);
                }
            }
        }

        if self.can_jump_from(position) {
            for dir in Direction::ALL {
                let Some(over) = neighbors[dir.index()] else {
                    continue;
                };
                let landings = [
                    (dir, self.scoring.straight_jump),
                    (dir.counter_clockwise(), self.scoring.diagonal_jump),
                    (dir.clockwise(), self.scoring.diagonal_jump),
                ];
                for (turn, penalty) in landings {
                    let Some(target) = self.neighbor(over, turn.index()) else {
                        continue;
                    };
                    if moves.contains(&target) {
                        continue;
                    }
                    if let Some(score) = self.score(target) {
                        moves.insert(target, score + penalty);
                    }
                }
            }
        }

        log::trace!("moves from {position}: {moves}");
        moves
    }

    /// The best move from `position`, or `None` at a dead end.
    pub fn find_best(&self, position: Point) -> Option<Point> {
        self.rank_moves(position).pop_min()
    }

    /// Whether the traveler may step onto `p` now.
    ///
    /// A cell is off limits while on the path or after being backed out
    /// of, and always if it is mud, an alligator, or next to an alligator
    /// without reeds for cover.
    pub fn is_legal(&self, p: Point) -> bool {
        self.score(p).is_some()
    }

    /// Base score of stepping onto `p`, or `None` if the move is illegal.
    fn score(&self, p: Point) -> Option<f64> {
        let terrain = self.map.terrain(p)?;
        let mark = self.mark(p)?;
        if mark.on_path || mark.exhausted {
            return None;
        }
        if terrain.is_hazard() || terrain.is_impassable() || !self.is_safe(p, terrain) {
            return None;
        }
        Some(self.scoring.base(terrain, self.flies_left(p)))
    }

    fn is_safe(&self, p: Point, terrain: Terrain) -> bool {
        terrain.is_marsh()
            || !(0..Direction::COUNT).any(|i| {
                self.neighbor(p, i)
                    .and_then(|n| self.map.terrain(n))
                    .is_some_and(Terrain::is_hazard)
            })
    }

    fn can_jump_from(&self, p: Point) -> bool {
        p == self.map.start() || self.map.terrain(p).is_some_and(Terrain::is_launch)
    }

    fn neighbor(&self, p: Point, direction: usize) -> Option<Point> {
        match self.map.neighbor(p, direction) {
            Ok(n) => n,
            Err(err) => {
                log::warn!("skipping neighbor of {p}: {err}");
                None
            }
        }
    }
}
