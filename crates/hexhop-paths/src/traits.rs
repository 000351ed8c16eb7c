use hexhop_core::{Direction, InvalidDirection, Point, Terrain};

/// The pond a route is planned over.
///
/// Implementors describe a finite set of cells, each with a flat index in
/// `0..len()` and a [`Terrain`]. Adjacency follows [`Point::hex_neighbor`]
/// unless [`neighbor`](Self::neighbor) is overridden.
pub trait HexMap {
    /// The cell the traveler starts on.
    fn start(&self) -> Point;

    /// Number of cells; every valid index is below this.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat index of `p`, or `None` if `p` is not part of the map.
    fn index(&self, p: Point) -> Option<usize>;

    /// Terrain at `p`, or `None` if `p` is not part of the map.
    fn terrain(&self, p: Point) -> Option<Terrain>;

    /// The neighbour of `p` in direction `direction` (`0..6`, clockwise from
    /// east).
    ///
    /// `Ok(None)` means there is no cell that way (the edge of the map);
    /// an index outside `0..6` is an error.
    fn neighbor(&self, p: Point, direction: usize) -> Result<Option<Point>, InvalidDirection> {
        let dir = Direction::try_from(direction)?;
        let n = p.hex_neighbor(dir);
        Ok(self.index(n).map(|_| n))
    }

    /// Stable identifier of `p`, as printed in routes.
    fn id(&self, p: Point) -> Option<usize> {
        self.index(p)
    }
}
