//! The [`Grid`] type: a dense, row-major 2D grid of values.
//!
//! Every cell has a flat index (`y * width + x`) that doubles as its stable
//! identifier; per-cell side tables elsewhere in the workspace are plain
//! vectors addressed by the same index.

use crate::geom::Point;

/// A 2D grid of `T` values with owned storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Copy> Grid<T> {
    /// Create a new grid of the given dimensions, filled with `fill`.
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            cells: vec![fill; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// The point with flat index `idx`, or `None` past the end.
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Point::new((idx % w) as i32, (idx / w) as i32))
    }

    /// Get the value at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<T> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the value at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, value: T) {
        if let Some(i) = self.index(p) {
            self.cells[i] = value;
        }
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, T) -> bool) -> usize {
        self.iter().filter(|&(p, v)| f(p, v)).count()
    }

    /// Row-major iterator over `(Point, T)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, T)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Point::new((i % w) as i32, (i / w) as i32), v))
    }

    /// Row-major iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5, 0u8);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
        assert!(!g.is_empty());
        assert!(Grid::new(0, 3, 0u8).is_empty());
        assert_eq!(Grid::new(-2, 3, 0u8).size(), Point::new(0, 3));
    }

    #[test]
    fn contains_is_half_open() {
        let g = Grid::new(4, 3, 0u8);
        assert!(g.contains(Point::ZERO));
        assert!(g.contains(Point::new(3, 2)));
        assert!(!g.contains(Point::new(4, 2)));
        assert!(!g.contains(Point::new(3, 3)));
        assert!(!g.contains(Point::new(-1, 0)));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4, 0u8);
        let p = Point::new(2, 3);
        g.set(p, 42);
        assert_eq!(g.at(p), Some(42));
        assert_eq!(g.at(Point::new(0, 0)), Some(0));
        assert_eq!(g.at(Point::new(10, 10)), None);
        // out of bounds writes are ignored
        g.set(Point::new(-1, 0), 7);
        assert_eq!(g.count_fn(|_, v| v == 7), 0);
    }

    #[test]
    fn index_and_point_agree() {
        let g = Grid::new(3, 2, ());
        for (i, (p, ())) in g.iter().enumerate() {
            assert_eq!(g.index(p), Some(i));
            assert_eq!(g.point(i), Some(p));
        }
        assert_eq!(g.index(Point::new(3, 0)), None);
        assert_eq!(g.point(6), None);
    }

    #[test]
    fn rows_split_by_width() {
        let mut g = Grid::new(3, 2, '.');
        g.set(Point::new(1, 1), '#');
        let rows: Vec<String> = g.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["...".to_string(), ".#.".to_string()]);
    }
}
