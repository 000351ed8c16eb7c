//! A minimal in-memory [`HexMap`] for unit tests.

use hexhop_core::{Grid, Point, Terrain};

use crate::traits::HexMap;

pub(crate) struct TestPond {
    grid: Grid<Terrain>,
    start: Point,
}

impl TestPond {
    /// Build from rows of terrain characters; surrounding whitespace on each
    /// row is ignored.
    pub(crate) fn new(map: &str) -> Self {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows[0].chars().count() as i32;
        let mut grid = Grid::new(width, rows.len() as i32, Terrain::Water);
        let mut start = Point::ZERO;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let t = Terrain::from_char(ch).expect("test map uses terrain chars");
                if t.is_start() {
                    start = p;
                }
                grid.set(p, t);
            }
        }
        Self { grid, start }
    }

    pub(crate) fn find(&self, terrain: Terrain) -> Point {
        self.grid
            .iter()
            .find(|&(_, t)| t == terrain)
            .map(|(p, _)| p)
            .expect("terrain present in test map")
    }
}

impl HexMap for TestPond {
    fn start(&self) -> Point {
        self.start
    }

    fn len(&self) -> usize {
        self.grid.len()
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.grid.index(p)
    }

    fn terrain(&self, p: Point) -> Option<Terrain> {
        self.grid.at(p)
    }
}
