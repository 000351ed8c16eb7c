//! Ponds built from text.
//!
//! A [`Pond`] parses an ASCII map, one character per cell, into a terrain
//! grid. Lines are separated by `'\n'` and must all have the same width.

use std::fmt;
use std::fs;
use std::path::Path;

use hexhop_core::{Grid, Point, Terrain};
use hexhop_paths::HexMap;

use crate::error::PondError;

/// A parsed pond map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pond {
    grid: Grid<Terrain>,
    start: Point,
}

impl Pond {
    /// Parse a pond from its text form.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string but
    /// not from individual lines. Every character must name a terrain and
    /// exactly one must be the start `S`.
    pub fn parse(s: &str) -> Result<Self, PondError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PondError::Empty);
        }

        let rows: Vec<&str> = s.lines().collect();
        let width = rows[0].chars().count();
        for (row, line) in rows.iter().enumerate().skip(1) {
            let found = line.chars().count();
            if found != width {
                return Err(PondError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32, Terrain::Water);
        let mut start: Option<Point> = None;
        for (y, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let terrain = Terrain::from_char(ch).ok_or(PondError::InvalidRune { ch, pos })?;
                if terrain.is_start() {
                    if let Some(first) = start {
                        return Err(PondError::MultipleStarts { first, second: pos });
                    }
                    start = Some(pos);
                }
                grid.set(pos, terrain);
            }
        }

        let start = start.ok_or(PondError::MissingStart)?;
        Ok(Self { grid, start })
    }

    /// Read and parse the pond stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PondError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PondError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pond = Self::parse(&text)?;
        log::debug!(
            "loaded {}x{} pond from {}, start at {}",
            pond.width(),
            pond.height(),
            path.display(),
            pond.start
        );
        Ok(pond)
    }

    pub fn grid(&self) -> &Grid<Terrain> {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// The cell with identifier `id`, if any.
    pub fn point(&self, id: usize) -> Option<Point> {
        self.grid.point(id)
    }

    /// Number of goal cells.
    pub fn goals(&self) -> usize {
        self.grid.count_fn(|_, t| t.is_goal())
    }
}

impl HexMap for Pond {
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

impl fmt::Display for Pond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for t in row {
                write!(f, "{}", t.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use hexhop_core::InvalidDirection;

    use super::*;

    const POND: &str = "\
S.L.
.R2A
M..E";

    #[test]
    fn parse_and_size() {
        let pond = Pond::parse(POND).unwrap();
        assert_eq!(pond.width(), 4);
        assert_eq!(pond.height(), 3);
        assert_eq!(pond.len(), 12);
        assert_eq!(pond.start(), Point::new(0, 0));
        assert_eq!(pond.goals(), 1);
    }

    #[test]
    fn terrain_at_positions() {
        let pond = Pond::parse(POND).unwrap();
        assert_eq!(pond.terrain(Point::new(2, 0)), Some(Terrain::LilyPad));
        assert_eq!(pond.terrain(Point::new(1, 1)), Some(Terrain::Reeds));
        assert_eq!(pond.terrain(Point::new(2, 1)), Some(Terrain::Flies(2)));
        assert_eq!(pond.terrain(Point::new(3, 1)), Some(Terrain::Alligator));
        assert_eq!(pond.terrain(Point::new(0, 2)), Some(Terrain::Mud));
        assert_eq!(pond.terrain(Point::new(4, 0)), None);
    }

    #[test]
    fn ids_are_row_major() {
        let pond = Pond::parse(POND).unwrap();
        assert_eq!(pond.id(Point::new(0, 0)), Some(0));
        assert_eq!(pond.id(Point::new(3, 0)), Some(3));
        assert_eq!(pond.id(Point::new(0, 1)), Some(4));
        assert_eq!(pond.id(Point::new(3, 2)), Some(11));
        assert_eq!(pond.id(Point::new(-1, 0)), None);
        assert_eq!(pond.point(6), Some(Point::new(2, 1)));
    }

    #[test]
    fn neighbors_stop_at_the_edge() {
        let pond = Pond::parse(POND).unwrap();
        let corner = Point::new(0, 0);
        assert_eq!(pond.neighbor(corner, 0), Ok(Some(Point::new(1, 0))));
        assert_eq!(pond.neighbor(corner, 1), Ok(Some(Point::new(0, 1))));
        assert_eq!(pond.neighbor(corner, 3), Ok(None));
        assert_eq!(pond.neighbor(corner, 4), Ok(None));
        assert_eq!(pond.neighbor(corner, 5), Ok(None));
        assert_eq!(pond.neighbor(corner, 6), Err(InvalidDirection(6)));
    }

    #[test]
    fn odd_rows_are_shifted_right() {
        let pond = Pond::parse(POND).unwrap();
        let p = Point::new(1, 1);
        let all: Vec<_> = (0..6).map(|i| pond.neighbor(p, i).unwrap()).collect();
        assert_eq!(
            all,
            vec![
                Some(Point::new(2, 1)),
                Some(Point::new(2, 2)),
                Some(Point::new(1, 2)),
                Some(Point::new(0, 1)),
                Some(Point::new(1, 0)),
                Some(Point::new(2, 0)),
            ]
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let pond = Pond::parse("\n\n  S.E\r\n.2.\n\n").unwrap();
        assert_eq!(pond.width(), 3);
        assert_eq!(pond.height(), 2);
        assert_eq!(pond.to_string(), "S.E\n.2.");
    }

    #[test]
    fn display_round_trips_the_text() {
        let pond = Pond::parse(POND).unwrap();
        assert_eq!(pond.to_string(), POND);
        assert_eq!(Pond::parse(&pond.to_string()).unwrap(), pond);
    }

    #[test]
    fn empty_map() {
        assert!(matches!(Pond::parse(""), Err(PondError::Empty)));
        assert!(matches!(Pond::parse(" \n\t\n"), Err(PondError::Empty)));
    }

    #[test]
    fn inconsistent_width() {
        let err = Pond::parse("S..\n..\n...").unwrap_err();
        assert!(matches!(
            err,
            PondError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(err.to_string(), "pond map row 1 has 2 cells, expected 3");
    }

    #[test]
    fn invalid_rune() {
        let err = Pond::parse("S.\n.#").unwrap_err();
        assert!(matches!(
            err,
            PondError::InvalidRune { ch: '#', pos } if pos == Point::new(1, 1)
        ));
        assert_eq!(
            err.to_string(),
            "pond map contains invalid character '#' at (1, 1)"
        );
    }

    #[test]
    fn missing_start() {
        assert!(matches!(
            Pond::parse("..E"),
            Err(PondError::MissingStart)
        ));
    }

    #[test]
    fn multiple_starts() {
        let err = Pond::parse("S..\n..S").unwrap_err();
        assert!(matches!(
            err,
            PondError::MultipleStarts { first, second }
                if first == Point::new(0, 0) && second == Point::new(2, 1)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "S.2").unwrap();
        writeln!(file, ".LE").unwrap();

        let pond = Pond::load(file.path()).unwrap();
        assert_eq!(pond.to_string(), "S.2\n.LE");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = Pond::load(&path).unwrap_err();
        match &err {
            PondError::Io { path: p, .. } => assert_eq!(p, &path),
            other => panic!("expected an io error, got {other:?}"),
        }
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
