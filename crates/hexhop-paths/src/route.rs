use std::fmt;

/// The outcome of a route search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Route {
    /// The goal was reached.
    Found {
        /// Identifiers of the cells visited, each listed the first time the
        /// traveler stood on it.
        cells: Vec<usize>,
        /// Flies eaten along the way.
        flies: u32,
    },
    /// Every option was exhausted without reaching the goal.
    NoSolution,
}

impl Route {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Visited cell identifiers (empty when there is no solution).
    pub fn cells(&self) -> &[usize] {
        match self {
            Self::Found { cells, .. } => cells,
            Self::NoSolution => &[],
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { cells, flies } => {
                for id in cells {
                    write!(f, "{id} ")?;
                }
                write!(f, "ate {flies} flies")
            }
            Self::NoSolution => write!(f, "No solution"),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tagged_json() {
        let r = Route::Found {
            cells: vec![0, 2],
            flies: 0,
        };
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"status":"found","cells":[0,2],"flies":0}"#
        );
        assert_eq!(
            serde_json::to_string(&Route::NoSolution).unwrap(),
            r#"{"status":"no_solution"}"#
        );
    }
}
