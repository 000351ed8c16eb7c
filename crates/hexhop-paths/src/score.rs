use hexhop_core::Terrain;

/// Desirability scores for candidate moves. Lower is better.
///
/// The defaults rank fly-rich cells first, then the goal, then lily pads,
/// reeds and open water. Jumps pay a penalty on top of the target's base
/// score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Scoring {
    pub goal: f64,
    pub three_flies: f64,
    pub two_flies: f64,
    pub one_fly: f64,
    pub launch: f64,
    pub marsh: f64,
    pub open: f64,
    /// Anything else, including a fly cell that has been eaten clean.
    pub other: f64,
    /// Added to the base score of a two-cell jump along one direction.
    pub straight_jump: f64,
    /// Added to the base score of a two-cell jump that bends once.
    pub diagonal_jump: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            goal: 3.0,
            three_flies: 0.0,
            two_flies: 1.0,
            one_fly: 2.0,
            launch: 4.0,
            marsh: 5.0,
            open: 6.0,
            other: 10.0,
            straight_jump: 0.5,
            diagonal_jump: 1.0,
        }
    }
}

impl Scoring {
    /// Base score of stepping onto a cell of `terrain` that still holds
    /// `flies_left` flies.
    pub fn base(&self, terrain: Terrain, flies_left: u8) -> f64 {
        match terrain {
            Terrain::Goal => self.goal,
            Terrain::Flies(_) => match flies_left {
                3 => self.three_flies,
                2 => self.two_flies,
                1 => self.one_fly,
                _ => self.other,
            },
            Terrain::LilyPad => self.launch,
            Terrain::Reeds => self.marsh,
            Terrain::Water => self.open,
            Terrain::Start | Terrain::Mud | Terrain::Alligator => self.other,
        }
    }
}
