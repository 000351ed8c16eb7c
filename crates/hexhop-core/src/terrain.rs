//! The [`Terrain`] type: what a single pond cell is made of.

use std::fmt;

/// The kind of a pond cell.
///
/// This is a closed set: every behaviour that depends on the cell kind is
/// an exhaustive `match` over these variants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Where the frog begins.
    Start,
    /// Where the frog wants to end up.
    Goal,
    /// Open water.
    #[default]
    Water,
    /// A launch cell: jumps of two cells are possible from here.
    LilyPad,
    /// Slow marsh. Reeds hide the frog, so they are safe next to alligators.
    Reeds,
    /// Impassable.
    Mud,
    /// A hazard. Neither it nor any non-reed cell next to it may be entered.
    Alligator,
    /// A cell holding the given number of flies (1..=3).
    Flies(u8),
}

impl Terrain {
    /// Largest number of flies a single cell holds.
    pub const MAX_FLIES: u8 = 3;

    /// Decode a map character. Returns `None` for characters that do not
    /// name a terrain.
    pub const fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            'S' => Self::Start,
            'E' => Self::Goal,
            '.' => Self::Water,
            'L' => Self::LilyPad,
            'R' => Self::Reeds,
            'M' => Self::Mud,
            'A' => Self::Alligator,
            '1' => Self::Flies(1),
            '2' => Self::Flies(2),
            '3' => Self::Flies(3),
            _ => return None,
        })
    }

    /// Encode as a map character (the inverse of [`from_char`](Self::from_char)).
    pub fn to_char(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Goal => 'E',
            Self::Water => '.',
            Self::LilyPad => 'L',
            Self::Reeds => 'R',
            Self::Mud => 'M',
            Self::Alligator => 'A',
            Self::Flies(n) => char::from_digit(u32::from(n), 10).unwrap_or('?'),
        }
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_goal(self) -> bool {
        matches!(self, Self::Goal)
    }

    #[inline]
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Alligator)
    }

    #[inline]
    pub const fn is_impassable(self) -> bool {
        matches!(self, Self::Mud)
    }

    /// Marsh cells tolerate neighbouring hazards.
    #[inline]
    pub const fn is_marsh(self) -> bool {
        matches!(self, Self::Reeds)
    }

    /// Launch cells allow two-cell jumps.
    #[inline]
    pub const fn is_launch(self) -> bool {
        matches!(self, Self::LilyPad)
    }

    /// Number of flies the cell starts with (zero for non-reward cells).
    #[inline]
    pub const fn flies(self) -> u8 {
        match self {
            Self::Flies(n) => n,
            _ => 0,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
