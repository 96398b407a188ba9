// ABOUTME: Symbolic die faces and the per-configuration face layout.
// ABOUTME: Maps raw 1-6 rolls to faces through a configuration's layout.

use crate::config::{DieConfig, MAX_MARKS};
use std::fmt;

/// The symbolic outcome a die shows after mapping its raw 1-6 result
/// through its configuration's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// `"1"`: one base point.
    Point,
    /// `"R"`: one base point plus a reroll next round.
    Reroll,
    /// `"+"`: bonus token, only counts when base points exist.
    Plus,
    /// `"-"`: penalty token, only counts when base points exist.
    Minus,
    /// Blank face, worth nothing.
    Blank,
}

impl Face {
    /// Whether this face contributes a base point.
    pub fn is_point(self) -> bool {
        matches!(self, Face::Point | Face::Reroll)
    }

    /// The compact notation symbol for this face (blank is empty).
    pub fn symbol(self) -> &'static str {
        match self {
            Face::Point => "1",
            Face::Reroll => "R",
            Face::Plus => "+",
            Face::Minus => "-",
            Face::Blank => "",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Build the six-face layout for a configuration.
///
/// Position 1 is always [`Face::Point`] and position 6 always
/// [`Face::Reroll`], for every kind. Positions 2-5 are blank unless the
/// configuration marks the first `plus`/`minus` of them. Mark counts
/// beyond [`MAX_MARKS`] are treated as [`MAX_MARKS`], so a directly
/// constructed configuration can never overwrite the reroll face.
pub fn face_layout(config: DieConfig) -> [Face; 6] {
    let mut faces = [
        Face::Point,
        Face::Blank,
        Face::Blank,
        Face::Blank,
        Face::Blank,
        Face::Reroll,
    ];

    match config {
        DieConfig::Normal => {}
        DieConfig::Advantage { plus } => {
            for slot in faces.iter_mut().skip(1).take(plus.min(MAX_MARKS) as usize) {
                *slot = Face::Plus;
            }
        }
        DieConfig::Negative { minus } => {
            for slot in faces.iter_mut().skip(1).take(minus.min(MAX_MARKS) as usize) {
                *slot = Face::Minus;
            }
        }
    }

    faces
}

/// Resolve a raw d6 roll against a configuration's layout.
///
/// Pure function of its arguments; out-of-range raw values are clamped
/// into [1, 6].
pub fn resolve_face(config: DieConfig, raw: u8) -> Face {
    let index = raw.clamp(1, 6) - 1;
    face_layout(config)[index as usize]
}
