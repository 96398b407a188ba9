// ABOUTME: Die configuration model for the Role&Roll pool.
// ABOUTME: Normal, advantage, and negative dice with clamped mark counts.

use std::fmt;

/// Maximum number of `+` or `-` faces a special die can carry.
pub const MAX_MARKS: u8 = 4;

/// Layout rule for a single die in the pool.
///
/// Every die has a point face on position 1 and a reroll face on
/// position 6. Advantage and negative dice mark some of the four
/// middle positions with bonus or penalty faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieConfig {
    /// Plain die: point, reroll, four blanks.
    Normal,
    /// Advantage die with `plus` bonus faces among positions 2-5.
    Advantage { plus: u8 },
    /// Negative die with `minus` penalty faces among positions 2-5.
    Negative { minus: u8 },
}

/// Non-fatal notice that a requested mark count exceeded [`MAX_MARKS`]
/// and was reduced.
///
/// Corrections below the minimum are silent; only over-the-max requests
/// are worth telling the caller about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampNotice {
    /// The count the caller asked for.
    pub requested: u32,
    /// The count actually used.
    pub used: u8,
}

impl fmt::Display for ClampNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requested {} marked faces, max is {}; using {}",
            self.requested, MAX_MARKS, self.used
        )
    }
}

impl DieConfig {
    /// Build an advantage die with `requested` plus faces, clamped
    /// into [1, [`MAX_MARKS`]].
    pub fn advantage(requested: u32) -> (Self, Option<ClampNotice>) {
        let (plus, notice) = clamp_marks(requested);
        (Self::Advantage { plus }, notice)
    }

    /// Build a negative die with `requested` minus faces, clamped
    /// into [1, [`MAX_MARKS`]].
    pub fn negative(requested: u32) -> (Self, Option<ClampNotice>) {
        let (minus, notice) = clamp_marks(requested);
        (Self::Negative { minus }, notice)
    }
}

/// Clamp a requested mark count into [1, MAX_MARKS].
///
/// Absent or invalid requests are encoded as 0 and resolve to the
/// minimum of 1 without a notice.
fn clamp_marks(requested: u32) -> (u8, Option<ClampNotice>) {
    if requested > MAX_MARKS as u32 {
        let notice = ClampNotice {
            requested,
            used: MAX_MARKS,
        };
        (MAX_MARKS, Some(notice))
    } else if requested < 1 {
        (1, None)
    } else {
        (requested as u8, None)
    }
}
