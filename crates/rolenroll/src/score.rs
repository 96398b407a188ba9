// ABOUTME: Scoring rules for a flattened sequence of resolved faces.
// ABOUTME: Base points gate the plus/minus adjustment; totals never go negative.

use crate::face::Face;

/// Aggregate point totals for one pool roll.
///
/// Derived from the full face sequence and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Count of point and reroll faces.
    pub base_points: u32,
    /// Count of plus faces.
    pub plus_count: u32,
    /// Count of minus faces.
    pub minus_count: u32,
    /// Count of reroll faces (each also scores a base point).
    pub reroll_count: u32,
    /// Dice total before success/penalty modifiers.
    pub total: u32,
}

impl ScoreBreakdown {
    /// Apply caller-side success/penalty modifiers to the dice total,
    /// flooring at zero.
    pub fn final_total(&self, success: u32, penalty: u32) -> u32 {
        self.total.saturating_add(success).saturating_sub(penalty)
    }
}

/// Score a flattened face sequence.
///
/// Plus and minus faces only adjust the total when at least one base
/// point was rolled; a pool without base points always totals zero.
pub fn score(faces: impl IntoIterator<Item = Face>) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for face in faces {
        match face {
            Face::Point => breakdown.base_points += 1,
            Face::Reroll => {
                breakdown.base_points += 1;
                breakdown.reroll_count += 1;
            }
            Face::Plus => breakdown.plus_count += 1,
            Face::Minus => breakdown.minus_count += 1,
            Face::Blank => {}
        }
    }

    if breakdown.base_points > 0 {
        breakdown.total = (breakdown.base_points + breakdown.plus_count)
            .saturating_sub(breakdown.minus_count);
    }

    breakdown
}
