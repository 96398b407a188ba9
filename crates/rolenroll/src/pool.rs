// ABOUTME: Pool expansion: rolls every die across reroll rounds.
// ABOUTME: Each reroll face spawns one die of the same configuration next round.

use crate::config::DieConfig;
use crate::face::{resolve_face, Face};
use crate::score::{score, ScoreBreakdown};

/// Hard cap on the number of rounds, guarding against a runaway reroll
/// chain. Never expected to trigger in play.
const MAX_ROUNDS: usize = 100;

/// Pool substituted when the caller passes no dice at all.
const DEFAULT_POOL_SIZE: usize = 5;

/// Trait for random number generation, allowing for testing with fixed values.
pub trait Rng {
    /// Generate a random number in the range [1, max].
    fn roll(&mut self, max: u8) -> u8;
}

/// Default RNG using fastrand.
pub struct FastRng(fastrand::Rng);

impl FastRng {
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for FastRng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng for FastRng {
    fn roll(&mut self, max: u8) -> u8 {
        self.0.u8(1..=max)
    }
}

/// One die's outcome within a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEntry {
    /// The configuration this die was rolled with.
    pub config: DieConfig,
    /// The raw d6 result, 1-6.
    pub roll: u8,
    /// The face the raw result resolved to.
    pub face: Face,
}

/// Complete record of one pool roll.
///
/// Round 0 is the base roll; every later round holds only the dice
/// spawned by reroll faces in the round before it. The breakdown is
/// derived from all faces across all rounds at construction time.
#[derive(Debug, Clone)]
pub struct PoolRoll {
    rounds: Vec<Vec<RoundEntry>>,
    breakdown: ScoreBreakdown,
}

impl PoolRoll {
    /// The rounds in roll order, each in die order.
    pub fn rounds(&self) -> &[Vec<RoundEntry>] {
        &self.rounds
    }

    /// The score breakdown over every face in every round.
    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    /// Every resolved face, flattened in round order.
    pub fn all_faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.rounds.iter().flatten().map(|entry| entry.face)
    }

    /// Points scored by the base roll (round 0) alone.
    pub fn base_score(&self) -> u32 {
        self.rounds.first().map_or(0, |round| count_points(round))
    }

    /// Points scored by reroll generations (rounds 1 and later).
    ///
    /// Together with [`base_score`](Self::base_score) this partitions
    /// the breakdown's `base_points` exactly.
    pub fn reroll_points(&self) -> u32 {
        self.rounds.iter().skip(1).map(|round| count_points(round)).sum()
    }

    /// Total number of dice rolled across all rounds.
    pub fn dice_rolled(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }
}

fn count_points(round: &[RoundEntry]) -> u32 {
    round.iter().filter(|entry| entry.face.is_point()).count() as u32
}

/// Roll a pool of configured dice with the default RNG.
pub fn roll_pool(configs: &[DieConfig]) -> PoolRoll {
    roll_pool_with_rng(configs, &mut FastRng::new())
}

/// Roll a pool of configured dice with a caller-supplied RNG.
///
/// An empty pool falls back to five normal dice. This fallback belongs
/// to the rolling primitive itself; validated callers never reach it
/// because they reject a zero dice count up front.
pub fn roll_pool_with_rng(configs: &[DieConfig], rng: &mut impl Rng) -> PoolRoll {
    let mut pending: Vec<DieConfig> = if configs.is_empty() {
        vec![DieConfig::Normal; DEFAULT_POOL_SIZE]
    } else {
        configs.to_vec()
    };

    let mut rounds: Vec<Vec<RoundEntry>> = Vec::new();

    while !pending.is_empty() && rounds.len() < MAX_ROUNDS {
        let mut this_round = Vec::with_capacity(pending.len());
        let mut next = Vec::new();

        for config in pending {
            let raw = rng.roll(6);
            let face = resolve_face(config, raw);
            this_round.push(RoundEntry {
                config,
                roll: raw,
                face,
            });

            if face == Face::Reroll {
                next.push(config);
            }
        }

        rounds.push(this_round);
        pending = next;
    }

    let breakdown = score(rounds.iter().flatten().map(|entry| entry.face));

    PoolRoll { rounds, breakdown }
}
