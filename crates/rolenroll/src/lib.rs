// ABOUTME: Core library for the Role&Roll dice-pool mechanic.
// ABOUTME: Parses special-dice notation, expands reroll chains, and scores pools.

//! # Rolenroll
//!
//! The scoring engine for the Role&Roll dice-pool mechanic: a pool of
//! six-sided dice, each normal, advantage, or negative, rolled with a
//! chain-reaction reroll rule and scored into a final total.
//!
//! ## Quick Start
//!
//! ```
//! use rolenroll::roll;
//!
//! // Five dice total: one advantage die with two plus faces,
//! // one negative die, three normal dice padding out the pool.
//! let result = roll(5, "a2, n1").unwrap();
//! println!("total: {}", result.breakdown().total);
//! for round in result.rounds() {
//!     let faces: Vec<_> = round.iter().map(|e| e.face.symbol()).collect();
//!     println!("{:?}", faces);
//! }
//! ```
//!
//! ## Face layout
//!
//! Every die maps its raw 1-6 result through its configuration's
//! layout: position 1 is always `1` (a point), position 6 always `R`
//! (a point plus a reroll next round), and positions 2-5 are blank
//! unless marked `+` or `-`. Reroll chains expand breadth-first until
//! a round spawns nothing, with a hard cap of 100 rounds.

pub mod config;
pub mod error;
pub mod face;
pub mod history;
pub mod parser;
pub mod pool;
pub mod score;
pub mod sim;

pub use config::{ClampNotice, DieConfig, MAX_MARKS};
pub use error::{Error, Result};
pub use face::{face_layout, resolve_face, Face};
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use parser::{parse_special_dice, SpecialDice};
pub use pool::{roll_pool, roll_pool_with_rng, FastRng, PoolRoll, Rng, RoundEntry};
pub use score::{score, ScoreBreakdown};
pub use sim::{simulate, simulate_seeded, SimResult};

/// Build the full pool for a request: the parsed special dice first,
/// then normal dice padding out to `total`.
///
/// Callers are expected to validate `total` (at least 1, at most 50,
/// and covering the special dice) before invoking; a `total` smaller
/// than the special-dice count keeps all the special dice anyway.
///
/// # Examples
///
/// ```
/// use rolenroll::{pool_configs, DieConfig};
///
/// let (configs, notices) = pool_configs(4, "a2").unwrap();
/// assert_eq!(configs[0], DieConfig::Advantage { plus: 2 });
/// assert_eq!(configs.len(), 4);
/// assert!(notices.is_empty());
/// ```
pub fn pool_configs(total: usize, special: &str) -> Result<(Vec<DieConfig>, Vec<ClampNotice>)> {
    let parsed = parse_special_dice(special)?;
    let mut configs = parsed.configs;
    if configs.len() < total {
        configs.resize(total, DieConfig::Normal);
    }
    Ok((configs, parsed.notices))
}

/// Parse special dice, pad with normal dice to `total`, and roll, all
/// in one step.
///
/// Clamp notices are dropped here; use [`pool_configs`] followed by
/// [`roll_pool`] when the caller needs to surface them.
///
/// # Examples
///
/// ```
/// let result = rolenroll::roll(5, "a1, n1").unwrap();
/// assert!(!result.rounds().is_empty());
/// assert_eq!(
///     result.base_score() + result.reroll_points(),
///     result.breakdown().base_points
/// );
/// ```
pub fn roll(total: usize, special: &str) -> Result<PoolRoll> {
    roll_with_rng(total, special, &mut FastRng::new())
}

/// Parse, pad, and roll with a custom RNG.
///
/// Useful for testing or when you need reproducible results.
///
/// # Examples
///
/// ```
/// use rolenroll::{roll_with_rng, FastRng};
///
/// let mut rng = FastRng::with_seed(42);
/// let result = roll_with_rng(3, "", &mut rng).unwrap();
/// assert_eq!(result.rounds()[0].len(), 3);
/// ```
pub fn roll_with_rng(total: usize, special: &str, rng: &mut impl Rng) -> Result<PoolRoll> {
    let (configs, _) = pool_configs(total, special)?;
    Ok(roll_pool_with_rng(&configs, rng))
}
