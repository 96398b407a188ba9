// ABOUTME: Monte Carlo simulation for pool totals.
// ABOUTME: Runs many pool rolls to estimate the distribution of final scores.

use crate::error::Result;
use crate::pool::{roll_pool_with_rng, FastRng};
use std::collections::HashMap;

/// Result of a Monte Carlo simulation over pool totals.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// Distribution of outcomes: dice total -> count.
    pub distribution: HashMap<u32, usize>,
    /// Minimum total observed.
    pub min: u32,
    /// Maximum total observed.
    pub max: u32,
    /// Mean total.
    pub mean: f64,
    /// Standard deviation of totals.
    pub std_dev: f64,
    /// Number of trials run.
    pub n: usize,
}

impl SimResult {
    /// Returns outcomes sorted by total for iteration.
    pub fn sorted_outcomes(&self) -> Vec<(u32, usize)> {
        let mut outcomes: Vec<_> = self.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by_key(|(k, _)| *k);
        outcomes
    }

    /// Returns the probability of each outcome.
    pub fn probabilities(&self) -> HashMap<u32, f64> {
        self.distribution
            .iter()
            .map(|(&k, &v)| (k, v as f64 / self.n as f64))
            .collect()
    }

    /// Returns the mode (most common total).
    pub fn mode(&self) -> Option<u32> {
        self.distribution
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&value, _)| value)
    }
}

/// Estimate the distribution of dice totals for a pool request.
///
/// # Arguments
/// * `total` - Total dice in the pool, special dice included
/// * `special` - Special-dice notation (e.g. "a2, n1"), may be empty
/// * `n` - Number of trials to run
pub fn simulate(total: usize, special: &str, n: usize) -> Result<SimResult> {
    let (configs, _) = crate::pool_configs(total, special)?;
    Ok(run_trials(&configs, &mut FastRng::new(), n))
}

/// Run a simulation with a seeded RNG for reproducibility.
pub fn simulate_seeded(total: usize, special: &str, n: usize, seed: u64) -> Result<SimResult> {
    let (configs, _) = crate::pool_configs(total, special)?;
    Ok(run_trials(&configs, &mut FastRng::with_seed(seed), n))
}

fn run_trials(configs: &[crate::DieConfig], rng: &mut FastRng, n: usize) -> SimResult {
    if n == 0 {
        return SimResult {
            distribution: HashMap::new(),
            min: 0,
            max: 0,
            mean: 0.0,
            std_dev: 0.0,
            n: 0,
        };
    }

    let mut distribution: HashMap<u32, usize> = HashMap::new();
    let mut sum: u64 = 0;
    let mut sum_sq: u64 = 0;
    let mut min = u32::MAX;
    let mut max = 0u32;

    for _ in 0..n {
        let total = roll_pool_with_rng(configs, rng).breakdown().total;

        *distribution.entry(total).or_insert(0) += 1;
        sum += u64::from(total);
        sum_sq += u64::from(total) * u64::from(total);
        min = min.min(total);
        max = max.max(total);
    }

    let mean = sum as f64 / n as f64;
    let variance = (sum_sq as f64 / n as f64) - (mean * mean);
    let std_dev = variance.max(0.0).sqrt();

    SimResult {
        distribution,
        min,
        max,
        mean,
        std_dev,
        n,
    }
}
