// ABOUTME: Command-line interface for the rolenroll dice-pool engine.
// ABOUTME: Rolls Role&Roll pools and simulates score distributions.

use clap::{Parser, Subcommand};
use rolenroll::{
    pool_configs, roll_pool_with_rng, Face, FastRng, History, HistoryEntry, PoolRoll,
};
use serde::Serialize;
use std::time::SystemTime;

#[derive(Parser)]
#[command(name = "rolenroll")]
#[command(about = "Dice-pool roller for the Role&Roll mechanic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool
    Roll {
        /// Total number of dice, special dice included (1-50)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=50))]
        total: u8,

        /// Special dice notation (e.g. "a2, n1")
        #[arg(short, long, default_value = "")]
        special: String,

        /// Success modifier added to the dice total
        #[arg(long, default_value_t = 0)]
        success: u32,

        /// Penalty modifier subtracted from the dice total
        #[arg(long, default_value_t = 0)]
        penalty: u32,

        /// Roll the pool this many times, keeping a session history
        #[arg(short = 'n', long, default_value_t = 1)]
        repeat: usize,

        /// Seed the RNG for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate rolling a pool many times
    Sim {
        /// Total number of dice, special dice included (1-50)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=50))]
        total: u8,

        /// Special dice notation (e.g. "a2, n1")
        #[arg(short, long, default_value = "")]
        special: String,

        /// Number of trials to run
        #[arg(short, long, default_value = "10000")]
        n: usize,

        /// Seed the RNG for reproducible trials
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Roll {
            total,
            special,
            success,
            penalty,
            repeat,
            seed,
            json,
        } => run_roll(total, &special, success, penalty, repeat, seed, json),
        Commands::Sim {
            total,
            special,
            n,
            seed,
            json,
        } => run_sim(total, &special, n, seed, json),
    }
}

fn run_roll(
    total: u8,
    special: &str,
    success: u32,
    penalty: u32,
    repeat: usize,
    seed: Option<u64>,
    json: bool,
) {
    let (configs, notices) = match pool_configs(total as usize, special) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if configs.len() > total as usize {
        eprintln!(
            "Error: {} special dice cannot fit in a pool of {}",
            configs.len(),
            total
        );
        std::process::exit(1);
    }

    for notice in &notices {
        eprintln!("warning: {}", notice);
    }

    let mut rng = match seed {
        Some(seed) => FastRng::with_seed(seed),
        None => FastRng::new(),
    };
    let mut history = History::new();
    let mut reports = Vec::new();

    let repeat = repeat.max(1);
    for i in 0..repeat {
        let result = roll_pool_with_rng(&configs, &mut rng);
        let final_total = result.breakdown().final_total(success, penalty);

        if json {
            reports.push(roll_report(&result, total, special, success, penalty, final_total));
        } else {
            if repeat > 1 {
                println!("--- roll {} ---", i + 1);
            }
            print_roll(&result, success, penalty, final_total);
        }

        history.push(HistoryEntry {
            time: SystemTime::now(),
            total_dice: total as usize,
            special: special.to_string(),
            success,
            penalty,
            breakdown: *result.breakdown(),
            base_score: result.base_score(),
            reroll_points: result.reroll_points(),
            final_total,
        });
    }

    if json {
        // One parseable document either way: a single report, or the
        // whole session as an array (newest last, matching roll order).
        if reports.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&reports[0]).unwrap());
        } else {
            println!("{}", serde_json::to_string_pretty(&reports).unwrap());
        }
    } else if repeat > 1 {
        print_history(&history);
    }
}

fn face_glyph(face: Face) -> &'static str {
    match face {
        Face::Point => "●",
        Face::Reroll => "Ⓡ",
        Face::Plus => "+",
        Face::Minus => "−",
        Face::Blank => "·",
    }
}

fn print_roll(result: &PoolRoll, success: u32, penalty: u32, final_total: u32) {
    for (idx, round) in result.rounds().iter().enumerate() {
        let row: Vec<&str> = round.iter().map(|entry| face_glyph(entry.face)).collect();
        if idx == 0 {
            println!("base:      {}", row.join(" "));
        } else {
            println!("reroll {:>2}: {}", idx, row.join(" "));
        }
    }

    let breakdown = result.breakdown();
    println!(
        "base {} | rerolls {} (+{}) | tokens +{} / -{}",
        result.base_score(),
        breakdown.reroll_count,
        result.reroll_points(),
        breakdown.plus_count,
        breakdown.minus_count
    );

    if success > 0 || penalty > 0 {
        println!(
            "dice total {} -> final total {} (+{} / -{})",
            breakdown.total, final_total, success, penalty
        );
    } else {
        println!("total: {}", final_total);
    }
}

#[derive(Serialize)]
struct RollReport<'a> {
    total_dice: u8,
    special: &'a str,
    rounds: Vec<Vec<&'static str>>,
    base_points: u32,
    reroll_count: u32,
    plus_count: u32,
    minus_count: u32,
    base_score: u32,
    reroll_points: u32,
    dice_total: u32,
    success: u32,
    penalty: u32,
    final_total: u32,
}

fn roll_report<'a>(
    result: &PoolRoll,
    total: u8,
    special: &'a str,
    success: u32,
    penalty: u32,
    final_total: u32,
) -> RollReport<'a> {
    let breakdown = result.breakdown();
    RollReport {
        total_dice: total,
        special,
        rounds: result
            .rounds()
            .iter()
            .map(|round| round.iter().map(|entry| entry.face.symbol()).collect())
            .collect(),
        base_points: breakdown.base_points,
        reroll_count: breakdown.reroll_count,
        plus_count: breakdown.plus_count,
        minus_count: breakdown.minus_count,
        base_score: result.base_score(),
        reroll_points: result.reroll_points(),
        dice_total: breakdown.total,
        success,
        penalty,
        final_total,
    }
}

fn print_history(history: &History) {
    println!();
    println!("session history (newest first):");
    for entry in history.iter() {
        let special = if entry.special.is_empty() {
            "-"
        } else {
            entry.special.as_str()
        };
        println!(
            "  dice {} | special {} | total {} (base {}, rerolls {} +{}, tokens +{}/-{})",
            entry.total_dice,
            special,
            entry.final_total,
            entry.base_score,
            entry.breakdown.reroll_count,
            entry.reroll_points,
            entry.breakdown.plus_count,
            entry.breakdown.minus_count
        );
    }
}

fn run_sim(total: u8, special: &str, n: usize, seed: Option<u64>, json: bool) {
    let result = match seed {
        Some(seed) => rolenroll::simulate_seeded(total as usize, special, n, seed),
        None => rolenroll::simulate(total as usize, special, n),
    };

    match result {
        Ok(sim) => {
            if json {
                print_sim_json(&sim);
            } else {
                print_sim_histogram(total, special, &sim);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_sim_json(result: &rolenroll::SimResult) {
    use serde_json::json;

    let output = json!({
        "n": result.n,
        "min": result.min,
        "max": result.max,
        "mean": result.mean,
        "std_dev": result.std_dev,
        "distribution": result.distribution,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_sim_histogram(total: u8, special: &str, result: &rolenroll::SimResult) {
    if special.is_empty() {
        println!("{} dice (n={})", total, result.n);
    } else {
        println!("{} dice, special \"{}\" (n={})", total, special, result.n);
    }
    println!();

    let outcomes = result.sorted_outcomes();
    let max_count = outcomes.iter().map(|(_, c)| *c).max().unwrap_or(1);
    let max_bar_width = 40;

    for (value, count) in outcomes {
        let pct = (count as f64 / result.n as f64) * 100.0;
        let bar_width = (count as f64 / max_count as f64 * max_bar_width as f64) as usize;
        let bar: String = "█".repeat(bar_width);

        println!("{:>4}: {:40} {:5.1}%", value, bar, pct);
    }

    println!();
    println!("mean: {:.2}, std: {:.2}", result.mean, result.std_dev);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolenroll::DieConfig;

    fn sample_report(seed: u64) -> RollReport<'static> {
        let mut rng = FastRng::with_seed(seed);
        let result = roll_pool_with_rng(&[DieConfig::Normal; 3], &mut rng);
        let final_total = result.breakdown().final_total(1, 0);
        roll_report(&result, 3, "", 1, 0, final_total)
    }

    #[test]
    fn test_repeated_reports_serialize_as_one_array() {
        let reports = vec![sample_report(1), sample_report(2)];
        let text = serde_json::to_string_pretty(&reports).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        for entry in entries {
            assert!(entry.get("final_total").is_some());
            assert!(entry.get("rounds").unwrap().is_array());
        }
    }

    #[test]
    fn test_report_round_faces_match_roll() {
        let mut rng = FastRng::with_seed(42);
        let result = roll_pool_with_rng(&[DieConfig::Normal; 4], &mut rng);
        let report = roll_report(&result, 4, "", 0, 0, result.breakdown().total);

        assert_eq!(report.rounds.len(), result.rounds().len());
        assert_eq!(report.rounds[0].len(), 4);
        assert_eq!(report.dice_total, result.breakdown().total);
    }
}
