// ABOUTME: Bounded session log of pool rolls, newest first.
// ABOUTME: Owned by the presentation layer; the rolling core stays stateless.

use crate::score::ScoreBreakdown;
use std::collections::VecDeque;
use std::time::SystemTime;

/// Most entries the session log retains.
pub const HISTORY_CAPACITY: usize = 50;

/// Snapshot of one pool roll as recorded in the session log.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// When the roll happened.
    pub time: SystemTime,
    /// Total dice the caller requested.
    pub total_dice: usize,
    /// The special-dice notation as entered.
    pub special: String,
    /// Success modifier applied by the caller.
    pub success: u32,
    /// Penalty modifier applied by the caller.
    pub penalty: u32,
    /// Score breakdown of the roll.
    pub breakdown: ScoreBreakdown,
    /// Points from the base roll only.
    pub base_score: u32,
    /// Points from reroll generations only.
    pub reroll_points: u32,
    /// Dice total after success/penalty modifiers.
    pub final_total: u32,
}

/// Ring of the most recent rolls, newest first, capped at
/// [`HISTORY_CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll, evicting the oldest entry once past capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(total_dice: usize) -> HistoryEntry {
        HistoryEntry {
            time: SystemTime::UNIX_EPOCH,
            total_dice,
            special: String::new(),
            success: 0,
            penalty: 0,
            breakdown: ScoreBreakdown::default(),
            base_score: 0,
            reroll_points: 0,
            final_total: 0,
        }
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_newest_first() {
        let mut history = History::new();
        history.push(entry(1));
        history.push(entry(2));
        history.push(entry(3));

        let order: Vec<usize> = history.iter().map(|e| e.total_dice).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new();
        for i in 0..60 {
            history.push(entry(i));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next().unwrap().total_dice, 59);
        assert_eq!(history.iter().last().unwrap().total_dice, 10);
    }
}
