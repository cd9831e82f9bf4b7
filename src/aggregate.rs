// src/aggregate.rs

use std::collections::HashMap;

use crate::store::{MatchRecord, WinCount};

/// Group records by winner and count. One entry per distinct winner,
/// most wins first; ties keep first-appearance order (the sort is stable),
/// so the result is deterministic for a given input.
///
/// Counts always sum to `records.len()`. Empty in, empty out.
pub fn win_counts(records: &[MatchRecord]) -> Vec<WinCount> {
    let mut counts: Vec<WinCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for rec in records {
        match index.get(rec.winner.as_str()) {
            Some(&i) => counts[i].wins += 1,
            None => {
                index.insert(&rec.winner, counts.len());
                counts.push(WinCount {
                    entity: rec.winner.clone(),
                    wins: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.wins.cmp(&a.wins));
    counts
}
