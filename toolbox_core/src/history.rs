//! # Session History Store
//!
//! Append-only, per-calculator sequences of calculation results, scoped to
//! one user session. Entries are never mutated or reordered after append;
//! the only removal is an explicit per-calculator [`HistoryStore::clear`].
//!
//! Growth is unbounded for the life of a session, which is fine: sessions
//! are short-lived and entry count is bounded by human input rate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::formula::{InputRecord, OutputRecord};

/// One retained (input, output) pair.
///
/// The outputs are reproducible by re-running the calculator's formula
/// against the stored inputs - formulas hold no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Monotonic position within the owning store
    pub sequence: u64,

    /// When the calculation completed
    pub recorded_at: DateTime<Utc>,

    /// Validated input snapshot
    pub inputs: InputRecord,

    /// Computed output snapshot
    pub outputs: OutputRecord,
}

/// Per-calculator, insertion-ordered history for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    entries: HashMap<String, Vec<HistoryEntry>>,
    next_sequence: u64,
}

impl HistoryStore {
    /// Create an empty store (session start).
    pub fn new() -> Self {
        HistoryStore::default()
    }

    /// Append a successful calculation. O(1) amortized; always succeeds.
    pub fn append(
        &mut self,
        calculator_id: &str,
        inputs: InputRecord,
        outputs: OutputRecord,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            sequence: self.next_sequence,
            recorded_at: Utc::now(),
            inputs,
            outputs,
        };
        self.next_sequence += 1;

        let entries = self.entries.entry(calculator_id.to_string()).or_default();
        entries.push(entry);
        entries.last().expect("just pushed")
    }

    /// Replace one calculator's entries wholesale, e.g. when re-opening a
    /// persisted history at session start. The sequence counter advances
    /// past the restored entries so later appends stay monotonic.
    pub fn restore(&mut self, calculator_id: &str, entries: Vec<HistoryEntry>) {
        if let Some(max) = entries.iter().map(|e| e.sequence).max() {
            self.next_sequence = self.next_sequence.max(max + 1);
        }
        self.entries.insert(calculator_id.to_string(), entries);
    }

    /// Entries for one calculator, oldest first. Empty slice if none.
    pub fn list(&self, calculator_id: &str) -> &[HistoryEntry] {
        self.entries
            .get(calculator_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Drop all entries for one calculator, leaving other calculators'
    /// histories intact.
    pub fn clear(&mut self, calculator_id: &str) {
        self.entries.remove(calculator_id);
    }

    /// Entry count for one calculator.
    pub fn len(&self, calculator_id: &str) -> usize {
        self.list(calculator_id).len()
    }

    pub fn is_empty(&self, calculator_id: &str) -> bool {
        self.len(calculator_id) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, value: f64) -> InputRecord {
        let mut r = InputRecord::new();
        r.push(name, value);
        r
    }

    fn output(name: &str, value: f64) -> OutputRecord {
        let mut o = OutputRecord::new();
        o.push_number(name, value);
        o
    }

    #[test]
    fn test_append_is_monotonic() {
        let mut store = HistoryStore::new();
        for i in 0..5 {
            store.append("arc_length", record("angle", i as f64), output("arc", i as f64));
            assert_eq!(store.len("arc_length"), i + 1);
        }
        let sequences: Vec<u64> = store.list("arc_length").iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = HistoryStore::new();
        store.append("slope", record("rise", 1.0), output("angle", 45.0));
        store.append("slope", record("rise", 2.0), output("angle", 63.4));
        let rises: Vec<f64> = store
            .list("slope")
            .iter()
            .map(|e| e.inputs.get("rise").unwrap())
            .collect();
        assert_eq!(rises, vec![1.0, 2.0]);
    }

    #[test]
    fn test_clear_is_per_calculator() {
        let mut store = HistoryStore::new();
        store.append("slope", record("rise", 1.0), output("angle", 45.0));
        store.append("arc_length", record("angle", 90.0), output("arc", 785.4));

        store.clear("slope");
        assert!(store.is_empty("slope"));
        assert_eq!(store.len("arc_length"), 1);
    }

    #[test]
    fn test_sequence_survives_clear() {
        // Sequence numbers never restart; cleared ids resume where the
        // store left off.
        let mut store = HistoryStore::new();
        store.append("slope", record("rise", 1.0), output("angle", 45.0));
        store.clear("slope");
        let entry = store.append("slope", record("rise", 3.0), output("angle", 71.6));
        assert_eq!(entry.sequence, 1);
    }

    #[test]
    fn test_list_unknown_is_empty() {
        let store = HistoryStore::new();
        assert!(store.list("dish_end_volume").is_empty());
    }
}
