//! Rolling history log of computations
//!
//! Fixed-capacity list, newest first. Each record gets a 1-based sequence
//! number and lives in slot `sequence % capacity`; once the log is full the
//! record occupying the recycled slot is evicted before the new one is
//! inserted at the front.

use super::Computation;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Number of visible history records
pub const DEFAULT_HISTORY_CAPACITY: usize = 8;

/// Largest accepted capacity; bigger requests are clamped
pub const MAX_HISTORY_CAPACITY: usize = 99;

/// Line shown while no computation has been recorded
pub const NO_DATA: &str = "No Data";

/// A single logged computation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    /// 1-based count of successful computations at the time of recording
    pub sequence: u64,
    /// Slot the record occupies (`sequence % capacity`)
    pub slot: usize,
    pub computation: Computation,
    pub recorded_at: DateTime<Local>,
}

impl HistoryRecord {
    /// Render as "prev op current = result"
    pub fn line(&self) -> String {
        self.computation.to_string()
    }
}

/// Capped rolling log, owned by the display adapter
#[derive(Debug, Clone)]
pub struct HistoryLog {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
    counter: u64,
}

impl HistoryLog {
    /// Create an empty log with capacity clamped to `1..=MAX_HISTORY_CAPACITY`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_HISTORY_CAPACITY);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            counter: 0,
        }
    }

    /// Record a successful computation
    pub fn record(&mut self, computation: Computation) -> &HistoryRecord {
        self.counter += 1;
        let slot = (self.counter % self.capacity as u64) as usize;

        if self.counter > self.capacity as u64 {
            if let Some(pos) = self.records.iter().position(|r| r.slot == slot) {
                if let Some(evicted) = self.records.remove(pos) {
                    tracing::trace!(slot, sequence = evicted.sequence, "Evicted history record");
                }
            }
        }

        self.records.push_front(HistoryRecord {
            sequence: self.counter,
            slot,
            computation,
            recorded_at: Local::now(),
        });
        &self.records[0]
    }

    /// Visible records, newest first
    pub fn records(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True until the first computation; drives the "No Data" placeholder
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total computations recorded since startup
    pub fn total(&self) -> u64 {
        self.counter
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
