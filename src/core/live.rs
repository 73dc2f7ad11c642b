//! Live-update boundary.
//!
//! The repository exposes a monotonically increasing sequence number (the
//! newest `log_entries` id). Consumers re-fetch and recompute whenever it
//! changes; the engine itself never sees this counter.

/// Remembers the last sequence number seen and reports changes.
#[derive(Debug, Default)]
pub struct SequenceWatcher {
    last_seen: Option<i64>,
}

impl SequenceWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current counter value. The first call only records the
    /// baseline; afterwards `Some(current)` is returned iff it differs from
    /// the previous value.
    pub fn observe(&mut self, current: i64) -> Option<i64> {
        let previous = self.last_seen.replace(current);
        match previous {
            Some(prev) if prev != current => Some(current),
            _ => None,
        }
    }

    pub fn last_seen(&self) -> Option<i64> {
        self.last_seen
    }
}
