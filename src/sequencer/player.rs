// Trigger player - couples the playback clock to due trigger emission
// Holds a sorted occurrence snapshot plus a monotonic cursor; forward
// playback only advances the cursor, while seeks and rebuilds recompute
// it by binary search instead of re-querying the tree per tick

use crate::sequencer::store::EventStore;
use crate::sequencer::trigger_index::{TriggerEvent, TriggerIndex};

/// Sorted trigger-occurrence snapshot with a monotonic playback cursor.
///
/// The snapshot is a derived view of one event store; it must be
/// rebuilt (`sync`) whenever the store's revision moves, and is never
/// queried while stale relative to the last completed edit.
#[derive(Debug, Default)]
pub struct TriggerPlayer {
    occurrences: Vec<TriggerEvent>,
    cursor: usize,
    built_revision: Option<u64>,
}

impl TriggerPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the snapshot no longer matches the store's revision
    pub fn is_stale(&self, store: &EventStore) -> bool {
        self.built_revision != Some(store.revision())
    }

    /// Rebuild the snapshot from the store's current events. The cursor
    /// resets to the start; callers seek afterwards to restore position.
    pub fn rebuild(&mut self, store: &EventStore) {
        self.occurrences = TriggerIndex::build(store.events()).in_order();
        self.built_revision = Some(store.revision());
        self.cursor = 0;
    }

    /// Position the cursor so occurrences at or after `time` are pending
    pub fn seek(&mut self, time: f64) {
        self.cursor = self.occurrences.partition_point(|o| o.time < time);
    }

    /// Position the cursor strictly after `time`; occurrences at exactly
    /// `time` count as already emitted (used when resuming a rebuilt
    /// snapshot mid-playback)
    pub fn seek_past(&mut self, time: f64) {
        self.cursor = self.occurrences.partition_point(|o| o.time <= time);
    }

    /// Back to the first occurrence (rewind / new playback pass)
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Emit every pending occurrence due at or before `time`, in
    /// ascending time order, advancing the cursor past them
    pub fn advance_to(&mut self, time: f64) -> Vec<TriggerEvent> {
        let start = self.cursor;
        while self.cursor < self.occurrences.len() && self.occurrences[self.cursor].time <= time {
            self.cursor += 1;
        }
        self.occurrences[start..self.cursor].to_vec()
    }

    /// The next occurrence the cursor has not yet emitted
    pub fn next_pending(&self) -> Option<&TriggerEvent> {
        self.occurrences.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}
