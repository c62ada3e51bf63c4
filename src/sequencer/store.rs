// Event store - the authoritative collection of recorded events
// Single-owner: all mutation flows through whole-collection replacement,
// so a synchronous reader never observes a half-updated collection

use crate::sequencer::event::{EventId, SequencerEvent};

/// Owns one sequencer's event collection.
///
/// The revision counter moves on every replacement; derived views (the
/// trigger index and the playback cursor's occurrence snapshot) compare
/// it against the revision they were built from to detect staleness.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<SequencerEvent>,
    revision: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current event collection
    pub fn events(&self) -> &[SequencerEvent] {
        &self.events
    }

    /// Revision of the current collection; bumped on every replacement
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a new collection, bumping the revision
    pub fn replace(&mut self, events: Vec<SequencerEvent>) {
        self.events = events;
        self.revision += 1;
    }

    /// Remove all events
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn get(&self, id: EventId) -> Option<&SequencerEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::event::PadId;

    #[test]
    fn test_replace_bumps_revision() {
        let mut store = EventStore::new();
        assert_eq!(store.revision(), 0);
        assert!(store.is_empty());

        let event = SequencerEvent::new(1, PadId::new('a', 1), 0.0, 1.0);
        store.replace(vec![event]);

        assert_eq!(store.revision(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1), Some(&event));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_clear() {
        let mut store = EventStore::new();
        store.replace(vec![SequencerEvent::new(1, PadId::new('a', 1), 0.0, 1.0)]);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 2);
    }
}
