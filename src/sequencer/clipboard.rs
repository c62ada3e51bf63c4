// Clipboard transport for event collections
// Serialized form is an ordered list of { pad, time, duration } triples.
// Selection and in-progress flags are transient and never serialized.

use serde::{Deserialize, Serialize};

use crate::sequencer::event::{PadId, SequencerEvent, generate_event_id};

/// One serialized event in the transport form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportEntry {
    pub pad: PadId,
    pub time: f64,
    pub duration: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is empty")]
    Empty,
    #[error("malformed clipboard payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialize events to the transport form, ordered by start time
pub fn encode(events: &[SequencerEvent]) -> Result<String, ClipboardError> {
    let mut entries: Vec<TransportEntry> = events
        .iter()
        .map(|e| TransportEntry {
            pad: e.pad,
            time: e.time,
            duration: e.duration,
        })
        .collect();
    entries.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(serde_json::to_string(&entries)?)
}

/// Reconstruct events from the transport form. Each event gets a fresh
/// id; ids are only unique within one collection and never round-trip.
pub fn decode(payload: &str) -> Result<Vec<SequencerEvent>, ClipboardError> {
    let entries: Vec<TransportEntry> = serde_json::from_str(payload)?;
    Ok(entries
        .iter()
        .map(|entry| SequencerEvent::new(generate_event_id(), entry.pad, entry.time, entry.duration))
        .collect())
}

/// Holds one sequencer's serialized clipboard payload.
///
/// A malformed payload is treated as "no clipboard": decoding reports
/// the error and paste degrades to a no-op, never a failure.
#[derive(Debug, Default)]
pub struct Clipboard {
    payload: Option<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize and store the given events. An empty selection stores
    /// nothing and leaves any previous payload in place.
    pub fn store(&mut self, events: &[SequencerEvent]) {
        if events.is_empty() {
            return;
        }
        match encode(events) {
            Ok(payload) => self.payload = Some(payload),
            Err(e) => eprintln!("clipboard: failed to serialize selection: {}", e),
        }
    }

    /// Deserialize the stored payload into fresh events
    pub fn events(&self) -> Result<Vec<SequencerEvent>, ClipboardError> {
        let payload = self.payload.as_deref().ok_or(ClipboardError::Empty)?;
        decode(payload)
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    pub fn clear(&mut self) {
        self.payload = None;
    }
}
