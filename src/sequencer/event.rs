// Sequencer event representation
// An event is a recorded pad-trigger interval: pad id, start time, duration

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique identifier for sequencer events
pub type EventId = u64;

/// Global event ID generator (atomic for thread-safety)
static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique event ID
pub fn generate_event_id() -> EventId {
    NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Duration assigned to an event whose matching touch-up has not yet
/// been recorded. Open events keep this epsilon until they are closed.
pub const OPEN_EVENT_EPSILON: f64 = 1e-4;

/// Identifier of a pad slot, e.g. "a1" or "b12".
///
/// The engine references pads by id only; the pad's media content is
/// owned elsewhere. The row number is what relative edit operations
/// (paste offsets, row moves) act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PadId {
    pub bank: char,
    pub row: u32,
}

impl PadId {
    pub fn new(bank: char, row: u32) -> Self {
        Self { bank, row }
    }

    /// Shift the row by a signed offset, clamping at row 0
    pub fn offset_row(&self, delta: i64) -> Self {
        let row = (self.row as i64 + delta).max(0) as u32;
        Self {
            bank: self.bank,
            row,
        }
    }

    /// Signed row distance from `self` to `other`
    pub fn row_offset_to(&self, other: PadId) -> i64 {
        other.row as i64 - self.row as i64
    }
}

impl fmt::Display for PadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.bank, self.row)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid pad id: {0:?}")]
pub struct ParsePadIdError(String);

impl FromStr for PadId {
    type Err = ParsePadIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let bank = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(|| ParsePadIdError(s.to_string()))?;
        let rest = chars.as_str();
        let row = rest
            .parse::<u32>()
            .map_err(|_| ParsePadIdError(s.to_string()))?;
        Ok(PadId { bank, row })
    }
}

// Pad ids travel through clipboard payloads as plain strings ("a1")
impl Serialize for PadId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PadId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A recorded pad-trigger interval on the shared timeline
///
/// Times are in seconds for the continuous-time sequencer; the step
/// sequencer stores the same absolute seconds derived from its grid.
/// Events are never mutated in place by edit operations; edits always
/// produce new event values and the owning collection is replaced
/// wholesale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequencerEvent {
    /// Unique identifier, stable across edits until the event is replaced
    pub id: EventId,

    /// The triggered pad (reference only, no ownership of pad data)
    pub pad: PadId,

    /// Start time in seconds, always >= 0
    pub time: f64,

    /// Length in seconds; > 0 once finalized
    pub duration: f64,

    /// True while the matching touch-up has not been recorded yet.
    /// In-progress events are excluded from trigger-index construction
    /// and from quantization.
    pub in_progress: bool,

    /// Transient UI/edit-state flag, not part of the event's identity
    pub selected: bool,
}

impl SequencerEvent {
    /// Creates a finalized event. Out-of-range inputs are sanitized
    /// rather than rejected: time is clamped to >= 0 and duration to a
    /// small positive epsilon.
    pub fn new(id: EventId, pad: PadId, time: f64, duration: f64) -> Self {
        Self {
            id,
            pad,
            time: sanitize_time(time),
            duration: sanitize_duration(duration),
            in_progress: false,
            selected: false,
        }
    }

    /// Creates an open-ended event at touch-down while recording.
    /// The event keeps an epsilon duration until the matching touch-up.
    pub fn open(id: EventId, pad: PadId, time: f64) -> Self {
        Self {
            id,
            pad,
            time: sanitize_time(time),
            duration: OPEN_EVENT_EPSILON,
            in_progress: true,
            selected: false,
        }
    }

    /// Finalize an open event at the given touch-up time
    pub fn closed_at(&self, end_time: f64) -> Self {
        Self {
            duration: sanitize_duration(end_time - self.time),
            in_progress: false,
            ..*self
        }
    }

    /// End of the interval, `time + duration`
    pub fn end(&self) -> f64 {
        self.time + self.duration
    }

    /// Closed-open containment: `time <= t < end`
    pub fn contains(&self, t: f64) -> bool {
        t >= self.time && t < self.end()
    }

    /// Whether this event's interval intersects `[start, start+duration)`.
    /// A zero-length window still matches events covering that instant,
    /// including an event starting exactly there.
    pub fn intersects(&self, start: f64, duration: f64) -> bool {
        if duration <= 0.0 {
            self.contains(start)
        } else {
            self.time < start + duration && self.end() > start
        }
    }

    /// Copy of this event with the selection flag replaced
    pub fn with_selected(&self, selected: bool) -> Self {
        Self { selected, ..*self }
    }

    /// Copy of this event with a fresh id (used when duplicating)
    pub fn with_fresh_id(&self) -> Self {
        Self {
            id: generate_event_id(),
            ..*self
        }
    }
}

fn sanitize_time(time: f64) -> f64 {
    if time.is_finite() { time.max(0.0) } else { 0.0 }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(OPEN_EVENT_EPSILON)
    } else {
        OPEN_EVENT_EPSILON
    }
}
