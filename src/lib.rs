// PadSeq - Event sequencing engine for pad-based clip performance
// Records, stores, queries, and replays time-stamped pad-trigger events

pub mod messaging;
pub mod sequencer;

// Re-export commonly used types for convenience
pub use messaging::channels::create_notification_channel;
pub use messaging::notification::Notification;
pub use sequencer::{
    Clipboard, ClockState, EventId, EventStore, PadId, PadSequencer, PlaybackClock,
    SequencerEvent, StepGrid, StepSequencer, TriggerEvent, TriggerIndex, TriggerKind,
    TriggerPlayer,
};
