// Sequencer module - event sequencing engine
// Event store, trigger index, playback clock, and the edit operations
// that tie them together

pub mod clipboard;
pub mod clock;
pub mod engine;
pub mod event;
pub mod ops;
pub mod player;
pub mod step_grid;
pub mod store;
pub mod trigger_index;

pub use clipboard::{Clipboard, ClipboardError};
pub use clock::{ClockState, PlaybackClock};
pub use engine::PadSequencer;
pub use event::{EventId, OPEN_EVENT_EPSILON, PadId, SequencerEvent, generate_event_id};
pub use ops::{EventOverrides, PadRemap};
pub use player::TriggerPlayer;
pub use step_grid::{STEPS_PER_PATTERN, StepGrid, StepSequencer};
pub use store::EventStore;
pub use trigger_index::{TriggerEvent, TriggerIndex, TriggerKind};
