// Notifications emitted by the sequencing engine
// Consumed by the media-playback layer (start/stop clips) and the UI
// (playhead position, active-cell highlighting)

use crate::sequencer::event::PadId;

/// A notification emitted by the engine toward its collaborators.
///
/// Trigger notifications are always emitted in ascending time order
/// within one tick. Time updates are emitted at least once per tick
/// while the clock is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// Playhead position changed
    TimeUpdate {
        time: f64,
        is_playing: bool,
        is_recording: bool,
    },
    /// Playback started at the carried logical time
    PlayStarted { time: f64 },
    /// Recording started at the carried logical time
    RecordStarted { time: f64 },
    /// Playback or recording stopped at the carried logical time
    Stopped { time: f64 },
    /// A pad trigger became due during playback
    PadDown { pad: PadId, time: f64 },
    /// A pad release became due during playback
    PadUp { pad: PadId, time: f64 },
}

impl Notification {
    /// The time carried by this notification
    pub fn time(&self) -> f64 {
        match self {
            Notification::TimeUpdate { time, .. }
            | Notification::PlayStarted { time }
            | Notification::RecordStarted { time }
            | Notification::Stopped { time }
            | Notification::PadDown { time, .. }
            | Notification::PadUp { time, .. } => *time,
        }
    }

    /// True for pad-down/pad-up trigger notifications
    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            Notification::PadDown { .. } | Notification::PadUp { .. }
        )
    }
}
