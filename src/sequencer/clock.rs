// Playback clock - transport state machine and virtual time position
// Free-running: the host calls tick() at its own cadence (per frame)
// while the clock is active and stops the cadence when it goes idle.
// `now` is a monotonic timestamp in seconds supplied by the host.

use crate::messaging::notification::Notification;

/// Transport state (idle/playing/recording)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Idle,
    Playing,
    Recording,
}

impl ClockState {
    /// Playing or recording
    pub fn is_active(&self) -> bool {
        matches!(self, ClockState::Playing | ClockState::Recording)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, ClockState::Recording)
    }
}

/// Advances a virtual time position against host wall time.
///
/// Logical time only accumulates on `stop`: while active, the current
/// position is `time + (now - play_started_at)`, so a missed frame
/// never loses time.
#[derive(Debug)]
pub struct PlaybackClock {
    state: ClockState,
    /// Logical time folded in at the last stop/seek, in seconds
    time: f64,
    /// Playback range end; the tick that crosses it auto-stops
    end_time: f64,
    /// Host timestamp captured when the clock last became active
    play_started_at: f64,
}

impl PlaybackClock {
    pub fn new(end_time: f64) -> Self {
        Self {
            state: ClockState::Idle,
            time: 0.0,
            end_time,
            play_started_at: 0.0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Logical base time (excluding any in-flight elapsed span)
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Current position: base time plus elapsed wall time while active
    pub fn current_time(&self, now: f64) -> f64 {
        if self.state.is_active() {
            self.time + (now - self.play_started_at)
        } else {
            self.time
        }
    }

    /// Start playing. No-op if already playing or recording.
    pub fn play(&mut self, now: f64) -> Vec<Notification> {
        if self.state.is_active() {
            return Vec::new();
        }
        self.state = ClockState::Playing;
        self.play_started_at = now;
        vec![Notification::PlayStarted { time: self.time }]
    }

    /// Start recording. No-op if already playing or recording.
    pub fn record(&mut self, now: f64) -> Vec<Notification> {
        if self.state.is_active() {
            return Vec::new();
        }
        self.state = ClockState::Recording;
        self.play_started_at = now;
        vec![Notification::RecordStarted { time: self.time }]
    }

    /// Stop, folding elapsed wall time into the logical position.
    /// No-op while idle.
    pub fn stop(&mut self, now: f64) -> Vec<Notification> {
        if !self.state.is_active() {
            return Vec::new();
        }
        self.time += now - self.play_started_at;
        self.state = ClockState::Idle;
        vec![
            Notification::Stopped { time: self.time },
            Notification::TimeUpdate {
                time: self.time,
                is_playing: false,
                is_recording: false,
            },
        ]
    }

    /// Reset the position to 0. An active clock keeps running from 0
    /// (the elapsed anchor restarts); an idle clock just moves its
    /// position.
    pub fn rewind(&mut self, now: f64) -> Vec<Notification> {
        self.time = 0.0;
        if self.state.is_active() {
            self.play_started_at = now;
        }
        vec![Notification::TimeUpdate {
            time: 0.0,
            is_playing: self.state.is_active(),
            is_recording: self.state.is_recording(),
        }]
    }

    /// Seek to an arbitrary position without changing the play state
    pub fn set_time(&mut self, time: f64, now: f64) -> Vec<Notification> {
        self.time = time.max(0.0);
        if self.state.is_active() {
            self.play_started_at = now;
        }
        vec![Notification::TimeUpdate {
            time: self.time,
            is_playing: self.state.is_active(),
            is_recording: self.state.is_recording(),
        }]
    }

    /// Adjust the playback range end without changing the play state
    pub fn set_end_time(&mut self, end_time: f64) {
        self.end_time = end_time.max(0.0);
    }

    /// Advance one frame: emit a time update at the new position and
    /// auto-stop once the position reaches `end_time`. Returns no
    /// notifications while idle.
    pub fn tick(&mut self, now: f64) -> Vec<Notification> {
        if !self.state.is_active() {
            return Vec::new();
        }

        let total = self.current_time(now);
        let mut out = vec![Notification::TimeUpdate {
            time: total,
            is_playing: true,
            is_recording: self.state.is_recording(),
        }];

        if total >= self.end_time {
            out.extend(self.stop(now));
        }

        out
    }
}
