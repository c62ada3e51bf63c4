// Step grid adapter - BPM-quantized 16-step variant of the sequencer
// Converts between continuous time and (pattern, step) coordinates.
// Stored event times are always absolute seconds; a BPM change only
// re-derives the time<->step mapping, it never rewrites stored times.

use crate::messaging::notification::Notification;
use crate::sequencer::engine::PadSequencer;
use crate::sequencer::event::{EventId, PadId, SequencerEvent, generate_event_id};

/// Steps per pattern: a 16-step grid of sixteenth notes
pub const STEPS_PER_PATTERN: u32 = 16;

/// BPM clamps to this range rather than failing
const BPM_RANGE: (f64, f64) = (20.0, 999.0);

/// Time/grid coordinate conversion at a fixed BPM.
///
/// One step is a sixteenth note: `step_duration_ms = (60000 / bpm) / 4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGrid {
    bpm: f64,
}

impl StepGrid {
    pub fn new(bpm: f64) -> Self {
        Self {
            bpm: bpm.clamp(BPM_RANGE.0, BPM_RANGE.1),
        }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    pub fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm.clamp(BPM_RANGE.0, BPM_RANGE.1);
    }

    /// Duration of one step in milliseconds
    pub fn step_duration_ms(&self) -> f64 {
        (60_000.0 / self.bpm) / 4.0
    }

    /// Duration of one step in seconds (the engine's time unit)
    pub fn step_duration_secs(&self) -> f64 {
        self.step_duration_ms() / 1000.0
    }

    /// The (pattern, step) cell containing an absolute time
    pub fn cell_for(&self, time_secs: f64) -> (u32, u32) {
        // Guard against times sitting one ulp below a step boundary
        let total = ((time_secs.max(0.0) / self.step_duration_secs()) + 1e-9).floor() as u64;
        let pattern = (total / STEPS_PER_PATTERN as u64) as u32;
        let step = (total % STEPS_PER_PATTERN as u64) as u32;
        (pattern, step)
    }

    /// Absolute start time of a grid cell, in seconds
    pub fn time_for(&self, pattern: u32, step: u32) -> f64 {
        let total = pattern as u64 * STEPS_PER_PATTERN as u64 + step as u64;
        total as f64 * self.step_duration_secs()
    }
}

/// The grid-quantized sequencer: a pad sequencer whose events are
/// one-step intervals toggled on and off per (pad, pattern, step) cell.
/// Its event collection is independent from any continuous-time
/// sequencer's collection.
#[derive(Debug)]
pub struct StepSequencer {
    grid: StepGrid,
    sequencer: PadSequencer,
}

impl StepSequencer {
    pub fn new(bpm: f64, end_time: f64) -> Self {
        Self {
            grid: StepGrid::new(bpm),
            sequencer: PadSequencer::new(end_time),
        }
    }

    pub fn grid(&self) -> &StepGrid {
        &self.grid
    }

    /// Change the tempo used for time<->cell mapping. Stored event
    /// times are absolute seconds and are not rewritten.
    pub fn set_bpm(&mut self, bpm: f64) {
        self.grid.set_bpm(bpm);
    }

    pub fn sequencer(&self) -> &PadSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut PadSequencer {
        &mut self.sequencer
    }

    /// Toggle a grid cell: creates a one-step event at the cell's
    /// absolute time, or removes the existing event occupying that
    /// cell. Returns the created event's id, or None when toggled off.
    ///
    /// Grid cells share boundaries (step n ends where step n+1 starts),
    /// so toggles deliberately skip the coalescing join used by the
    /// continuous sequencer's edits.
    pub fn toggle_step(&mut self, pad: PadId, pattern: u32, step: u32) -> Option<EventId> {
        let cell = (pattern, step);
        let existing: Vec<EventId> = self
            .sequencer
            .events()
            .iter()
            .filter(|e| !e.in_progress && e.pad == pad && self.grid.cell_for(e.time) == cell)
            .map(|e| e.id)
            .collect();

        if existing.is_empty() {
            let event = SequencerEvent::new(
                generate_event_id(),
                pad,
                self.grid.time_for(pattern, step),
                self.grid.step_duration_secs(),
            );
            let id = event.id;

            let mut events = self.sequencer.events().to_vec();
            events.push(event);
            events.sort_by(|a, b| a.time.total_cmp(&b.time).then_with(|| a.pad.cmp(&b.pad)));
            self.sequencer.store_mut().replace(events);
            Some(id)
        } else {
            let events = self
                .sequencer
                .events()
                .iter()
                .copied()
                .filter(|e| !existing.contains(&e.id))
                .collect();
            self.sequencer.store_mut().replace(events);
            None
        }
    }

    pub fn is_step_on(&self, pad: PadId, pattern: u32, step: u32) -> bool {
        self.sequencer
            .events()
            .iter()
            .any(|e| !e.in_progress && e.pad == pad && self.grid.cell_for(e.time) == (pattern, step))
    }

    // Transport passthroughs; the grid variant plays back exactly like
    // the continuous one.

    pub fn play(&mut self, now: f64) -> Vec<Notification> {
        self.sequencer.play(now)
    }

    pub fn stop(&mut self, now: f64) -> Vec<Notification> {
        self.sequencer.stop(now)
    }

    pub fn rewind(&mut self, now: f64) -> Vec<Notification> {
        self.sequencer.rewind(now)
    }

    pub fn tick(&mut self, now: f64) -> Vec<Notification> {
        self.sequencer.tick(now)
    }
}
