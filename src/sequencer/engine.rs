// Pad sequencer - wires the store, clock, cursor, and clipboard into
// one continuous-time sequencer body. Input sources feed touch-down/up
// occurrences in; due trigger notifications flow back out on each tick.

use crate::messaging::notification::Notification;
use crate::sequencer::clipboard::{Clipboard, ClipboardError};
use crate::sequencer::clock::{ClockState, PlaybackClock};
use crate::sequencer::event::{EventId, PadId, SequencerEvent, generate_event_id};
use crate::sequencer::ops::{self, EventOverrides, PadRemap};
use crate::sequencer::player::TriggerPlayer;
use crate::sequencer::store::EventStore;
use crate::sequencer::trigger_index::{TriggerEvent, TriggerIndex, TriggerKind};

/// One sequencer instance: authoritative event collection, playback
/// clock, trigger cursor, and clipboard.
///
/// Everything runs synchronously inside the host's frame callback or in
/// direct response to an input occurrence; there is no internal timer.
#[derive(Debug)]
pub struct PadSequencer {
    store: EventStore,
    clock: PlaybackClock,
    player: TriggerPlayer,
    clipboard: Clipboard,
    /// Time the current playback pass started from
    pass_start: f64,
    /// Highest time already swept for due triggers in this pass
    played_through: Option<f64>,
}

impl PadSequencer {
    pub fn new(end_time: f64) -> Self {
        Self {
            store: EventStore::new(),
            clock: PlaybackClock::new(end_time),
            player: TriggerPlayer::new(),
            clipboard: Clipboard::new(),
            pass_start: 0.0,
            played_through: None,
        }
    }

    // --- accessors ---

    pub fn events(&self) -> &[SequencerEvent] {
        self.store.events()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Direct store access for owners composing their own edits (the
    /// step-grid variant, project import). Replacement bumps the
    /// revision, so the trigger cursor resyncs on the next tick.
    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn current_time(&self, now: f64) -> f64 {
        self.clock.current_time(now)
    }

    pub fn end_time(&self) -> f64 {
        self.clock.end_time()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn selected_events(&self) -> Vec<SequencerEvent> {
        self.store
            .events()
            .iter()
            .copied()
            .filter(|e| e.selected)
            .collect()
    }

    // --- transport ---

    pub fn play(&mut self, now: f64) -> Vec<Notification> {
        let out = self.clock.play(now);
        if !out.is_empty() {
            self.begin_pass(self.clock.time());
        }
        out
    }

    pub fn record(&mut self, now: f64) -> Vec<Notification> {
        let out = self.clock.record(now);
        if !out.is_empty() {
            self.begin_pass(self.clock.time());
        }
        out
    }

    /// Stop playback/recording, finalizing any still-open events at the
    /// stop position
    pub fn stop(&mut self, now: f64) -> Vec<Notification> {
        if !self.clock.is_active() {
            return Vec::new();
        }
        let stop_time = self.clock.current_time(now);
        self.finalize_open_events(stop_time);
        self.clock.stop(now)
    }

    pub fn rewind(&mut self, now: f64) -> Vec<Notification> {
        let out = self.clock.rewind(now);
        self.begin_pass(0.0);
        out
    }

    pub fn set_time(&mut self, time: f64, now: f64) -> Vec<Notification> {
        let out = self.clock.set_time(time, now);
        self.begin_pass(self.clock.time());
        out
    }

    pub fn set_end_time(&mut self, end_time: f64) {
        self.clock.set_end_time(end_time);
    }

    /// Advance one frame. Emits the time update, then every trigger
    /// occurrence due between the previous and the new position in
    /// ascending time order, then any auto-stop notifications.
    pub fn tick(&mut self, now: f64) -> Vec<Notification> {
        let mut clock_out = self.clock.tick(now);
        if clock_out.is_empty() {
            return clock_out;
        }

        let time = clock_out[0].time();
        let mut out = vec![clock_out.remove(0)];

        self.sync_player();
        for occurrence in self.player.advance_to(time) {
            out.push(trigger_notification(&occurrence));
        }
        self.played_through = Some(time);

        // The clock may have auto-stopped at end_time; close any events
        // still being recorded at the final position
        if clock_out
            .iter()
            .any(|n| matches!(n, Notification::Stopped { .. }))
        {
            self.finalize_open_events(self.clock.time());
        }

        out.extend(clock_out);
        out
    }

    // --- recording ---

    /// Touch-down from an input source. While recording, appends an
    /// open-ended event at the current position. No-op otherwise.
    pub fn touch_down(&mut self, pad: PadId, now: f64) -> Option<EventId> {
        if !self.clock.state().is_recording() {
            return None;
        }

        let event = SequencerEvent::open(generate_event_id(), pad, self.clock.current_time(now));
        let id = event.id;

        let mut events = self.store.events().to_vec();
        events.push(event);
        self.store.replace(events);
        Some(id)
    }

    /// Matching touch-up: closes the pad's open event, computing its
    /// final duration. No-op when no open event exists for the pad.
    pub fn touch_up(&mut self, pad: PadId, now: f64) -> Option<EventId> {
        if !self.clock.state().is_recording() {
            return None;
        }

        let up_time = self.clock.current_time(now);
        let mut events = self.store.events().to_vec();
        let open = events
            .iter_mut()
            .rev()
            .find(|e| e.in_progress && e.pad == pad)?;

        *open = open.closed_at(up_time);
        let id = open.id;
        self.store.replace(ops::join(&events));
        Some(id)
    }

    // --- queries ---

    /// Next trigger occurrence strictly after `t`, from a fresh index
    pub fn next_trigger_after(&self, t: f64) -> Option<TriggerEvent> {
        TriggerIndex::build(self.store.events())
            .find_next(t)
            .copied()
    }

    /// Previous trigger occurrence strictly before `t`
    pub fn previous_trigger_before(&self, t: f64) -> Option<TriggerEvent> {
        TriggerIndex::build(self.store.events())
            .find_previous(t)
            .copied()
    }

    // --- selection ---

    /// Select exactly the events whose ids are listed
    pub fn select_by_ids(&mut self, ids: &[EventId]) {
        let events = self
            .store
            .events()
            .iter()
            .map(|e| e.with_selected(ids.contains(&e.id)))
            .collect();
        self.store.replace(events);
    }

    /// Marquee selection: select exactly the events intersecting
    /// `[time, time + duration)`, optionally restricted to given pads
    pub fn select_in_region(&mut self, time: f64, duration: f64, pads: Option<&[PadId]>) {
        let ids: Vec<EventId> = ops::intersecting(self.store.events(), time, duration, pads)
            .iter()
            .map(|e| e.id)
            .collect();
        self.select_by_ids(&ids);
    }

    pub fn clear_selection(&mut self) {
        self.select_by_ids(&[]);
    }

    // --- edits ---

    /// Shift the selected events by a time delta and pad-row delta.
    /// Intermediate drag updates pass `finished = false`; the final one
    /// normalizes the collection (coalescing any overlaps it created).
    pub fn move_selected(&mut self, time_delta: f64, row_delta: i64, finished: bool) {
        let (selected, mut rest) = ops::split(self.store.events(), |e| e.selected);
        if selected.is_empty() {
            return;
        }

        let moved = ops::translate(
            &selected,
            time_delta,
            PadRemap::RowOffset(row_delta),
            EventOverrides::default(),
        );
        rest.extend(moved);
        let events = if finished { ops::join(&rest) } else { rest };
        self.store.replace(events);
    }

    /// Quantize the selected events to the grid step
    pub fn quantize_selected(&mut self, step: f64, keep_original_length: bool) {
        let (selected, mut rest) = ops::split(self.store.events(), |e| e.selected);
        if selected.is_empty() {
            return;
        }

        rest.extend(ops::quantize(&selected, step, keep_original_length));
        self.store.replace(ops::join(&rest));
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // --- clipboard operations ---

    /// Move the selected events to the clipboard. Empty selection
    /// stores nothing and leaves the collection unchanged.
    pub fn cut(&mut self) {
        let (selected, rest) = ops::split(self.store.events(), |e| e.selected);
        if selected.is_empty() {
            return;
        }
        self.clipboard.store(&selected);
        self.store.replace(ops::join(&rest));
    }

    /// Copy the selected events to the clipboard without removing them
    pub fn copy(&mut self) {
        self.clipboard.store(&self.selected_events());
    }

    /// Paste the clipboard at the anchor: the earliest pasted event
    /// lands at `target_time` on `target_pad`, the rest keep their
    /// relative time and pad-row offsets. Pasted events become the
    /// selection. Returns the number of pasted events; an empty or
    /// malformed clipboard pastes nothing.
    pub fn paste(&mut self, target_time: f64, target_pad: PadId) -> usize {
        let pasted = match self.clipboard.events() {
            Ok(events) => events,
            Err(ClipboardError::Empty) => return 0,
            Err(e) => {
                eprintln!("clipboard: {}", e);
                return 0;
            }
        };
        let Some(anchor) = pasted.first().copied() else {
            return 0;
        };

        let remap = if pasted.len() == 1 {
            PadRemap::Target(target_pad)
        } else {
            // The anchor lands exactly on the target pad; the rest keep
            // their relative row offsets in the target's bank
            PadRemap::Rebase {
                bank: target_pad.bank,
                row_delta: anchor.pad.row_offset_to(target_pad),
            }
        };
        let moved = ops::translate(
            &pasted,
            target_time - anchor.time,
            remap,
            EventOverrides {
                selected: Some(true),
            },
        );
        let count = moved.len();

        let mut events: Vec<SequencerEvent> = self
            .store
            .events()
            .iter()
            .map(|e| e.with_selected(false))
            .collect();
        events.extend(moved);
        self.store.replace(ops::join(&events));
        count
    }

    /// Duplicate the selected events immediately after the selection's
    /// end, on the same pads; the duplicates become the selection.
    /// Returns the number of duplicated events.
    pub fn duplicate(&mut self) -> usize {
        let selected = self.selected_events();
        let Some(first) = selected.first() else {
            return 0;
        };

        let start = selected.iter().map(|e| e.time).fold(first.time, f64::min);
        let end = selected.iter().map(|e| e.end()).fold(first.end(), f64::max);

        let copies: Vec<SequencerEvent> = ops::translate(
            &selected,
            end - start,
            PadRemap::None,
            EventOverrides {
                selected: Some(true),
            },
        )
        .iter()
        .map(|e| e.with_fresh_id())
        .collect();
        let count = copies.len();

        let mut events: Vec<SequencerEvent> = self
            .store
            .events()
            .iter()
            .map(|e| e.with_selected(false))
            .collect();
        events.extend(copies);
        self.store.replace(ops::join(&events));
        count
    }

    // --- internals ---

    /// Restart the trigger cursor for a pass beginning at `time`
    fn begin_pass(&mut self, time: f64) {
        self.pass_start = time;
        self.played_through = None;
        if self.player.is_stale(&self.store) {
            self.player.rebuild(&self.store);
        }
        self.player.seek(time);
    }

    /// Rebuild the cursor snapshot if the store changed mid-pass,
    /// restoring the cursor so already-emitted occurrences stay emitted
    fn sync_player(&mut self) {
        if !self.player.is_stale(&self.store) {
            return;
        }
        self.player.rebuild(&self.store);
        match self.played_through {
            Some(t) => self.player.seek_past(t),
            None => self.player.seek(self.pass_start),
        }
    }

    fn finalize_open_events(&mut self, stop_time: f64) {
        if !self.store.events().iter().any(|e| e.in_progress) {
            return;
        }
        let events: Vec<SequencerEvent> = self
            .store
            .events()
            .iter()
            .map(|e| if e.in_progress { e.closed_at(stop_time) } else { *e })
            .collect();
        self.store.replace(ops::join(&events));
    }
}

fn trigger_notification(occurrence: &TriggerEvent) -> Notification {
    match occurrence.kind {
        TriggerKind::Down => Notification::PadDown {
            pad: occurrence.pad,
            time: occurrence.time,
        },
        TriggerKind::Up => Notification::PadUp {
            pad: occurrence.pad,
            time: occurrence.time,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(s: &str) -> PadId {
        s.parse().unwrap()
    }

    /// Collect only the trigger notifications from a tick batch
    fn triggers(notifications: &[Notification]) -> Vec<Notification> {
        notifications
            .iter()
            .copied()
            .filter(Notification::is_trigger)
            .collect()
    }

    /// Record the two-pad scenario: a1 [0.0, 0.5), a2 [0.25, 0.75)
    fn recorded_sequencer() -> PadSequencer {
        let mut seq = PadSequencer::new(10.0);
        seq.record(100.0);
        seq.touch_down(pad("a1"), 100.0);
        seq.touch_down(pad("a2"), 100.25);
        seq.touch_up(pad("a1"), 100.5);
        seq.touch_up(pad("a2"), 100.75);
        seq.stop(101.0);
        seq
    }

    #[test]
    fn test_record_produces_finalized_events() {
        let seq = recorded_sequencer();

        let events = seq.events();
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].pad, pad("a1"));
        assert!((events[0].time - 0.0).abs() < 1e-9);
        assert!((events[0].duration - 0.5).abs() < 1e-9);

        assert_eq!(events[1].pad, pad("a2"));
        assert!((events[1].time - 0.25).abs() < 1e-9);
        assert!((events[1].duration - 0.5).abs() < 1e-9);

        assert!(events.iter().all(|e| !e.in_progress));
    }

    #[test]
    fn test_playback_emits_triggers_in_order() {
        let mut seq = recorded_sequencer();
        seq.rewind(200.0);
        seq.play(200.0);

        // Sweep 0..1s in small steps and gather every trigger
        let mut fired = Vec::new();
        for i in 1..=10 {
            let now = 200.0 + i as f64 * 0.1;
            fired.extend(triggers(&seq.tick(now)));
        }

        assert_eq!(
            fired,
            vec![
                Notification::PadDown {
                    pad: pad("a1"),
                    time: 0.0
                },
                Notification::PadDown {
                    pad: pad("a2"),
                    time: 0.25
                },
                Notification::PadUp {
                    pad: pad("a1"),
                    time: 0.5
                },
                Notification::PadUp {
                    pad: pad("a2"),
                    time: 0.75
                },
            ]
        );
    }

    #[test]
    fn test_triggers_fire_once_per_pass() {
        let mut seq = recorded_sequencer();
        seq.rewind(199.0);
        seq.play(200.0);

        let first = triggers(&seq.tick(201.0));
        assert_eq!(first.len(), 4);

        // Later ticks in the same pass emit nothing new
        assert!(triggers(&seq.tick(202.0)).is_empty());

        // Rewinding resets the cursor; the pass replays from 0
        seq.rewind(203.0);
        let replay = triggers(&seq.tick(204.0));
        assert_eq!(replay.len(), 4);
    }

    #[test]
    fn test_seek_restarts_cursor_mid_list() {
        let mut seq = recorded_sequencer();
        seq.play(200.0);
        seq.tick(201.0);

        // Seek back to 0.4: the two ups (0.5, 0.75) become pending again
        seq.set_time(0.4, 201.0);
        let fired = triggers(&seq.tick(202.0));
        assert_eq!(fired.len(), 2);
        assert_eq!(
            fired[0],
            Notification::PadUp {
                pad: pad("a1"),
                time: 0.5
            }
        );
    }

    #[test]
    fn test_open_events_do_not_fire_triggers() {
        let mut seq = PadSequencer::new(10.0);
        seq.record(0.0);
        seq.touch_down(pad("a1"), 0.0);

        // The open event is excluded from the trigger index
        let out = seq.tick(0.5);
        assert!(triggers(&out).is_empty());
    }

    #[test]
    fn test_stop_finalizes_open_events() {
        let mut seq = PadSequencer::new(10.0);
        seq.record(0.0);
        seq.touch_down(pad("a1"), 0.25);
        // No touch-up before stop
        seq.stop(1.0);

        let events = seq.events();
        assert_eq!(events.len(), 1);
        assert!(!events[0].in_progress);
        assert!((events[0].duration - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_auto_stop_finalizes_open_events() {
        let mut seq = PadSequencer::new(0.5);
        seq.record(0.0);
        seq.touch_down(pad("a1"), 0.25);

        // Crossing end_time auto-stops and closes the open event
        seq.tick(1.0);
        assert_eq!(seq.state(), ClockState::Idle);

        let events = seq.events();
        assert_eq!(events.len(), 1);
        assert!(!events[0].in_progress);
        assert!((events[0].duration - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_touch_ignored_while_not_recording() {
        let mut seq = PadSequencer::new(10.0);
        assert_eq!(seq.touch_down(pad("a1"), 0.0), None);

        seq.play(0.0);
        assert_eq!(seq.touch_down(pad("a1"), 0.5), None);
        assert!(seq.events().is_empty());
    }

    #[test]
    fn test_touch_up_without_down_is_noop() {
        let mut seq = PadSequencer::new(10.0);
        seq.record(0.0);
        assert_eq!(seq.touch_up(pad("a1"), 0.5), None);
    }

    #[test]
    fn test_cut_paste_scenario() {
        let mut seq = recorded_sequencer();

        let ids: Vec<EventId> = seq.events().iter().map(|e| e.id).collect();
        seq.select_by_ids(&ids);
        seq.cut();

        assert!(seq.events().is_empty());
        assert!(!seq.clipboard().is_empty());

        let pasted = seq.paste(2.0, pad("a3"));
        assert_eq!(pasted, 2);

        let events = seq.events();
        assert_eq!(events.len(), 2);

        // Anchor a1 -> a3 at 2.0; a2 keeps its +0.25s / +1 row offsets
        assert_eq!(events[0].pad, pad("a3"));
        assert!((events[0].time - 2.0).abs() < 1e-9);
        assert!((events[0].duration - 0.5).abs() < 1e-9);

        assert_eq!(events[1].pad, pad("a4"));
        assert!((events[1].time - 2.25).abs() < 1e-9);
        assert!((events[1].duration - 0.5).abs() < 1e-9);

        assert!(events.iter().all(|e| e.selected));
    }

    #[test]
    fn test_multi_paste_crosses_bank() {
        let mut seq = recorded_sequencer();
        let ids: Vec<EventId> = seq.events().iter().map(|e| e.id).collect();
        seq.select_by_ids(&ids);
        seq.copy();

        // Anchor a1 -> b3: both events move into bank b
        assert_eq!(seq.paste(2.0, pad("b3")), 2);
        let pasted: Vec<&SequencerEvent> =
            seq.events().iter().filter(|e| e.selected).collect();
        assert_eq!(pasted.len(), 2);

        assert_eq!(pasted[0].pad, pad("b3"));
        assert!((pasted[0].time - 2.0).abs() < 1e-9);
        assert_eq!(pasted[1].pad, pad("b4"));
        assert!((pasted[1].time - 2.25).abs() < 1e-9);
    }

    #[test]
    fn test_paste_single_event_targets_exact_pad() {
        let mut seq = recorded_sequencer();
        let first_id = seq.events()[0].id;
        seq.select_by_ids(&[first_id]);
        seq.copy();

        seq.paste(5.0, pad("b7"));
        let pasted: Vec<&SequencerEvent> =
            seq.events().iter().filter(|e| e.selected).collect();
        assert_eq!(pasted.len(), 1);
        assert_eq!(pasted[0].pad, pad("b7"));
        assert!((pasted[0].time - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_paste_without_clipboard_is_noop() {
        let mut seq = recorded_sequencer();
        let before = seq.events().to_vec();

        assert_eq!(seq.paste(2.0, pad("a3")), 0);
        assert_eq!(seq.events(), &before[..]);
    }

    #[test]
    fn test_cut_empty_selection_is_noop() {
        let mut seq = recorded_sequencer();
        let before = seq.events().to_vec();

        seq.cut();
        assert_eq!(seq.events(), &before[..]);
        assert!(seq.clipboard().is_empty());
    }

    #[test]
    fn test_copy_keeps_originals() {
        let mut seq = recorded_sequencer();
        let ids: Vec<EventId> = seq.events().iter().map(|e| e.id).collect();
        seq.select_by_ids(&ids);

        seq.copy();
        assert_eq!(seq.events().len(), 2);
        assert!(!seq.clipboard().is_empty());
    }

    #[test]
    fn test_duplicate() {
        let mut seq = recorded_sequencer();
        let ids: Vec<EventId> = seq.events().iter().map(|e| e.id).collect();
        seq.select_by_ids(&ids);

        // Selection spans [0.0, 0.75); duplicates land 0.75s later
        assert_eq!(seq.duplicate(), 2);
        let events = seq.events();
        assert_eq!(events.len(), 4);

        let dup_a1 = events
            .iter()
            .find(|e| e.pad == pad("a1") && e.time > 0.5)
            .unwrap();
        assert!((dup_a1.time - 0.75).abs() < 1e-9);
        assert!(dup_a1.selected);

        // Originals lost their selection
        assert!(!events[0].selected);
    }

    #[test]
    fn test_duplicate_empty_selection() {
        let mut seq = recorded_sequencer();
        assert_eq!(seq.duplicate(), 0);
        assert_eq!(seq.events().len(), 2);
    }

    #[test]
    fn test_select_in_region() {
        let mut seq = recorded_sequencer();

        // Only a2's interval covers 0.6
        seq.select_in_region(0.6, 0.0, None);
        let selected = seq.selected_events();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].pad, pad("a2"));

        // Restricting to a1 leaves the selection empty
        let only_a1 = [pad("a1")];
        seq.select_in_region(0.6, 0.0, Some(&only_a1));
        assert!(seq.selected_events().is_empty());
    }

    #[test]
    fn test_move_selected() {
        let mut seq = recorded_sequencer();
        let first_id = seq.events()[0].id;
        seq.select_by_ids(&[first_id]);

        seq.move_selected(1.0, 2, true);

        let moved = seq
            .events()
            .iter()
            .copied()
            .find(|e| e.id == first_id)
            .unwrap();
        assert_eq!(moved.pad, pad("a3"));
        assert!((moved.time - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_finished_coalesces() {
        let mut seq = recorded_sequencer();
        // Move a1 onto a2's row, overlapping its interval
        let first_id = seq.events()[0].id;
        seq.select_by_ids(&[first_id]);

        seq.move_selected(0.0, 1, true);

        // a1 [0.0, 0.5) on row 2 overlaps a2 [0.25, 0.75): one spanning event
        let events = seq.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].pad, pad("a2"));
        assert!((events[0].time - 0.0).abs() < 1e-9);
        assert!((events[0].end() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_quantize_selected() {
        let mut seq = PadSequencer::new(10.0);
        seq.record(0.0);
        seq.touch_down(pad("a1"), 0.23);
        seq.touch_up(pad("a1"), 0.61);
        seq.stop(1.0);

        let id = seq.events()[0].id;
        seq.select_by_ids(&[id]);
        seq.quantize_selected(0.25, false);

        let event = seq.events()[0];
        assert!((event.time - 0.25).abs() < 1e-9);
        // 0.38s duration rounds to 0.5 (two steps)
        assert!((event.duration - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_trigger_queries() {
        let seq = recorded_sequencer();

        assert_eq!(seq.next_trigger_after(0.0).unwrap().time, 0.25);
        assert_eq!(seq.previous_trigger_before(0.25).unwrap().time, 0.0);
        assert_eq!(seq.next_trigger_after(0.75), None);
        assert_eq!(seq.previous_trigger_before(0.0), None);
    }

    #[test]
    fn test_auto_stop_at_end_time() {
        let mut seq = recorded_sequencer();
        seq.set_end_time(0.6);
        seq.rewind(300.0);
        seq.play(300.0);

        // Cross the end in one long frame
        let out = seq.tick(301.0);
        assert_eq!(seq.state(), ClockState::Idle);
        assert!(out.iter().any(|n| matches!(n, Notification::Stopped { .. })));
        // Triggers due before the crossing still fired this tick
        assert!(!triggers(&out).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut seq = recorded_sequencer();
        seq.clear();
        assert!(seq.events().is_empty());
    }
}
