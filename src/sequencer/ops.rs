// Pure operations over event collections
// Edits never mutate a collection in place: every operation takes the
// current events and returns a new collection for the owner to swap in

use crate::sequencer::event::{PadId, SequencerEvent};

/// Partition events into `(matching, non_matching)` by a predicate.
/// Used to separate selected from unselected events when editing.
pub fn split<F>(events: &[SequencerEvent], predicate: F) -> (Vec<SequencerEvent>, Vec<SequencerEvent>)
where
    F: Fn(&SequencerEvent) -> bool,
{
    let mut matching = Vec::new();
    let mut non_matching = Vec::new();

    for event in events {
        if predicate(event) {
            matching.push(*event);
        } else {
            non_matching.push(*event);
        }
    }

    (matching, non_matching)
}

/// Concatenate event lists and coalesce same-pad events whose intervals
/// overlap or touch into one spanning event.
///
/// The surviving event keeps the id and flags of the time-earliest
/// constituent (selection is kept if any constituent was selected).
/// Coalescing is idempotent: merging an already-merged set again yields
/// the same result. In-progress events never coalesce and pass through
/// untouched.
pub fn merge(lists: &[&[SequencerEvent]]) -> Vec<SequencerEvent> {
    let mut all: Vec<SequencerEvent> = Vec::new();
    for list in lists {
        all.extend_from_slice(list);
    }

    let (open, mut closed) = split(&all, |e| e.in_progress);

    // Group same-pad events together, earliest first, then sweep
    closed.sort_by(|a, b| a.pad.cmp(&b.pad).then(a.time.total_cmp(&b.time)));

    let mut result: Vec<SequencerEvent> = Vec::with_capacity(closed.len());
    for event in closed {
        match result.last_mut() {
            Some(last) if last.pad == event.pad && event.time <= last.end() => {
                let end = last.end().max(event.end());
                last.duration = end - last.time;
                last.selected = last.selected || event.selected;
            }
            _ => result.push(event),
        }
    }

    result.extend(open);
    result
}

/// Canonical normalized form after any edit: coalesce overlaps, then
/// stable sort by time ascending, pad ascending for equal times.
pub fn join(events: &[SequencerEvent]) -> Vec<SequencerEvent> {
    let mut merged = merge(&[events]);
    merged.sort_by(|a, b| a.time.total_cmp(&b.time).then_with(|| a.pad.cmp(&b.pad)));
    merged
}

/// Snap event start times to the nearest multiple of `step`.
///
/// With `keep_original_length` false, durations are also snapped to the
/// nearest non-zero multiple; the result never has `duration <= 0`.
/// In-progress events are left untouched. A non-positive or non-finite
/// step returns the collection unchanged.
pub fn quantize(
    events: &[SequencerEvent],
    step: f64,
    keep_original_length: bool,
) -> Vec<SequencerEvent> {
    if !step.is_finite() || step <= 0.0 {
        return events.to_vec();
    }

    events
        .iter()
        .map(|event| {
            if event.in_progress {
                return *event;
            }

            let mut out = *event;
            out.time = ((event.time / step).round() * step).max(0.0);
            if !keep_original_length {
                let steps = (event.duration / step).round().max(1.0);
                out.duration = steps * step;
            }
            out
        })
        .collect()
}

/// How `translate` remaps pad ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadRemap {
    /// Leave pads unchanged
    None,
    /// Remap every event to one fixed pad (single-event paste)
    Target(PadId),
    /// Shift every pad's row by a signed offset (row moves);
    /// rows clamp at 0
    RowOffset(i64),
    /// Move every event into `bank` and shift rows by a signed offset
    /// (multi-event paste: the anchor lands on the target pad, the
    /// rest keep their relative row offsets in the target's bank)
    Rebase { bank: char, row_delta: i64 },
}

/// Field overrides applied to every translated event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventOverrides {
    pub selected: Option<bool>,
}

/// Shift event times by `time_offset` and remap pads, clamping the
/// resulting time to >= 0, then apply any field overrides.
pub fn translate(
    events: &[SequencerEvent],
    time_offset: f64,
    remap: PadRemap,
    overrides: EventOverrides,
) -> Vec<SequencerEvent> {
    events
        .iter()
        .map(|event| {
            let mut out = *event;
            out.time = (event.time + time_offset).max(0.0);
            out.pad = match remap {
                PadRemap::None => event.pad,
                PadRemap::Target(pad) => pad,
                PadRemap::RowOffset(delta) => event.pad.offset_row(delta),
                PadRemap::Rebase { bank, row_delta } => {
                    PadId::new(bank, event.pad.offset_row(row_delta).row)
                }
            };
            if let Some(selected) = overrides.selected {
                out.selected = selected;
            }
            out
        })
        .collect()
}

/// Events whose interval intersects `[time, time + duration)`,
/// optionally restricted to a set of pads. Used for marquee selection;
/// a zero-length window still matches events covering that instant.
pub fn intersecting<'a>(
    events: &'a [SequencerEvent],
    time: f64,
    duration: f64,
    pads: Option<&[PadId]>,
) -> Vec<&'a SequencerEvent> {
    events
        .iter()
        .filter(|event| event.intersects(time, duration))
        .filter(|event| pads.is_none_or(|pads| pads.contains(&event.pad)))
        .collect()
}
