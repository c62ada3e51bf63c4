// Trigger index - ordered-time lookup over trigger occurrences
// A binary search tree keyed by occurrence time, rebuilt from the full
// event collection whenever the owning store changes. Height is not
// guaranteed logarithmic; recording order is close to time order, which
// keeps the tree near-balanced at realistic event counts.

use crate::sequencer::event::{PadId, SequencerEvent};

/// Down or up instant derived from a sequencer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Down,
    Up,
}

/// A derived, ephemeral trigger occurrence. Never persisted; rebuilt
/// whenever the owning event collection changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEvent {
    pub time: f64,
    pub pad: PadId,
    pub kind: TriggerKind,
}

#[derive(Debug)]
struct TriggerNode {
    event: TriggerEvent,
    left: Option<Box<TriggerNode>>,
    right: Option<Box<TriggerNode>>,
}

/// Binary search tree over trigger occurrences, ordered by time.
/// Equal times land in the right subtree, preserving insertion order.
#[derive(Debug, Default)]
pub struct TriggerIndex {
    root: Option<Box<TriggerNode>>,
}

impl TriggerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from an event collection: two occurrences per
    /// finalized event (down at `time`, up at `time + duration`).
    /// In-progress events are excluded.
    pub fn build(events: &[SequencerEvent]) -> Self {
        let mut index = Self::new();
        for event in events.iter().filter(|e| !e.in_progress) {
            index.insert(TriggerEvent {
                time: event.time,
                pad: event.pad,
                kind: TriggerKind::Down,
            });
            index.insert(TriggerEvent {
                time: event.end(),
                pad: event.pad,
                kind: TriggerKind::Up,
            });
        }
        index
    }

    pub fn insert(&mut self, event: TriggerEvent) {
        insert_node(&mut self.root, event);
    }

    /// The occurrence with the smallest time strictly greater than `t`
    pub fn find_next(&self, t: f64) -> Option<&TriggerEvent> {
        let mut best = None;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.event.time > t {
                // Candidate; anything smaller but still > t is further left
                best = Some(&n.event);
                node = n.left.as_deref();
            } else {
                node = n.right.as_deref();
            }
        }
        best
    }

    /// The occurrence with the largest time strictly less than `t`
    pub fn find_previous(&self, t: f64) -> Option<&TriggerEvent> {
        let mut best = None;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.event.time < t {
                best = Some(&n.event);
                node = n.right.as_deref();
            } else {
                node = n.left.as_deref();
            }
        }
        best
    }

    /// All occurrences with `start <= time <= end`, ascending.
    /// In-order emission keeps the result sorted without a second pass.
    pub fn find_within_range(&self, start: f64, end: f64) -> Vec<&TriggerEvent> {
        let mut out = Vec::new();
        collect_range(self.root.as_deref(), start, end, &mut out);
        out
    }

    /// Full occurrence list in ascending time order
    pub fn in_order(&self) -> Vec<TriggerEvent> {
        let mut out = Vec::new();
        collect_in_order(self.root.as_deref(), &mut out);
        out
    }

    /// Total node count (diagnostics and tests, not the hot path)
    pub fn count(&self) -> usize {
        count_nodes(self.root.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn insert_node(slot: &mut Option<Box<TriggerNode>>, event: TriggerEvent) {
    match slot {
        None => {
            *slot = Some(Box::new(TriggerNode {
                event,
                left: None,
                right: None,
            }));
        }
        Some(node) => {
            if event.time < node.event.time {
                insert_node(&mut node.left, event);
            } else {
                // Equal times go right: a stable, deterministic tie-break
                insert_node(&mut node.right, event);
            }
        }
    }
}

fn collect_range<'a>(
    node: Option<&'a TriggerNode>,
    start: f64,
    end: f64,
    out: &mut Vec<&'a TriggerEvent>,
) {
    let Some(node) = node else {
        return;
    };

    if node.event.time > end {
        // Only the left subtree can still hold matches
        collect_range(node.left.as_deref(), start, end, out);
    } else if node.event.time < start {
        // Only the right subtree can still hold matches
        collect_range(node.right.as_deref(), start, end, out);
    } else {
        collect_range(node.left.as_deref(), start, end, out);
        out.push(&node.event);
        collect_range(node.right.as_deref(), start, end, out);
    }
}

fn collect_in_order(node: Option<&TriggerNode>, out: &mut Vec<TriggerEvent>) {
    let Some(node) = node else {
        return;
    };
    collect_in_order(node.left.as_deref(), out);
    out.push(node.event);
    collect_in_order(node.right.as_deref(), out);
}

fn count_nodes(node: Option<&TriggerNode>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + count_nodes(node.left.as_deref()) + count_nodes(node.right.as_deref()),
    }
}
