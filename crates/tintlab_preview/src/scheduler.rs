//! Debounced per-key scheduling
//!
//! The reusable core of the preview engine: a map of per-key slots, each
//! holding the latest proposed value, its commit deadline, and a dirty bit
//! for the frame layer. Proposing a key again overwrites its slot, which
//! is how superseding cancellation works: there is no timer object to
//! cancel, only a deadline to replace.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::time::Duration;
use tintlab_core::{ColorCategory, ElementType};

/// A projection drained by the frame layer
pub type FrameUpdate = (String, String, Option<ColorCategory>, Option<ElementType>);

/// A commit whose debounce deadline has passed
#[derive(Clone, Debug)]
pub struct DueCommit {
    pub key: String,
    pub value: String,
    pub category: Option<ColorCategory>,
    pub element: Option<ElementType>,
    /// True when the final value was proposed after the last frame drain
    /// and has therefore not been projected yet
    pub needs_projection: bool,
}

#[derive(Clone, Debug)]
struct PendingSlot {
    value: String,
    category: Option<ColorCategory>,
    element: Option<ElementType>,
    commit_deadline: Duration,
    frame_dirty: bool,
}

/// Per-key debounce-and-coalesce state machine.
///
/// Keys are independent: each has its own deadline and dirty bit, and
/// draining one key never disturbs another.
pub struct PreviewScheduler {
    debounce: Duration,
    frame_interval: Duration,
    slots: FxHashMap<String, PendingSlot>,
    last_frame: Option<Duration>,
}

impl PreviewScheduler {
    pub fn new(debounce: Duration, frame_interval: Duration) -> Self {
        Self {
            debounce,
            frame_interval,
            slots: FxHashMap::default(),
            last_frame: None,
        }
    }

    /// Record a proposal for `key`.
    ///
    /// Last write wins: the slot's value is overwritten and its commit
    /// deadline restarts unconditionally, even when the value is identical
    /// to the previous proposal. Continuous interaction must never
    /// auto-commit until the user stops.
    pub fn propose(
        &mut self,
        key: &str,
        value: &str,
        category: Option<ColorCategory>,
        element: Option<ElementType>,
        now: Duration,
    ) {
        let slot = PendingSlot {
            value: value.to_string(),
            category,
            element,
            commit_deadline: now + self.debounce,
            frame_dirty: true,
        };
        self.slots.insert(key.to_string(), slot);
    }

    /// Drain the frame layer.
    ///
    /// Returns at most one update per key, carrying the latest proposed
    /// value; intermediate values proposed since the previous drain were
    /// never observable and are dropped. Returns nothing when called again
    /// within the same frame interval.
    pub fn take_frame(&mut self, now: Duration) -> SmallVec<[FrameUpdate; 4]> {
        if let Some(last) = self.last_frame {
            if now < last + self.frame_interval {
                return SmallVec::new();
            }
        }

        let mut updates = SmallVec::new();
        for (key, slot) in self.slots.iter_mut() {
            if slot.frame_dirty {
                slot.frame_dirty = false;
                updates.push((key.clone(), slot.value.clone(), slot.category, slot.element));
            }
        }
        if !updates.is_empty() {
            self.last_frame = Some(now);
        }
        updates
    }

    /// Drain commits whose debounce deadline has passed, removing their
    /// slots. At most one commit per key per settled window.
    pub fn take_due(&mut self, now: Duration) -> SmallVec<[DueCommit; 2]> {
        let due_keys: SmallVec<[String; 2]> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.commit_deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();

        let mut commits = SmallVec::new();
        for key in due_keys {
            if let Some(slot) = self.slots.remove(&key) {
                commits.push(DueCommit {
                    key,
                    value: slot.value,
                    category: slot.category,
                    element: slot.element,
                    needs_projection: slot.frame_dirty,
                });
            }
        }
        commits
    }

    /// Cancel a single key's pending state, returning the scope the
    /// proposal carried (commit-now path)
    pub fn remove(&mut self, key: &str) -> Option<(Option<ColorCategory>, Option<ElementType>)> {
        self.slots
            .remove(key)
            .map(|slot| (slot.category, slot.element))
    }

    /// Teardown cancellation: drop every slot and frame schedule
    pub fn clear(&mut self) {
        self.slots.clear();
        self.last_frame = None;
    }

    pub fn has_pending(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn pending_len(&self) -> usize {
        self.slots.len()
    }
}
