//! The preview engine proper

use crate::clock::TimeSource;
use crate::scheduler::PreviewScheduler;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::Duration;
use tintlab_core::{ColorCategory, ElementType, PreviewEvent};
use tintlab_surface::StyleProjector;

/// Commit callback supplied by the surrounding application.
///
/// Invoked at most once per debounce window per key, and only with the
/// final settled value.
pub type CommitFn = Arc<dyn Fn(&str, &str) + Send + Sync>;

/// Timing configuration for the engine
#[derive(Clone, Copy, Debug)]
pub struct PreviewConfig {
    /// Quiet period after the last proposal before a commit fires
    pub debounce: Duration,
    /// Minimum spacing between surface projections per key
    pub frame_interval: Duration,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(400),
            frame_interval: Duration::from_millis(16),
        }
    }
}

/// Orchestrates live preview: proposals in, rate-limited projections and
/// debounced commits out.
///
/// None of the operations here can fail; unknown keys flow through and
/// resolve to projector no-ops.
pub struct PreviewEngine<C: TimeSource> {
    clock: C,
    scheduler: PreviewScheduler,
    projector: StyleProjector,
    commit_fn: CommitFn,
    /// Last previewed/committed value per key. Kept after commit so the
    /// UI's displayed value never flashes back to the old committed value.
    retained: FxHashMap<String, String>,
    active_key: Option<String>,
}

impl<C: TimeSource> PreviewEngine<C> {
    pub fn new(clock: C, projector: StyleProjector, commit_fn: CommitFn) -> Self {
        Self::with_config(clock, projector, commit_fn, PreviewConfig::default())
    }

    pub fn with_config(
        clock: C,
        projector: StyleProjector,
        commit_fn: CommitFn,
        config: PreviewConfig,
    ) -> Self {
        Self {
            clock,
            scheduler: PreviewScheduler::new(config.debounce, config.frame_interval),
            projector,
            commit_fn,
            retained: FxHashMap::default(),
            active_key: None,
        }
    }

    /// Record a proposed value for `key`.
    ///
    /// Marks the key active, schedules a frame-aligned projection, and
    /// (re)starts the key's debounce. Proposing again before the debounce
    /// elapses supersedes the previous pending commit and projection; no
    /// stale commit can fire after a newer proposal.
    pub fn propose(
        &mut self,
        key: &str,
        value: &str,
        category: Option<ColorCategory>,
        element: Option<ElementType>,
    ) {
        self.propose_event(PreviewEvent {
            key: key.to_string(),
            value: value.to_string(),
            category,
            element,
            at: self.clock.now(),
        });
    }

    /// Record a proposed value from a pre-stamped input event.
    ///
    /// Hosts that batch input (replaying a pointer trace, feeding events
    /// from a channel) stamp events at capture time and hand them over
    /// here; `propose` is the stamp-now convenience on top of this.
    pub fn propose_event(&mut self, event: PreviewEvent) {
        tracing::trace!(key = %event.key, value = %event.value, at = ?event.at, "propose");

        self.active_key = Some(event.key.clone());
        self.retained.insert(event.key.clone(), event.value.clone());
        self.scheduler
            .propose(&event.key, &event.value, event.category, event.element, event.at);
    }

    /// Drive both timing layers. Call once per host frame.
    ///
    /// Projects the latest proposed value per key (coalesced to the frame
    /// interval), then fires any commit whose quiet period has elapsed.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        for (key, value, category, element) in self.scheduler.take_frame(now) {
            self.projector.apply(&key, &value, category, element);
        }

        for due in self.scheduler.take_due(now) {
            // The settled value must reach the surface even if it arrived
            // after the last frame drain
            if due.needs_projection {
                self.projector
                    .apply(&due.key, &due.value, due.category, due.element);
            }
            tracing::debug!(key = %due.key, value = %due.value, "debounce settled, committing");
            self.finish_commit(&due.key, &due.value);
        }
    }

    /// Commit `key` immediately, bypassing any pending debounce.
    ///
    /// Clears the key's pending state, retains the value as the displayed
    /// state, projects it under the given scope, and invokes the commit
    /// callback. When the caller passes no scope, the pending proposal's
    /// scope is reused, so an explicit commit and a settled debounce write
    /// the same surface variable.
    pub fn commit(
        &mut self,
        key: &str,
        value: &str,
        category: Option<ColorCategory>,
        element: Option<ElementType>,
    ) {
        let (category, element) = match self.scheduler.remove(key) {
            Some((slot_category, slot_element)) => {
                (category.or(slot_category), element.or(slot_element))
            }
            None => (category, element),
        };
        self.retained.insert(key.to_string(), value.to_string());
        self.projector.apply(key, value, category, element);
        tracing::debug!(key, value, "explicit commit");
        self.finish_commit(key, value);
    }

    /// Cancel every pending timer and scheduled projection, reset session
    /// state, and remove the engine's own surface side effects.
    ///
    /// Committed downstream state is untouched; clear is cleanup, not undo.
    pub fn clear(&mut self) {
        tracing::debug!("preview engine cleared");
        self.scheduler.clear();
        self.retained.clear();
        self.active_key = None;
        self.projector.clear();
    }

    /// The value the UI should display for `key` right now: the in-flight
    /// preview if one exists, else the last committed value.
    pub fn displayed_value(&self, key: &str) -> Option<&str> {
        self.retained.get(key).map(String::as_str)
    }

    /// The key currently mid-preview, if any
    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    /// Whether any key has an unsettled proposal
    pub fn is_active(&self) -> bool {
        self.scheduler.pending_len() > 0
    }

    fn finish_commit(&mut self, key: &str, value: &str) {
        // Engine state is consistent before the callback runs; a panicking
        // callback cannot leave a stale timer behind
        if self.active_key.as_deref() == Some(key) && !self.scheduler.has_pending(key) {
            self.active_key = None;
        }
        (self.commit_fn)(key, value);
    }
}
