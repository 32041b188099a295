//! Tintlab preview engine
//!
//! Converts a noisy stream of proposed token values into (a) smooth,
//! rate-limited visual feedback and (b) exactly one durable commit per
//! settling period.
//!
//! Two independent timing layers exist on purpose:
//!
//! - a **fast layer**, aligned to the host's frame cadence, that projects
//!   the latest proposed value for each key onto the style surface while
//!   the user is mid-gesture;
//! - a **slow layer**, a per-key debounce of a few hundred milliseconds,
//!   that holds back the comparatively expensive commit (store write plus
//!   persistence) until input has settled.
//!
//! The engine is manual-tick: the host event loop calls
//! [`PreviewEngine::tick`] once per frame, the same contract as an
//! animation scheduler. All timing flows through a [`TimeSource`], so the
//! whole surface is testable with [`ManualClock`] and no sleeping.

mod clock;
mod engine;
mod scheduler;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use engine::{CommitFn, PreviewConfig, PreviewEngine};
pub use scheduler::{DueCommit, FrameUpdate, PreviewScheduler};
