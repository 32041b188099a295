//! Tintlab style surface
//!
//! The projection side of the playground: turning a `(key, value)` pair
//! into the minimum style mutation needed on the rendering surface.
//!
//! The surface is never treated as ambient global state. A
//! [`StyleRegistry`] owns one named slot per logical concern with
//! create-if-absent-then-update semantics, and the [`StyleProjector`] owns
//! exactly the slots it creates. Re-applying a key overwrites its slot, so
//! calling into the projector every frame cannot grow the surface.
//!
//! Backends are pluggable: [`MemoryBackend`] records slot contents for
//! inspection and tests, [`NullBackend`] is the no-op used when no
//! rendering surface exists (headless runs, server-side rendering).

mod projector;
mod registry;

pub use projector::StyleProjector;
pub use registry::{MemoryBackend, NullBackend, SharedMemoryBackend, StyleRegistry, SurfaceBackend};
