//! Managed style registry
//!
//! One persistent slot per logical concern, reused and overwritten.

use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

/// Destination for rendered style blocks.
///
/// Backends have no error channel: applying style to an absent surface is
/// a no-op by contract, never a failure the interactive path can observe.
pub trait SurfaceBackend: Send {
    /// Create or overwrite a named slot with the given CSS text
    fn set_slot(&mut self, name: &str, css: &str);

    /// Remove a named slot. Unknown names are ignored.
    fn remove_slot(&mut self, name: &str);
}

/// Backend for environments without a rendering surface
#[derive(Default)]
pub struct NullBackend;

impl SurfaceBackend for NullBackend {
    fn set_slot(&mut self, _name: &str, _css: &str) {}
    fn remove_slot(&mut self, _name: &str) {}
}

/// In-memory backend that records slot contents.
///
/// Used by tests and by the headless playground binary to render the full
/// stylesheet the projector produced.
#[derive(Default)]
pub struct MemoryBackend {
    slots: IndexMap<String, String>,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_slot` calls observed (for write-rate assertions)
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Render every slot into one stylesheet, in slot creation order
    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        for (name, css) in &self.slots {
            out.push_str(&format!("/* {name} */\n{css}\n"));
        }
        out
    }
}

impl SurfaceBackend for MemoryBackend {
    fn set_slot(&mut self, name: &str, css: &str) {
        self.writes += 1;
        self.slots.insert(name.to_string(), css.to_string());
    }

    fn remove_slot(&mut self, name: &str) {
        self.slots.shift_remove(name);
    }
}

/// A [`MemoryBackend`] that can be shared between the projector and an
/// inspecting caller.
#[derive(Clone, Default)]
pub struct SharedMemoryBackend {
    inner: Arc<Mutex<MemoryBackend>>,
}

impl SharedMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stylesheet(&self) -> String {
        self.inner.lock().unwrap().stylesheet()
    }

    pub fn slot(&self, name: &str) -> Option<String> {
        self.inner.lock().unwrap().slot(name).map(str::to_string)
    }

    pub fn slot_count(&self) -> usize {
        self.inner.lock().unwrap().slot_count()
    }

    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().write_count()
    }
}

impl SurfaceBackend for SharedMemoryBackend {
    fn set_slot(&mut self, name: &str, css: &str) {
        self.inner.lock().unwrap().set_slot(name, css);
    }

    fn remove_slot(&mut self, name: &str) {
        self.inner.lock().unwrap().remove_slot(name);
    }
}

/// Named style slots with create-if-absent-then-update semantics.
///
/// The registry tracks which slots exist so teardown can remove exactly
/// the slots its owner created, and nothing else on the surface.
pub struct StyleRegistry {
    backend: Box<dyn SurfaceBackend>,
    slots: IndexMap<String, String>,
}

impl StyleRegistry {
    pub fn new(backend: Box<dyn SurfaceBackend>) -> Self {
        Self {
            backend,
            slots: IndexMap::new(),
        }
    }

    /// Create or overwrite the slot for a concern.
    ///
    /// Unchanged content is skipped, keeping per-frame calls cheap.
    pub fn set(&mut self, concern: &str, css: String) {
        if self.slots.get(concern).map(String::as_str) == Some(css.as_str()) {
            return;
        }
        self.backend.set_slot(concern, &css);
        self.slots.insert(concern.to_string(), css);
    }

    pub fn get(&self, concern: &str) -> Option<&str> {
        self.slots.get(concern).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every slot this registry created
    pub fn clear(&mut self) {
        for name in self.slots.keys() {
            self.backend.remove_slot(name);
        }
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reuses_slot_instead_of_growing() {
        let shared = SharedMemoryBackend::new();
        let mut registry = StyleRegistry::new(Box::new(shared.clone()));

        for i in 0..100 {
            registry.set("tokens", format!(":root {{ --x: {i}; }}"));
        }

        assert_eq!(registry.len(), 1);
        assert_eq!(shared.slot_count(), 1);
        assert_eq!(shared.slot("tokens").unwrap(), ":root { --x: 99; }");
    }

    #[test]
    fn unchanged_content_skips_backend_write() {
        let shared = SharedMemoryBackend::new();
        let mut registry = StyleRegistry::new(Box::new(shared.clone()));

        registry.set("tokens", ":root { --x: 1; }".to_string());
        registry.set("tokens", ":root { --x: 1; }".to_string());

        assert_eq!(shared.write_count(), 1);
    }

    #[test]
    fn clear_removes_only_owned_slots() {
        let shared = SharedMemoryBackend::new();

        // Something else on the surface, outside this registry
        {
            let mut other = shared.clone();
            other.set_slot("app-base", "body { margin: 0; }");
        }

        let mut registry = StyleRegistry::new(Box::new(shared.clone()));
        registry.set("tokens", ":root {}".to_string());
        registry.clear();

        assert!(registry.is_empty());
        assert!(shared.slot("tokens").is_none());
        assert!(shared.slot("app-base").is_some());
    }

    #[test]
    fn null_backend_accepts_everything() {
        let mut registry = StyleRegistry::new(Box::new(NullBackend));
        registry.set("tokens", ":root {}".to_string());
        registry.clear();
    }
}
