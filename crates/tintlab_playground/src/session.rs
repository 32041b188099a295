//! The playground session

use crate::PlaygroundConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tintlab_core::{ColorCategory, ColorRole, ElementType};
use tintlab_preview::{PreviewConfig, PreviewEngine, TimeSource};
use tintlab_store::{Notifier, PersistenceGateway, RemoteStore, ThemeSnapshot};
use tintlab_surface::{SharedMemoryBackend, StyleProjector};
use tintlab_tokens::TokenStore;

/// Selection state shared with the commit callback
struct Selection {
    element: ElementType,
    category: ColorCategory,
}

/// One live playground: preview engine in front, token store and
/// persistence gateway behind the commit callback.
pub struct PlaygroundSession<C: TimeSource> {
    engine: PreviewEngine<C>,
    store: Arc<TokenStore>,
    backend: SharedMemoryBackend,
    selection: Arc<Mutex<Selection>>,
}

impl<C: TimeSource> PlaygroundSession<C> {
    /// Wire up a session.
    ///
    /// The engine's commit callback updates the token store and saves a
    /// snapshot of the committed scope through the gateway. Setting keys
    /// (radius, effects) project and commit but are not persisted; the
    /// snapshot format carries colors only.
    pub fn new<R: RemoteStore>(
        config: &PlaygroundConfig,
        gateway: PersistenceGateway<R>,
        clock: C,
        notifier: Option<Notifier>,
    ) -> Self {
        let store = Arc::new(TokenStore::new());
        let backend = SharedMemoryBackend::new();
        let selection = Arc::new(Mutex::new(Selection {
            element: config.element,
            category: config.category,
        }));

        let mut gateway = gateway;
        if let Some(notifier) = notifier {
            gateway.set_notifier(notifier);
        }
        let gateway = Arc::new(gateway);

        let commit_store = Arc::clone(&store);
        let commit_selection = Arc::clone(&selection);
        let commit_gateway = Arc::clone(&gateway);
        let user_id = config.user_id.clone();

        let engine = PreviewEngine::with_config(
            clock,
            StyleProjector::new(Box::new(backend.clone())),
            Arc::new(move |key: &str, value: &str| {
                let Some(role) = ColorRole::from_role_key(key) else {
                    tracing::debug!(key, value, "non-color commit, nothing to persist");
                    return;
                };

                let (element, category) = {
                    let sel = commit_selection.lock().unwrap();
                    (sel.element, sel.category)
                };

                commit_store.update(element, category, role, value);

                let snapshot = ThemeSnapshot::from_palette(
                    &commit_store.palette(element, category),
                    element,
                    category,
                );
                commit_gateway.save_snapshot(snapshot, None, user_id.clone());
            }),
            PreviewConfig {
                debounce: Duration::from_millis(config.debounce_ms),
                frame_interval: Duration::from_millis(config.frame_interval_ms),
            },
        );

        Self {
            engine,
            store,
            backend,
            selection,
        }
    }

    /// Propose a value for a key under the current selection
    pub fn propose(&mut self, key: &str, value: &str) {
        let (element, category) = {
            let sel = self.selection.lock().unwrap();
            (sel.element, sel.category)
        };
        // Setting keys are not scoped by the selection
        if ColorRole::from_role_key(key).is_some() {
            self.engine
                .propose(key, value, Some(category), Some(element));
        } else {
            self.engine.propose(key, value, None, None);
        }
    }

    /// Drive the engine's timing layers; call once per host frame
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Commit a key right now, bypassing the debounce.
    ///
    /// Color keys are scoped under the current selection exactly as
    /// [`propose`](Self::propose) scopes them, so both commit paths write
    /// the same surface variable.
    pub fn commit_now(&mut self, key: &str, value: &str) {
        let (element, category) = {
            let sel = self.selection.lock().unwrap();
            (sel.element, sel.category)
        };
        if ColorRole::from_role_key(key).is_some() {
            self.engine.commit(key, value, Some(category), Some(element));
        } else {
            self.engine.commit(key, value, None, None);
        }
    }

    /// Tear the preview state down; committed tokens stay committed
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    pub fn select_element(&self, element: ElementType) {
        self.selection.lock().unwrap().element = element;
    }

    pub fn select_category(&self, category: ColorCategory) {
        self.selection.lock().unwrap().category = category;
    }

    pub fn selected_element(&self) -> ElementType {
        self.selection.lock().unwrap().element
    }

    pub fn selected_category(&self) -> ColorCategory {
        self.selection.lock().unwrap().category
    }

    /// The value the UI should display for a key right now
    pub fn displayed_value(&self, key: &str) -> Option<&str> {
        self.engine.displayed_value(key)
    }

    /// Render the style surface the projector has produced so far
    pub fn stylesheet(&self) -> String {
        self.backend.stylesheet()
    }

    /// Committed token state
    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    /// Restore committed state from a persisted snapshot
    pub fn apply_snapshot(&self, snapshot: &ThemeSnapshot) {
        for role in ColorRole::ALL {
            self.store.update(
                snapshot.shape,
                snapshot.color_category,
                role,
                snapshot.role_value(role),
            );
        }
    }
}
