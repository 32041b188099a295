//! Committed token state with direct observer registration

use crate::palette::{default_palette, resolve_color, Palette};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, RwLock};
use tintlab_core::{Color, ColorCategory, ColorRole, ElementType};

new_key_type! {
    /// Handle returned by [`TokenStore::subscribe`]
    pub struct SubscriberId;
}

/// A committed token change, delivered to subscribers
#[derive(Clone, Debug)]
pub struct TokenChange {
    pub element: ElementType,
    pub category: ColorCategory,
    pub role: ColorRole,
    pub color: Color,
}

type Subscriber = Arc<dyn Fn(&TokenChange) + Send + Sync>;

/// Holds the latest committed color for every token scope.
///
/// Writes are serialized through the host's single event loop; the locks
/// here only guard against reads racing a write, never write/write
/// contention.
pub struct TokenStore {
    committed: RwLock<FxHashMap<(ElementType, ColorCategory), Palette>>,
    subscribers: RwLock<SlotMap<SubscriberId, Subscriber>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self {
            committed: RwLock::new(FxHashMap::default()),
            subscribers: RwLock::new(SlotMap::with_key()),
        }
    }

    /// Get the full palette for a scope.
    ///
    /// Never returns partial data: scopes without a committed write resolve
    /// to a fresh default palette.
    pub fn palette(&self, element: ElementType, category: ColorCategory) -> Palette {
        self.committed
            .read()
            .unwrap()
            .get(&(element, category))
            .cloned()
            .unwrap_or_else(|| default_palette(element, category))
    }

    /// Get a single committed color
    pub fn color(&self, element: ElementType, category: ColorCategory, role: ColorRole) -> Color {
        self.palette(element, category).get(role)
    }

    /// Overwrite one token. Later writes always win; there is no merge.
    ///
    /// The value is resolved through [`resolve_color`], with the scope's
    /// current color as fallback, so an unparseable value degrades to "no
    /// visible change" rather than an absent entry.
    pub fn update(
        &self,
        element: ElementType,
        category: ColorCategory,
        role: ColorRole,
        value: &str,
    ) {
        let fallback = self.color(element, category, role);
        let color = resolve_color(value, fallback);

        {
            let mut committed = self.committed.write().unwrap();
            committed
                .entry((element, category))
                .or_insert_with(|| default_palette(element, category))
                .set(role, color);
        }

        tracing::debug!(
            element = element.as_str(),
            category = category.as_str(),
            role = role.as_str(),
            value,
            "token committed"
        );

        self.notify(&TokenChange {
            element,
            category,
            role,
            color,
        });
    }

    /// Palette projection for the currently displayed element (backgrounds scope)
    pub fn element_palette(&self, element: ElementType) -> Palette {
        self.palette(element, ColorCategory::Backgrounds)
    }

    /// Palette projection for one category of a fixed element
    pub fn category_palette(&self, element: ElementType, category: ColorCategory) -> Palette {
        self.palette(element, category)
    }

    // ========== Subscriptions ==========

    /// Register a change observer. The callback fires after every committed
    /// write, on the committing thread.
    pub fn subscribe(&self, subscriber: Subscriber) -> SubscriberId {
        self.subscribers.write().unwrap().insert(subscriber)
    }

    /// Drop an observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().unwrap().remove(id);
    }

    fn notify(&self, change: &TokenChange) {
        // Clone handles out so a subscriber can (un)subscribe reentrantly
        let subscribers: Vec<Subscriber> =
            self.subscribers.read().unwrap().values().cloned().collect();
        for subscriber in subscribers {
            subscriber(change);
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn unwritten_scope_returns_default_palette() {
        let store = TokenStore::new();
        let palette = store.palette(ElementType::Modals, ColorCategory::Text);
        assert_eq!(
            palette,
            default_palette(ElementType::Modals, ColorCategory::Text)
        );
    }

    #[test]
    fn update_overwrites_and_later_writes_win() {
        let store = TokenStore::new();
        store.update(
            ElementType::Cards,
            ColorCategory::Backgrounds,
            ColorRole::Primary,
            "#ff0000",
        );
        store.update(
            ElementType::Cards,
            ColorCategory::Backgrounds,
            ColorRole::Primary,
            "#00ff00",
        );

        assert_eq!(
            store.color(
                ElementType::Cards,
                ColorCategory::Backgrounds,
                ColorRole::Primary
            ),
            Color::from_hex(0x00FF00)
        );
    }

    #[test]
    fn update_to_one_scope_leaves_others_at_defaults() {
        let store = TokenStore::new();
        store.update(
            ElementType::Buttons,
            ColorCategory::Backgrounds,
            ColorRole::Primary,
            "#111111",
        );

        let untouched = store.palette(ElementType::Cards, ColorCategory::Backgrounds);
        assert_eq!(
            untouched,
            default_palette(ElementType::Cards, ColorCategory::Backgrounds)
        );
    }

    #[test]
    fn unparseable_value_keeps_current_color() {
        let store = TokenStore::new();
        let before = store.color(
            ElementType::Inputs,
            ColorCategory::Borders,
            ColorRole::Danger,
        );
        store.update(
            ElementType::Inputs,
            ColorCategory::Borders,
            ColorRole::Danger,
            "certainly-not-a-color",
        );
        let after = store.color(
            ElementType::Inputs,
            ColorCategory::Borders,
            ColorRole::Danger,
        );
        assert_eq!(before, after);
    }

    #[test]
    fn subscribers_observe_commits_until_unsubscribed() {
        let store = TokenStore::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = Arc::clone(&seen);
        let id = store.subscribe(Arc::new(move |change: &TokenChange| {
            assert_eq!(change.role, ColorRole::Info);
            seen_clone.fetch_add(1, Ordering::SeqCst);
        }));

        store.update(
            ElementType::Tables,
            ColorCategory::Text,
            ColorRole::Info,
            "#04a5e5",
        );
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        store.unsubscribe(id);
        store.update(
            ElementType::Tables,
            ColorCategory::Text,
            ColorRole::Info,
            "#000000",
        );
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
