//! Preview event record
//!
//! One `PreviewEvent` is produced per input tick (every pointer move on a
//! color wheel, every slider notch). Events for the same key supersede each
//! other; only the latest one within a frame window is projected and only
//! the latest one within a debounce window is committed.

use crate::{ColorCategory, ElementType};
use std::time::Duration;

/// A proposed token value, not yet durable
#[derive(Clone, Debug)]
pub struct PreviewEvent {
    /// Wire key: a color role key (`"primaryColor"`) or a setting name
    /// (`"cornerRadius"`, `"hoverEffect"`). Free-form; unknown keys are
    /// accepted and resolve to nothing.
    pub key: String,
    /// The proposed value, as entered by the control
    pub value: String,
    /// Optional classification tags qualifying the key
    pub category: Option<ColorCategory>,
    pub element: Option<ElementType>,
    /// Time of arrival, relative to the engine's time source
    pub at: Duration,
}

impl PreviewEvent {
    pub fn new(key: impl Into<String>, value: impl Into<String>, at: Duration) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category: None,
            element: None,
            at,
        }
    }

    pub fn with_scope(mut self, category: ColorCategory, element: ElementType) -> Self {
        self.category = Some(category);
        self.element = Some(element);
        self
    }
}
