//! Token addressing scheme
//!
//! Tokens are addressed by `(ElementType, ColorCategory, ColorRole)`.
//! Input controls and persisted snapshots carry the role as a wire key such
//! as `"primaryColor"`; the category and element travel as separate
//! parameters rather than being embedded in the key.

use serde::{Deserialize, Serialize};

/// The component scope a token applies to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Buttons,
    Cards,
    Modals,
    Inputs,
    Layout,
    Tables,
    Headers,
}

impl ElementType {
    pub const ALL: [ElementType; 7] = [
        ElementType::Buttons,
        ElementType::Cards,
        ElementType::Modals,
        ElementType::Inputs,
        ElementType::Layout,
        ElementType::Tables,
        ElementType::Headers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Buttons => "buttons",
            ElementType::Cards => "cards",
            ElementType::Modals => "modals",
            ElementType::Inputs => "inputs",
            ElementType::Layout => "layout",
            ElementType::Tables => "tables",
            ElementType::Headers => "headers",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.as_str() == s)
    }
}

/// Which facet of an element a color applies to.
///
/// Old snapshots used `"buttons"` where current writers emit `"borders"`;
/// the serde alias keeps those documents readable.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Backgrounds,
    Text,
    #[serde(alias = "buttons")]
    Borders,
}

impl ColorCategory {
    pub const ALL: [ColorCategory; 3] = [
        ColorCategory::Backgrounds,
        ColorCategory::Text,
        ColorCategory::Borders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Backgrounds => "backgrounds",
            ColorCategory::Text => "text",
            ColorCategory::Borders => "borders",
        }
    }

    /// Parse a category name, remapping the legacy `"buttons"` spelling
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "backgrounds" => Some(ColorCategory::Backgrounds),
            "text" => Some(ColorCategory::Text),
            "borders" | "buttons" => Some(ColorCategory::Borders),
            _ => None,
        }
    }
}

/// Semantic color role within a palette
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Danger,
        ColorRole::Info,
    ];

    /// The wire key used by input controls and snapshots
    pub fn role_key(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primaryColor",
            ColorRole::Secondary => "secondaryColor",
            ColorRole::Success => "successColor",
            ColorRole::Warning => "warningColor",
            ColorRole::Danger => "dangerColor",
            ColorRole::Info => "infoColor",
        }
    }

    /// Resolve a wire key back to a role. Unknown keys are not an error,
    /// they simply address nothing.
    pub fn from_role_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.role_key() == key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Danger => "danger",
            ColorRole::Info => "info",
        }
    }
}
