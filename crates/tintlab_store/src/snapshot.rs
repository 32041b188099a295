//! Persisted snapshot shape
//!
//! A flat record: one category/shape discriminator pair and six color
//! strings. This is the wire format shared by the local cache and the
//! remote store, so readers here must stay tolerant of old documents
//! (missing category, legacy `"buttons"` category spelling).

use serde::{Deserialize, Serialize};
use tintlab_core::{ColorCategory, ColorRole, ElementType};
use tintlab_tokens::{default_palette, resolve_color, Palette};

fn default_category() -> ColorCategory {
    ColorCategory::Backgrounds
}

fn default_shape() -> ElementType {
    ElementType::Cards
}

/// One saved token scope: all six role colors as plain color strings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    #[serde(default = "default_category")]
    pub color_category: ColorCategory,
    #[serde(default = "default_shape")]
    pub shape: ElementType,
    pub primary_color: String,
    pub secondary_color: String,
    pub success_color: String,
    pub warning_color: String,
    pub danger_color: String,
    pub info_color: String,
}

impl ThemeSnapshot {
    /// Capture a palette as a snapshot
    pub fn from_palette(palette: &Palette, shape: ElementType, category: ColorCategory) -> Self {
        let css = |role: ColorRole| palette.get(role).to_css_string();
        Self {
            color_category: category,
            shape,
            primary_color: css(ColorRole::Primary),
            secondary_color: css(ColorRole::Secondary),
            success_color: css(ColorRole::Success),
            warning_color: css(ColorRole::Warning),
            danger_color: css(ColorRole::Danger),
            info_color: css(ColorRole::Info),
        }
    }

    /// The raw color string for one role
    pub fn role_value(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary_color,
            ColorRole::Secondary => &self.secondary_color,
            ColorRole::Success => &self.success_color,
            ColorRole::Warning => &self.warning_color,
            ColorRole::Danger => &self.danger_color,
            ColorRole::Info => &self.info_color,
        }
    }

    /// Materialize the snapshot into a palette.
    ///
    /// Unresolvable color strings degrade to the scope's default color, so
    /// the result is always fully populated.
    pub fn to_palette(&self) -> Palette {
        let defaults = default_palette(self.shape, self.color_category);
        let mut palette = defaults.clone();
        for role in ColorRole::ALL {
            palette.set(role, resolve_color(self.role_value(role), defaults.get(role)));
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tintlab_core::Color;

    fn sample() -> ThemeSnapshot {
        ThemeSnapshot {
            color_category: ColorCategory::Backgrounds,
            shape: ElementType::Cards,
            primary_color: "#1e66f5".into(),
            secondary_color: "#8839ef".into(),
            success_color: "#40a02b".into(),
            warning_color: "#df8e1d".into(),
            danger_color: "#d20f39".into(),
            info_color: "#04a5e5".into(),
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("primaryColor").is_some());
        assert!(json.get("colorCategory").is_some());
        assert_eq!(json["shape"], "cards");
    }

    #[test]
    fn legacy_buttons_category_reads_as_borders() {
        let json = r##"{
            "colorCategory": "buttons",
            "shape": "buttons",
            "primaryColor": "#111111",
            "secondaryColor": "#222222",
            "successColor": "#333333",
            "warningColor": "#444444",
            "dangerColor": "#555555",
            "infoColor": "#666666"
        }"##;

        let snapshot: ThemeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.color_category, ColorCategory::Borders);
        assert_eq!(snapshot.shape, ElementType::Buttons);
    }

    #[test]
    fn missing_category_defaults_to_backgrounds() {
        let json = r##"{
            "primaryColor": "#111111",
            "secondaryColor": "#222222",
            "successColor": "#333333",
            "warningColor": "#444444",
            "dangerColor": "#555555",
            "infoColor": "#666666"
        }"##;

        let snapshot: ThemeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.color_category, ColorCategory::Backgrounds);
        assert_eq!(snapshot.shape, ElementType::Cards);
    }

    #[test]
    fn to_palette_is_fully_populated_even_with_garbage() {
        let mut snapshot = sample();
        snapshot.warning_color = "definitely-not-a-color".into();

        let palette = snapshot.to_palette();
        assert_eq!(palette.get(ColorRole::Primary), Color::from_hex(0x1E66F5));
        // Garbage degrades to the scope default, never an absent entry
        let defaults = default_palette(snapshot.shape, snapshot.color_category);
        assert_eq!(palette.get(ColorRole::Warning), defaults.get(ColorRole::Warning));
    }

    #[test]
    fn palette_round_trip() {
        let palette = default_palette(ElementType::Tables, ColorCategory::Backgrounds);
        let snapshot =
            ThemeSnapshot::from_palette(&palette, ElementType::Tables, ColorCategory::Backgrounds);
        assert_eq!(snapshot.to_palette(), palette);
    }
}
