//! Palettes and the default palette factory

use tintlab_core::{Color, ColorCategory, ColorRole, ElementType};

/// A complete set of the six role colors for one token scope.
///
/// Every role is always present; there is no notion of an absent entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
}

impl Palette {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Danger => self.danger,
            ColorRole::Info => self.info,
        }
    }

    /// Overwrite a color by role
    pub fn set(&mut self, role: ColorRole, color: Color) {
        match role {
            ColorRole::Primary => self.primary = color,
            ColorRole::Secondary => self.secondary = color,
            ColorRole::Success => self.success = color,
            ColorRole::Warning => self.warning = color,
            ColorRole::Danger => self.danger = color,
            ColorRole::Info => self.info = color,
        }
    }

    /// Linear interpolation between two palettes
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            primary: Color::lerp(&from.primary, &to.primary, t),
            secondary: Color::lerp(&from.secondary, &to.secondary, t),
            success: Color::lerp(&from.success, &to.success, t),
            warning: Color::lerp(&from.warning, &to.warning, t),
            danger: Color::lerp(&from.danger, &to.danger, t),
            info: Color::lerp(&from.info, &to.info, t),
        }
    }
}

/// Base brand/semantic colors shared by every default palette
fn base_palette() -> Palette {
    Palette {
        primary: Color::from_hex(0x1E66F5),
        secondary: Color::from_hex(0x8839EF),
        success: Color::from_hex(0x40A02B),
        warning: Color::from_hex(0xDF8E1D),
        danger: Color::from_hex(0xD20F39),
        info: Color::from_hex(0x04A5E5),
    }
}

/// Build the default palette for a token scope.
///
/// This is an explicit factory: each call returns a fresh value, so a
/// caller mutating one scope's default can never bleed into another's.
pub fn default_palette(element: ElementType, category: ColorCategory) -> Palette {
    let base = base_palette();
    let _ = element;

    match category {
        ColorCategory::Backgrounds => base,
        // Text needs more contrast against those same backgrounds
        ColorCategory::Text => darken(&base, 0.35),
        ColorCategory::Borders => darken(&base, 0.15),
    }
}

fn darken(p: &Palette, amount: f32) -> Palette {
    let toward = |c: &Color| Color::lerp(c, &Color::BLACK, amount);
    Palette {
        primary: toward(&p.primary),
        secondary: toward(&p.secondary),
        success: toward(&p.success),
        warning: toward(&p.warning),
        danger: toward(&p.danger),
        info: toward(&p.info),
    }
}

/// Resolve a free-form value string to a concrete color, if possible.
///
/// Accepts any syntax [`Color::parse`] understands, plus `theme:<role>`
/// references against the base palette.
pub fn try_resolve_color(value: &str) -> Option<Color> {
    if let Ok(color) = Color::parse(value) {
        return Some(color);
    }

    if let Some(role_name) = value.strip_prefix("theme:") {
        let base = base_palette();
        if let Some(role) = ColorRole::ALL.iter().find(|r| r.as_str() == role_name) {
            return Some(base.get(*role));
        }
    }

    None
}

/// Resolve a free-form value string to a concrete color.
///
/// Like [`try_resolve_color`], but anything unresolvable degrades to the
/// supplied fallback; resolution never produces an absent color.
pub fn resolve_color(value: &str, fallback: Color) -> Color {
    match try_resolve_color(value) {
        Some(color) => color,
        None => {
            tracing::trace!(value, "unresolvable color value, using fallback");
            fallback
        }
    }
}
