//! Color primitive
//!
//! Components are stored as `f32` in the 0.0–1.0 range so palettes can be
//! interpolated without quantization artifacts.

use thiserror::Error;

/// Errors produced when parsing a CSS-style color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("unsupported color syntax: {0}")]
    UnsupportedSyntax(String),

    #[error("invalid hex digit in color: {0}")]
    InvalidHex(String),

    #[error("invalid component in color: {0}")]
    InvalidComponent(String),
}

/// An RGBA color with components in 0.0–1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a packed hex value (0xRRGGBB), fully opaque
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return the same color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Parse a CSS-style color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with 0–255 channel values and 0.0–1.0 alpha.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex, s);
        }

        if let Some(body) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_components(body, s);
        }

        Err(ColorParseError::UnsupportedSyntax(s.to_string()))
    }

    fn parse_hex(hex: &str, original: &str) -> Result<Self, ColorParseError> {
        let digits = |chunk: &str| {
            u8::from_str_radix(chunk, 16)
                .map_err(|_| ColorParseError::InvalidHex(original.to_string()))
        };

        match hex.len() {
            // #rgb expands each nibble: f -> ff
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let d = c
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::InvalidHex(original.to_string()))?
                        as u8;
                    out[i] = d << 4 | d;
                }
                Ok(Self::from_bytes(out[0], out[1], out[2], 255))
            }
            6 => Ok(Self::from_bytes(
                digits(&hex[0..2])?,
                digits(&hex[2..4])?,
                digits(&hex[4..6])?,
                255,
            )),
            8 => Ok(Self::from_bytes(
                digits(&hex[0..2])?,
                digits(&hex[2..4])?,
                digits(&hex[4..6])?,
                digits(&hex[6..8])?,
            )),
            _ => Err(ColorParseError::InvalidHex(original.to_string())),
        }
    }

    fn parse_components(body: &str, original: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::InvalidComponent(original.to_string()));
        }

        let channel = |s: &str| -> Result<f32, ColorParseError> {
            s.parse::<f32>()
                .map(|v| (v / 255.0).clamp(0.0, 1.0))
                .map_err(|_| ColorParseError::InvalidComponent(original.to_string()))
        };

        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if parts.len() == 4 {
            parts[3]
                .parse::<f32>()
                .map(|v| v.clamp(0.0, 1.0))
                .map_err(|_| ColorParseError::InvalidComponent(original.to_string()))?
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }

    fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Format as a CSS color value.
    ///
    /// Opaque colors render as `#rrggbb`; translucent colors render as
    /// `rgba(r,g,b,a)` so the alpha survives the round trip.
    pub fn to_css_string(&self) -> String {
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8,
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0).round() as u8,
                (self.g * 255.0).round() as u8,
                (self.b * 255.0).round() as u8
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Color::parse("#ff0000"), Ok(Color::from_hex(0xFF0000)));
        assert_eq!(Color::parse("#f00"), Ok(Color::from_hex(0xFF0000)));

        let translucent = Color::parse("#ff000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_rgb_forms() {
        assert_eq!(Color::parse("rgb(255, 0, 0)"), Ok(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0.5)"),
            Ok(Color::rgba(0.0, 0.0, 1.0, 0.5))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse("blue"),
            Err(ColorParseError::UnsupportedSyntax(_))
        ));
        assert!(matches!(
            Color::parse("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn css_string_round_trip() {
        assert_eq!(Color::from_hex(0x1E66F5).to_css_string(), "#1e66f5");

        let translucent = Color::from_hex(0xD20F39).with_alpha(0.5);
        assert!(translucent.to_css_string().starts_with("rgba("));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::from_hex(0x000000);
        let b = Color::from_hex(0xFFFFFF);
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);

        let mid = Color::lerp(&a, &b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }
}
