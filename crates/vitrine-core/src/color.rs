//! Color parsing and blending for the preloader dots.
//!
//! Parsing is deliberately forgiving: the colors are purely decorative, so a
//! malformed string degrades to opaque white instead of failing.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Opaque white, the fallback for unparseable input.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse a `#rrggbb` hex string or an `rgb(...)`/`rgba(...)`-style
    /// string (first three embedded integer runs). Anything else yields
    /// [`Rgb::WHITE`].
    pub fn parse(input: &str) -> Rgb {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex).unwrap_or(Rgb::WHITE);
        }
        Self::parse_integer_runs(input).unwrap_or(Rgb::WHITE)
    }

    fn parse_hex(hex: &str) -> Option<Rgb> {
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Rgb { r, g, b })
    }

    // Takes the first three runs of ASCII digits, so "rgba(12, 34, 56, 0.5)"
    // reads as (12, 34, 56). Values above 255 saturate.
    fn parse_integer_runs(input: &str) -> Option<Rgb> {
        let mut runs = input
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .map(|run| run.parse::<u32>().unwrap_or(u32::MAX).min(255) as u8);
        Some(Rgb {
            r: runs.next()?,
            g: runs.next()?,
            b: runs.next()?,
        })
    }

    /// Per-channel linear blend towards `other`, rounded to the nearest
    /// integer. `t = 0` returns `self` exactly, `t = 1` returns `other`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Attach an explicit alpha component.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha,
        }
    }
}

/// An [`Rgb`] color with an explicit alpha component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity in [0, 1]
    pub alpha: f32,
}

/// The primary/accent pair the preloader blends between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Base dot color
    pub primary: Rgb,
    /// Highlight color blended in at pulse peaks
    pub accent: Rgb,
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair {
            primary: Rgb::parse("#ffffff"),
            accent: Rgb::parse("#dddddd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex() {
        assert_eq!(Rgb::parse("#ffffff"), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::parse("#000000"), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::parse("#dddddd"), Rgb::new(221, 221, 221));
        assert_eq!(Rgb::parse("#1a2b3c"), Rgb::new(26, 43, 60));
    }

    #[test]
    fn parses_rgb_function_strings() {
        assert_eq!(Rgb::parse("rgb(12, 34, 56)"), Rgb::new(12, 34, 56));
        // Alpha digits are ignored, only the first three runs count
        assert_eq!(Rgb::parse("rgba(1, 2, 3, 0.5)"), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::parse("rgb(999, 0, 0)"), Rgb::new(255, 0, 0));
    }

    #[test]
    fn malformed_input_falls_back_to_white() {
        assert_eq!(Rgb::parse(""), Rgb::WHITE);
        assert_eq!(Rgb::parse("#fff"), Rgb::WHITE);
        assert_eq!(Rgb::parse("#zzzzzz"), Rgb::WHITE);
        assert_eq!(Rgb::parse("cornflowerblue"), Rgb::WHITE);
        assert_eq!(Rgb::parse("rgb(1, 2)"), Rgb::WHITE);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_rounds_to_nearest_channel() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::WHITE;
        assert_eq!(black.lerp(white, 0.5), Rgb::new(128, 128, 128));
    }
}
