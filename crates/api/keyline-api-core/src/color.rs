//! RGBA parsing and blending.
//!
//! Colors travel through the core as strings; this module turns them into
//! channel values (0-255 RGB, 0-1 alpha) for blending and back. Blending is
//! per-channel linear interpolation with an *already eased* t; easing happens
//! upstream in the dispatcher.
//!
//! Channel rounding uses `f64::round` (half away from zero), so blending
//! #000000 into #ffffff at t = 0.5 lands on #808080.

use std::fmt;

/// Parsed RGBA color. Channels are 0-255, alpha is 0-1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color string. Accepts #rgb, #rgba, #rrggbb, #rrggbbaa,
    /// rgb(r, g, b) and rgba(r, g, b, a). Returns None for anything else;
    /// callers fall back to discrete behavior rather than erroring.
    pub fn parse(s: &str) -> Option<Rgba> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            return Self::parse_functional(body.strip_suffix(')')?);
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Rgba> {
        // Byte-indexed slicing below; reject non-ASCII outright.
        if !hex.is_ascii() {
            return None;
        }
        let nibble = |i: usize| -> Option<u8> {
            let d = u8::from_str_radix(&hex[i..i + 1], 16).ok()?;
            Some(d << 4 | d)
        };
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Rgba::new(nibble(0)?, nibble(1)?, nibble(2)?, 1.0)),
            4 => Some(Rgba::new(
                nibble(0)?,
                nibble(1)?,
                nibble(2)?,
                nibble(3)? as f64 / 255.0,
            )),
            6 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 1.0)),
            8 => Some(Rgba::new(
                byte(0)?,
                byte(2)?,
                byte(4)?,
                byte(6)? as f64 / 255.0,
            )),
            _ => None,
        }
    }

    fn parse_functional(body: &str) -> Option<Rgba> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let channel = |s: &str| -> Option<u8> {
            let v: f64 = s.parse().ok()?;
            Some(v.clamp(0.0, 255.0).round() as u8)
        };
        let a = match parts.get(3) {
            Some(s) => s.parse::<f64>().ok()?.clamp(0.0, 1.0),
            None => 1.0,
        };
        Some(Rgba::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            a,
        ))
    }

    /// Blend toward `other` with an eased t. Each channel and alpha is
    /// interpolated independently.
    pub fn blend(&self, other: &Rgba, t: f64) -> Rgba {
        let lerp = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.clamp(0.0, 255.0).round() as u8
        };
        Rgba {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: (self.a + (other.a - self.a) * t).clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for Rgba {
    /// Lowercase hex; the alpha byte is appended only when it is not 0xff.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alpha = (self.a * 255.0).round() as u8;
        if alpha == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Rgba::parse("#fff"), Some(Rgba::new(255, 255, 255, 1.0)));
        assert_eq!(Rgba::parse("#102030"), Some(Rgba::new(16, 32, 48, 1.0)));
        let with_alpha = Rgba::parse("#10203080").unwrap();
        assert_eq!((with_alpha.r, with_alpha.g, with_alpha.b), (16, 32, 48));
        assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parse_functional_forms() {
        assert_eq!(
            Rgba::parse("rgb(255, 0, 16)"),
            Some(Rgba::new(255, 0, 16, 1.0))
        );
        assert_eq!(
            Rgba::parse("rgba(1, 2, 3, 0.5)"),
            Some(Rgba::new(1, 2, 3, 0.5))
        );
    }

    #[test]
    fn parse_rejects_junk() {
        assert_eq!(Rgba::parse("Hello"), None);
        assert_eq!(Rgba::parse("#12345"), None);
        assert_eq!(Rgba::parse("rgb(1,2)"), None);
        assert_eq!(Rgba::parse("#ää"), None);
    }

    #[test]
    fn midpoint_rounding_rule() {
        let black = Rgba::parse("#000000").unwrap();
        let white = Rgba::parse("#ffffff").unwrap();
        assert_eq!(black.blend(&white, 0.5).to_string(), "#808080");
    }

    #[test]
    fn alpha_blends_and_formats() {
        let a = Rgba::new(0, 0, 0, 0.0);
        let b = Rgba::new(0, 0, 0, 1.0);
        let mid = a.blend(&b, 0.5);
        assert!((mid.a - 0.5).abs() < 1e-9);
        assert_eq!(mid.to_string(), "#00000080");
    }
}
