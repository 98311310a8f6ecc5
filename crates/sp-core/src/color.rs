//! RGBA fill colors.
//!
//! Colors travel through configuration as hex strings (`#RGB`, `#RGBA`,
//! `#RRGGBB`, `#RRGGBBAA`) and are handed to renderers either as 8-bit
//! channels or as a CSS color string.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    /// CSS `green`.
    pub const GREEN: Self = Self::rgba8(0, 128, 0, 255);
    /// CSS `blue`.
    pub const BLUE: Self = Self::rgba8(0, 0, 255, 255);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a hex color string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let nibbles: Vec<u8> = digits.iter().map(|&c| hex_val(c)).collect::<Option<_>>()?;

        match nibbles.as_slice() {
            &[r, g, b] => Some(Self::rgba8(r * 17, g * 17, b * 17, 255)),
            &[r, g, b, a] => Some(Self::rgba8(r * 17, g * 17, b * 17, a * 17)),
            &[r1, r2, g1, g2, b1, b2] => {
                Some(Self::rgba8(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, 255))
            }
            &[r1, r2, g1, g2, b1, b2, a1, a2] => Some(Self::rgba8(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => None,
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Emit as the shortest hex form: `#RRGGBB` when opaque, else `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// CSS `rgba(...)` string for Canvas2D fill styles.
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
