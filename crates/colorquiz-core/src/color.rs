//! 24-bit RGB colors and their HSL / HSV projections.
//!
//! The canonical text form is `#RRGGBB` with upper-case digits; every color
//! shown to the player or stored in an answer record uses it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hex digits in canonical (upper-case) order.
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("Invalid hex digit '{0}'")]
    InvalidDigit(char),
    #[error("Unknown color mode '{0}' (expected hex, rgb, hsv or hsl)")]
    UnknownMode(String),
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from six hex digit values (each `0..16`), most significant first.
    ///
    /// Values above 15 are masked to their low nibble.
    pub const fn from_nibbles(n: [u8; 6]) -> Self {
        Self {
            r: ((n[0] & 0xF) << 4) | (n[1] & 0xF),
            g: ((n[2] & 0xF) << 4) | (n[3] & 0xF),
            b: ((n[4] & 0xF) << 4) | (n[5] & 0xF),
        }
    }

    /// Channels as an `[r, g, b]` array.
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#RRGGBB` form, upper-case.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Project into HSL space.
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        Hsl {
            h: hue(r, g, b, max, d),
            s,
            l,
        }
    }

    /// Project into HSV space.
    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if d == 0.0 { 0.0 } else { hue(r, g, b, max, d) };

        Hsv { h, s, v: max }
    }

    fn unit_channels(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Hue in degrees (0-360) for unit RGB channels with a non-zero chroma `d`.
fn hue(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    sector * 60.0
}

/// Convert a unit channel (0.0-1.0) to a byte, rounding to nearest.
fn unit_to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Shared chroma/hue-sector conversion used by both HSL and HSV.
fn from_chroma(h: f64, c: f64, m: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color::new(
        unit_to_channel(r + m),
        unit_to_channel(g + m),
        unit_to_channel(b + m),
    )
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());

        let mut nibbles = Vec::with_capacity(6);
        for ch in digits.chars() {
            let value = ch.to_digit(16).ok_or(ColorError::InvalidDigit(ch))?;
            nibbles.push(value as u8);
        }

        match nibbles.as_slice() {
            &[r, g, b] => Ok(Color::from_nibbles([r, r, g, g, b, b])),
            &[a, b, c, d, e, f] => Ok(Color::from_nibbles([a, b, c, d, e, f])),
            other => Err(ColorError::InvalidLength(other.len())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Hue (degrees, 0-360), saturation and lightness (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert back to RGB, rounding each channel.
    pub fn to_color(self) -> Color {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        from_chroma(self.h, c, l - c / 2.0)
    }
}

/// Hue (degrees, 0-360), saturation and value (0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert back to RGB, rounding each channel.
    pub fn to_color(self) -> Color {
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let c = v * s;
        from_chroma(self.h, c, v - c)
    }
}

/// How colors are written out to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Hex,
    Rgb,
    Hsv,
    Hsl,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [
        ColorMode::Hex,
        ColorMode::Rgb,
        ColorMode::Hsv,
        ColorMode::Hsl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Hex => "hex",
            ColorMode::Rgb => "rgb",
            ColorMode::Hsv => "hsv",
            ColorMode::Hsl => "hsl",
        }
    }

    /// Cycle to the next mode, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ColorMode::Hex => ColorMode::Rgb,
            ColorMode::Rgb => ColorMode::Hsv,
            ColorMode::Hsv => ColorMode::Hsl,
            ColorMode::Hsl => ColorMode::Hex,
        }
    }

    /// Write `color` in this mode. Hue and percentages are truncated.
    pub fn format(&self, color: Color) -> String {
        match self {
            ColorMode::Hex => color.to_hex(),
            ColorMode::Rgb => format!("rgb({}, {}, {})", color.r, color.g, color.b),
            ColorMode::Hsv => {
                let Hsv { h, s, v } = color.to_hsv();
                format!(
                    "hsv({}, {}%, {}%)",
                    truncate(h),
                    truncate(s * 100.0),
                    truncate(v * 100.0)
                )
            }
            ColorMode::Hsl => {
                let Hsl { h, s, l } = color.to_hsl();
                format!(
                    "hsl({}, {}%, {}%)",
                    truncate(h),
                    truncate(s * 100.0),
                    truncate(l * 100.0)
                )
            }
        }
    }
}

fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| ColorError::UnknownMode(s.trim().to_string()))
    }
}
