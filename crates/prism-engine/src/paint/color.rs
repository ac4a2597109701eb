use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::Hsl;

/// Opaque 24-bit sRGB color.
///
/// Canonical text form is `#RRGGBB`. Parsing is case-insensitive and accepts
/// the `#RGB` shorthand; display is always uppercase.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Uniform sample over the full RGB cube.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(rng.random(), rng.random(), rng.random())
    }

    /// Converts an HSL triple, rounding each channel to the nearest byte.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl.to_rgb_f64();
        Self::from_rgb(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb_f64(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

#[inline]
fn channel_to_u8(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Error returned when text is not a `#RRGGBB` / `#RGB` hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?}: expected #rrggbb or #rgb", self.input)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError { input: s.to_string() };

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let packed = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Self::from_u32(packed)),
            3 => {
                // #abc expands to #aabbcc
                let nibble = |shift: u32| ((packed >> shift) & 0xF) as u8 * 0x11;
                Ok(Self::from_rgb(nibble(8), nibble(4), nibble(0)))
            }
            _ => Err(err()),
        }
    }
}
