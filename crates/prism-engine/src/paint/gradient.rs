use std::fmt;
use std::str::FromStr;

use super::Color;

/// Gradient shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Left-to-right sweep.
    #[default]
    Linear,
    /// Centered circular sweep.
    Radial,
    /// Angular sweep around the center.
    Conic,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Linear, Mode::Radial, Mode::Conic];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Linear => "linear",
            Mode::Radial => "radial",
            Mode::Conic => "conic",
        }
    }

    /// Lenient parse for values coming from stored or host-provided data.
    ///
    /// Unknown names fall back to [`Mode::Linear`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown gradient mode {name:?}, using linear");
            Mode::default()
        })
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by the strict [`Mode`] parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    pub input: String,
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gradient mode {:?}: expected linear, radial or conic", self.input)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError { input: s.to_string() })
    }
}

/// A single gradient stop.
///
/// `offset` is a percentage in `[0, 100]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Spreads `colors` evenly from 0% to 100%.
///
/// Stop `i` of `n` sits at `i / (n - 1) * 100`. Degenerate inputs:
/// - one color becomes a solid fill (same color at 0% and 100%)
/// - no colors yields no stops
pub fn even_stops(colors: &[Color]) -> Vec<ColorStop> {
    match colors {
        [] => Vec::new(),
        [only] => vec![ColorStop::new(0.0, *only), ColorStop::new(100.0, *only)],
        _ => {
            let last = (colors.len() - 1) as f64;
            colors
                .iter()
                .enumerate()
                .map(|(i, &color)| ColorStop::new(i as f64 / last * 100.0, color))
                .collect()
        }
    }
}
