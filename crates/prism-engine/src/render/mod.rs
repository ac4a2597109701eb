//! Gradient code emission.
//!
//! Renderers are pure functions of `(mode, colors)`; they never touch engine
//! state. Every renderer matches all [`Mode`] variants explicitly.
//!
//! Convention:
//! - stops come from [`even_stops`](crate::paint::even_stops)
//! - colors print in canonical `#RRGGBB` form

mod css;
mod svg;

use std::fmt;

use crate::paint::Mode;

pub use css::css_gradient;
pub use svg::{svg_gradient, timestamp_id};

/// Output format produced by a renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Format {
    Css,
    Svg,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Css => "css",
            Format::Svg => "svg",
        })
    }
}

/// A renderer could not express the requested gradient.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// The format has no construct for this gradient mode.
    Unsupported { mode: Mode, format: Format },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Unsupported { mode, format } => {
                write!(f, "{mode} gradients cannot be rendered as {format}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
