//! Color model shared between the engine and renderers.
//!
//! Scope:
//! - 24-bit hex colors and HSL conversion
//! - gradient modes and stop placement

pub mod color;
pub mod gradient;
pub mod hsl;

pub use color::{Color, ParseColorError};
pub use gradient::{even_stops, ColorStop, Mode, ParseModeError};
pub use hsl::Hsl;
