//! Prism engine crate.
//!
//! Generates color sequences (uniform random or hue-harmonious), lets callers
//! edit them, and emits them as CSS gradient expressions or SVG documents.
//! The engine performs no I/O; hosts layer storage, clipboard and
//! notifications on top.
//!
//! ```rust
//! use prism_engine::{GradientEngine, Mode, find_preset};
//!
//! let mut engine = GradientEngine::new();
//! engine.apply_preset(find_preset("Forest Green").unwrap());
//! engine.set_mode(Mode::Radial);
//! assert_eq!(
//!     engine.render_css(),
//!     "radial-gradient(circle, #56AB2F 0%, #A8E063 100%)",
//! );
//! ```

pub mod engine;
pub mod logging;
pub mod paint;
pub mod presets;
pub mod render;

pub use engine::{EngineConfig, GradientEngine};
pub use paint::{Color, Mode, ParseColorError, ParseModeError};
pub use presets::{default_catalog, find_preset, Preset};
pub use render::{Format, RenderError};
