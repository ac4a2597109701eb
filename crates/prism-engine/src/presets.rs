//! Built-in gradient presets.
//!
//! The catalog is plain `'static` data. Nothing here is mutable; the engine
//! copies a preset's colors when it is applied.

use crate::engine::GradientEngine;
use crate::paint::Color;

/// A named, curated color sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub colors: &'static [Color],
}

impl Preset {
    pub const fn new(name: &'static str, colors: &'static [Color]) -> Self {
        Self { name, colors }
    }

    /// CSS for a gallery swatch.
    ///
    /// Rendered through a throwaway engine so previews never touch the
    /// session's live engine.
    pub fn preview_css(&self) -> String {
        let mut engine = GradientEngine::from_colors(Vec::new());
        engine.apply_preset(self);
        engine.render_css()
    }
}

const fn hex(rgb: u32) -> Color {
    Color::from_u32(rgb)
}

static CATALOG: [Preset; 10] = [
    Preset { name: "Sunset Orange", colors: &[hex(0xFF6B6B), hex(0xFFA07A), hex(0xFFD700)] },
    Preset { name: "Ocean Blue", colors: &[hex(0x667EEA), hex(0x764BA2), hex(0xF093FB)] },
    Preset { name: "Forest Green", colors: &[hex(0x56AB2F), hex(0xA8E063)] },
    Preset { name: "Purple Dream", colors: &[hex(0xC471F5), hex(0xFA71CD)] },
    Preset { name: "Pink Bubble", colors: &[hex(0xFBC2EB), hex(0xA6C1EE)] },
    Preset { name: "Flame Red", colors: &[hex(0xF83600), hex(0xF9D423)] },
    Preset { name: "Mint Green", colors: &[hex(0x00F260), hex(0x0575E6)] },
    Preset { name: "Night Sky", colors: &[hex(0x0F2027), hex(0x203A43), hex(0x2C5364)] },
    Preset {
        name: "Rainbow",
        colors: &[
            hex(0xFF0080),
            hex(0xFF8C00),
            hex(0xFFD700),
            hex(0x00FF00),
            hex(0x0000FF),
            hex(0x8B00FF),
        ],
    },
    Preset { name: "Sakura Pink", colors: &[hex(0xFFECD2), hex(0xFCB69F)] },
];

/// The built-in catalog, in gallery order.
pub fn default_catalog() -> &'static [Preset] {
    &CATALOG
}

/// Looks up a catalog preset by name, ignoring ASCII case and surrounding
/// whitespace.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
