//! The gradient engine: one editable color sequence plus a mode.

use rand::Rng;

use crate::paint::{Color, Hsl, Mode};
use crate::presets::Preset;
use crate::render::{self, RenderError};

/// Engine construction parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of random colors the engine starts with.
    pub initial_count: usize,
    pub initial_mode: Mode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_count: 3,
            initial_mode: Mode::Linear,
        }
    }
}

/// Saturation range for harmonious palettes.
const HARMONY_SATURATION: std::ops::RangeInclusive<f64> = 0.6..=0.9;
/// Lightness range for harmonious palettes.
const HARMONY_LIGHTNESS: std::ops::RangeInclusive<f64> = 0.5..=0.7;

/// Owns the color sequence being edited and renders it as CSS or SVG.
///
/// All operations are synchronous and infallible except SVG output for
/// modes SVG cannot express.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientEngine {
    colors: Vec<Color>,
    mode: Mode,
}

impl Default for GradientEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientEngine {
    /// Engine with three random colors in linear mode.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            colors: Vec::new(),
            mode: config.initial_mode,
        };
        engine.generate_random(config.initial_count);
        engine
    }

    /// Engine over a given sequence, linear mode.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors, mode: Mode::default() }
    }

    // ── generation ────────────────────────────────────────────────────────

    /// Replaces the sequence with `count` uniform random colors.
    pub fn generate_random(&mut self, count: usize) {
        self.generate_random_with(&mut rand::rng(), count);
    }

    pub fn generate_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.colors = (0..count).map(|_| Color::random_with(rng)).collect();
        log::debug!("generated {count} random colors");
    }

    /// Replaces the sequence with `count` hues evenly spaced around the
    /// wheel from a random base, at one shared saturation and lightness.
    pub fn generate_harmonious(&mut self, count: usize) {
        self.generate_harmonious_with(&mut rand::rng(), count);
    }

    pub fn generate_harmonious_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        let base_hue = rng.random_range(0.0..360.0);
        let s = rng.random_range(HARMONY_SATURATION);
        let l = rng.random_range(HARMONY_LIGHTNESS);

        self.colors = (0..count)
            .map(|i| {
                let hue = (base_hue + i as f64 * 360.0 / count as f64) % 360.0;
                Color::from_hsl(Hsl::new(hue, s, l))
            })
            .collect();

        log::debug!(
            "generated {count} harmonious colors (base hue {base_hue:.1}, s {s:.2}, l {l:.2})"
        );
    }

    // ── editing ───────────────────────────────────────────────────────────

    /// Replaces the color at `index`.
    ///
    /// Out-of-range indices are ignored; returns whether anything changed.
    pub fn update_color(&mut self, index: usize, color: Color) -> bool {
        match self.colors.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => {
                log::trace!(
                    "ignoring update at index {index}, sequence has {} colors",
                    self.colors.len()
                );
                false
            }
        }
    }

    #[inline]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replaces the sequence with a copy of the preset's colors.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.colors = preset.colors.to_vec();
        log::debug!("applied preset {:?}", preset.name);
    }

    /// Owned copy of the current sequence.
    pub fn colors(&self) -> Vec<Color> {
        self.colors.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    // ── output ────────────────────────────────────────────────────────────

    pub fn render_css(&self) -> String {
        render::css_gradient(self.mode, &self.colors)
    }

    /// SVG document with a fresh timestamp-derived gradient id.
    pub fn render_svg(&self) -> Result<String, RenderError> {
        self.render_svg_with_id(&render::timestamp_id())
    }

    pub fn render_svg_with_id(&self, id: &str) -> Result<String, RenderError> {
        render::svg_gradient(self.mode, &self.colors, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::default_catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn engine(hex: &[&str]) -> GradientEngine {
        GradientEngine::from_colors(hex.iter().map(|h| c(h)).collect())
    }

    /// Forward distance from `a` to `b` around the hue wheel.
    fn hue_step(a: f64, b: f64) -> f64 {
        (b - a).rem_euclid(360.0)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_starts_with_three_linear_colors() {
        let e = GradientEngine::new();
        assert_eq!(e.len(), 3);
        assert_eq!(e.mode(), Mode::Linear);
    }

    #[test]
    fn config_controls_initial_state() {
        let e = GradientEngine::with_config(EngineConfig {
            initial_count: 5,
            initial_mode: Mode::Conic,
        });
        assert_eq!(e.len(), 5);
        assert_eq!(e.mode(), Mode::Conic);
    }

    // ── generate_random ───────────────────────────────────────────────────

    #[test]
    fn random_produces_exact_count_of_valid_hex() {
        let mut e = GradientEngine::new();
        for count in 1..=10 {
            e.generate_random(count);
            let colors = e.colors();
            assert_eq!(colors.len(), count);
            for color in colors {
                let text = color.to_string();
                assert_eq!(text.len(), 7);
                assert!(text.starts_with('#'));
                assert!(text[1..].bytes().all(|b| b.is_ascii_hexdigit()));
            }
        }
    }

    #[test]
    fn random_zero_is_empty() {
        let mut e = GradientEngine::new();
        e.generate_random(0);
        assert!(e.is_empty());
        assert_eq!(e.render_css(), "none");
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let mut a = GradientEngine::from_colors(Vec::new());
        let mut b = GradientEngine::from_colors(Vec::new());
        a.generate_random_with(&mut StdRng::seed_from_u64(42), 4);
        b.generate_random_with(&mut StdRng::seed_from_u64(42), 4);
        assert_eq!(a.colors(), b.colors());
    }

    // ── generate_harmonious ───────────────────────────────────────────────

    #[test]
    fn harmonious_hues_are_evenly_spaced() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut e = GradientEngine::new();

        for count in 2..=10 {
            for _ in 0..20 {
                e.generate_harmonious_with(&mut rng, count);
                let hsl: Vec<Hsl> = e.colors().iter().map(|c| c.to_hsl()).collect();
                assert_eq!(hsl.len(), count);

                let expected = 360.0 / count as f64;
                for pair in hsl.windows(2) {
                    let step = hue_step(pair[0].h, pair[1].h);
                    assert!(
                        (step - expected).abs() < 3.0,
                        "count {count}: step {step} vs {expected}"
                    );
                }
            }
        }
    }

    #[test]
    fn harmonious_shares_saturation_and_lightness() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut e = GradientEngine::new();

        for _ in 0..50 {
            e.generate_harmonious_with(&mut rng, 6);
            let hsl: Vec<Hsl> = e.colors().iter().map(|c| c.to_hsl()).collect();
            let (s0, l0) = (hsl[0].s, hsl[0].l);

            assert!((0.58..=0.92).contains(&s0), "saturation {s0}");
            assert!((0.48..=0.72).contains(&l0), "lightness {l0}");
            for x in &hsl {
                assert!((x.s - s0).abs() < 0.03);
                assert!((x.l - l0).abs() < 0.01);
            }
        }
    }

    #[test]
    fn harmonious_zero_is_empty() {
        let mut e = GradientEngine::new();
        e.generate_harmonious(0);
        assert!(e.is_empty());
    }

    // ── update_color ──────────────────────────────────────────────────────

    #[test]
    fn update_in_range_replaces() {
        let mut e = engine(&["#FF0000", "#00FF00"]);
        assert!(e.update_color(1, c("#123456")));
        assert_eq!(e.colors(), vec![c("#FF0000"), c("#123456")]);
    }

    #[test]
    fn update_out_of_range_is_ignored() {
        let mut e = engine(&["#FF0000", "#00FF00"]);
        let before = e.colors();
        assert!(!e.update_color(2, c("#123456")));
        assert!(!e.update_color(usize::MAX, c("#123456")));
        assert_eq!(e.colors(), before);
    }

    // ── presets & copies ──────────────────────────────────────────────────

    #[test]
    fn apply_preset_copies_colors() {
        let preset = &default_catalog()[0];
        let mut e = GradientEngine::new();
        e.apply_preset(preset);
        assert_eq!(e.colors(), preset.colors);

        e.update_color(0, c("#000000"));
        assert_eq!(preset.colors[0], c("#FF6B6B"));
        assert_eq!(default_catalog()[0].colors[0], c("#FF6B6B"));
    }

    #[test]
    fn returned_colors_are_detached() {
        let e = engine(&["#FF0000", "#0000FF"]);
        let mut copy = e.colors();
        copy[0] = c("#FFFFFF");
        copy.push(c("#000000"));
        assert_eq!(e.colors(), vec![c("#FF0000"), c("#0000FF")]);
    }

    #[test]
    fn preset_round_trip_through_fresh_engine() {
        static STOPS: [Color; 3] = [
            Color::from_u32(0x0F2027),
            Color::from_u32(0x203A43),
            Color::from_u32(0x2C5364),
        ];

        for preset in default_catalog().iter().chain([&Preset::new("Custom", &STOPS)]) {
            let mut first = GradientEngine::new();
            first.apply_preset(preset);
            let read_back = first.colors();

            let mut second = GradientEngine::from_colors(read_back);
            second.apply_preset(preset);
            assert_eq!(second.render_css(), first.render_css());
            let rebuilt = GradientEngine::from_colors(first.colors());
            assert_eq!(rebuilt.render_css(), first.render_css());
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn renders_two_color_linear() {
        let e = engine(&["#FF0000", "#0000FF"]);
        assert_eq!(e.render_css(), "linear-gradient(90deg, #FF0000 0%, #0000FF 100%)");
    }

    #[test]
    fn set_mode_changes_wrapper_only() {
        let mut e = engine(&["#FF0000", "#00FF00", "#0000FF"]);
        let stops = "#FF0000 0%, #00FF00 50%, #0000FF 100%";

        e.set_mode(Mode::Radial);
        assert_eq!(e.render_css(), format!("radial-gradient(circle, {stops})"));
        e.set_mode(Mode::Conic);
        assert_eq!(e.render_css(), format!("conic-gradient({stops})"));
        e.set_mode(Mode::Linear);
        assert_eq!(e.render_css(), format!("linear-gradient(90deg, {stops})"));
    }

    #[test]
    fn single_color_renders_deterministically() {
        let e = engine(&["#FFD700"]);
        assert_eq!(e.render_css(), "linear-gradient(90deg, #FFD700 0%, #FFD700 100%)");
        assert_eq!(e.render_css(), e.render_css());
        assert_eq!(e.render_svg_with_id("x"), e.render_svg_with_id("x"));
    }

    #[test]
    fn svg_uses_timestamp_id() {
        let e = engine(&["#FF0000", "#0000FF"]);
        let svg = e.render_svg().unwrap();
        assert!(svg.contains(r#"<linearGradient id="gradient-"#));
        assert!(svg.contains(r#"fill="url(#gradient-"#));
    }

    #[test]
    fn conic_svg_is_reported_unsupported() {
        let mut e = engine(&["#FF0000", "#0000FF"]);
        e.set_mode(Mode::Conic);
        assert!(matches!(e.render_svg(), Err(RenderError::Unsupported { mode: Mode::Conic, .. })));
    }
}
