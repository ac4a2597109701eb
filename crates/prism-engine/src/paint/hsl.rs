/// Hue / saturation / lightness triple.
///
/// - `h` in degrees, `[0, 360)`
/// - `s`, `l` in `[0, 1]`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to straight RGB channels in `[0, 1]`.
    ///
    /// Hue wraps modulo 360; saturation and lightness are clamped.
    pub fn to_rgb_f64(self) -> (f64, f64, f64) {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        (r + m, g + m, b + m)
    }

    /// Builds an HSL triple from straight RGB channels in `[0, 1]`.
    ///
    /// Achromatic inputs report `h = 0` and `s = 0`.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d <= f64::EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new((sector * 60.0).rem_euclid(360.0), s, l)
    }
}
