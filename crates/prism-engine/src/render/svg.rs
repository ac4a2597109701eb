use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::paint::{even_stops, Color, Mode};

use super::{Format, RenderError};

const SVG_OPEN: &str = r#"<svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">"#;

/// Gradient id derived from the current wall clock, `gradient-<unix millis>`.
pub fn timestamp_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("gradient-{millis}")
}

/// Renders a standalone SVG document: one gradient in `<defs>` and a
/// full-size `<rect>` filled with it.
///
/// SVG has no conic gradient element, so [`Mode::Conic`] is reported as
/// [`RenderError::Unsupported`]. An empty sequence renders an unfilled rect.
pub fn svg_gradient(mode: Mode, colors: &[Color], id: &str) -> Result<String, RenderError> {
    let (open_tag, close_tag) = match mode {
        Mode::Linear => (
            format!(r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%">"#),
            "</linearGradient>",
        ),
        Mode::Radial => (
            format!(r#"<radialGradient id="{id}" cx="50%" cy="50%" r="50%">"#),
            "</radialGradient>",
        ),
        Mode::Conic => {
            return Err(RenderError::Unsupported { mode, format: Format::Svg });
        }
    };

    let stops = even_stops(colors);
    let mut out = String::new();
    out.push_str(SVG_OPEN);
    out.push('\n');

    if stops.is_empty() {
        out.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"none\" />\n");
        out.push_str("</svg>");
        return Ok(out);
    }

    out.push_str("  <defs>\n");
    _ = writeln!(out, "    {open_tag}");
    for stop in &stops {
        _ = writeln!(
            out,
            r#"      <stop offset="{}%" stop-color="{}" />"#,
            stop.offset, stop.color
        );
    }
    _ = writeln!(out, "    {close_tag}");
    out.push_str("  </defs>\n");
    _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="url(#{id})" />"#);
    out.push_str("</svg>");
    Ok(out)
}
