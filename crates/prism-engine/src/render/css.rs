use std::fmt::Write as _;

use crate::paint::{even_stops, Color, Mode};

/// Renders a CSS gradient function call, e.g.
/// `linear-gradient(90deg, #FF0000 0%, #0000FF 100%)`.
///
/// An empty sequence renders as `none`.
pub fn css_gradient(mode: Mode, colors: &[Color]) -> String {
    let stops = even_stops(colors);
    if stops.is_empty() {
        return "none".to_string();
    }

    let mut list = String::new();
    for (i, stop) in stops.iter().enumerate() {
        if i > 0 {
            list.push_str(", ");
        }
        _ = write!(list, "{} {}%", stop.color, stop.offset);
    }

    match mode {
        Mode::Linear => format!("linear-gradient(90deg, {list})"),
        Mode::Radial => format!("radial-gradient(circle, {list})"),
        Mode::Conic => format!("conic-gradient({list})"),
    }
}
