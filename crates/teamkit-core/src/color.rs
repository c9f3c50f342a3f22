//! Hex color handling.
//!
//! Colors travel through the engine as normalized lowercase `#rrggbb`
//! strings. This module owns normalization, the seed colors for the
//! recent-colors list, the built-in swatch catalog, and the default
//! ghost tint used when a pattern renders without a custom pattern color.

use crate::error::DesignError;

/// Default garment base color.
pub const WHITE: &str = "#ffffff";

/// Near-black used for text and pattern defaults.
pub const INK: &str = "#16161a";

/// Accent color seeded into the recent-colors list.
pub const ACCENT: &str = "#d7263d";

/// Built-in swatch catalog offered by the color picker, and the fallback
/// pool for variation generation when the recent-colors list is empty.
pub const SWATCHES: &[&str] = &[
    "#ffffff", "#16161a", "#d7263d", "#1b3a6b", "#0a7d4f", "#f2b705",
    "#f25c05", "#5b2a86", "#00a6a6", "#8c1c2d", "#3d3d3d", "#b5b5b5",
];

/// Normalizes a hex color to lowercase `#rrggbb` form.
///
/// Accepts `#rgb`, `#rrggbb`, and either with a missing leading `#`.
pub fn normalize(value: &str) -> Result<String, DesignError> {
    let body = value.trim().trim_start_matches('#');
    let invalid = || DesignError::InvalidColor {
        value: value.to_string(),
    };
    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    match body.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in body.chars() {
                let c = c.to_ascii_lowercase();
                out.push(c);
                out.push(c);
            }
            Ok(out)
        }
        6 => Ok(format!("#{}", body.to_ascii_lowercase())),
        _ => Err(invalid()),
    }
}

/// Parses a normalized `#rrggbb` color into its channels.
fn channels(hex: &str) -> Option<(u8, u8, u8)> {
    let body = hex.strip_prefix('#')?;
    if body.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&body[0..2], 16).ok()?;
    let g = u8::from_str_radix(&body[2..4], 16).ok()?;
    let b = u8::from_str_radix(&body[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Default ghost tint: the zone color blended 70% toward white.
///
/// Used when a zone's pattern renders in ghost mode. The rendering surface
/// may substitute its own tint function at the composition boundary; this
/// is only the engine's default. Returns the input unchanged when it is not
/// a parseable `#rrggbb` value.
pub fn ghost_tint(base: &str) -> String {
    match channels(base) {
        Some((r, g, b)) => {
            let blend = |c: u8| c as f64 + (255.0 - c as f64) * 0.7;
            format!(
                "#{:02x}{:02x}{:02x}",
                blend(r) as u8,
                blend(g) as u8,
                blend(b) as u8
            )
        }
        None => base.to_string(),
    }
}
