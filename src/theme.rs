//! Page theme signal.
//!
//! The host page owns the theme: a `light` class on `<body>` and the
//! `--dragon-color` custom property. This crate only reads both, once per
//! rendered frame, and never writes them.

use web_sys::window;

pub const DEFAULT_ACCENT: &str = "#ff0000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Light mode when set; dark otherwise.
    pub light: bool,
    /// Accent color used for the snake body and decorations.
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: false,
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

/// Parses a `#rrggbb` accent into RGB channels, for effects that need to
/// rebuild `rgba(...)` strings with their own alpha.
pub fn accent_rgb(accent: &str) -> Option<(u8, u8, u8)> {
    let hex = accent.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Reads the current theme from the document. Missing window, body or
/// property all fall back to the dark default.
pub fn detect() -> Theme {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return Theme::default();
    };
    let light = body.class_list().contains("light");
    let accent = window()
        .and_then(|w| w.get_computed_style(&body).ok().flatten())
        .and_then(|style| style.get_property_value("--dragon-color").ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());
    Theme { light, accent }
}
