// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for graph rendering colors.

use crate::surface::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis: Color,
    pub line: Color,
    pub marker: Color,
    pub marker_special: Color,
    pub cross: Color,
    pub origin: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 255, 255, 255),
            axis: Color::from_argb(255, 0, 0, 0),
            line: Color::from_argb(255, 0, 0, 255),
            marker: Color::from_argb(255, 0, 0, 255),
            marker_special: Color::from_argb(255, 255, 0, 0),
            cross: Color::from_argb(255, 255, 255, 255),
            origin: Color::from_argb(255, 255, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis: Color::from_argb(255, 180, 180, 190),
            line: Color::from_argb(255, 64, 160, 255),
            marker: Color::from_argb(255, 64, 160, 255),
            marker_special: Color::from_argb(255, 220, 80, 80),
            cross: Color::from_argb(255, 235, 235, 245),
            origin: Color::from_argb(255, 220, 80, 80),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            axis: Color::from_argb(255, 0xff, 0xff, 0xff),
            line: Color::from_argb(255, 0x00, 0xff, 0xff),
            marker: Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_special: Color::from_argb(255, 0xff, 0x00, 0x00),
            cross: Color::from_argb(255, 0xff, 0xff, 0x00),
            origin: Color::from_argb(255, 0xff, 0x00, 0x00),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
