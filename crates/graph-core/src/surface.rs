// File: crates/graph-core/src/surface.rs
// Summary: Renderer-agnostic drawing surface trait, RGBA color, and a recording implementation.

/// Plain RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

/// Stateful drawing surface the render pass targets. Color and stroke width
/// apply to subsequent draw calls until changed. Coordinates are pixels.
pub trait Surface {
    fn set_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: f32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: f32);
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
}

/// One resolved draw call, carrying the color/stroke in effect when issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        stroke_width: f32,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Color,
    },
}

/// Surface that records resolved commands instead of rasterizing, so the
/// transform and render pass are testable without a display.
pub struct RecordingSurface {
    color: Color,
    stroke_width: f32,
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            color: Color::from_rgb(0, 0, 0),
            stroke_width: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|c| matches!(c, DrawCmd::Text { .. }))
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCmd::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.color,
            stroke_width: self.stroke_width,
        });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: f32) {
        self.commands.push(DrawCmd::Circle {
            cx,
            cy,
            radius,
            color: self.color,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            x,
            y,
            color: self.color,
        });
    }
}
