// File: crates/graph-render-skia/src/lib.rs
// Summary: Skia raster backend: Surface impl over a Skia canvas plus headless PNG/RGBA rendering.

use graph_core::{Color, GraphPanel, Surface};
use skia_safe as skia;

use std::path::Path;

/// Raster sizing for headless rendering.
pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: graph_core::types::WIDTH,
            height: graph_core::types::HEIGHT,
        }
    }
}

/// Errors from headless rasterization.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    CreateSurface,
    #[error("PNG encode failed")]
    EncodePng,
    #[error("pixel readback failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Stateful `Surface` implementation drawing onto a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    color: skia::Color,
    stroke_width: f32,
    font: skia::Font,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut font = skia::Font::default();
        font.set_size(14.0);
        Self {
            canvas,
            color: skia::Color::from_argb(255, 0, 0, 0),
            stroke_width: 1.0,
            font,
        }
    }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.stroke_width);
        paint.set_color(self.color);
        paint
    }

    fn fill_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(self.color);
        paint
    }
}

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

impl Surface for SkiaSurface<'_> {
    fn set_color(&mut self, color: Color) {
        self.color = to_skia(color);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.canvas.draw_line(
            (x1 as f32, y1 as f32),
            (x2 as f32, y2 as f32),
            &self.stroke_paint(),
        );
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: f32) {
        self.canvas
            .draw_circle((cx as f32, cy as f32), radius, &self.fill_paint());
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.canvas
            .draw_str(text, (x as f32, y as f32), &self.font, &self.fill_paint());
    }
}

/// Render the panel into a fresh CPU raster surface.
fn rasterize(panel: &GraphPanel, opts: &RasterOptions) -> Result<skia::Surface, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(RenderError::CreateSurface)?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(panel.theme().background));

    let mut target = SkiaSurface::new(canvas);
    panel.render(&mut target, opts.width, opts.height);
    Ok(surface)
}

/// Render the panel to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(panel: &GraphPanel, opts: &RasterOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = rasterize(panel, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::EncodePng)?;
    Ok(data.as_bytes().to_vec())
}

/// Render the panel to a PNG file at `output_png_path`.
pub fn render_to_png(
    panel: &GraphPanel,
    opts: &RasterOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let bytes = render_to_png_bytes(panel, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render to a tightly packed RGBA8 buffer; returns (pixels, width, height, stride).
pub fn render_to_rgba8(
    panel: &GraphPanel,
    opts: &RasterOptions,
) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
    let mut surface = rasterize(panel, opts)?;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok((pixels, opts.width, opts.height, stride))
}
