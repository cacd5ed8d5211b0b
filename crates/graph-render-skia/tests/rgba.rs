// File: crates/graph-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use graph_core::{samples_from_xy, GraphPanel, Theme};
use graph_render_skia::{render_to_rgba8, RasterOptions};

#[test]
fn render_rgba8_buffer() {
    let mut panel = GraphPanel::new();
    panel.set_samples(samples_from_xy(&[(0.0, 0.0), (4.0, 4.0)]));

    let opts = RasterOptions::default();
    let (px, w, h, stride) = render_to_rgba8(&panel, &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin area and must equal the theme
    // background (RGBA order).
    let bg = Theme::light().background;
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, bg.a]);
}
