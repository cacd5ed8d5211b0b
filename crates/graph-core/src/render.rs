// File: crates/graph-core/src/render.rs
// Summary: The render pass: axes with labeled bounds, connecting polyline, point markers.

use crate::bounds::Bounds;
use crate::panel::DisplayConfig;
use crate::sample::Sample;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::transform::Transform;
use crate::types::MARGIN;

/// Marker disc radius in pixels.
const MARKER_RADIUS: f32 = 5.5;
/// Cross arm half-length in pixels.
const CROSS_ARM: i32 = 5;
/// Origin marker radius in pixels.
const ORIGIN_RADIUS: f32 = 5.0;
/// Stroke width for axes, polyline, and crosses.
const STROKE_WIDTH: f32 = 2.0;

/// Produce the drawing commands for one frame. No samples, no output.
pub fn render_graph<S: Surface>(
    samples: &[Sample],
    config: &DisplayConfig,
    theme: &Theme,
    surface: &mut S,
    width: i32,
    height: i32,
) {
    let Some(bounds) = Bounds::from_samples(samples) else {
        return;
    };
    let transform = Transform::new(&bounds, width, height);

    if config.show_axis {
        draw_axis(surface, &transform, &bounds, theme, width, height);
    }
    draw_polyline(surface, &transform, samples, theme);
    if config.show_markers {
        draw_markers(surface, &transform, samples, config, theme);
    }
}

fn draw_axis<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    bounds: &Bounds,
    theme: &Theme,
    width: i32,
    height: i32,
) {
    surface.set_stroke_width(STROKE_WIDTH);
    surface.set_color(theme.axis);

    let zero_x = transform.px(0.0);
    let zero_y = transform.py(0.0);

    // The X axis sits on the zero row when that row is inside the margin
    // band, otherwise on the bottom margin row.
    let axis_y = if zero_y >= MARGIN && zero_y <= height - MARGIN {
        zero_y
    } else {
        height - MARGIN
    };
    surface.draw_line(
        transform.px(bounds.min_x),
        axis_y,
        transform.px(bounds.max_x),
        axis_y,
    );

    // The Y axis falls back to the left margin column.
    let axis_x = if zero_x >= MARGIN && zero_x <= width - MARGIN {
        zero_x
    } else {
        MARGIN
    };
    surface.draw_line(
        axis_x,
        transform.py(bounds.max_y),
        axis_x,
        transform.py(bounds.min_y),
    );

    surface.draw_text("X", width - 20, axis_y - 10);
    surface.draw_text("Y", axis_x + 10, 20);

    surface.draw_text(
        &format!("{:.2}", bounds.min_x),
        transform.px(bounds.min_x) + 5,
        axis_y + 15,
    );
    surface.draw_text(
        &format!("{:.2}", bounds.max_x),
        transform.px(bounds.max_x) - 35,
        axis_y + 15,
    );
    surface.draw_text(
        &format!("{:.2}", bounds.min_y),
        axis_x + 5,
        transform.py(bounds.min_y) - 5,
    );
    surface.draw_text(
        &format!("{:.2}", bounds.max_y),
        axis_x + 5,
        transform.py(bounds.max_y) + 15,
    );

    if bounds.contains_origin() {
        surface.set_color(theme.origin);
        surface.fill_circle(zero_x, zero_y, ORIGIN_RADIUS);
        surface.draw_text("(0,0)", zero_x + 5, zero_y - 5);
    }
}

fn draw_polyline<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    samples: &[Sample],
    theme: &Theme,
) {
    if samples.len() < 2 {
        return;
    }
    surface.set_color(theme.line);
    surface.set_stroke_width(STROKE_WIDTH);
    for pair in samples.windows(2) {
        surface.draw_line(
            transform.px(pair[0].x),
            transform.py(pair[0].y),
            transform.px(pair[1].x),
            transform.py(pair[1].y),
        );
    }
}

fn draw_markers<S: Surface>(
    surface: &mut S,
    transform: &Transform,
    samples: &[Sample],
    config: &DisplayConfig,
    theme: &Theme,
) {
    for sample in samples {
        let x = transform.px(sample.x);
        let y = transform.py(sample.y);

        let fill = if config.highlight_special && sample.is_special() {
            theme.marker_special
        } else {
            theme.marker
        };
        surface.set_color(fill);
        surface.fill_circle(x, y, MARKER_RADIUS);

        // Contrasting cross on top of the disc.
        surface.set_color(theme.cross);
        surface.set_stroke_width(STROKE_WIDTH);
        surface.draw_line(x, y - CROSS_ARM, x, y + CROSS_ARM);
        surface.draw_line(x - CROSS_ARM, y, x + CROSS_ARM, y);
    }
}
