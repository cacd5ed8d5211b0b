// File: crates/graph-examples/src/bin/flag_states.rs
// Summary: Demo renders one dataset under each display-flag combination, plus a dark theme pass.

use anyhow::{Context, Result};
use graph_core::{theme, GraphPanel, Sample};
use graph_render_skia::{render_to_png, RasterOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    let samples: Vec<Sample> = (0..48)
        .map(|i| {
            let x = -4.0 + i as f64 * 0.25;
            Sample::new(x, x * x.sin() + 0.5 * x)
        })
        .collect();
    println!("Rendering {} samples", samples.len());

    let opts = RasterOptions::default();
    let out_dir = PathBuf::from("target/out");

    let states = [
        ("axes_only", true, false, false),
        ("markers", true, true, false),
        ("highlight", true, true, true),
        ("bare", false, false, false),
    ];

    for (name, show_axis, show_markers, highlight) in states {
        let mut panel = GraphPanel::new();
        panel.set_samples(samples.clone());
        panel.set_show_axis(show_axis);
        panel.set_show_markers(show_markers);
        panel.set_highlight_special(highlight);

        let out = out_dir.join(format!("graph_{name}.png"));
        render_to_png(&panel, &opts, &out)
            .with_context(|| format!("failed to render '{}'", out.display()))?;
        println!("Wrote {}", out.display());
    }

    // Same data on the dark preset.
    let mut panel = GraphPanel::new();
    panel.set_samples(samples);
    panel.set_highlight_special(true);
    panel.set_theme(theme::find("dark"));
    let out = out_dir.join("graph_dark.png");
    render_to_png(&panel, &opts, &out)
        .with_context(|| format!("failed to render '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}
