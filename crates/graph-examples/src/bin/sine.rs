// File: crates/graph-examples/src/bin/sine.rs
// Summary: Minimal example that renders a sine wave graph to PNG.

use graph_core::{GraphPanel, Sample};
use graph_render_skia::{render_to_png, RasterOptions};

fn main() {
    let samples: Vec<Sample> = (0..=60)
        .map(|i| {
            let x = i as f64 * 0.2;
            Sample::new(x, x.sin() * 3.0)
        })
        .collect();

    let mut panel = GraphPanel::new();
    panel.set_samples(samples);
    panel.set_highlight_special(true);

    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from("target/out/sine.png");
    render_to_png(&panel, &opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
