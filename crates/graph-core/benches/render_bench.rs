use criterion::{criterion_group, criterion_main, Criterion, black_box};
use graph_core::{GraphPanel, RecordingSurface, Sample};

fn build_panel(n: usize) -> GraphPanel {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        samples.push(Sample::new(x, y));
    }
    let mut panel = GraphPanel::new();
    panel.set_samples(samples);
    panel.set_highlight_special(true);
    panel
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_commands");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let panel = build_panel(n);
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                panel.render(&mut surface, 1024, 640);
                black_box(surface.commands().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
