use criterion::{Criterion, criterion_group, criterion_main};
use ringdraw_core::{DrawConfig, Graph};
use ringdraw_render::{GraphDrawing, Recorder, SvgRenderer, plan_drawing};
use std::hint::black_box;

fn complete_directed(n: usize) -> Graph {
    let rows = (0..n).map(|_| (0..n).map(|_| 1u64));
    Graph::from_matrix(true, rows).expect("graph")
}

fn bench_draw_stress(c: &mut Criterion) {
    let config = DrawConfig::default().with_canvas(1200.0, 1200.0);
    let graph = complete_directed(64);

    let mut group = c.benchmark_group("draw_stress");
    group.sample_size(50);

    group.bench_function("plan_complete_directed_64", |b| {
        b.iter(|| {
            let plan = plan_drawing(black_box(&graph), &config, 64).expect("plan");
            black_box(plan.edges.len());
        });
    });

    group.bench_function("record_complete_directed_64", |b| {
        b.iter(|| {
            let mut drawing =
                GraphDrawing::new(Recorder::new(), &graph, config.clone()).expect("drawing");
            drawing.draw_graph(black_box(64)).expect("draw");
            black_box(drawing.into_renderer().ops().len());
        });
    });

    group.bench_function("svg_complete_directed_64", |b| {
        b.iter(|| {
            let mut drawing = GraphDrawing::new(SvgRenderer::new(&config), &graph, config.clone())
                .expect("drawing");
            drawing.draw_graph(black_box(64)).expect("draw");
            black_box(drawing.into_renderer().finish().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_draw_stress);
criterion_main!(benches);
