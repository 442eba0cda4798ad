use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crumbs_core::{AllResolved, GraphSet, InferenceContext, RelationGraph};

/// `width` children under each of `parents` shared parents, plus a child
/// graph that mirrors the declarations.
fn wide_vault(parents: usize, width: usize) -> GraphSet {
    let mut parent_edges = Vec::with_capacity(parents * width);
    let mut child_edges = Vec::with_capacity(parents * width);
    for p in 0..parents {
        for c in 0..width {
            let child = format!("note-{c}");
            let parent = format!("hub-{p}");
            child_edges.push((parent.clone(), child.clone()));
            parent_edges.push((child, parent));
        }
    }
    GraphSet::new(
        RelationGraph::from_edges(parent_edges),
        RelationGraph::new(),
        RelationGraph::from_edges(child_edges),
    )
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference.wide");

    for width in [16_usize, 256, 4096] {
        let set = wide_vault(4, width);
        let ctx = InferenceContext::builder()
            .graphs(&set)
            .lookup(&AllResolved)
            .build()
            .expect("context");
        group.throughput(Throughput::Elements(width as u64));

        group.bench_with_input(BenchmarkId::new("leaf", width), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.infer("note-0")));
        });
        group.bench_with_input(BenchmarkId::new("hub", width), &ctx, |b, ctx| {
            b.iter(|| black_box(ctx.infer("hub-0")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inference);
criterion_main!(benches);
