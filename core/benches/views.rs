//! Indexed get/set through each view kind, under criterion.
//!
//! Run with: `cargo bench --bench views`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spanbench_core::bench::{CASES, Fixture, Op, Target, TargetId};
use spanbench_core::views::Buffer;

fn bench_op(c: &mut Criterion, op: Op) {
    for id in TargetId::ALL {
        let mut group = c.benchmark_group(format!("{op}/{id}"));

        for length in [16, 100, 1024] {
            let target = Target::new(id).with_length(length).with_loops(100);
            group.throughput(Throughput::Elements(target.ops_per_invoke()));

            for case in CASES.iter().filter(|case| case.op == op) {
                let buffer = Buffer::filled(length, 'a').unwrap();
                let fixture = Fixture::new(&buffer).unwrap();
                group.bench_with_input(
                    BenchmarkId::new(case.kind.name(), length),
                    &target,
                    |b, target| {
                        b.iter(|| (case.routine)(&fixture, target).unwrap());
                    },
                );
            }
        }

        group.finish();
    }
}

fn bench_get(c: &mut Criterion) {
    bench_op(c, Op::Get);
}

fn bench_set(c: &mut Criterion) {
    bench_op(c, Op::Set);
}

fn bench_span_construction(c: &mut Criterion) {
    let buffer = Buffer::filled(100, 'a').unwrap();
    let fixture = Fixture::new(&buffer).unwrap();

    c.bench_function("span_from_segment", |b| {
        b.iter(|| spanbench_core::views::SpanView::from(criterion::black_box(&fixture.segment)));
    });
}

criterion_group!(benches, bench_get, bench_set, bench_span_construction);
criterion_main!(benches);
