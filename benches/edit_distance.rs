//! Edit-distance matrix benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use medalign::alignment::{build_cost_matrix, EditCosts};
use rand::Rng;

/// Generate random lowercase text of given length
fn generate_text(len: usize) -> Vec<char> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn bench_cost_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance_matrix");
    group.sample_size(30);

    for seq_len in [50, 200, 1000].iter() {
        let source = generate_text(*seq_len);
        let target = generate_text(*seq_len);
        let costs = EditCosts::default();

        group.throughput(Throughput::Elements((*seq_len * *seq_len) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", seq_len, seq_len)),
            seq_len,
            |b, _| {
                b.iter(|| {
                    black_box(build_cost_matrix(
                        black_box(&source),
                        black_box(&target),
                        black_box(&costs),
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cost_matrix);
criterion_main!(benches);
