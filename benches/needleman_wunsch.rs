//! Needleman-Wunsch alignment benchmarks
//!
//! Measures score-matrix construction, traceback and narration separately
//! across sequence lengths of 50, 200 and 1000 symbols.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use medalign::alignment::{build_score_matrix, narrate, needleman_wunsch, traceback, ScoringScheme};
use rand::Rng;

/// Generate random DNA sequence of given length
fn generate_sequence(len: usize) -> Vec<char> {
    let bases = ['A', 'C', 'G', 'T'];
    let mut rng = rand::thread_rng();
    (0..len).map(|_| bases[rng.gen_range(0..4)]).collect()
}

fn bench_score_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("nw_score_matrix");
    group.sample_size(30);

    for seq_len in [50, 200, 1000].iter() {
        let source = generate_sequence(*seq_len);
        let target = generate_sequence(*seq_len);
        let scoring = ScoringScheme::default();

        group.throughput(Throughput::Elements((*seq_len * *seq_len) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", seq_len, seq_len)),
            seq_len,
            |b, _| {
                b.iter(|| {
                    black_box(build_score_matrix(
                        black_box(&source),
                        black_box(&target),
                        black_box(&scoring),
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_traceback(c: &mut Criterion) {
    let mut group = c.benchmark_group("nw_traceback");
    group.sample_size(30);

    for seq_len in [50, 200, 1000].iter() {
        let source = generate_sequence(*seq_len);
        let target = generate_sequence(*seq_len);
        let scoring = ScoringScheme::default();
        let matrix = build_score_matrix(&source, &target, &scoring);

        group.bench_with_input(BenchmarkId::from_parameter(seq_len), seq_len, |b, _| {
            b.iter(|| black_box(traceback(&matrix, &source, &target, &scoring, '-')))
        });
    }

    group.finish();
}

fn bench_narrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("nw_narrate");
    group.sample_size(30);

    // Narration is quadratic in alignment length (one de-gapped copy per step)
    for seq_len in [50, 200, 1000].iter() {
        let source = generate_sequence(*seq_len);
        let target = generate_sequence(*seq_len);
        let alignment = needleman_wunsch(&source, &target, &ScoringScheme::default(), '-');

        group.bench_with_input(BenchmarkId::from_parameter(seq_len), seq_len, |b, _| {
            b.iter(|| black_box(narrate(black_box(&alignment.pair))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_score_matrix, bench_traceback, bench_narrate);
criterion_main!(benches);
