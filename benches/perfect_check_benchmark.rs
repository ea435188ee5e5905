use criterion::{criterion_group, criterion_main, Criterion};
use perfect_number::{is_perfect, naive};

pub fn sqrt_pairing_benchmark(c: &mut Criterion) {
    c.bench_function("sqrt pairing 33550336", |b| {
        b.iter(|| is_perfect(33550336).unwrap())
    });
    c.bench_function("sqrt pairing 8589869056", |b| {
        b.iter(|| is_perfect(8589869056).unwrap())
    });
}

// The scans run on the fifth perfect number only; at 8589869056 each of them
// needs tens of seconds per call, which criterion's sampling multiplies.
pub fn naive_scan_benchmark(c: &mut Criterion) {
    c.bench_function("for loop scan 33550336", |b| {
        b.iter(|| naive::for_loop_is_perfect(33550336).unwrap())
    });
    c.bench_function("filtered scan 33550336", |b| {
        b.iter(|| naive::filtered_is_perfect(33550336).unwrap())
    });
    c.bench_function("reduce scan 33550336", |b| {
        b.iter(|| naive::reduce_is_perfect(33550336).unwrap())
    });
    c.bench_function("parallel filtered scan 33550336", |b| {
        b.iter(|| naive::parallel_filtered_is_perfect(33550336).unwrap())
    });
}

criterion_group!(perfect_check_benches, sqrt_pairing_benchmark, naive_scan_benchmark);
criterion_main!(perfect_check_benches);
