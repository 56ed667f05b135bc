//! Benchmarks for determinants and rank.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use somos_integers::Rational;
use somos_linalg::{Matrix, MinorSearch, MinorSearchConfig};
use somos_rings::Tropical;

/// A dense non-singular rational matrix.
fn rational_matrix(n: usize) -> Matrix<Rational> {
    Matrix::from_fn(n, n, |r, c| {
        let num = ((r * 7 + c * 3) % 11) as i64 - 5;
        let den = (c % 3 + 1) as i64;
        let diagonal = if r == c { 10 } else { 0 };
        Rational::from_i64(num, den) + Rational::from(diagonal)
    })
}

fn tropical_matrix(n: usize) -> Matrix<Tropical<i64>> {
    Matrix::from_fn(n, n, |r, c| Tropical::finite(((r * 5 + c * 2) % 13) as i64))
}

fn bench_lazy_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_determinant");

    for size in [3, 5, 7] {
        let m = rational_matrix(size);
        group.bench_with_input(BenchmarkId::new("Rational", size), &size, |b, _| {
            b.iter(|| black_box(m.lazy_determinant()))
        });

        let t = tropical_matrix(size);
        group.bench_with_input(BenchmarkId::new("Tropical", size), &size, |b, _| {
            b.iter(|| black_box(t.permutation_sums()))
        });
    }

    group.finish();
}

fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination");

    for size in [8, 16, 32] {
        let m = rational_matrix(size);
        group.bench_with_input(BenchmarkId::new("gauss_determinant", size), &size, |b, _| {
            b.iter(|| black_box(m.gauss_determinant()))
        });
        group.bench_with_input(BenchmarkId::new("gauss_rank", size), &size, |b, _| {
            b.iter(|| black_box(m.gauss_rank()))
        });
    }

    group.finish();
}

fn bench_minor_search(c: &mut Criterion) {
    let m = rational_matrix(11);
    let config = MinorSearchConfig {
        minor_size: 4,
        max_attempts: None,
        seed: 42,
    };

    c.bench_function("minor_search_first_4x4", |b| {
        b.iter(|| {
            let mut search = MinorSearch::new(&m, &config).expect("4 <= 11");
            black_box(search.next())
        })
    });
}

criterion_group!(
    benches,
    bench_lazy_determinant,
    bench_elimination,
    bench_minor_search
);
criterion_main!(benches);
