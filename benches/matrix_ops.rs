use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use libmatrix::{DispatchConfig, Matrix, Vector};

fn configs() -> [(&'static str, DispatchConfig); 2] {
    [
        ("scalar", DispatchConfig::sequential()),
        ("parallel", DispatchConfig::eager_parallel()),
    ]
}

fn bench_matmul_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    // Square sizes on both sides of the default parallel threshold
    let sizes = vec![(16, 16, 16), (64, 64, 64), (128, 128, 128), (256, 256, 256)];

    for (m, n, p) in sizes {
        for (name, config) in configs() {
            let id = format!("{name}/{m}x{n}_x_{n}x{p}");

            let a = Matrix::from_vec(m, n, (0..m * n).map(|i| (i % 100) as f32).collect())
                .unwrap()
                .with_config(config);
            let b = Matrix::from_vec(n, p, (0..n * p).map(|i| ((i * 2) % 100) as f32).collect())
                .unwrap();

            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &(&a, &b),
                |bench, (a, b)| {
                    bench.iter(|| {
                        let result = black_box(a).matmul(black_box(b)).unwrap();
                        black_box(result);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for (rows, cols) in [(64, 64), (256, 128), (512, 512)] {
        let m = Matrix::from_vec(rows, cols, (0..rows * cols).map(|i| i as f64).collect()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &m,
            |bench, m| {
                bench.iter(|| black_box(black_box(m).transpose()));
            },
        );
    }

    group.finish();
}

fn bench_matvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("matvec");

    for (rows, cols) in [(64, 64), (512, 512), (1024, 256)] {
        for (name, config) in configs() {
            let m = Matrix::from_vec(rows, cols, (0..rows * cols).map(|i| (i % 17) as f32).collect())
                .unwrap()
                .with_config(config);
            let v = Vector::from_vec((0..cols).map(|i| (i % 5) as f32).collect()).unwrap();

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{name}/{rows}x{cols}")),
                &(&m, &v),
                |bench, (m, v)| {
                    bench.iter(|| black_box(black_box(m).matvec(black_box(v)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul_sizes, bench_transpose, bench_matvec);
criterion_main!(benches);
