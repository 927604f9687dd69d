use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qrkit::{GramSchmidtQr, HouseholderQr, Matrix, QrFactor};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_qr(c: &mut Criterion) {
    let n = 64;
    let mut rng = StdRng::seed_from_u64(7);
    let mut a: Matrix<f64> = Matrix::zeros(n, n);
    a.fill_random(&mut rng, 2.0);
    let mut q: Matrix<f64> = Matrix::zeros(n, n);
    let mut r: Matrix<f64> = Matrix::zeros(n, n);

    c.bench_function("householder qr 64", |ben| {
        let mut solver = HouseholderQr::new();
        ben.iter(|| {
            solver
                .factor(black_box(&a), black_box(&mut q), black_box(&mut r))
                .unwrap();
        })
    });

    c.bench_function("gram-schmidt qr 64", |ben| {
        let mut solver = GramSchmidtQr::new();
        ben.iter(|| {
            solver
                .factor(black_box(&a), black_box(&mut q), black_box(&mut r))
                .unwrap();
        })
    });
}

criterion_group!(benches, bench_qr);
criterion_main!(benches);
