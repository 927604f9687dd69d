//! Factor a random matrix with both QR engines and report the
//! reconstruction error.
//!
//! Run with `cargo run --example qr_demo`; pass `-v` for per-iteration
//! traces.

use qrkit::{
    GramSchmidtQr, HouseholderQr, Matrix, MatrixStack, QrError, QrFactor, multiply,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn report(name: &str, solver: &mut dyn QrFactor<f64>, a: &Matrix<f64>) -> Result<(), QrError> {
    let n = a.rows();
    let mut stack: MatrixStack<f64> = MatrixStack::new(n, n, 3);
    let mut q = stack.pop()?;
    let mut r = stack.pop()?;
    let mut qr = stack.pop()?;

    solver.factor(a, &mut q, &mut r)?;

    println!("{name}:");
    println!("Q =\n{q}");
    println!("R =\n{r}");

    multiply(&q, &r, &mut qr)?;
    println!("QR =\n{qr}");

    qr.subtract(a)?;
    qr.abs_in_place();
    println!("mean error = {:.16}", qr.mean());
    println!("max error  = {:.16}\n", qr.max());

    stack.push(qr)?;
    stack.push(r)?;
    stack.push(q)?;
    stack.release_all();
    Ok(())
}

fn main() -> Result<(), QrError> {
    let verbose = std::env::args().any(|arg| arg == "-v");

    let mut rng = StdRng::seed_from_u64(42);
    let mut a: Matrix<f64> = Matrix::zeros(3, 3);
    a.fill_random(&mut rng, 2.0);

    println!("A =\n{a}");

    report(
        "householder",
        &mut HouseholderQr::new().with_verbose(verbose),
        &a,
    )?;
    report(
        "gram-schmidt",
        &mut GramSchmidtQr::new().with_verbose(verbose),
        &a,
    )?;
    Ok(())
}
