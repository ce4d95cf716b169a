// This binary crate is intentionally minimal.
// All matrix logic lives in the library (src/lib.rs and its modules).
use gridnet::io::{load_matrix, save_matrix};
use gridnet::{dot, Activation, Matrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;

    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", a.add(&b)?);
    println!("dot(a, b) = {}", dot(&a, &b)?);
    println!("transpose(a) = {}", a.transpose());
    println!("sigmoid(a) = {}", Activation::Sigmoid.apply(&a));
    println!("min(a) = {}, max(a) = {}", a.min(), a.max());

    let path = std::env::temp_dir().join("gridnet-demo.bin");
    save_matrix(&a, &path)?;
    let restored = load_matrix(&path)?;
    println!("round-tripped through {}: {}", path.display(), restored);

    Ok(())
}
