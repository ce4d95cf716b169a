pub mod activation;
pub mod io;
pub mod math;
pub mod util;

// Convenience re-exports
pub use activation::activation::Activation;
pub use math::dot::dot;
pub use math::error::MatrixError;
pub use math::matrix::{scalar_div, scalar_sub, Matrix};
