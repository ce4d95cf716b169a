pub mod binary;

pub use binary::{load_array, load_matrix, save_array, save_matrix};
