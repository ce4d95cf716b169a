pub mod array;

pub use array::{cut, cut_range, flatten, random_scaled_vec, random_vec, render, reshape};
