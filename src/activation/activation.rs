use serde::{Deserialize, Serialize};
use std::f64::consts::E;

use crate::math::matrix::Matrix;
use crate::math::parallel;

/// Element-wise activations used when wiring matrices into a feed-forward
/// network. `Logit` is the inverse of `Sigmoid`, mapping `(0, 1)` back to
/// the real line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    Logit,
}

impl Activation {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::Logit => (x / (1.0 - x)).ln(),
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            Activation::Logit => 1.0 / (x * (1.0 - x)),
        }
    }

    /// Applies the activation to every cell, returning a new matrix.
    pub fn apply(&self, matrix: &Matrix) -> Matrix {
        parallel::map(matrix, |x| self.function(x))
    }
}
