//! First-order iterative optimizers and the objectives they run on.
//!
//! - [`GradientDescent`]: full-batch descent or ascent with an objective-delta
//!   stopping rule and an iteration cap
//! - [`Sgd`]: epoch-based stochastic descent with a `t0 / (t + t1)` schedule
//!
//! Objectives are small value types borrowing their data:
//!
//! ```rust
//! use gradfit::optim::{GradientDescent, objective::MeanSquaredError};
//! use gradfit::{Vector, linalg};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![3.0, 5.0, 7.0];
//! let x_b = linalg::add_intercept(&x.view());
//!
//! let mse = MeanSquaredError::new(x_b.view(), y.view());
//! let solution = GradientDescent::new().eta(0.05).minimize(&mse, Vector::zeros(2));
//! assert!((solution.params[1] - 2.0).abs() < 0.05);
//! ```

mod gradient_descent;
pub mod objective;
mod sgd;

pub use gradient_descent::{Direction, GradientDescent};
pub use objective::{MeanSquaredError, Objective, ProjectedVariance, SampleGradient};
pub use sgd::Sgd;

use crate::Vector;

/// Result of an optimizer run.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub params: Vector,
    /// Gradient steps taken.
    pub iterations: usize,
    /// Whether the stopping rule fired before the cap. Always `true` for [`Sgd`].
    pub converged: bool,
}
