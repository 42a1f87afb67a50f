//! Objectives optimized by [`GradientDescent`](super::GradientDescent) and
//! [`Sgd`](super::Sgd).
//!
//! Each objective borrows the data it is evaluated on, so the optimizer only
//! ever sees a parameter vector.

use crate::Vector;
use crate::linalg;
use ndarray::{ArrayView1, ArrayView2};

/// A differentiable scalar function of a parameter vector.
pub trait Objective {
    fn value(&self, params: &Vector) -> f64;

    fn gradient(&self, params: &Vector) -> Vector;

    /// Maps a candidate point back onto the feasible set after each step.
    fn project(&self, params: Vector) -> Vector {
        params
    }
}

/// Gradient of the loss contributed by a single sample.
pub trait SampleGradient {
    fn n_samples(&self) -> usize;

    fn sample_gradient(&self, params: &Vector, index: usize) -> Vector;
}

/// Mean squared error of a linear model over an augmented design matrix.
///
/// `x_b` carries the leading column of ones, so `params[0]` is the intercept.
#[derive(Clone, Copy, Debug)]
pub struct MeanSquaredError<'a> {
    x_b: ArrayView2<'a, f64>,
    y: ArrayView1<'a, f64>,
}

impl<'a> MeanSquaredError<'a> {
    pub fn new(x_b: ArrayView2<'a, f64>, y: ArrayView1<'a, f64>) -> Self {
        debug_assert_eq!(x_b.nrows(), y.len());
        Self { x_b, y }
    }

    fn residuals(&self, params: &Vector) -> Vector {
        self.x_b.dot(params) - &self.y
    }
}

impl Objective for MeanSquaredError<'_> {
    /// `mean((y - X_b·θ)²)`, or `+inf` once the sum overflows.
    fn value(&self, params: &Vector) -> f64 {
        let n = self.y.len() as f64;
        let loss = self.residuals(params).mapv(|r| r * r).sum() / n;
        saturate(loss)
    }

    fn gradient(&self, params: &Vector) -> Vector {
        let n = self.x_b.nrows() as f64;
        self.x_b.t().dot(&self.residuals(params)) * (2.0 / n)
    }
}

impl SampleGradient for MeanSquaredError<'_> {
    fn n_samples(&self) -> usize {
        self.x_b.nrows()
    }

    /// `2·x_bᵢ(x_bᵢ·θ - yᵢ)`. There is no `1/N` factor: the step is taken on
    /// one sample, so at equal `eta` it is `N` times larger than a batch step.
    fn sample_gradient(&self, params: &Vector, index: usize) -> Vector {
        let row = self.x_b.row(index);
        let residual = row.dot(params) - self.y[index];
        row.mapv(|v| 2.0 * v * residual)
    }
}

/// Variance of the data projected onto a direction `w`, constrained to `‖w‖ = 1`.
///
/// Maximized; `x` is expected to be column-centred.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedVariance<'a> {
    x: ArrayView2<'a, f64>,
}

impl<'a> ProjectedVariance<'a> {
    pub fn new(x: ArrayView2<'a, f64>) -> Self {
        Self { x }
    }
}

impl Objective for ProjectedVariance<'_> {
    fn value(&self, w: &Vector) -> f64 {
        let n = self.x.nrows() as f64;
        let variance = self.x.dot(w).mapv(|p| p * p).sum() / n;
        saturate(variance)
    }

    fn gradient(&self, w: &Vector) -> Vector {
        let n = self.x.nrows() as f64;
        self.x.t().dot(&self.x.dot(w)) * (2.0 / n)
    }

    fn project(&self, w: Vector) -> Vector {
        linalg::unit(w)
    }
}

/// Maps an overflowed objective to `+inf` instead of NaN. For a minimized loss
/// that is the worst value; a maximized objective reads it as unbounded.
fn saturate(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("objective overflowed ({}), saturating to +inf", value);
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_mse_value_and_gradient() {
        let x_b = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
        let y = array![2.0, 4.0, 6.0];
        let mse = MeanSquaredError::new(x_b.view(), y.view());

        let theta = array![0.0, 2.0];
        assert_abs_diff_eq!(mse.value(&theta), 0.0, epsilon = 1e-12);
        assert!(mse.gradient(&theta).iter().all(|g| g.abs() < 1e-12));

        let zero = Vector::zeros(2);
        assert_abs_diff_eq!(mse.value(&zero), 56.0 / 3.0, epsilon = 1e-12);
        let grad = mse.gradient(&zero);
        assert_abs_diff_eq!(grad[0], -2.0 * 12.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[1], -2.0 * 28.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mse_sample_gradients_average_to_batch_gradient() {
        let x_b = array![[1.0, 0.5], [1.0, -1.0], [1.0, 2.0], [1.0, 0.0]];
        let y = array![1.0, -2.0, 3.5, 0.25];
        let mse = MeanSquaredError::new(x_b.view(), y.view());
        let theta = array![0.3, -0.7];

        let mut sum = Vector::zeros(2);
        for i in 0..mse.n_samples() {
            sum += &mse.sample_gradient(&theta, i);
        }
        let batch = mse.gradient(&theta);
        let n = mse.n_samples() as f64;
        for (s, b) in sum.iter().zip(batch.iter()) {
            assert_abs_diff_eq!(s / n, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mse_overflow_saturates() {
        let x_b = array![[1.0, 1e200]];
        let y = array![0.0];
        let mse = MeanSquaredError::new(x_b.view(), y.view());
        assert_eq!(mse.value(&array![0.0, 1e200]), f64::INFINITY);
    }

    #[test]
    fn test_projected_variance_overflow_is_positive_infinity() {
        let x = array![[1e200], [-1e200]];
        let pv = ProjectedVariance::new(x.view());
        assert_eq!(pv.value(&array![1.0]), f64::INFINITY);
    }

    #[test]
    fn test_projected_variance() {
        let x = array![[1.0, 0.0], [-1.0, 0.0], [2.0, 0.0], [-2.0, 0.0]];
        let pv = ProjectedVariance::new(x.view());

        assert_abs_diff_eq!(pv.value(&array![1.0, 0.0]), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(pv.value(&array![0.0, 1.0]), 0.0, epsilon = 1e-12);

        let grad = pv.gradient(&array![1.0, 0.0]);
        assert_abs_diff_eq!(grad[0], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[1], 0.0, epsilon = 1e-12);

        let projected = pv.project(array![3.0, 4.0]);
        assert_abs_diff_eq!(linalg::norm(&projected.view()), 1.0, epsilon = 1e-12);
    }
}
