use crate::error::{MlError, Result};
use crate::optim::{GradientDescent, MeanSquaredError, Sgd};
use crate::{Matrix, Vector, linalg};
use ndarray::{ArrayView1, s};
use rand::Rng;
use std::fmt;

/// Ordinary least squares fitted in closed form, by batch gradient descent,
/// or by stochastic gradient descent.
#[derive(Clone, Debug, Default)]
pub struct LinearRegression {
    fitted: Option<FittedLinear>,
    random_state: Option<u64>,
}

/// `theta[0]` is the intercept, `theta[1..]` the coefficients.
#[derive(Clone, Debug, PartialEq)]
struct FittedLinear {
    theta: Vector,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            fitted: None,
            random_state: None,
        }
    }

    /// Seeds the sample shuffling used by [`LinearRegression::fit_sgd`].
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn intercept(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.theta[0])
    }

    pub fn coefficients(&self) -> Option<ArrayView1<'_, f64>> {
        self.fitted.as_ref().map(|f| f.theta.slice(s![1..]))
    }

    /// Intercept followed by the coefficients.
    pub fn theta(&self) -> Option<&Vector> {
        self.fitted.as_ref().map(|f| &f.theta)
    }

    /// Solves the normal equation `θ = (X_bᵀX_b)⁻¹X_bᵀy`.
    ///
    /// A singular `X_bᵀX_b` is reported as [`MlError::SingularMatrix`].
    pub fn fit_normal(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_training_data(x, y)?;
        log::info!(
            "fitting linear regression by normal equation on {}x{} data",
            x.nrows(),
            x.ncols()
        );

        let x_b = linalg::add_intercept(&x.view());
        let xtx_inv = linalg::inverse(&x_b.t().dot(&x_b).view())?;
        let theta = xtx_inv.dot(&x_b.t()).dot(y);

        self.fitted = Some(FittedLinear { theta });
        Ok(())
    }

    /// Batch gradient descent on the mean squared error, starting from zero.
    pub fn fit_gd(
        &mut self,
        x: &Matrix,
        y: &Vector,
        eta: f64,
        n_iters: usize,
        epsilon: f64,
    ) -> Result<()> {
        self.fit_with(x, y, &GradientDescent::with_params(eta, n_iters, epsilon))
    }

    /// Batch gradient descent with a prepared optimizer configuration.
    pub fn fit_with(&mut self, x: &Matrix, y: &Vector, optimizer: &GradientDescent) -> Result<()> {
        check_training_data(x, y)?;
        optimizer.validate()?;
        log::info!(
            "fitting linear regression by gradient descent on {}x{} data",
            x.nrows(),
            x.ncols()
        );

        let x_b = linalg::add_intercept(&x.view());
        let objective = MeanSquaredError::new(x_b.view(), y.view());
        let solution = optimizer.minimize(&objective, Vector::zeros(x_b.ncols()));
        log::debug!(
            "gradient descent took {} iterations (converged: {})",
            solution.iterations,
            solution.converged
        );

        self.fitted = Some(FittedLinear {
            theta: solution.params,
        });
        Ok(())
    }

    /// Stochastic gradient descent over `n_iter` shuffled passes.
    ///
    /// Shuffling draws from the seed given to [`LinearRegression::random_state`],
    /// or from entropy when none was set.
    pub fn fit_sgd(
        &mut self,
        x: &Matrix,
        y: &Vector,
        n_iter: usize,
        t0: f64,
        t1: f64,
    ) -> Result<()> {
        let mut rng = crate::rng_from_state(self.random_state);
        self.fit_sgd_with_rng(x, y, n_iter, t0, t1, &mut rng)
    }

    pub fn fit_sgd_with_rng<R: Rng + ?Sized>(
        &mut self,
        x: &Matrix,
        y: &Vector,
        n_iter: usize,
        t0: f64,
        t1: f64,
        rng: &mut R,
    ) -> Result<()> {
        check_training_data(x, y)?;
        let sgd = Sgd::with_params(n_iter, t0, t1);
        sgd.validate()?;
        log::info!(
            "fitting linear regression by sgd ({} passes) on {}x{} data",
            n_iter,
            x.nrows(),
            x.ncols()
        );

        let x_b = linalg::add_intercept(&x.view());
        let objective = MeanSquaredError::new(x_b.view(), y.view());
        let solution = sgd.minimize(&objective, Vector::zeros(x_b.ncols()), rng);

        self.fitted = Some(FittedLinear {
            theta: solution.params,
        });
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or(MlError::NotFitted("LinearRegression"))?;

        let n_coefficients = fitted.theta.len() - 1;
        if x.ncols() != n_coefficients {
            return Err(MlError::FeatureMismatch {
                expected: n_coefficients,
                got: x.ncols(),
            });
        }

        let x_b = linalg::add_intercept(&x.view());
        Ok(x_b.dot(&fitted.theta))
    }

    /// Coefficient of determination of the predictions on `x` against `y`.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}

impl fmt::Display for LinearRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearRegression()")
    }
}

fn check_training_data(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(MlError::SampleMismatch {
            x_rows: x.nrows(),
            y_len: y.len(),
        });
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(MlError::EmptyInput);
    }
    Ok(())
}
