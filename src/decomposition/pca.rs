use crate::error::{MlError, Result};
use crate::optim::{GradientDescent, Objective, ProjectedVariance};
use crate::{Matrix, Vector, linalg};
use ndarray::Axis;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use std::fmt;

/// Principal component analysis by gradient ascent with deflation.
///
/// Each component is the unit direction maximizing the variance of the
/// projected data. Once found, its contribution is removed from the working
/// copy of the data before the next search, which keeps the extracted
/// directions orthogonal.
#[derive(Clone, Debug)]
pub struct PCA {
    n_components: usize,
    epsilon: f64,
    random_state: Option<u64>,
    fitted: Option<FittedPCA>,
}

#[derive(Clone, Debug, PartialEq)]
struct FittedPCA {
    /// Shape: (n_components, n_features), unit-norm rows.
    components: Matrix,
    /// Projected variance of each component on the deflated data it was found on.
    explained_variance: Vector,
    /// Summed column variance of the centred training data.
    total_variance: f64,
}

impl PCA {
    pub fn new(n_components: usize) -> Result<Self> {
        if n_components < 1 {
            return Err(MlError::invalid("n_components", "must be at least 1"));
        }

        Ok(Self {
            n_components,
            epsilon: 1e-8,
            random_state: None,
            fitted: None,
        })
    }

    /// Objective-delta threshold for each component search.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Seeds the initial directions drawn by [`PCA::fit`].
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn n_components(&self) -> usize {
        self.n_components
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    pub fn components(&self) -> Option<&Matrix> {
        self.fitted.as_ref().map(|f| &f.components)
    }

    pub fn explained_variance(&self) -> Option<&Vector> {
        self.fitted.as_ref().map(|f| &f.explained_variance)
    }

    pub fn explained_variance_ratio(&self) -> Option<Vector> {
        self.fitted.as_ref().map(|f| {
            if f.total_variance > 0.0 {
                &f.explained_variance / f.total_variance
            } else {
                Vector::zeros(f.explained_variance.len())
            }
        })
    }

    /// Extracts the leading components of `x`.
    ///
    /// Initial directions draw from the seed given to [`PCA::random_state`],
    /// or from entropy when none was set.
    pub fn fit(&mut self, x: &Matrix, eta: f64, n_iters: usize) -> Result<()> {
        let mut rng = crate::rng_from_state(self.random_state);
        self.fit_with_rng(x, eta, n_iters, &mut rng)
    }

    pub fn fit_with_rng<R: Rng + ?Sized>(
        &mut self,
        x: &Matrix,
        eta: f64,
        n_iters: usize,
        rng: &mut R,
    ) -> Result<()> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(MlError::EmptyInput);
        }

        let n_features = x.ncols();
        if self.n_components > n_features {
            return Err(MlError::invalid(
                "n_components",
                format!(
                    "n_components={} cannot be larger than the number of features={}",
                    self.n_components, n_features
                ),
            ));
        }

        let optimizer = GradientDescent::with_params(eta, n_iters, self.epsilon);
        optimizer.validate()?;
        log::info!(
            "extracting {} principal components from {}x{} data",
            self.n_components,
            x.nrows(),
            n_features
        );

        let mut working = linalg::demean(&x.view());
        let n_samples = working.nrows() as f64;
        let total_variance = working.mapv(|v| v * v).sum() / n_samples;

        let mut components = Matrix::zeros((self.n_components, n_features));
        let mut explained_variance = Vector::zeros(self.n_components);
        let uniform = Uniform::new(0.0, 1.0);

        for i in 0..self.n_components {
            let initial = Vector::random_using(n_features, uniform, rng);
            let objective = ProjectedVariance::new(working.view());
            let solution = optimizer.maximize(&objective, initial);
            log::debug!(
                "component {} found after {} iterations (converged: {})",
                i,
                solution.iterations,
                solution.converged
            );

            let w = solution.params;
            explained_variance[i] = objective.value(&w);
            components.row_mut(i).assign(&w);

            let scores = working.dot(&w);
            let projection = scores
                .view()
                .insert_axis(Axis(1))
                .dot(&w.view().insert_axis(Axis(0)));
            working -= &projection;
        }

        self.fitted = Some(FittedPCA {
            components,
            explained_variance,
            total_variance,
        });
        Ok(())
    }

    pub fn fit_transform(&mut self, x: &Matrix, eta: f64, n_iters: usize) -> Result<Matrix> {
        self.fit(x, eta, n_iters)?;
        self.transform(x)
    }

    /// Projects `x` onto the components. `x` is not centred here.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let components = self.components().ok_or(MlError::NotFitted("PCA"))?;

        if x.ncols() != components.ncols() {
            return Err(MlError::FeatureMismatch {
                expected: components.ncols(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(&components.t()))
    }

    /// Maps component scores back to feature space.
    pub fn inverse_transform(&self, x: &Matrix) -> Result<Matrix> {
        let components = self.components().ok_or(MlError::NotFitted("PCA"))?;

        if x.ncols() != components.nrows() {
            return Err(MlError::FeatureMismatch {
                expected: components.nrows(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(components))
    }
}

impl fmt::Display for PCA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PCA(n_components = {})", self.n_components)
    }
}
