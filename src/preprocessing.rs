use crate::error::{MlError, Result};
use crate::{Matrix, Vector};
use ndarray::Axis;

/// Standardizes each column to zero mean and unit (population) variance.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    fitted: Option<ScalerStats>,
}

#[derive(Clone, Debug, PartialEq)]
struct ScalerStats {
    mean: Vector,
    scale: Vector,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self { fitted: None }
    }

    pub fn mean(&self) -> Option<&Vector> {
        self.fitted.as_ref().map(|s| &s.mean)
    }

    pub fn scale(&self) -> Option<&Vector> {
        self.fitted.as_ref().map(|s| &s.scale)
    }

    /// Computes per-column mean and standard deviation.
    ///
    /// A constant column has no scale to divide by and is rejected with
    /// [`MlError::ZeroVariance`]; the previous statistics are kept.
    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(MlError::EmptyInput);
        }

        let mean = data.mean_axis(Axis(0)).ok_or(MlError::EmptyInput)?;
        let scale = data.std_axis(Axis(0), 0.0);

        if let Some(column) = scale.iter().position(|&s| s == 0.0) {
            return Err(MlError::ZeroVariance { column });
        }

        self.fitted = Some(ScalerStats { mean, scale });
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let stats = self.stats_for(data)?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= &stats.mean;
            row /= &stats.scale;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    /// Undoes [`StandardScaler::transform`].
    pub fn inverse_transform(&self, data: &Matrix) -> Result<Matrix> {
        let stats = self.stats_for(data)?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row *= &stats.scale;
            row += &stats.mean;
        }

        Ok(result)
    }

    fn stats_for(&self, data: &Matrix) -> Result<&ScalerStats> {
        let stats = self
            .fitted
            .as_ref()
            .ok_or(MlError::NotFitted("StandardScaler"))?;

        if data.ncols() != stats.mean.len() {
            return Err(MlError::FeatureMismatch {
                expected: stats.mean.len(),
                got: data.ncols(),
            });
        }

        Ok(stats)
    }
}
