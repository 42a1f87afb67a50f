use thiserror::Error;

/// Errors returned by fitting, prediction and the metric helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MlError {
    #[error("input matrix must have at least one sample and one feature")]
    EmptyInput,

    #[error("number of samples in X ({x_rows}) doesn't match length of y ({y_len})")]
    SampleMismatch { x_rows: usize, y_len: usize },

    #[error("number of features in X ({got}) doesn't match the fitted width ({expected})")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("y_true ({y_true}) and y_pred ({y_pred}) must have the same length")]
    LengthMismatch { y_true: usize, y_pred: usize },

    #[error("{0} not fitted. Call fit() first.")]
    NotFitted(&'static str),

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("column {column} has zero variance and cannot be scaled")]
    ZeroVariance { column: usize },
}

impl MlError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MlError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MlError>;
