//! Linear regression and principal component extraction fitted by
//! first-order iterative optimization.
//!
//! Three fits share the optimizer in [`optim`]:
//! - batch gradient descent for [`LinearRegression::fit_gd`]
//! - epoch-based stochastic gradient descent for [`LinearRegression::fit_sgd`]
//! - gradient ascent on the unit sphere for [`PCA::fit`]
//!
//! ```rust
//! use gradfit::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit_normal(&x, &y).unwrap();
//! let predictions = model.predict(&array![[5.0]]).unwrap();
//! assert!((predictions[0] - 10.0).abs() < 1e-8);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod decomposition;
pub mod error;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod optim;
pub mod preprocessing;

pub use dataset::Dataset;
pub use decomposition::PCA;
pub use error::{MlError, Result};
pub use linear_model::LinearRegression;
pub use optim::{GradientDescent, Sgd, Solution};
pub use preprocessing::StandardScaler;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG used by the `fit_*` entry points that don't take an explicit source.
pub(crate) fn rng_from_state(random_state: Option<u64>) -> ChaCha8Rng {
    match random_state {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
