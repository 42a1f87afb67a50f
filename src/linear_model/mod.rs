//! Linear models for regression.
//!
//! `LinearRegression` can be fitted three ways:
//! - `fit_normal`: closed-form normal equation
//! - `fit_gd`: batch gradient descent on the mean squared error
//! - `fit_sgd`: stochastic gradient descent with a decaying step size
//!
//! # Examples
//!
//! ```rust
//! use gradfit::{LinearRegression, StandardScaler};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![3.0, 5.0, 7.0, 9.0];
//!
//! let mut scaler = StandardScaler::new();
//! let x_scaled = scaler.fit_transform(&x).unwrap();
//!
//! let mut model = LinearRegression::new().random_state(0);
//! model.fit_sgd(&x_scaled, &y, 50, 5.0, 50.0).unwrap();
//! assert!(model.score(&x_scaled, &y).unwrap() > 0.99);
//! ```

mod linear_regression;

pub use linear_regression::LinearRegression;
