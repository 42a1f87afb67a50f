//! Dimensionality reduction.
//!
//! `PCA` finds principal components one at a time by gradient ascent on the
//! projected variance, deflating the data between components.
//!
//! # Examples
//!
//! ```rust
//! use gradfit::PCA;
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 2.1],
//!     [2.0, 3.9],
//!     [3.0, 6.2],
//!     [4.0, 7.8]
//! ];
//!
//! let mut pca = PCA::new(1).unwrap().random_state(0);
//! let scores = pca.fit_transform(&x, 0.1, 10_000).unwrap();
//! assert_eq!(scores.shape(), &[4, 1]);
//!
//! let back = pca.inverse_transform(&scores).unwrap();
//! assert_eq!(back.shape(), &[4, 2]);
//! ```

mod pca;

pub use pca::PCA;
