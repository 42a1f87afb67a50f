//! Small dense helpers on top of `ndarray` used by the fitting code.

use crate::error::{MlError, Result};
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, ArrayView2, Axis, s};

/// Prepends a column of ones so the intercept folds into the parameter vector.
pub fn add_intercept(x: &ArrayView2<f64>) -> Matrix {
    let mut x_b = Matrix::ones((x.nrows(), x.ncols() + 1));
    x_b.slice_mut(s![.., 1..]).assign(x);
    x_b
}

/// Per-column mean. Empty input yields a vector of zeros.
pub fn column_means(x: &ArrayView2<f64>) -> Vector {
    x.mean_axis(Axis(0))
        .unwrap_or_else(|| Vector::zeros(x.ncols()))
}

/// Subtracts the per-column mean from every row.
pub fn demean(x: &ArrayView2<f64>) -> Matrix {
    let means = column_means(x);
    x - &means.view().insert_axis(Axis(0))
}

pub fn norm(v: &ArrayView1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Scales `v` to unit length. A zero vector has no direction and is returned as is.
pub fn unit(v: Vector) -> Vector {
    let n = norm(&v.view());
    if n > 0.0 { v / n } else { v }
}

/// Inverse of a square matrix by Gauss-Jordan elimination with partial pivoting.
pub fn inverse(a: &ArrayView2<f64>) -> Result<Matrix> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MlError::invalid(
            "a",
            format!("matrix must be square, got {}x{}", n, a.ncols()),
        ));
    }

    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let tolerance = f64::EPSILON * n as f64 * scale.max(1.0);

    let mut aug = Matrix::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(a);
    for i in 0..n {
        aug[(i, n + i)] = 1.0;
    }

    for col in 0..n {
        let mut pivot = col;
        for row in (col + 1)..n {
            if aug[(row, col)].abs() > aug[(pivot, col)].abs() {
                pivot = row;
            }
        }

        if !(aug[(pivot, col)].abs() > tolerance) {
            return Err(MlError::SingularMatrix);
        }

        if pivot != col {
            for j in 0..2 * n {
                aug.swap((col, j), (pivot, j));
            }
        }

        let p = aug[(col, col)];
        aug.row_mut(col).mapv_inplace(|v| v / p);
        let pivot_row = aug.row(col).to_owned();

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[(row, col)];
            if factor != 0.0 {
                aug.row_mut(row).scaled_add(-factor, &pivot_row);
            }
        }
    }

    Ok(aug.slice(s![.., n..]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_add_intercept() {
        let x = array![[2.0, 3.0], [4.0, 5.0]];
        let x_b = add_intercept(&x.view());
        assert_eq!(x_b, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_demean_zeroes_column_means() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [6.0, 30.0]];
        let centered = demean(&x.view());
        for m in column_means(&centered.view()).iter() {
            assert_abs_diff_eq!(*m, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unit_keeps_zero_vector() {
        let v = unit(Vector::zeros(3));
        assert_eq!(v, Vector::zeros(3));

        let w = unit(array![3.0, 4.0]);
        assert_abs_diff_eq!(w[0], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let a = array![[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]];
        let inv = inverse(&a.view()).unwrap();
        let product = a.dot(&inv);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let inv = inverse(&a.view()).unwrap();
        assert_eq!(inv, a);
    }

    #[test]
    fn test_inverse_singular() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(inverse(&a.view()), Err(MlError::SingularMatrix));
    }

    #[test]
    fn test_inverse_not_square() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(matches!(
            inverse(&a.view()),
            Err(MlError::InvalidParameter { .. })
        ));
    }
}
