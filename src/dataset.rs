use crate::error::{MlError, Result};
use crate::{Matrix, Vector};
use ndarray::Axis;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(MlError::SampleMismatch {
                x_rows: features.nrows(),
                y_len: labels.len(),
            });
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Shuffles the samples and splits off `round(n_samples * test_size)` of
    /// them as the test set. Returns `(train, test)`.
    pub fn train_test_split<R: Rng + ?Sized>(
        &self,
        test_size: f64,
        rng: &mut R,
    ) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(MlError::invalid(
                "test_size",
                format!("must be between 0 and 1, got {}", test_size),
            ));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        if n_test == 0 || n_test >= n_samples {
            return Err(MlError::invalid(
                "test_size",
                format!(
                    "{} of {} samples leaves an empty split",
                    test_size, n_samples
                ),
            ));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(rng);
        let (test_idx, train_idx) = indices.split_at(n_test);

        let train = Dataset::new(
            self.features.select(Axis(0), train_idx),
            self.labels.select(Axis(0), train_idx),
        )?;
        let test = Dataset::new(
            self.features.select(Axis(0), test_idx),
            self.labels.select(Axis(0), test_idx),
        )?;

        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let labels = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, labels).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_mismatch() {
        let err = Dataset::new(Matrix::zeros((3, 2)), Vector::zeros(4)).unwrap_err();
        assert_eq!(err, MlError::SampleMismatch { x_rows: 3, y_len: 4 });
    }

    #[test]
    fn test_train_test_split() {
        let features = Matrix::from_shape_fn((100, 5), |(i, j)| (i * 5 + j) as f64);
        let labels = Vector::from_shape_fn(100, |i| i as f64);
        let dataset = Dataset::new(features, labels).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (train, test) = dataset.train_test_split(0.2, &mut rng).unwrap();
        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);

        // Rows stay aligned with their labels and every sample lands exactly once.
        let mut seen: Vec<usize> = Vec::new();
        for part in [&train, &test] {
            for (row, label) in part.features.rows().into_iter().zip(part.labels.iter()) {
                assert_eq!(row[0], label * 5.0);
                seen.push(*label as usize);
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_train_test_split_invalid_size() {
        let dataset = Dataset::new(Matrix::zeros((4, 1)), Vector::zeros(4)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(dataset.train_test_split(0.0, &mut rng).is_err());
        assert!(dataset.train_test_split(1.0, &mut rng).is_err());
        assert!(dataset.train_test_split(0.01, &mut rng).is_err());
    }
}
