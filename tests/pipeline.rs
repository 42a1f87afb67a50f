use approx::assert_abs_diff_eq;
use gradfit::metrics::{mean_squared_error, r2_score};
use gradfit::{Dataset, LinearRegression, Matrix, MlError, PCA, StandardScaler, Vector, linalg};
use ndarray::array;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// y = 3 + 0.5·x0 - 0.02·x1 on features of very different magnitudes.
fn housing_like(n: usize) -> Dataset {
    let features = Matrix::from_shape_fn((n, 2), |(i, j)| {
        let t = i as f64;
        if j == 0 {
            (t * 0.37).sin() * 4.0 + t * 0.1
        } else {
            100.0 + (t * 1.3).cos() * 50.0
        }
    });
    let labels = features
        .rows()
        .into_iter()
        .map(|r| 3.0 + 0.5 * r[0] - 0.02 * r[1])
        .collect::<Vector>();
    Dataset::new(features, labels).unwrap()
}

#[test]
fn scaled_regression_fits_agree() {
    init_logging();

    let dataset = housing_like(80);
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let (train, test) = dataset.train_test_split(0.25, &mut rng).unwrap();

    let mut scaler = StandardScaler::new();
    let x_train = scaler.fit_transform(&train.features).unwrap();
    let x_test = scaler.transform(&test.features).unwrap();

    let mut normal = LinearRegression::new();
    normal.fit_normal(&x_train, &train.labels).unwrap();

    let mut gd = LinearRegression::new();
    gd.fit_gd(&x_train, &train.labels, 0.1, 10_000, 1e-12).unwrap();

    let mut sgd = LinearRegression::new();
    sgd.fit_sgd_with_rng(&x_train, &train.labels, 100, 5.0, 50.0, &mut rng)
        .unwrap();

    for model in [&normal, &gd, &sgd] {
        let score = model.score(&x_test, &test.labels).unwrap();
        assert!(score > 0.999, "{} scored {}", model, score);
    }

    let normal_pred = normal.predict(&x_test).unwrap();
    let gd_pred = gd.predict(&x_test).unwrap();
    assert!(mean_squared_error(&normal_pred, &gd_pred).unwrap() < 1e-6);
}

#[test]
fn perfect_line_scores_one() {
    init_logging();

    let x = array![[1.0], [2.0], [3.0], [4.0]];
    let y = array![2.0, 4.0, 6.0, 8.0];
    let mut model = LinearRegression::new();
    model.fit_normal(&x, &y).unwrap();

    assert_abs_diff_eq!(model.predict(&array![[5.0]]).unwrap()[0], 10.0, epsilon = 1e-8);
    let y_pred = model.predict(&x).unwrap();
    assert_abs_diff_eq!(r2_score(&y, &y_pred).unwrap(), 1.0, epsilon = 1e-10);
}

#[test]
fn sgd_rejects_zero_passes_before_any_work() {
    let x = array![[1.0], [2.0]];
    let y = array![1.0, 2.0];
    let mut model = LinearRegression::new();
    assert!(matches!(
        model.fit_sgd(&x, &y, 0, 5.0, 50.0),
        Err(MlError::InvalidParameter { .. })
    ));
    assert!(model.predict(&x).is_err());
}

#[test]
fn pca_on_scaled_data_round_trips() {
    init_logging();

    let dataset = housing_like(60);
    let mut scaler = StandardScaler::new();
    let x = scaler.fit_transform(&dataset.features).unwrap();
    let centred = linalg::demean(&x.view());

    let mut pca = PCA::new(2).unwrap().epsilon(1e-14).random_state(99);
    let scores = pca.fit_transform(&x, 0.5, 10_000).unwrap();
    assert_eq!(scores.shape(), &[60, 2]);

    let back = pca.inverse_transform(&pca.transform(&centred).unwrap()).unwrap();
    for (a, b) in centred.iter().zip(back.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-3);
    }
}
