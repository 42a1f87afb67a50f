use gradfit::metrics::mean_squared_error;
use gradfit::{Dataset, LinearRegression, Matrix, PCA, StandardScaler, Vector};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    // Step 1: Synthetic data: y = 4 + 3·x0 - 2·x1 + 0.5·x2 + noise
    let feature_dist = Normal::new(0.0, 10.0).map_err(|e| e.to_string())?;
    let noise_dist = Normal::new(0.0, 0.5).map_err(|e| e.to_string())?;
    let features = Matrix::random_using((500, 3), feature_dist, &mut rng);
    let noise = Vector::random_using(500, noise_dist, &mut rng);
    let labels = features
        .rows()
        .into_iter()
        .zip(noise.iter())
        .map(|(r, e)| 4.0 + 3.0 * r[0] - 2.0 * r[1] + 0.5 * r[2] + e)
        .collect::<Vector>();
    let dataset = Dataset::new(features, labels)?;
    println!(
        "Dataset: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );

    // Step 2: Split into train/test
    let (train_data, test_data) = dataset.train_test_split(0.2, &mut rng)?;

    // Step 3: Preprocessing - standardize features
    let mut scaler = StandardScaler::new();
    let train_features = scaler.fit_transform(&train_data.features)?;
    let test_features = scaler.transform(&test_data.features)?;

    // Step 4: Fit the same model three ways
    let mut normal = LinearRegression::new();
    normal.fit_normal(&train_features, &train_data.labels)?;

    let mut gd = LinearRegression::new();
    gd.fit_gd(&train_features, &train_data.labels, 0.01, 10_000, 1e-8)?;

    let mut sgd = LinearRegression::new();
    sgd.fit_sgd_with_rng(&train_features, &train_data.labels, 5, 5.0, 50.0, &mut rng)?;

    // Step 5: Evaluate
    println!("Results:");
    for (name, model) in [("normal", &normal), ("gd", &gd), ("sgd", &sgd)] {
        let score = model.score(&test_features, &test_data.labels)?;
        let mse = mean_squared_error(&test_data.labels, &model.predict(&test_features)?)?;
        println!("  {:<6} R² {:.4}  MSE {:.4}  theta {:?}", name, score, mse, model.theta());
    }

    // Step 6: Principal components of the standardized features
    let mut pca = PCA::new(2)?.random_state(7);
    let scores = pca.fit_transform(&train_features, 0.01, 10_000)?;
    println!("{} -> scores shape {:?}", pca, scores.shape());
    if let (Some(components), Some(ratio)) = (pca.components(), pca.explained_variance_ratio()) {
        println!("  Components: {:?}", components);
        println!("  Explained variance ratio: {:?}", ratio);
    }

    Ok(())
}
