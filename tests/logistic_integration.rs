use ndarray::array;
use sigmanet::nn::accuracy;
use sigmanet::{Dataset, LogisticRegression, TrainingConfig};

fn two_blobs() -> Dataset {
    let inputs = array![
        [0.5, 1.0],
        [1.0, 1.5],
        [1.5, 0.5],
        [3.0, 3.5],
        [3.5, 3.0],
        [4.0, 4.5]
    ];
    let labels = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    Dataset::from_labels(inputs, labels)
        .unwrap()
        .with_bias_column()
}

#[test]
fn test_logistic_regression_separates_blobs() {
    let data = two_blobs();

    for seed in [1, 2, 3, 4, 5] {
        let mut model = LogisticRegression::with_seed(seed);
        let config = TrainingConfig::new(300, 0.1);
        model
            .fit_with_config(data.inputs(), &data.labels(), &config)
            .unwrap();

        let history = model.loss_history();
        assert_eq!(history.len(), 300);
        for pair in history[3..].windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12, "seed {}: loss went up", seed);
        }

        let predicted = model.predict(data.inputs()).unwrap();
        assert_eq!(accuracy(&predicted, &data.binary_labels()).unwrap(), 1.0);
    }
}

#[test]
fn test_refit_starts_from_fresh_weights() {
    let data = two_blobs();
    let mut model = LogisticRegression::with_seed(11);

    model.fit(data.inputs(), &data.labels(), 50, 0.1).unwrap();
    let first = model.weights().unwrap().clone();
    let first_history = model.loss_history().to_vec();

    model.fit(data.inputs(), &data.labels(), 50, 0.1).unwrap();
    // Same seed and data: the second fit repeats the first instead of continuing it
    assert_eq!(model.weights().unwrap(), &first);
    assert_eq!(model.loss_history(), first_history.as_slice());
}

#[test]
fn test_predict_proba_in_unit_interval() {
    let data = two_blobs();
    let mut model = LogisticRegression::with_seed(8);
    model.fit(data.inputs(), &data.labels(), 100, 0.1).unwrap();

    let probabilities = model.predict_proba(data.inputs()).unwrap();
    assert_eq!(probabilities.len(), data.len());
    assert!(probabilities.iter().all(|&p| p > 0.0 && p < 1.0));
}
