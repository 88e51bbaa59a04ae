use ndarray::array;
use sigmanet::nn::accuracy;
use sigmanet::{Dataset, FeedForwardNetwork, LogisticRegression, NetworkConfig, TrainingConfig};

fn main() -> Result<(), String> {
    println!("=== Feed-forward network on XOR ===");
    xor_demo()?;

    println!();
    println!("=== Logistic regression on a separable set ===");
    logistic_demo()?;

    Ok(())
}

fn xor_demo() -> Result<(), String> {
    let data = Dataset::xor();
    let config = NetworkConfig::new(2, 2, 1, 1)
        .with_learning_rate(0.5)
        .with_epochs(5000)
        .with_print_every(1000);

    // Fixed starting point so the demo always converges
    let mut network = FeedForwardNetwork::from_weights(
        config,
        vec![array![[0.5, -0.4], [0.3, 0.8]], array![[0.6], [-0.7]]],
    )?;

    let history = network.train(data.inputs(), data.targets())?;
    let outputs = network.forward(data.inputs())?;
    let predicted: Vec<u8> = network.predict(data.inputs())?.iter().copied().collect();

    for (row, output) in data.inputs().rows().into_iter().zip(outputs.column(0)) {
        println!("  {} XOR {} -> {:.4}", row[0], row[1], output);
    }
    println!(
        "Total error: {:.6} -> {:.6}",
        history.first().copied().unwrap_or(f64::NAN),
        network.total_error(data.inputs(), data.targets())?
    );
    println!(
        "Accuracy: {:.2}",
        accuracy(&predicted, &data.binary_labels())?
    );
    Ok(())
}

fn logistic_demo() -> Result<(), String> {
    let inputs = array![
        [0.5, 1.0],
        [1.0, 1.5],
        [1.5, 0.5],
        [3.0, 3.5],
        [3.5, 3.0],
        [4.0, 4.5]
    ];
    let labels = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let data = Dataset::from_labels(inputs, labels)?.with_bias_column();

    let mut model = LogisticRegression::with_seed(42);
    let config = TrainingConfig::new(300, 0.1).with_print_every(50);
    model.fit_with_config(data.inputs(), &data.labels(), &config)?;

    let predicted = model.predict(data.inputs())?;
    println!("Weights: {:?}", model.weights());
    println!("Predictions: {:?}", predicted);
    println!(
        "Accuracy: {:.2}",
        accuracy(&predicted, &data.binary_labels())?
    );
    Ok(())
}
