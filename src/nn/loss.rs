// src/nn/loss.rs
// Scalar objectives reported by the two models, plus the accuracy metric.

use ndarray::{ArrayBase, Data, Dimension, Ix1, Zip};

/// Binary Cross Entropy: BCE = -mean(targets * log(predictions) + (1-targets) * log(1-predictions))
///
/// Predictions are not clipped. A prediction of exactly 0 or 1 yields NaN or infinity,
/// which is returned as is.
pub fn binary_cross_entropy<S1, S2>(
    targets: &ArrayBase<S1, Ix1>,
    predictions: &ArrayBase<S2, Ix1>,
) -> Result<f64, String>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if targets.len() != predictions.len() {
        return Err(format!(
            "BCE shape mismatch: {} targets vs {} predictions",
            targets.len(),
            predictions.len()
        ));
    }
    if targets.is_empty() {
        return Err("BCE requires at least one sample".to_string());
    }

    let total: f64 = Zip::from(targets)
        .and(predictions)
        .fold(0.0, |acc, &y, &p| acc + y * p.ln() + (1.0 - y) * (1.0 - p).ln());

    Ok(-total / targets.len() as f64)
}

/// Half the sum of squared errors: sum((targets - outputs)^2) / 2
pub fn half_sum_squared_error<S1, S2, D>(
    targets: &ArrayBase<S1, D>,
    outputs: &ArrayBase<S2, D>,
) -> Result<f64, String>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if targets.shape() != outputs.shape() {
        return Err(format!(
            "Squared error shape mismatch: targets {:?} vs outputs {:?}",
            targets.shape(),
            outputs.shape()
        ));
    }

    let total: f64 = Zip::from(targets)
        .and(outputs)
        .fold(0.0, |acc, &y, &o| acc + (y - o).powi(2));

    Ok(total / 2.0)
}

/// Fraction of predicted labels equal to the expected ones.
pub fn accuracy(predicted: &[u8], expected: &[u8]) -> Result<f64, String> {
    if predicted.len() != expected.len() {
        return Err(format!(
            "Accuracy length mismatch: {} predictions vs {} labels",
            predicted.len(),
            expected.len()
        ));
    }
    if predicted.is_empty() {
        return Ok(0.0);
    }

    let correct = predicted
        .iter()
        .zip(expected)
        .filter(|(p, e)| p == e)
        .count();
    Ok(correct as f64 / predicted.len() as f64)
}
