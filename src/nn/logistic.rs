// src/nn/logistic.rs
// Binary logistic regression trained with full-batch gradient descent.

use crate::config::{TrainingConfig, report_progress};
use crate::initializers::{WeightInit, init_vector, make_rng};
use crate::nn::activations::sigmoid_array;
use crate::nn::loss::binary_cross_entropy;
use crate::ops::{check_rows, matvec};
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

/// Logistic regression classifier: p(y = 1 | x) = sigmoid(x . w)
///
/// There is no separate bias term. Callers that need one append a column of ones
/// to the inputs (see [`crate::dataset::Dataset::with_bias_column`]).
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Learned weights, one per input feature. `None` until the model is fitted.
    weights: Option<Array1<f64>>,
    /// Loss after every epoch of the last call to `fit`.
    loss_history: Vec<f64>,
    seed: Option<u64>,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            weights: None,
            loss_history: Vec::new(),
            seed: None,
        }
    }

    /// Creates a model whose initial weights are drawn from a seeded generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new()
        }
    }

    /// Creates an already fitted model from explicit weights.
    pub fn from_weights(weights: Array1<f64>) -> Result<Self, String> {
        if weights.is_empty() {
            return Err("Logistic regression needs at least one weight".to_string());
        }
        Ok(Self {
            weights: Some(weights),
            ..Self::new()
        })
    }

    pub fn weights(&self) -> Option<&Array1<f64>> {
        self.weights.as_ref()
    }

    pub fn loss_history(&self) -> &[f64] {
        &self.loss_history
    }

    pub fn is_fitted(&self) -> bool {
        self.weights.is_some()
    }

    /// Mean binary cross entropy of `weights` over the batch.
    pub fn cost_function<S1, S2, S3>(
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix1>,
        weights: &ArrayBase<S3, Ix1>,
    ) -> Result<f64, String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        S3: Data<Elem = f64>,
    {
        let y_hat = sigmoid_array(&matvec(x, weights)?);
        binary_cross_entropy(y, &y_hat)
    }

    /// Runs `epochs` steps of gradient descent with learning rate `lr`.
    pub fn fit<S1, S2>(
        &mut self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix1>,
        epochs: usize,
        lr: f64,
    ) -> Result<(), String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        self.fit_with_config(x, y, &TrainingConfig::new(epochs, lr))
    }

    /// Fits the model from freshly initialized U(0, 1) weights.
    ///
    /// Every epoch computes `y_hat = sigmoid(X w)`, applies
    /// `w -= lr * X^T (y_hat - y) / N` and records the loss of the updated weights.
    pub fn fit_with_config<S1, S2>(
        &mut self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix1>,
        config: &TrainingConfig,
    ) -> Result<(), String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        config.validate()?;
        let n_samples = x.nrows();
        if n_samples == 0 || x.ncols() == 0 {
            return Err(format!(
                "Cannot fit on an empty batch of shape ({}, {})",
                n_samples,
                x.ncols()
            ));
        }
        check_rows("targets", y.len(), n_samples)?;

        let mut rng = make_rng(self.seed);
        let mut weights = init_vector(x.ncols(), WeightInit::Uniform, &mut rng)?;
        let mut loss_history = Vec::with_capacity(config.epochs);
        let scale = config.learning_rate / n_samples as f64;

        for epoch in 0..config.epochs {
            let y_hat = sigmoid_array(&matvec(x, &weights)?);
            let residual = &y_hat - y;
            let gradient = x.t().dot(&residual);
            weights.scaled_add(-scale, &gradient);

            let loss = Self::cost_function(x, y, &weights)?;
            report_progress(config.print_every, epoch, config.epochs, loss);
            loss_history.push(loss);
        }

        self.weights = Some(weights);
        self.loss_history = loss_history;
        Ok(())
    }

    /// Probability of the positive class for every row of `x`.
    pub fn predict_proba<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array1<f64>, String>
    where
        S: Data<Elem = f64>,
    {
        let weights = self
            .weights
            .as_ref()
            .ok_or("Model has not been fitted yet")?;
        Ok(sigmoid_array(&matvec(x, weights)?))
    }

    /// Labels in {0, 1}. A probability of exactly 0.5 maps to 0.
    pub fn predict<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Vec<u8>, String>
    where
        S: Data<Elem = f64>,
    {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities
            .iter()
            .map(|&p| if p > 0.5 { 1 } else { 0 })
            .collect())
    }
}
