// src/nn/network.rs
// Fully connected sigmoid network trained with manual backpropagation.
//
// Convention: samples are rows. Layer k maps its activation A_k (batch x size_k) to
// A_{k+1} = sigmoid(A_k @ W_k), so W_k has shape (size_k, size_{k+1}). There are no bias
// terms.

use crate::config::{NetworkConfig, report_progress};
use crate::initializers::{init_matrix, make_rng};
use crate::nn::activations::{sigmoid_array, sigmoid_derivative_array};
use crate::nn::loss::half_sum_squared_error;
use crate::ops::{check_rows, matmul};
use ndarray::{Array2, ArrayBase, Data, Ix2};

#[derive(Debug, Clone)]
pub struct FeedForwardNetwork {
    config: NetworkConfig,
    /// One matrix per layer transition, `hidden_layers + 1` in total.
    weights: Vec<Array2<f64>>,
}

impl FeedForwardNetwork {
    /// Builds a network with randomly initialized weights.
    pub fn new(config: NetworkConfig) -> Result<Self, String> {
        config.validate()?;

        let mut rng = make_rng(config.seed);
        let sizes = config.layer_sizes();
        let weights = sizes
            .windows(2)
            .map(|pair| init_matrix(pair[0], pair[1], config.init, &mut rng))
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self { config, weights })
    }

    /// Builds a network from explicit weight matrices.
    ///
    /// Fails unless there are exactly `hidden_layers + 1` matrices and their shapes
    /// chain from `input_size` through `hidden_size` to `output_size`.
    pub fn from_weights(
        config: NetworkConfig,
        weights: Vec<Array2<f64>>,
    ) -> Result<Self, String> {
        config.validate()?;

        if weights.len() != config.num_transitions() {
            return Err(format!(
                "Expected {} weight matrices for {} hidden layers, got {}",
                config.num_transitions(),
                config.hidden_layers,
                weights.len()
            ));
        }

        let sizes = config.layer_sizes();
        for (index, (matrix, pair)) in weights.iter().zip(sizes.windows(2)).enumerate() {
            if matrix.dim() != (pair[0], pair[1]) {
                return Err(format!(
                    "Weight matrix {} has shape {:?}, expected ({}, {})",
                    index,
                    matrix.shape(),
                    pair[0],
                    pair[1]
                ));
            }
        }

        Ok(Self { config, weights })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    /// Number of weight matrices (hidden layers + 1).
    pub fn depth(&self) -> usize {
        self.weights.len()
    }

    fn check_input<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<(), String>
    where
        S: Data<Elem = f64>,
    {
        if x.ncols() != self.config.input_size {
            return Err(format!(
                "Input shape mismatch: got {} features, network expects {}",
                x.ncols(),
                self.config.input_size
            ));
        }
        Ok(())
    }

    /// Output of the whole network for every row of `x`.
    pub fn forward<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, String>
    where
        S: Data<Elem = f64>,
    {
        self.forward_to(x, self.depth())
    }

    /// Activation after `steps` layer transitions.
    ///
    /// `steps == 0` returns the input itself and `steps == depth()` is the same as
    /// [`FeedForwardNetwork::forward`]. The result has shape (batch, size of layer `steps`).
    pub fn forward_to<S>(
        &self,
        x: &ArrayBase<S, Ix2>,
        steps: usize,
    ) -> Result<Array2<f64>, String>
    where
        S: Data<Elem = f64>,
    {
        self.check_input(x)?;
        if steps > self.depth() {
            return Err(format!(
                "Cannot forward {} steps through a network with {} layer transitions",
                steps,
                self.depth()
            ));
        }

        let mut activation = x.to_owned();
        for weight in &self.weights[..steps] {
            activation = sigmoid_array(&matmul(&activation, weight)?);
        }
        Ok(activation)
    }

    // Activations of every layer, input included: depth() + 1 entries.
    fn activations<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Vec<Array2<f64>>, String>
    where
        S: Data<Elem = f64>,
    {
        self.check_input(x)?;

        let mut activations = Vec::with_capacity(self.depth() + 1);
        activations.push(x.to_owned());
        for weight in &self.weights {
            let last = &activations[activations.len() - 1];
            let next = sigmoid_array(&matmul(last, weight)?);
            activations.push(next);
        }
        Ok(activations)
    }

    /// Computes `lr * A_k^T @ delta_{k+1}` for every layer, using the current weights.
    ///
    /// This is the descent direction of the half squared error, summed over the batch.
    fn weight_updates<S1, S2>(
        &self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
    ) -> Result<Vec<Array2<f64>>, String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        check_rows("targets", y.nrows(), x.nrows())?;
        if y.ncols() != self.config.output_size {
            return Err(format!(
                "Target shape mismatch: got {} columns, network outputs {}",
                y.ncols(),
                self.config.output_size
            ));
        }

        let activations = self.activations(x)?;
        let depth = self.depth();
        let lr = self.config.learning_rate;

        // delta_L = output * (1 - output) * (y - output)
        let output = &activations[depth];
        let mut delta = sigmoid_derivative_array(output) * &(y - output);

        let mut updates = vec![Array2::<f64>::zeros((0, 0)); depth];
        for layer in (0..depth).rev() {
            let previous = &activations[layer];
            updates[layer] = matmul(&previous.t(), &delta)? * lr;

            if layer > 0 {
                // delta_k = A_k * (1 - A_k) * (delta_{k+1} @ W_k^T), computed before any update
                let propagated = matmul(&delta, &self.weights[layer].t())?;
                delta = sigmoid_derivative_array(previous) * &propagated;
            }
        }
        Ok(updates)
    }

    /// One backpropagation pass over the whole batch. Every weight matrix is updated.
    pub fn backward<S1, S2>(
        &mut self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
    ) -> Result<(), String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let updates = self.weight_updates(x, y)?;
        for (weight, update) in self.weights.iter_mut().zip(updates) {
            *weight += &update;
        }
        Ok(())
    }

    /// Runs `backward` for the configured number of epochs, without early stopping.
    ///
    /// Returns the total error measured before each update, one entry per epoch.
    pub fn train<S1, S2>(
        &mut self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
    ) -> Result<Vec<f64>, String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let epochs = self.config.epochs;
        let mut history = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            let error = self.total_error(x, y)?;
            report_progress(self.config.print_every, epoch, epochs, error);
            history.push(error);
            self.backward(x, y)?;
        }
        Ok(history)
    }

    /// sum((y - forward(x))^2) / 2
    pub fn total_error<S1, S2>(
        &self,
        x: &ArrayBase<S1, Ix2>,
        y: &ArrayBase<S2, Ix2>,
    ) -> Result<f64, String>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let output = self.forward(x)?;
        half_sum_squared_error(y, &output)
    }

    /// Thresholds every output unit at 0.5 (strictly greater maps to 1).
    pub fn predict<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array2<u8>, String>
    where
        S: Data<Elem = f64>,
    {
        Ok(self.forward(x)?.mapv(|o| if o > 0.5 { 1 } else { 0 }))
    }
}
