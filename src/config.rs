use crate::initializers::WeightInit;

/// Architecture and training configuration for [`crate::nn::FeedForwardNetwork`].
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Number of hidden layers. Zero connects the input directly to the output.
    pub hidden_layers: usize,
    pub learning_rate: f64,
    pub epochs: usize,
    pub init: WeightInit,
    /// Seed for weight initialization. `None` draws a fresh seed from the thread RNG.
    pub seed: Option<u64>,
    /// Print the total error every N epochs while training.
    pub print_every: Option<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_size: 2,
            hidden_size: 2,
            output_size: 2,
            hidden_layers: 1,
            learning_rate: 0.1,
            epochs: 1000,
            init: WeightInit::StandardNormal,
            seed: None,
            print_every: None,
        }
    }
}

impl NetworkConfig {
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        hidden_layers: usize,
    ) -> Self {
        Self {
            input_size,
            hidden_size,
            output_size,
            hidden_layers,
            ..Self::default()
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_print_every(mut self, print_every: usize) -> Self {
        self.print_every = Some(print_every);
        self
    }

    /// Sizes of every layer from input to output: `hidden_layers + 2` entries.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers + 2);
        sizes.push(self.input_size);
        sizes.extend(std::iter::repeat_n(self.hidden_size, self.hidden_layers));
        sizes.push(self.output_size);
        sizes
    }

    /// Number of weight matrices, one per layer transition.
    pub fn num_transitions(&self) -> usize {
        self.hidden_layers + 1
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_size == 0 || self.output_size == 0 {
            return Err(format!(
                "Layer sizes must be positive: input_size={}, output_size={}",
                self.input_size, self.output_size
            ));
        }
        if self.hidden_layers > 0 && self.hidden_size == 0 {
            return Err(format!(
                "hidden_size must be positive when hidden_layers={}",
                self.hidden_layers
            ));
        }
        validate_learning_rate(self.learning_rate)?;
        if self.print_every == Some(0) {
            return Err("print_every must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Gradient descent settings for [`crate::nn::LogisticRegression`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Print the loss every N epochs.
    pub print_every: Option<usize>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 25,
            learning_rate: 0.05,
            print_every: None,
        }
    }
}

impl TrainingConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        Self {
            epochs,
            learning_rate,
            print_every: None,
        }
    }

    pub fn with_print_every(mut self, print_every: usize) -> Self {
        self.print_every = Some(print_every);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        validate_learning_rate(self.learning_rate)?;
        if self.print_every == Some(0) {
            return Err("print_every must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn validate_learning_rate(learning_rate: f64) -> Result<(), String> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(format!(
            "Learning rate must be finite and positive, got {}",
            learning_rate
        ));
    }
    Ok(())
}

/// Logs training progress the same way for both models.
pub(crate) fn report_progress(print_every: Option<usize>, epoch: usize, total: usize, loss: f64) {
    if let Some(every) = print_every {
        if (epoch + 1) % every == 0 || epoch + 1 == total {
            println!("Epoch {}/{}: loss = {:.6}", epoch + 1, total, loss);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.layer_sizes(), vec![2, 2, 2]);
        assert_eq!(config.num_transitions(), 2);
        assert_eq!(config.epochs, 1000);
        assert!(config.validate().is_ok());

        let training = TrainingConfig::default();
        assert_eq!(training.epochs, 25);
        assert_eq!(training.learning_rate, 0.05);
    }

    #[test]
    fn test_layer_sizes() {
        assert_eq!(NetworkConfig::new(3, 5, 1, 0).layer_sizes(), vec![3, 1]);
        assert_eq!(
            NetworkConfig::new(3, 5, 1, 3).layer_sizes(),
            vec![3, 5, 5, 5, 1]
        );
    }

    #[test]
    fn test_validation() {
        assert!(NetworkConfig::new(0, 2, 1, 1).validate().is_err());
        assert!(NetworkConfig::new(2, 0, 1, 1).validate().is_err());
        // hidden_size is unused without hidden layers
        assert!(NetworkConfig::new(2, 0, 1, 0).validate().is_ok());
        assert!(
            NetworkConfig::new(2, 2, 1, 1)
                .with_learning_rate(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            NetworkConfig::new(2, 2, 1, 1)
                .with_print_every(0)
                .validate()
                .is_err()
        );
        assert!(TrainingConfig::new(10, -0.1).validate().is_err());
        assert!(TrainingConfig::new(0, 0.1).validate().is_ok());
    }
}
