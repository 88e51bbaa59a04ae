// src/dataset/mod.rs
use crate::ops::check_rows;
use ndarray::{Array1, Array2, Axis, concatenate};

/// Paired inputs and targets for supervised learning.
///
/// Inputs have shape [num_samples, num_features] and targets [num_samples, num_outputs].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Array2<f64>,
    targets: Array2<f64>,
}

impl Dataset {
    /// Create new dataset, checking that inputs and targets have the same number of rows
    pub fn new(inputs: Array2<f64>, targets: Array2<f64>) -> Result<Self, String> {
        check_rows("targets", targets.nrows(), inputs.nrows())?;
        Ok(Self { inputs, targets })
    }

    /// Dataset with a single target column, the layout logistic regression expects
    pub fn from_labels(inputs: Array2<f64>, labels: Array1<f64>) -> Result<Self, String> {
        let targets = labels.insert_axis(Axis(1));
        Self::new(inputs, targets)
    }

    /// The XOR truth table: four rows of two binary inputs and one target.
    pub fn xor() -> Self {
        Self {
            inputs: ndarray::array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]],
            targets: ndarray::array![[0.0], [1.0], [1.0], [0.0]],
        }
    }

    /// Prepends a constant column of ones to the inputs so its weight acts as a bias.
    pub fn with_bias_column(self) -> Self {
        let ones = Array2::<f64>::ones((self.inputs.nrows(), 1));
        // Both operands have the same row count
        let inputs = concatenate![Axis(1), ones, self.inputs];
        Self {
            inputs,
            targets: self.targets,
        }
    }

    pub fn inputs(&self) -> &Array2<f64> {
        &self.inputs
    }

    pub fn targets(&self) -> &Array2<f64> {
        &self.targets
    }

    /// First target column as a vector of labels.
    pub fn labels(&self) -> Array1<f64> {
        self.targets.column(0).to_owned()
    }

    /// Targets thresholded at 0.5, for comparing against model predictions.
    pub fn binary_labels(&self) -> Vec<u8> {
        self.targets
            .column(0)
            .iter()
            .map(|&t| if t > 0.5 { 1 } else { 0 })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inputs.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_row_mismatch_is_rejected() {
        let inputs = Array2::<f64>::zeros((4, 2));
        let targets = Array2::<f64>::zeros((3, 1));
        assert!(Dataset::new(inputs, targets).is_err());
    }

    #[test]
    fn test_xor_table() {
        let data = Dataset::xor();
        assert_eq!(data.len(), 4);
        assert!(!data.is_empty());
        assert_eq!(data.inputs().shape(), &[4, 2]);
        assert_eq!(data.binary_labels(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::new(Array2::zeros((0, 3)), Array2::zeros((0, 1))).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.with_bias_column().inputs().shape(), &[0, 4]);
    }

    #[test]
    fn test_with_bias_column() {
        let data = Dataset::from_labels(array![[2.0, 3.0], [4.0, 5.0]], array![0.0, 1.0])
            .unwrap()
            .with_bias_column();

        assert_eq!(data.inputs(), &array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
        assert_eq!(data.labels(), array![0.0, 1.0]);
    }
}
