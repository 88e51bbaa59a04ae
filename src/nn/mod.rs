// Learning algorithms: logistic regression and a backpropagation-trained feed-forward network.
// Both operate on dense f64 matrices with samples as rows.

pub mod activations;
pub mod logistic;
pub mod loss;
pub mod network;

// Re-export the main types for convenience
pub use activations::{sigmoid, sigmoid_array};
pub use logistic::LogisticRegression;
pub use loss::{accuracy, binary_cross_entropy, half_sum_squared_error};
pub use network::FeedForwardNetwork;
