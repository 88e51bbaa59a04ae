//! # Sigmanet
//!
//! Sigmanet contains two small supervised-learning algorithms written from scratch on top
//! of `ndarray`: a binary logistic regression classifier trained by batch gradient descent,
//! and a fully connected sigmoid network trained by manual backpropagation.
//!
//! ## Features
//!
//! - Logistic regression with binary cross entropy and per-epoch loss history
//! - Feed-forward networks with any number of equally sized hidden layers
//! - Partial forward passes to inspect intermediate activations
//! - Layer-by-layer backpropagation over the whole batch
//! - Seedable weight initialization (normal, uniform, Xavier)
//! - Written 100% in safe Rust
//!
//! ```rust
//! use sigmanet::{Dataset, FeedForwardNetwork, NetworkConfig};
//!
//! let data = Dataset::xor();
//! let config = NetworkConfig::new(2, 2, 1, 1)
//!     .with_learning_rate(0.5)
//!     .with_epochs(100)
//!     .with_seed(42);
//! let mut network = FeedForwardNetwork::new(config).unwrap();
//! let history = network.train(data.inputs(), data.targets()).unwrap();
//! assert_eq!(history.len(), 100);
//! ```
pub mod config;
pub mod dataset;
pub mod initializers;
pub mod nn;
pub mod ops;

// Re-export commonly used types for convenience
pub use config::{NetworkConfig, TrainingConfig};
pub use dataset::Dataset;
pub use initializers::WeightInit;
pub use nn::{FeedForwardNetwork, LogisticRegression};
