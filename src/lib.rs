//! A fully-connected feed-forward neural network with sigmoid activations, trained by online
//! (per-sample) gradient-descent backpropagation. The [`Network`] struct has methods for
//! initializing its parameters, training on row-aligned input and label matrices, and predicting
//! outputs for new inputs.
//!
//! # Examples
//!
//! ```
//! use ndarray::array;
//! use sigmanet::{Initializer, Network, NetworkConfig};
//!
//! // 2 inputs, 1 output, 2 hidden layers of 4 neurons, 1000 epochs at a learning rate of 0.5
//! let config = NetworkConfig::new(2, 1, 4, 2, 1000, 0.5).unwrap();
//! let mut network = Network::new(config);
//!
//! // Parameters must be initialized before training or prediction
//! network.initialize_with(&mut Initializer::from_seed(1));
//!
//! let inputs = array![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
//! let labels = array![[0.0], [0.0], [1.0], [1.0]];
//! network.train(&inputs, &labels).unwrap();
//!
//! let output = network.predict(&array![[1.0, 0.0]]).unwrap();
//! assert_eq!((1, 1), output.dim());
//! ```

// Parameters are never checked for overflow. Non-finite values propagate through training and
// prediction as non-finite outputs, never panicking.

pub mod activation;
pub mod config;
pub mod dataset;
pub mod initializer;
pub mod metrics;
pub mod network;

pub use self::config::NetworkConfig;
pub use self::dataset::{Dataset, Sample};
pub use self::initializer::Initializer;
pub use self::network::{Error, ForwardCache, Network, Parameters};
