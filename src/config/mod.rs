//! The immutable architecture and hyperparameter record of a [`Network`][crate::Network].

mod error;
#[cfg(feature = "json")]
mod functions;

pub use error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use std::path::Path;

use crate::network;

/// The architecture and training hyperparameters of a [`Network`][crate::Network].
///
/// All hidden layers share the same width. A `NetworkConfig` can only be created through
/// [`NetworkConfig::new`] (or deserialization, which performs the same checks), so every count is
/// positive and the learning rate is finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawNetworkConfig")
)]
pub struct NetworkConfig {
    input_neurons: usize,
    output_neurons: usize,
    hidden_neurons: usize,
    hidden_layer_count: usize,
    num_epochs: usize,
    learning_rate: f64,
}

impl NetworkConfig {
    /// Returns a new `NetworkConfig`, or [`InvalidConfig`][network::Error::InvalidConfig] if any
    /// count is zero or the learning rate is not a positive finite number.
    pub fn new(
        input_neurons: usize,
        output_neurons: usize,
        hidden_neurons: usize,
        hidden_layer_count: usize,
        num_epochs: usize,
        learning_rate: f64,
    ) -> Result<Self, network::Error> {
        let counts = [
            ("inputNeurons", input_neurons),
            ("outputNeurons", output_neurons),
            ("hiddenNeurons", hidden_neurons),
            ("hiddenLayerCount", hidden_layer_count),
            ("numEpochs", num_epochs),
        ];

        if let Some((name, _)) = counts.iter().find(|(_, count)| *count == 0) {
            return Err(network::Error::InvalidConfig(*name));
        }

        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(network::Error::InvalidConfig("learningRate"));
        }

        Ok(Self {
            input_neurons,
            output_neurons,
            hidden_neurons,
            hidden_layer_count,
            num_epochs,
            learning_rate,
        })
    }

    /// Loads a configuration from a JSON string.
    #[cfg(feature = "json")]
    pub fn load_str(s: &str) -> Result<Self, Error> {
        functions::load_str(s)
    }

    /// Loads a configuration from a JSON file.
    #[cfg(feature = "json")]
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        functions::load_file(path)
    }

    /// Encodes this configuration as a JSON string.
    #[cfg(feature = "json")]
    pub fn to_string(&self) -> Result<String, Error> {
        functions::to_string(self)
    }

    /// Saves this configuration to a JSON file.
    ///
    /// Recursively creates missing directories if `create_dirs` is `true`.
    #[cfg(feature = "json")]
    pub fn to_file<P: AsRef<Path>>(&self, path: P, create_dirs: bool) -> Result<(), Error> {
        functions::to_file(self, path, create_dirs)
    }

    /// Returns the width of an input row.
    pub fn input_neurons(&self) -> usize {
        self.input_neurons
    }

    /// Returns the width of an output (and label) row.
    pub fn output_neurons(&self) -> usize {
        self.output_neurons
    }

    /// Returns the width shared by all hidden layers.
    pub fn hidden_neurons(&self) -> usize {
        self.hidden_neurons
    }

    /// Returns the number of hidden layers.
    pub fn hidden_layer_count(&self) -> usize {
        self.hidden_layer_count
    }

    /// Returns the number of full passes over the training data.
    pub fn num_epochs(&self) -> usize {
        self.num_epochs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the number of inputs to hidden layer `layer`.
    ///
    /// The first hidden layer reads the network inputs, every later one reads the previous hidden
    /// layer.
    pub fn input_width(&self, layer: usize) -> usize {
        if layer == 0 {
            self.input_neurons
        } else {
            self.hidden_neurons
        }
    }
}

// Unchecked mirror of `NetworkConfig` so that deserialized values go through `NetworkConfig::new`
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNetworkConfig {
    input_neurons: usize,
    output_neurons: usize,
    hidden_neurons: usize,
    hidden_layer_count: usize,
    num_epochs: usize,
    learning_rate: f64,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawNetworkConfig> for NetworkConfig {
    type Error = network::Error;

    fn try_from(raw: RawNetworkConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.input_neurons,
            raw.output_neurons,
            raw.hidden_neurons,
            raw.hidden_layer_count,
            raw.num_epochs,
            raw.learning_rate,
        )
    }
}
