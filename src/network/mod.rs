//! The neural network struct.

mod backward;
mod error;
mod forward;
pub mod utils;

pub use error::Error;
pub use forward::ForwardCache;

use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use tracing::{debug, info, trace};

use crate::config::NetworkConfig;
use crate::dataset::{self, Dataset};
use crate::initializer::Initializer;
use crate::metrics;

/// The trainable weights and biases of a [`Network`].
///
/// Weight matrices are laid out as `(inputs, neurons)`, so a layer computes `input . weights`.
/// Biases are `(1, neurons)` row vectors.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameters {
    hidden_weights: Vec<Array2<f64>>,
    hidden_biases: Vec<Array2<f64>>,
    output_weights: Array2<f64>,
    output_bias: Array2<f64>,
}

impl Parameters {
    /// Returns the weight matrix of every hidden layer, from first to last.
    pub fn hidden_weights(&self) -> &[Array2<f64>] {
        &self.hidden_weights
    }

    /// Returns the bias row of every hidden layer, from first to last.
    pub fn hidden_biases(&self) -> &[Array2<f64>] {
        &self.hidden_biases
    }

    pub fn output_weights(&self) -> &Array2<f64> {
        &self.output_weights
    }

    pub fn output_bias(&self) -> &Array2<f64> {
        &self.output_bias
    }
}

// Source of parameter stamps, unique across every `Network` in the process
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// A fully-connected feed-forward network with sigmoid activations, trained one sample at a time
/// by gradient descent.
///
/// A new `Network` has no parameters. [`initialize`][Self::initialize] must be called before it
/// can be trained or used for prediction.
///
/// Two networks are equal if they have the same configuration and parameters. A clone compares
/// equal to the original but does not accept forward caches produced by it.
#[derive(Debug)]
pub struct Network {
    config: NetworkConfig,
    // `None` until initialized
    parameters: Option<Parameters>,
    // Redrawn on every change to the parameters and on clone, used to reject stale forward caches
    stamp: u64,
}

impl Clone for Network {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            parameters: self.parameters.clone(),
            stamp: next_stamp(),
        }
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.parameters == other.parameters
    }
}

impl Network {
    /// Returns a new, uninitialized `Network` with the given architecture.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            parameters: None,
            stamp: next_stamp(),
        }
    }

    /// Returns the configuration of this `Network`.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns the parameters of this `Network`, or `None` if it is not initialized.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }

    /// Returns whether the parameters of this `Network` have been initialized.
    pub fn is_initialized(&self) -> bool {
        self.parameters.is_some()
    }

    /// Initializes all parameters with random values in `[0, 1)` drawn from a time-seeded source.
    ///
    /// Any existing parameters are replaced.
    pub fn initialize(&mut self) {
        self.initialize_with(&mut Initializer::new());
    }

    /// Initializes all parameters with random values in `[0, 1)` drawn from `initializer`.
    ///
    /// Any existing parameters are replaced.
    pub fn initialize_with(&mut self, initializer: &mut Initializer) {
        let config = &self.config;
        let hidden = config.hidden_neurons();

        let mut hidden_weights = Vec::with_capacity(config.hidden_layer_count());
        let mut hidden_biases = Vec::with_capacity(config.hidden_layer_count());

        for i in 0..config.hidden_layer_count() {
            let mut weights = Array2::zeros((config.input_width(i), hidden));
            let mut bias = Array2::zeros((1, hidden));
            initializer.fill(&mut [&mut weights, &mut bias]);

            hidden_weights.push(weights);
            hidden_biases.push(bias);
        }

        let mut output_weights = Array2::zeros((hidden, config.output_neurons()));
        let mut output_bias = Array2::zeros((1, config.output_neurons()));
        initializer.fill(&mut [&mut output_weights, &mut output_bias]);

        self.parameters = Some(Parameters {
            hidden_weights,
            hidden_biases,
            output_weights,
            output_bias,
        });
        self.stamp = next_stamp();

        info!(
            inputs = config.input_neurons(),
            hidden_layers = config.hidden_layer_count(),
            hidden_neurons = hidden,
            outputs = config.output_neurons(),
            "initialized network parameters"
        );
    }

    /// Runs a forward pass over a single input row and returns the activations of every layer.
    ///
    /// The returned cache must be passed to [`backward`][Self::backward] before the parameters
    /// change, or it becomes stale.
    pub fn forward<S>(&self, input: &ArrayBase<S, Ix2>) -> Result<ForwardCache, Error>
    where
        S: Data<Elem = f64>,
    {
        let parameters = self.parameters.as_ref().ok_or(Error::UninitializedModel)?;
        utils::check_shape(input.view(), Some(1), self.config.input_neurons())?;

        let (hidden_activations, output) = forward::propagate(parameters, input.view());

        Ok(ForwardCache {
            input: input.to_owned(),
            hidden_activations,
            output,
            stamp: self.stamp,
        })
    }

    /// Propagates the error between `label` and the output of `cache` back through the network
    /// and updates every parameter by gradient descent.
    ///
    /// `cache` must come from a call to [`forward`][Self::forward] with the same `input` and no
    /// parameter change in between, otherwise [`Error::StaleCache`] is returned.
    pub fn backward<S1, S2>(
        &mut self,
        input: &ArrayBase<S1, Ix2>,
        label: &ArrayBase<S2, Ix2>,
        cache: ForwardCache,
    ) -> Result<(), Error>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        let learning_rate = self.config.learning_rate();
        let input_neurons = self.config.input_neurons();
        let output_neurons = self.config.output_neurons();
        let parameters = self.parameters.as_mut().ok_or(Error::UninitializedModel)?;

        utils::check_shape(input.view(), Some(1), input_neurons)?;
        utils::check_shape(label.view(), Some(1), output_neurons)?;

        // Bitwise so that a row containing NaN still matches itself
        let same_input = cache.input.shape() == input.shape()
            && cache
                .input
                .iter()
                .zip(input.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits());

        if cache.stamp != self.stamp
            || !same_input
            || cache.hidden_activations.len() != parameters.hidden_weights.len()
        {
            return Err(Error::StaleCache);
        }

        backward::backpropagate(parameters, &cache, label.view(), learning_rate)?;
        self.stamp = next_stamp();

        trace!(stamp = self.stamp, "applied gradient update");

        Ok(())
    }

    /// Trains the network for the configured number of epochs. Each epoch runs a forward and a
    /// backward pass on every row of `inputs` in order, updating the parameters after each row.
    ///
    /// `inputs` must have `input_neurons` columns and `labels` must have `output_neurons` columns
    /// and the same number of rows. Shapes are checked before any parameter is changed.
    pub fn train<S1, S2>(
        &mut self,
        inputs: &ArrayBase<S1, Ix2>,
        labels: &ArrayBase<S2, Ix2>,
    ) -> Result<(), Error>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
    {
        if !self.is_initialized() {
            return Err(Error::UninitializedModel);
        }

        utils::check_shape(inputs.view(), None, self.config.input_neurons())?;
        utils::check_shape(
            labels.view(),
            Some(inputs.nrows()),
            self.config.output_neurons(),
        )?;

        let epochs = self.config.num_epochs();
        let rows = inputs.nrows();

        info!(epochs, rows, "training started");

        for epoch in 0..epochs {
            let mut squared_error = 0.0;

            for sample in dataset::rows(inputs.view(), labels.view()) {
                let cache = self.forward(&sample.input)?;
                squared_error += (&sample.label - cache.output())
                    .mapv(|e| e * e)
                    .sum();

                self.backward(&sample.input, &sample.label, cache)?;
            }

            if rows > 0 {
                let mse = squared_error / (rows * self.config.output_neurons()) as f64;
                debug!(epoch = epoch + 1, mse, "epoch complete");
            }
        }

        info!(epochs, rows, "training finished");

        Ok(())
    }

    /// Trains the network on every sample of `dataset`. See [`train`][Self::train].
    pub fn train_dataset(&mut self, dataset: &Dataset) -> Result<(), Error> {
        self.train(dataset.inputs(), dataset.labels())
    }

    /// Returns the output activation row for a single input row.
    ///
    /// Does not modify the network.
    pub fn predict<S>(&self, input: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, Error>
    where
        S: Data<Elem = f64>,
    {
        self.forward(input).map(ForwardCache::into_output)
    }

    /// Predicts every row of `inputs`, returning one output row per input row.
    pub fn predict_rows<S>(&self, inputs: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, Error>
    where
        S: Data<Elem = f64>,
    {
        if !self.is_initialized() {
            return Err(Error::UninitializedModel);
        }
        utils::check_shape(inputs.view(), None, self.config.input_neurons())?;

        let mut outputs = Array2::zeros((inputs.nrows(), self.config.output_neurons()));

        for (i, mut output) in outputs.outer_iter_mut().enumerate() {
            let input = inputs.slice(s![i..i + 1, ..]);
            let prediction = self.predict(&input)?;
            output.assign(&prediction.row(0));
        }

        Ok(outputs)
    }

    /// Returns the mean squared error between the predictions for `dataset` and its labels.
    pub fn mean_squared_error(&self, dataset: &Dataset) -> Result<f64, Error> {
        let predictions = self.predict_rows(dataset.inputs())?;
        metrics::mean_squared_error(&predictions, dataset.labels())
    }
}
