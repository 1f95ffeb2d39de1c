//! Forward propagation through a network.

use ndarray::{Array2, ArrayView2};

use super::Parameters;
use crate::activation::sigmoid;

/// The per-layer activations produced by one forward pass.
///
/// A `ForwardCache` is only valid for the parameters it was computed with. It is consumed by
/// [`Network::backward`][super::Network::backward], so it can never be reused across samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardCache {
    // The input row the pass was computed from
    pub(super) input: Array2<f64>,
    // One activation row per hidden layer, in order
    pub(super) hidden_activations: Vec<Array2<f64>>,
    pub(super) output: Array2<f64>,
    // The parameter stamp of the network at the time of the pass
    pub(super) stamp: u64,
}

impl ForwardCache {
    /// Returns the output activation row of the pass.
    pub fn output(&self) -> &Array2<f64> {
        &self.output
    }

    /// Returns the activation row of every hidden layer, from first to last.
    pub fn hidden_activations(&self) -> &[Array2<f64>] {
        &self.hidden_activations
    }

    /// Consumes the cache and returns its output activation row.
    pub fn into_output(self) -> Array2<f64> {
        self.output
    }
}

/// Computes the activation of one layer: `sigmoid(input . weights + bias)`, with the bias row
/// broadcast across every row of `input`.
fn activate(input: ArrayView2<f64>, weights: &Array2<f64>, bias: &Array2<f64>) -> Array2<f64> {
    let mut z = input.dot(weights);
    z += bias;
    z.mapv_inplace(sigmoid);
    z
}

/// Runs `input` through every layer. Returns the hidden layer activations and the output
/// activation.
///
/// Shapes must already have been checked against the network configuration.
pub(super) fn propagate(
    parameters: &Parameters,
    input: ArrayView2<f64>,
) -> (Vec<Array2<f64>>, Array2<f64>) {
    let mut hidden_activations: Vec<Array2<f64>> =
        Vec::with_capacity(parameters.hidden_weights.len());

    for (weights, bias) in parameters
        .hidden_weights
        .iter()
        .zip(&parameters.hidden_biases)
    {
        let activation = match hidden_activations.last() {
            Some(previous) => activate(previous.view(), weights, bias),
            None => activate(input, weights, bias),
        };
        hidden_activations.push(activation);
    }

    let (weights, bias) = (&parameters.output_weights, &parameters.output_bias);
    let output = match hidden_activations.last() {
        Some(last) => activate(last.view(), weights, bias),
        None => activate(input, weights, bias),
    };

    (hidden_activations, output)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn test_activate() {
        let input = array![[1.0, 2.0]];
        let weights = array![[0.5, -1.0, 0.0], [0.25, 0.5, 0.0]];
        let bias = array![[0.0, 0.0, 1.0]];

        let a = activate(input.view(), &weights, &bias);
        assert_eq!((1, 3), a.dim());
        assert_approx_eq!(sigmoid(1.0), a[[0, 0]]);
        assert_approx_eq!(sigmoid(0.0), a[[0, 1]]);
        assert_approx_eq!(sigmoid(1.0), a[[0, 2]]);
    }

    #[test]
    fn test_activate_broadcast_bias() {
        let input = array![[1.0], [2.0], [3.0]];
        let weights = array![[1.0, -1.0]];
        let bias = array![[0.5, 0.5]];

        let a = activate(input.view(), &weights, &bias);
        assert_eq!((3, 2), a.dim());
        for (row, x) in [1.0, 2.0, 3.0].iter().enumerate() {
            assert_approx_eq!(sigmoid(x + 0.5), a[[row, 0]]);
            assert_approx_eq!(sigmoid(-x + 0.5), a[[row, 1]]);
        }
    }

    #[test]
    fn test_propagate_stack() {
        let parameters = Parameters {
            hidden_weights: vec![
                array![[1.0, 0.0], [0.0, 1.0]],
                array![[1.0, 1.0], [1.0, -1.0]],
            ],
            hidden_biases: vec![array![[0.0, 0.0]], array![[0.0, 0.5]]],
            output_weights: array![[2.0], [-2.0]],
            output_bias: array![[0.1]],
        };
        let input = array![[0.5, -0.5]];

        let (hidden, output) = propagate(&parameters, input.view());

        let h0 = [sigmoid(0.5), sigmoid(-0.5)];
        let h1 = [sigmoid(h0[0] + h0[1]), sigmoid(h0[0] - h0[1] + 0.5)];
        let out = sigmoid(2.0 * h1[0] - 2.0 * h1[1] + 0.1);

        assert_eq!(2, hidden.len());
        assert_approx_eq!(h0[0], hidden[0][[0, 0]]);
        assert_approx_eq!(h0[1], hidden[0][[0, 1]]);
        assert_approx_eq!(h1[0], hidden[1][[0, 0]]);
        assert_approx_eq!(h1[1], hidden[1][[0, 1]]);
        assert_approx_eq!(out, output[[0, 0]]);
    }
}
