//! Backward propagation and the gradient-descent parameter update.

use ndarray::{Array2, ArrayView2};

use super::{utils, Error, ForwardCache, Parameters};
use crate::activation::sigmoid_prime;

/// Adds `learning_rate` times the gradient of one layer to its weights and bias.
///
/// The weight gradient is `layer_input^T . delta`. The bias gradient is `delta` summed over its
/// rows, which for the single-row case is `delta` itself.
fn apply_update(
    weights: &mut Array2<f64>,
    bias: &mut Array2<f64>,
    layer_input: ArrayView2<f64>,
    delta: &Array2<f64>,
    learning_rate: f64,
) -> Result<(), Error> {
    let weight_gradient = layer_input.t().dot(delta);
    weights.scaled_add(learning_rate, &weight_gradient);

    let bias_gradient = utils::sum_along_axis(0, delta.view())?;
    bias.scaled_add(learning_rate, &bias_gradient);

    Ok(())
}

/// Propagates the error between `label` and the cached output back through the network and
/// updates every parameter in place.
///
/// The error passed down to a layer is always computed from the weights of the layer above as
/// they were before this call modified them.
pub(super) fn backpropagate(
    parameters: &mut Parameters,
    cache: &ForwardCache,
    label: ArrayView2<f64>,
    learning_rate: f64,
) -> Result<(), Error> {
    let output = &cache.output;
    let hidden = &cache.hidden_activations;
    // There is always at least one hidden layer
    let last = hidden.len() - 1;

    let mut delta = (&label - output) * output.mapv(sigmoid_prime);
    let mut propagated = delta.dot(&parameters.output_weights.t());

    apply_update(
        &mut parameters.output_weights,
        &mut parameters.output_bias,
        hidden[last].view(),
        &delta,
        learning_rate,
    )?;

    for i in (0..=last).rev() {
        delta = &propagated * &hidden[i].mapv(sigmoid_prime);

        if i > 0 {
            propagated = delta.dot(&parameters.hidden_weights[i].t());
        }

        let layer_input = if i == 0 {
            cache.input.view()
        } else {
            hidden[i - 1].view()
        };

        apply_update(
            &mut parameters.hidden_weights[i],
            &mut parameters.hidden_biases[i],
            layer_input,
            &delta,
            learning_rate,
        )?;
    }

    Ok(())
}
