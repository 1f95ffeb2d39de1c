//! Metrics for evaluating network predictions.

use ndarray::{ArrayBase, Data, Ix1, Ix2};

use crate::dataset::Dataset;
use crate::network::{utils, Error, Network};

/// Returns the mean of the squared element-wise differences between `predictions` and `labels`.
///
/// Both matrices must have the same shape. Returns `0` for empty matrices.
pub fn mean_squared_error<S1, S2>(
    predictions: &ArrayBase<S1, Ix2>,
    labels: &ArrayBase<S2, Ix2>,
) -> Result<f64, Error>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let (rows, cols) = labels.dim();
    utils::check_shape(predictions.view(), Some(rows), cols)?;

    if labels.is_empty() {
        return Ok(0.0);
    }

    let sum: f64 = predictions
        .iter()
        .zip(labels.iter())
        .map(|(p, l)| (p - l) * (p - l))
        .sum();

    Ok(sum / labels.len() as f64)
}

/// Returns the index of the largest value in `row`, or `None` if it is empty. Ties resolve to the
/// first index. NaN values are never selected unless every value is NaN.
pub fn argmax<S>(row: &ArrayBase<S, Ix1>) -> Option<usize>
where
    S: Data<Elem = f64>,
{
    let mut best: Option<(usize, f64)> = None;

    for (i, &v) in row.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, max)) => v > max || (max.is_nan() && !v.is_nan()),
        };

        if replace {
            best = Some((i, v));
        }
    }

    best.map(|(i, _)| i)
}

/// Returns the fraction of samples in `dataset` whose predicted class (the index of the largest
/// output) equals the labelled class (the index of the largest label value). Returns `0` for an
/// empty dataset.
pub fn accuracy(network: &Network, dataset: &Dataset) -> Result<f64, Error> {
    if dataset.is_empty() {
        return Ok(0.0);
    }

    let predictions = network.predict_rows(dataset.inputs())?;
    let correct = predictions
        .outer_iter()
        .zip(dataset.labels().outer_iter())
        .filter(|(prediction, label)| argmax(prediction) == argmax(label))
        .count();

    Ok(correct as f64 / dataset.len() as f64)
}
