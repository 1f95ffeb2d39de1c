//! Row-aligned training samples.

use ndarray::{s, Array2, ArrayView2};

use crate::network::{utils, Error};

/// A single training example: one input row and its label row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<'a> {
    pub input: ArrayView2<'a, f64>,
    pub label: ArrayView2<'a, f64>,
}

/// An ordered sequence of samples, stored as an input matrix and a label matrix with the same
/// number of rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    inputs: Array2<f64>,
    labels: Array2<f64>,
}

impl Dataset {
    /// Returns a new `Dataset`, or [`Error::DimensionMismatch`] if `inputs` and `labels` do not
    /// have the same number of rows.
    pub fn new(inputs: Array2<f64>, labels: Array2<f64>) -> Result<Self, Error> {
        utils::check_shape(labels.view(), Some(inputs.nrows()), labels.ncols())?;

        Ok(Self { inputs, labels })
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.inputs.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the input matrix, one sample per row.
    pub fn inputs(&self) -> &Array2<f64> {
        &self.inputs
    }

    /// Returns the label matrix, one sample per row.
    pub fn labels(&self) -> &Array2<f64> {
        &self.labels
    }

    /// Returns the sample at `index`, or `None` if it is out of bounds.
    pub fn sample(&self, index: usize) -> Option<Sample<'_>> {
        if index < self.len() {
            Some(row(self.inputs.view(), self.labels.view(), index))
        } else {
            None
        }
    }

    /// Returns an iterator over every sample in order.
    pub fn samples(&self) -> impl Iterator<Item = Sample<'_>> {
        rows(self.inputs.view(), self.labels.view())
    }

    /// Splits the dataset into the first `mid` samples and the rest. `mid` is clamped to the
    /// length of the dataset.
    pub fn split_at(&self, mid: usize) -> (Dataset, Dataset) {
        let mid = mid.min(self.len());

        let head = Dataset {
            inputs: self.inputs.slice(s![..mid, ..]).to_owned(),
            labels: self.labels.slice(s![..mid, ..]).to_owned(),
        };
        let tail = Dataset {
            inputs: self.inputs.slice(s![mid.., ..]).to_owned(),
            labels: self.labels.slice(s![mid.., ..]).to_owned(),
        };

        (head, tail)
    }
}

fn row<'a>(inputs: ArrayView2<'a, f64>, labels: ArrayView2<'a, f64>, index: usize) -> Sample<'a> {
    Sample {
        input: inputs.slice_move(s![index..index + 1, ..]),
        label: labels.slice_move(s![index..index + 1, ..]),
    }
}

/// Iterates over the `(1, n)` rows of `inputs` paired with the rows of `labels`. Both matrices
/// must have the same number of rows.
pub(crate) fn rows<'a>(
    inputs: ArrayView2<'a, f64>,
    labels: ArrayView2<'a, f64>,
) -> impl Iterator<Item = Sample<'a>> {
    (0..inputs.nrows()).map(move |index| row(inputs, labels, index))
}
