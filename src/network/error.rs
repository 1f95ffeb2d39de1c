//! The error type for network configuration, training and prediction.

use std::{error, fmt};

/// The reason why a network operation failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The network was used before its parameters were initialized.
    UninitializedModel,
    /// A matrix does not have the shape required by the network configuration. Contains the
    /// expected and the actual `(rows, columns)`. A `usize::MAX` in the expected shape means that
    /// dimension is unconstrained.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A reduction was requested along an axis other than `0` or `1`. Contains the axis.
    InvalidAxis(usize),
    /// A forward cache was passed to backward propagation that was not produced by the
    /// immediately preceding forward pass over the same input.
    StaleCache,
    /// A configuration value is out of range. Contains the name of the offending field.
    InvalidConfig(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UninitializedModel => write!(f, "network parameters are not initialized"),
            Self::DimensionMismatch { expected, found } => {
                let show = |n: usize| {
                    if n == usize::MAX {
                        "_".to_string()
                    } else {
                        n.to_string()
                    }
                };
                write!(
                    f,
                    "dimension mismatch: expected ({}, {}), found ({}, {})",
                    show(expected.0),
                    show(expected.1),
                    found.0,
                    found.1
                )
            }
            Self::InvalidAxis(axis) => write!(f, "invalid axis {}, must be 0 or 1", axis),
            Self::StaleCache => write!(
                f,
                "forward cache does not match the current parameters or input"
            ),
            Self::InvalidConfig(field) => write!(f, "invalid configuration value for `{}`", field),
        }
    }
}

impl error::Error for Error {}
