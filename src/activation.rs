//! The logistic activation function used by every layer of a [`Network`][crate::Network].

use num_traits::Float;

/// Logistic function. Outputs `1 / (1 + exp(-x))`.
pub fn sigmoid<T: Float>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

/// Derivative of [`sigmoid`] expressed in terms of its output.
///
/// `a` must be an already-activated value (`a = sigmoid(x)`), not the raw pre-activation sum.
/// Outputs `a * (1 - a)`.
pub fn sigmoid_prime<T: Float>(a: T) -> T {
    a * (T::one() - a)
}
