//! # Traits for elements in sparse datastructures
//!
//! The matrices in this crate store real coefficients, bounds and costs. Bounds can be infinite, so
//! the element type needs to be able to represent `+∞` and `-∞` as sentinel values next to the
//! ordinary field operations.
use std::fmt::Debug;

use num_traits::Float;

/// Element of a `SparseMatrix` or of the vectors of a `Problem`.
///
/// This is an alias for the traits that are needed throughout the crate; it is implemented for
/// every type satisfying them, so `f64` and `f32` are both valid elements.
pub trait Element: Float + Debug {}

impl<T: Float + Debug> Element for T {}
