//! # Algorithms
//!
//! Algorithms that operate on the linear programs stored in `data::linear_program`. Solving is left
//! to downstream crates; this module prepares problems for them.
pub mod standard_form;
