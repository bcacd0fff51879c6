//! # Linear programs in standard form
//!
//! Linear programs read from a model come with constraints of any type and with arbitrary variable
//! bounds. Simplex-type solvers expect them in standard form: minimize `<c, x>` subject to
//! `Ax = b` and `x >= 0`, together with an initial basis. This crate stores a linear program in a
//! growable sparse `Problem` and rewrites it in place with a `StandardFormConverter`, which also
//! exposes a basis consisting of one slack variable per constraint.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
