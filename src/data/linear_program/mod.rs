//! # Representing linear programs
//!
//! A linear program is stored in a single growable representation, the `Problem`. It may contain
//! any type of constraint and any variable bounds; rewriting it into standard form happens in place.
pub mod elements;
pub mod problem;
