//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in a sparse format that can grow in both
//! dimensions.
pub mod matrix;
pub mod traits;

/// A single nonzero of a sparse vector: the index within the vector and the value.
pub type SparseTuple<F> = (usize, F);
/// Vector of nonzeros, sorted by index.
pub type SparseTupleVec<F> = Vec<SparseTuple<F>>;
