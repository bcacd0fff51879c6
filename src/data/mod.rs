//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory. Algorithms
//! that rewrite these programs live in `algorithm`.
pub mod linear_algebra;
pub mod linear_program;
