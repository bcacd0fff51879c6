//! # Integration tests that require a look inside the crate.
//!
//! Each module describes one linear program at the different stages of the rewrite.
//!
//! Convention for function names:
//!
//! * `fn general_form()`: the problem as a reader would produce it
//! * `fn standard_form()`: the expected result of the rewrite
pub mod problem_1;
pub mod problem_2;
