//! # Error reporting
//!
//! A collection of enums and structures describing the problems that can be encountered while
//! building a linear program, accessing it, rewriting it to standard form, and checking the result.
use std::fmt;

use thiserror::Error;

use crate::algorithm::standard_form::Phase;
use crate::data::linear_program::elements::ConstraintType;

/// Which of the two dimensions of a linear program an index refers to.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IndexKind {
    Constraint,
    Variable,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndexKind::Constraint => f.write_str("constraint"),
            IndexKind::Variable => f.write_str("variable"),
        }
    }
}

/// Created when a `Problem` is accessed with an index that doesn't exist (yet).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ProblemError {
    /// The index is larger than or equal to the number of constraints or variables.
    #[error("{kind} index {index} is out of bounds for {len} {kind}s")]
    IndexOutOfBounds {
        /// Whether a constraint or a variable was accessed.
        kind: IndexKind,
        /// The offending index.
        index: usize,
        /// The number of constraints or variables at the time of access.
        len: usize,
    },
}

/// An `InconsistencyError` is created when the data describing a linear program doesn't fit
/// together.
///
/// For example, the number of bounds might not match the number of variables. It is meant only for
/// the construction of a problem, and is not returned when a linear program is infeasible.
#[derive(Debug, Error, Eq, PartialEq)]
#[error("InconsistencyError: {description}")]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), }
    }
}

/// Describes the first way in which a problem and basis fail to be in standard form.
///
/// Checking never modifies the problem, so the caller decides what to do with this error.
#[allow(missing_docs)]
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// A constraint is still an inequality.
    #[error("constraint {constraint} has type {found:?}, expected an equality")]
    NotEquality {
        constraint: usize,
        found: ConstraintType,
    },
    /// There should be exactly one basis column per constraint.
    #[error("basis has {found} columns but there are {expected} constraints")]
    BasisLength {
        expected: usize,
        found: usize,
    },
    /// The basis refers to a column that doesn't exist.
    #[error("basis column {column} for constraint {constraint} is out of range for {nr_variables} variables")]
    BasisColumnOutOfRange {
        constraint: usize,
        column: usize,
        nr_variables: usize,
    },
    /// The basis column doesn't have a `1` or `-1` in the row it is basic for.
    #[error("basis column {column} doesn't have a unit coefficient in constraint {constraint}")]
    NotUnitCoefficient {
        constraint: usize,
        column: usize,
    },
    /// The basis column has a nonzero value outside of the row it is basic for.
    #[error("basis column {column} for constraint {constraint} has a nonzero in constraint {other}")]
    NonzeroOutsideRow {
        constraint: usize,
        column: usize,
        other: usize,
    },
}

/// Everything that can go wrong while rewriting a problem into standard form.
///
/// Apart from `Validation`, these are programming errors: after one is returned, the problem might
/// be left halfway a rewrite and should not be used anymore.
#[allow(missing_docs)]
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConversionError {
    /// A rewrite step was called before the step that should precede it, or twice.
    #[error("cannot {operation} in phase {found:?}, expected phase {expected:?}")]
    PhaseOrder {
        /// Name of the step that was attempted.
        operation: &'static str,
        /// The phase the converter should have been in.
        expected: Phase,
        /// The phase the converter was in.
        found: Phase,
    },
    /// An equality constraint survived until slacks were added.
    #[error("unexpected constraint type Equal for constraint {constraint} while adding slacks")]
    UnexpectedConstraintType {
        constraint: usize,
    },
    /// Accessing the problem failed.
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// The result of the rewrite is not in standard form.
    #[error("standard form validation failed: {0}")]
    Validation(#[from] ValidationError),
}
