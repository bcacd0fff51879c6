//! # Bookkeeping of the rewrite
//!
//! Counts of the rows and columns that were appended to a problem, grouped by the reason they were
//! introduced.
use std::fmt;

use enum_map::{Enum, EnumMap};

use crate::data::linear_program::elements::BoundDirection;

/// Why a constraint was appended.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum RowOrigin {
    /// The `>=` half of an equality constraint.
    EqualityCopy,
    /// Explicit `x+ - x- >= l` for a variable with a finite, nonzero lower bound `l`.
    LowerBound,
    /// Explicit `x+ - x- <= u` for a variable with a finite upper bound `u`.
    UpperBound,
}

impl From<BoundDirection> for RowOrigin {
    fn from(direction: BoundDirection) -> Self {
        match direction {
            BoundDirection::Lower => RowOrigin::LowerBound,
            BoundDirection::Upper => RowOrigin::UpperBound,
        }
    }
}

/// Why a variable was appended.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnOrigin {
    /// `x-` in `x = x+ - x-`.
    NegativePart,
    /// One per constraint, basic in the initial basis.
    Slack,
}

/// Dimensions before the rewrite and everything that was appended since.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConversionStatistics {
    original_constraints: usize,
    original_variables: usize,
    rows_added: EnumMap<RowOrigin, usize>,
    columns_added: EnumMap<ColumnOrigin, usize>,
}

impl ConversionStatistics {
    pub(super) fn new(original_constraints: usize, original_variables: usize) -> Self {
        Self {
            original_constraints,
            original_variables,
            ..Self::default()
        }
    }

    pub(super) fn row_added(&mut self, origin: RowOrigin) {
        self.rows_added[origin] += 1;
    }

    pub(super) fn column_added(&mut self, origin: ColumnOrigin) {
        self.columns_added[origin] += 1;
    }

    /// Number of constraints before the rewrite started.
    #[must_use]
    pub fn original_constraints(&self) -> usize {
        self.original_constraints
    }

    /// Number of variables before the rewrite started.
    #[must_use]
    pub fn original_variables(&self) -> usize {
        self.original_variables
    }

    /// Number of rows appended for the given reason.
    #[must_use]
    pub fn rows_added(&self, origin: RowOrigin) -> usize {
        self.rows_added[origin]
    }

    /// Number of columns appended for the given reason.
    #[must_use]
    pub fn columns_added(&self, origin: ColumnOrigin) -> usize {
        self.columns_added[origin]
    }

    /// Number of constraints after the rewrite.
    #[must_use]
    pub fn nr_constraints(&self) -> usize {
        self.original_constraints + self.rows_added.values().sum::<usize>()
    }

    /// Number of variables after the rewrite.
    #[must_use]
    pub fn nr_variables(&self) -> usize {
        self.original_variables + self.columns_added.values().sum::<usize>()
    }
}

impl fmt::Display for ConversionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} x {} -> {} x {} (rows: {} equality copies, {} lower bounds, {} upper bounds; \
             columns: {} negative parts, {} slacks)",
            self.original_constraints,
            self.original_variables,
            self.nr_constraints(),
            self.nr_variables(),
            self.rows_added[RowOrigin::EqualityCopy],
            self.rows_added[RowOrigin::LowerBound],
            self.rows_added[RowOrigin::UpperBound],
            self.columns_added[ColumnOrigin::NegativePart],
            self.columns_added[ColumnOrigin::Slack],
        )
    }
}
