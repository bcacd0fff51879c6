//! # Rewriting to standard form
//!
//! A linear program in general form has constraints of any type and variables with arbitrary
//! bounds. Simplex-type algorithms want `min <c, x>` subject to `Ax = b`, `x >= 0`, and preferably
//! an initial basis that is easy to find. The `StandardFormConverter` rewrites a `Problem` in place
//! in four steps:
//!
//! 1. Each equality constraint `<a, x> == b` becomes `<a, x> <= b` and `<a, x> >= b`.
//! 2. Each variable with a lower bound other than zero, or with a finite upper bound, is split as
//! `x = x+ - x-`, and its finite bounds become explicit constraints.
//! 3. The negative parts `x-` receive the negated coefficients and costs of `x+`, and `x+` becomes
//! non-negative.
//! 4. Each constraint receives a slack that makes it an equality. The slacks form the initial
//! basis.
//!
//! Bounds are never shifted, not even when that would have been enough. The number of rows and
//! columns of the result only depends on the number of equalities and finite bounds.
use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info, trace, warn};

use crate::data::linear_algebra::matrix::CompressedColumns;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_program::elements::{BoundDirection, ConstraintType};
use crate::data::linear_program::problem::Problem;
use crate::error::ConversionError;

pub use phase::Phase;
pub use statistics::{ColumnOrigin, ConversionStatistics, RowOrigin};

mod phase;
mod statistics;


/// Rewrites a single `Problem` into standard form.
///
/// Holds the only reference to the problem while the rewrite is in progress. A converter is used
/// once: each step can only run directly after the step preceding it.
#[derive(Debug)]
pub struct StandardFormConverter<'a, F> {
    problem: &'a mut Problem<F>,
    /// When a variable `x` is replaced by `x+ - x-`, `x+` keeps the index of `x` (the key) and `x-`
    /// gets a new column (the value).
    split_variables: HashMap<usize, usize>,
    /// For each constraint, ordered by index, the slack column that is basic for it.
    slack_basis: Vec<usize>,
    phase: Phase,
    statistics: ConversionStatistics,
}

/// A problem in standard form, as handed to a solver.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Constraint matrix `A` of `Ax = b`.
    pub constraints: CompressedColumns<F>,
    /// Right-hand side, one value per row.
    pub b: Vec<F>,
    /// Minimized objective, one value per column.
    pub cost: Vec<F>,
    #[allow(missing_docs)]
    pub nr_constraints: usize,
    #[allow(missing_docs)]
    pub nr_variables: usize,
    /// For each row, the column of the slack that is basic for that row.
    pub slack_basis: Vec<usize>,
}

impl<'a, F: Element> StandardFormConverter<'a, F> {
    /// Start a rewrite of the given problem.
    pub fn new(problem: &'a mut Problem<F>) -> Self {
        let statistics = ConversionStatistics::new(problem.nr_constraints(), problem.nr_variables());

        Self {
            problem,
            split_variables: HashMap::new(),
            slack_basis: Vec::new(),
            phase: Phase::Start,
            statistics,
        }
    }

    /// Run all four steps in order.
    ///
    /// # Arguments
    ///
    /// * `check_validity`: Whether to verify the result with `Problem::check_problem_validity`.
    ///
    /// # Return value
    ///
    /// The slack basis: for each constraint, the column that is basic for it.
    ///
    /// # Errors
    ///
    /// If any of the steps already ran, or if the result is requested to be checked and not in
    /// standard form.
    pub fn to_standard_form(&mut self, check_validity: bool) -> Result<&[usize], ConversionError> {
        self.replace_equality_constraints()?;
        self.handle_bounds()?;
        self.replace_variables()?;
        self.handle_sense()?;

        info!("Rewrote problem to standard form: {}", self.statistics);

        if check_validity {
            if let Err(error) = self.problem.check_problem_validity(&self.slack_basis) {
                warn!("Standard form is not valid: {}", error);
                return Err(error.into());
            }
            debug!("Standard form is valid");
        }

        Ok(&self.slack_basis)
    }

    /// Replace each equality constraint by two inequalities.
    ///
    /// The original constraint becomes `<=`, a copy is appended as `>=`. Constraints appended by
    /// this step are not revisited.
    ///
    /// # Errors
    ///
    /// If this is not the first step.
    pub fn replace_equality_constraints(&mut self) -> Result<(), ConversionError> {
        self.enter("replace equality constraints", Phase::Start)?;

        let equalities = self.problem.iter_constraints()
            .filter(|&(_, constraint_type, _)| constraint_type == ConstraintType::Equal)
            .map(|(i, _, _)| i)
            .collect::<Vec<_>>();
        for i in equalities {
            let copy = self.problem.copy_constraint(i)?;
            self.problem.set_constraint_type(i, ConstraintType::Less)?;
            self.problem.set_constraint_type(copy, ConstraintType::Greater)?;
            self.statistics.row_added(RowOrigin::EqualityCopy);
            trace!("Equality constraint {} copied to {}", i, copy);
        }

        self.advance();
        Ok(())
    }

    /// Make the bounds of all variables explicit constraints.
    ///
    /// A variable with a lower bound other than zero is split. If that bound is finite, the
    /// constraint `x >= l` is appended. A variable with a finite upper bound is split and `x <= u`
    /// is appended. The bounds themselves are only reset by `replace_variables`.
    ///
    /// # Errors
    ///
    /// If equality constraints were not replaced directly before.
    pub fn handle_bounds(&mut self) -> Result<(), ConversionError> {
        self.enter("handle bounds", Phase::EqualitiesReplaced)?;

        for j in 0..self.problem.nr_variables() {
            if !self.problem.is_lower_bound_zero(j)? {
                self.split_variable(j)?;
                if !self.problem.is_lower_bound_infinite(j)? {
                    let bound = self.problem.lower_bound(j)?;
                    self.add_bound_constraint(j, BoundDirection::Lower, bound)?;
                }
            }

            if !self.problem.is_upper_bound_infinite(j)? {
                self.split_variable(j)?;
                let bound = self.problem.upper_bound(j)?;
                self.add_bound_constraint(j, BoundDirection::Upper, bound)?;
            }
        }

        self.advance();
        Ok(())
    }

    /// Append the constraint `x_j >= bound` or `x_j <= bound`.
    fn add_bound_constraint(
        &mut self,
        j: usize,
        direction: BoundDirection,
        bound: F,
    ) -> Result<usize, ConversionError> {
        let i = self.problem.add_constraint(ConstraintType::from(direction), bound);
        self.problem.set_coefficient(i, j, F::one())?;
        self.statistics.row_added(RowOrigin::from(direction));
        trace!("{:?} bound {:?} of variable {} is constraint {}", direction, bound, j, i);

        Ok(i)
    }

    /// Represent variable `j` as `x+ - x-`.
    ///
    /// `x+` keeps index `j`, `x-` is a new column. Splitting a variable that was already split does
    /// nothing.
    ///
    /// # Return value
    ///
    /// The column of `x-`.
    ///
    /// # Errors
    ///
    /// If the variable doesn't exist or the split variables were already replaced.
    pub fn split_variable(&mut self, j: usize) -> Result<usize, ConversionError> {
        if self.phase >= Phase::VariablesReplaced {
            return Err(ConversionError::PhaseOrder {
                operation: "split a variable",
                expected: Phase::BoundsHandled,
                found: self.phase,
            });
        }
        self.problem.check_variable(j)?;

        if let Some(&negative) = self.split_variables.get(&j) {
            return Ok(negative);
        }

        let negative = self.problem.add_column();
        self.split_variables.insert(j, negative);
        self.statistics.column_added(ColumnOrigin::NegativePart);
        trace!("Variable {} split, negative part is column {}", j, negative);

        Ok(negative)
    }

    /// Give the negative part of each split variable its coefficients and cost.
    ///
    /// For each split variable `j` with negative part `k`, `A[i, k] = -A[i, j]` for every row `i`
    /// and `c[k] = -c[j]`. The bounds of `j` are reset to `[0, ∞)`; they are now enforced by the
    /// constraints appended in `handle_bounds`.
    ///
    /// # Errors
    ///
    /// If bounds were not handled directly before.
    pub fn replace_variables(&mut self) -> Result<(), ConversionError> {
        self.enter("replace variables", Phase::BoundsHandled)?;

        for (j, negative) in self.split_variables.iter().map(|(&j, &k)| (j, k)).sorted() {
            self.problem.set_lower_bound(j, F::zero())?;
            self.problem.set_upper_bound(j, F::infinity())?;

            // The negative part is a new column, so only the nonzeros of `j` need to be mirrored.
            let column = self.problem.column(j)?.copied().collect::<Vec<_>>();
            for (i, value) in column {
                self.problem.set_coefficient(i, negative, -value)?;
            }

            let cost = self.problem.cost(j)?;
            self.problem.set_cost(negative, -cost)?;
        }

        self.advance();
        Ok(())
    }

    /// Turn each inequality into an equality by adding a slack.
    ///
    /// The slack has coefficient `1` in a `<=` constraint and `-1` in a `>=` constraint, and is
    /// basic for that constraint in the initial basis.
    ///
    /// # Errors
    ///
    /// If variables were not replaced directly before, or if an equality constraint is found.
    pub fn handle_sense(&mut self) -> Result<(), ConversionError> {
        self.enter("handle sense", Phase::VariablesReplaced)?;

        for i in 0..self.problem.nr_constraints() {
            let direction = self.problem.constraint_type(i)?.direction()
                .ok_or(ConversionError::UnexpectedConstraintType { constraint: i, })?;

            let slack = self.problem.add_column();
            self.slack_basis.push(slack);
            self.problem.set_coefficient(i, slack, direction.into::<F>())?;
            self.problem.set_constraint_type(i, ConstraintType::Equal)?;
            self.statistics.column_added(ColumnOrigin::Slack);
        }
        debug_assert_eq!(self.slack_basis.len(), self.problem.nr_constraints());

        self.advance();
        Ok(())
    }

    /// Hand over the result to a solver.
    ///
    /// # Errors
    ///
    /// If the rewrite is not complete.
    pub fn finish(self) -> Result<StandardForm<F>, ConversionError> {
        self.enter("finish", Phase::SenseHandled)?;

        Ok(StandardForm {
            constraints: self.problem.to_csc(),
            b: self.problem.b().to_vec(),
            cost: self.problem.costs().to_vec(),
            nr_constraints: self.problem.nr_constraints(),
            nr_variables: self.problem.nr_variables(),
            slack_basis: self.slack_basis,
        })
    }

    fn enter(&self, operation: &'static str, expected: Phase) -> Result<(), ConversionError> {
        if self.phase == expected {
            debug!(
                "Starting to {} with {} constraints and {} variables",
                operation, self.problem.nr_constraints(), self.problem.nr_variables(),
            );
            Ok(())
        } else {
            Err(ConversionError::PhaseOrder { operation, expected, found: self.phase, })
        }
    }

    fn advance(&mut self) {
        debug_assert!(self.phase.next().is_some());

        if let Some(next) = self.phase.next() {
            self.phase = next;
        }
    }

    /// Last completed step.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Column of the negative part of variable `j`, if it was split.
    #[must_use]
    pub fn negative_part(&self, j: usize) -> Option<usize> {
        self.split_variables.get(&j).copied()
    }

    /// All split variables, mapped to the column of their negative part.
    #[must_use]
    pub fn split_variables(&self) -> &HashMap<usize, usize> {
        &self.split_variables
    }

    /// Slack columns, one for each constraint. Empty until `handle_sense` ran.
    #[must_use]
    pub fn slack_basis(&self) -> &[usize] {
        &self.slack_basis
    }

    /// Rows and columns appended so far.
    #[must_use]
    pub fn statistics(&self) -> &ConversionStatistics {
        &self.statistics
    }

    /// The problem being rewritten.
    #[must_use]
    pub fn problem(&self) -> &Problem<F> {
        &*self.problem
    }
}
