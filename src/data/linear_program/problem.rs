//! # Linear programs that can grow
//!
//! Data structure for in-place manipulation of linear programs. The `Problem` starts out in
//! general form, as handed over by a reader, and is rewritten into standard form by the
//! `algorithm::standard_form` module.
use std::iter::repeat_n;
use std::slice::Iter;

use itertools::izip;

use crate::data::linear_algebra::matrix::{CompressedColumns, SparseMatrix};
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_program::elements::ConstraintType;
use crate::error::{InconsistencyError, IndexKind, ProblemError, ValidationError};

/// A linear program `min <cost, x>` subject to `constraints` with per-variable bounds.
///
/// Rows and columns can be appended but never removed, so indices stay valid for the lifetime of
/// the problem. Bounds are stored as values, with `F::neg_infinity()` and `F::infinity()` meaning
/// that a variable is not bounded in that direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    // Constraint related
    /// All constraint coefficients.
    ///
    /// Has size `constraint_types.len()` in the row direction, size `cost.len()` in the column
    /// direction.
    constraints: SparseMatrix<F>,
    /// The equation type of all rows, ordered by index.
    constraint_types: Vec<ConstraintType>,
    /// All right-hand sides of equations.
    b: Vec<F>,

    // Variable related
    lower_bounds: Vec<F>,
    upper_bounds: Vec<F>,
    /// Coefficients of the minimized objective function.
    cost: Vec<F>,
}

impl<F: Element> Problem<F> {
    /// Create a problem of the given dimensions without any coefficients.
    ///
    /// All variables are non-negative with cost zero, all constraints read `<0, x> <= 0`.
    #[must_use]
    pub fn new(nr_constraints: usize, nr_variables: usize) -> Self {
        Self {
            constraints: SparseMatrix::new(nr_constraints, nr_variables),
            constraint_types: repeat_n(ConstraintType::Less, nr_constraints).collect(),
            b: repeat_n(F::zero(), nr_constraints).collect(),
            lower_bounds: repeat_n(F::zero(), nr_variables).collect(),
            upper_bounds: repeat_n(F::infinity(), nr_variables).collect(),
            cost: repeat_n(F::zero(), nr_variables).collect(),
        }
    }

    /// Create a problem from its parts.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Coefficient matrix.
    /// * `constraint_types`: One type for each row of `constraints`.
    /// * `b`: One right-hand side for each row of `constraints`.
    /// * `bounds`: Lower and upper bound for each column of `constraints`.
    /// * `cost`: Objective coefficient for each column of `constraints`.
    ///
    /// # Errors
    ///
    /// If the lengths don't match the dimensions of the matrix, or if a bound pair is empty or
    /// can't be attained (like a lower bound of `+∞`).
    pub fn from_parts(
        constraints: SparseMatrix<F>,
        constraint_types: Vec<ConstraintType>,
        b: Vec<F>,
        bounds: Vec<(F, F)>,
        cost: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        let nr_constraints = constraints.nr_rows();
        let nr_variables = constraints.nr_columns();

        if constraint_types.len() != nr_constraints || b.len() != nr_constraints {
            return Err(InconsistencyError::new(format!(
                "Expected {} constraint types and right-hand sides, got {} and {}",
                nr_constraints, constraint_types.len(), b.len(),
            )));
        }
        if bounds.len() != nr_variables || cost.len() != nr_variables {
            return Err(InconsistencyError::new(format!(
                "Expected {} bounds and costs, got {} and {}", nr_variables, bounds.len(), cost.len(),
            )));
        }
        for (j, &(lower, upper)) in bounds.iter().enumerate() {
            if !(lower <= upper) || lower == F::infinity() || upper == F::neg_infinity() {
                return Err(InconsistencyError::new(format!(
                    "Variable {} has inconsistent bounds [{:?}, {:?}]", j, lower, upper,
                )));
            }
        }
        let (lower_bounds, upper_bounds) = bounds.into_iter().unzip();

        Ok(Self { constraints, constraint_types, b, lower_bounds, upper_bounds, cost, })
    }

    /// Create a problem from the output of a reader.
    ///
    /// The constraint matrix is given as a compressed sparse row triple, see
    /// `SparseMatrix::from_csr`.
    ///
    /// # Errors
    ///
    /// If the triple is malformed or the other data doesn't fit its dimensions.
    #[allow(clippy::too_many_arguments)]
    pub fn from_csr(
        nr_constraints: usize,
        nr_variables: usize,
        values: &[F],
        column_indices: &[usize],
        row_starts: &[usize],
        bounds: Vec<(F, F)>,
        constraint_types: Vec<ConstraintType>,
        b: Vec<F>,
        cost: Vec<F>,
    ) -> Result<Self, InconsistencyError> {
        let constraints = SparseMatrix::from_csr(
            nr_constraints, nr_variables, values, column_indices, row_starts,
        )?;

        Self::from_parts(constraints, constraint_types, b, bounds, cost)
    }

    fn check_constraint(&self, i: usize) -> Result<(), ProblemError> {
        if i < self.nr_constraints() {
            Ok(())
        } else {
            Err(ProblemError::IndexOutOfBounds {
                kind: IndexKind::Constraint,
                index: i,
                len: self.nr_constraints(),
            })
        }
    }

    pub(crate) fn check_variable(&self, j: usize) -> Result<(), ProblemError> {
        if j < self.nr_variables() {
            Ok(())
        } else {
            Err(ProblemError::IndexOutOfBounds {
                kind: IndexKind::Variable,
                index: j,
                len: self.nr_variables(),
            })
        }
    }

    /// Number of constraints (rows).
    #[must_use]
    pub fn nr_constraints(&self) -> usize {
        self.constraint_types.len()
    }

    /// Number of variables (columns).
    #[must_use]
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of nonzero constraint coefficients.
    #[must_use]
    pub fn nr_nonzeros(&self) -> usize {
        self.constraints.nr_nonzeros()
    }

    /// Type of constraint `i`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn constraint_type(&self, i: usize) -> Result<ConstraintType, ProblemError> {
        self.check_constraint(i)?;
        Ok(self.constraint_types[i])
    }

    /// Change the type of constraint `i`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn set_constraint_type(
        &mut self,
        i: usize,
        constraint_type: ConstraintType,
    ) -> Result<(), ProblemError> {
        self.check_constraint(i)?;
        self.constraint_types[i] = constraint_type;
        Ok(())
    }

    /// Coefficient of variable `j` in constraint `i`, zero if not stored.
    ///
    /// # Errors
    ///
    /// If either index is out of bounds.
    pub fn coefficient(&self, i: usize, j: usize) -> Result<F, ProblemError> {
        self.check_constraint(i)?;
        self.check_variable(j)?;
        Ok(self.constraints.get_value(i, j))
    }

    /// Overwrite the coefficient of variable `j` in constraint `i`.
    ///
    /// # Errors
    ///
    /// If either index is out of bounds.
    pub fn set_coefficient(&mut self, i: usize, j: usize, value: F) -> Result<(), ProblemError> {
        self.check_constraint(i)?;
        self.check_variable(j)?;
        self.constraints.set_value(i, j, value);
        Ok(())
    }

    /// All (`row`, `value`) pairs of column `j`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn column(&self, j: usize) -> Result<Iter<'_, SparseTuple<F>>, ProblemError> {
        self.check_variable(j)?;
        Ok(self.constraints.column(j))
    }

    /// Objective coefficient of variable `j`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn cost(&self, j: usize) -> Result<F, ProblemError> {
        self.check_variable(j)?;
        Ok(self.cost[j])
    }

    /// Change the objective coefficient of variable `j`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn set_cost(&mut self, j: usize, value: F) -> Result<(), ProblemError> {
        self.check_variable(j)?;
        self.cost[j] = value;
        Ok(())
    }

    /// Right-hand side of constraint `i`.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn rhs(&self, i: usize) -> Result<F, ProblemError> {
        self.check_constraint(i)?;
        Ok(self.b[i])
    }

    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn lower_bound(&self, j: usize) -> Result<F, ProblemError> {
        self.check_variable(j)?;
        Ok(self.lower_bounds[j])
    }

    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn set_lower_bound(&mut self, j: usize, value: F) -> Result<(), ProblemError> {
        self.check_variable(j)?;
        self.lower_bounds[j] = value;
        Ok(())
    }

    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn upper_bound(&self, j: usize) -> Result<F, ProblemError> {
        self.check_variable(j)?;
        Ok(self.upper_bounds[j])
    }

    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn set_upper_bound(&mut self, j: usize, value: F) -> Result<(), ProblemError> {
        self.check_variable(j)?;
        self.upper_bounds[j] = value;
        Ok(())
    }

    /// Whether the lower bound of variable `j` is exactly zero.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn is_lower_bound_zero(&self, j: usize) -> Result<bool, ProblemError> {
        self.lower_bound(j).map(|bound| bound.is_zero())
    }

    /// Whether variable `j` is unbounded from below.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn is_lower_bound_infinite(&self, j: usize) -> Result<bool, ProblemError> {
        self.lower_bound(j).map(|bound| bound == F::neg_infinity())
    }

    /// Whether variable `j` is unbounded from above.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn is_upper_bound_infinite(&self, j: usize) -> Result<bool, ProblemError> {
        self.upper_bound(j).map(|bound| bound == F::infinity())
    }

    /// Append a variable.
    ///
    /// The new variable is non-negative, has no upper bound, cost zero and doesn't appear in any
    /// constraint.
    ///
    /// # Return value
    ///
    /// The index of the new variable.
    pub fn add_column(&mut self) -> usize {
        let j = self.constraints.push_column();
        self.lower_bounds.push(F::zero());
        self.upper_bounds.push(F::infinity());
        self.cost.push(F::zero());

        debug_assert_eq!(j + 1, self.nr_variables());
        j
    }

    /// Append a constraint without any coefficients.
    ///
    /// # Return value
    ///
    /// The index of the new constraint.
    pub fn add_constraint(&mut self, constraint_type: ConstraintType, rhs: F) -> usize {
        let i = self.constraints.push_row();
        self.constraint_types.push(constraint_type);
        self.b.push(rhs);

        debug_assert_eq!(i + 1, self.nr_constraints());
        i
    }

    /// Append a copy of constraint `i`: the same coefficients, type and right-hand side.
    ///
    /// # Return value
    ///
    /// The index of the new constraint.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds.
    pub fn copy_constraint(&mut self, i: usize) -> Result<usize, ProblemError> {
        self.check_constraint(i)?;

        let new_i = self.constraints.copy_row(i);
        self.constraint_types.push(self.constraint_types[i]);
        self.b.push(self.b[i]);

        debug_assert_eq!(new_i + 1, self.nr_constraints());
        Ok(new_i)
    }

    /// All constraint coefficients.
    #[must_use]
    pub fn constraints(&self) -> &SparseMatrix<F> {
        &self.constraints
    }

    /// Constraint types, ordered by row index.
    #[must_use]
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Right-hand sides, ordered by row index.
    #[must_use]
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Objective coefficients, ordered by column index.
    #[must_use]
    pub fn costs(&self) -> &[F] {
        &self.cost
    }

    /// Lower bounds, ordered by column index.
    #[must_use]
    pub fn lower_bounds(&self) -> &[F] {
        &self.lower_bounds
    }

    /// Upper bounds, ordered by column index.
    #[must_use]
    pub fn upper_bounds(&self) -> &[F] {
        &self.upper_bounds
    }

    /// Constraint matrix in compressed sparse column format.
    #[must_use]
    pub fn to_csc(&self) -> CompressedColumns<F> {
        self.constraints.to_csc()
    }

    /// Constraint matrix as a row-major dense matrix.
    #[must_use]
    pub fn to_dense(&self) -> Vec<Vec<F>> {
        self.constraints.to_dense()
    }

    /// Check whether this problem is in standard form with the given basis.
    ///
    /// This method is read-only and might be expensive, use it for debugging. It can be viewed as
    /// documentation of what a standard form problem with a slack basis looks like: every
    /// constraint is an equality, and basis column `basis[i]` is a unit column (`1` or `-1`) for
    /// row `i`.
    ///
    /// # Errors
    ///
    /// The first violation found.
    pub fn check_problem_validity(&self, basis: &[usize]) -> Result<(), ValidationError> {
        if let Some((constraint, &found)) = self.constraint_types.iter().enumerate()
            .find(|&(_, &constraint_type)| constraint_type != ConstraintType::Equal) {
            return Err(ValidationError::NotEquality { constraint, found, });
        }

        if basis.len() != self.nr_constraints() {
            return Err(ValidationError::BasisLength {
                expected: self.nr_constraints(),
                found: basis.len(),
            });
        }

        for (constraint, &column) in basis.iter().enumerate() {
            if column >= self.nr_variables() {
                return Err(ValidationError::BasisColumnOutOfRange {
                    constraint,
                    column,
                    nr_variables: self.nr_variables(),
                });
            }

            let value = self.constraints.get_value(constraint, column);
            if value != F::one() && value != -F::one() {
                return Err(ValidationError::NotUnitCoefficient { constraint, column, });
            }

            if let Some(&(other, _)) = self.constraints.column(column)
                .find(|&&(row, _)| row != constraint) {
                return Err(ValidationError::NonzeroOutsideRow { constraint, column, other, });
            }
        }

        Ok(())
    }

    /// Iterate over (`type`, `rhs`) pairs of all constraints, together with their index.
    pub fn iter_constraints(&self) -> impl Iterator<Item = (usize, ConstraintType, F)> + '_ {
        izip!(0.., &self.constraint_types, &self.b)
            .map(|(i, &constraint_type, &rhs)| (i, constraint_type, rhs))
    }
}
