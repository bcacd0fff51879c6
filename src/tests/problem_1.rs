//! Small production planning problem with only inequality constraints and non-negative variables.
//!
//! min -3 x1 - 5 x2 + x3 + x4
//! s.t.
//!       x1 +   x2 + x3 +   x4 <= 40
//!     5 x1 +   x2             <= 12
//!                   x3 +   x4 >=  5
//!                   x3 + 5 x4 <= 50
//!     x1, x2, x3, x4 >= 0
use crate::algorithm::standard_form::{ColumnOrigin, RowOrigin, StandardForm, StandardFormConverter};
use crate::data::linear_algebra::matrix::CompressedColumns;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::problem::Problem;

type T = f64;

#[test]
fn conversion_pipeline() {
    let mut problem = general_form();
    assert_eq!(problem.nr_nonzeros(), 10);

    let mut converter = StandardFormConverter::new(&mut problem);
    let basis = converter.to_standard_form(true).unwrap().to_vec();
    assert_eq!(basis, vec![4, 5, 6, 7]);

    // All bounds are already [0, ∞), so nothing is split.
    assert!(converter.split_variables().is_empty());
    assert_eq!(converter.statistics().rows_added(RowOrigin::EqualityCopy), 0);
    assert_eq!(converter.statistics().columns_added(ColumnOrigin::Slack), 4);

    let computed = converter.finish().unwrap();
    assert_eq!(computed, standard_form());
    assert_eq!(computed.constraints.column_starts[computed.nr_variables], 14);

    assert!(problem.constraint_types().iter().all(|&t| t == ConstraintType::Equal));
    assert_eq!(problem.lower_bounds(), &[0.0; 8]);
}

/// Build the problem as a reader would hand it over.
pub fn general_form() -> Problem<T> {
    Problem::from_csr(
        4,
        4,
        &[1.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0, 5.0],
        &[0, 1, 2, 3, 0, 1, 2, 3, 2, 3],
        &[0, 4, 6, 8, 10],
        vec![(0.0, T::INFINITY); 4],
        vec![ConstraintType::Less, ConstraintType::Less, ConstraintType::Greater, ConstraintType::Less],
        vec![40.0, 12.0, 5.0, 50.0],
        vec![-3.0, -5.0, 1.0, 1.0],
    ).unwrap()
}

/// The expected result: one slack per row, `-1` for the `>=` row.
pub fn standard_form() -> StandardForm<T> {
    StandardForm {
        constraints: CompressedColumns {
            values: vec![1.0, 5.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, -1.0, 1.0],
            row_indices: vec![0, 1, 0, 1, 0, 2, 3, 0, 2, 3, 0, 1, 2, 3],
            column_starts: vec![0, 2, 4, 7, 10, 11, 12, 13, 14],
        },
        b: vec![40.0, 12.0, 5.0, 50.0],
        cost: vec![-3.0, -5.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        nr_constraints: 4,
        nr_variables: 8,
        slack_basis: vec![4, 5, 6, 7],
    }
}
