//! Example 3.5 from Introduction to Linear Optimization by Bertsimas and Tsitsiklis.
//!
//! min -10 x1 - 12 x2 - 12 x3
//! s.t.
//!       x1 + 2 x2 + 2 x3 <= 20
//!     2 x1 +   x2 + 2 x3 <= 20
//!     2 x1 + 2 x2 +   x3 <= 20
//!     x1, x2, x3 >= 0
use crate::algorithm::standard_form::{StandardForm, StandardFormConverter};
use crate::data::linear_algebra::matrix::CompressedColumns;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::problem::Problem;

type T = f64;

#[test]
fn conversion_pipeline() {
    let mut problem = general_form();
    let mut converter = StandardFormConverter::new(&mut problem);
    converter.to_standard_form(false).unwrap();

    assert_eq!(converter.finish(), Ok(standard_form()));
    assert_eq!(problem.nr_nonzeros(), 12);
    assert_eq!(
        problem.to_dense(),
        vec![
            vec![1.0, 2.0, 2.0, 1.0, 0.0, 0.0],
            vec![2.0, 1.0, 2.0, 0.0, 1.0, 0.0],
            vec![2.0, 2.0, 1.0, 0.0, 0.0, 1.0],
        ],
    );
}

/// Build the problem as a reader would hand it over.
pub fn general_form() -> Problem<T> {
    Problem::from_csr(
        3,
        3,
        &[1.0, 2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 1.0],
        &[0, 1, 2, 0, 1, 2, 0, 1, 2],
        &[0, 3, 6, 9],
        vec![(0.0, T::INFINITY); 3],
        vec![ConstraintType::Less; 3],
        vec![20.0; 3],
        vec![-10.0, -12.0, -12.0],
    ).unwrap()
}

pub fn standard_form() -> StandardForm<T> {
    StandardForm {
        constraints: CompressedColumns {
            values: vec![1.0, 2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
            row_indices: vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2],
            column_starts: vec![0, 3, 6, 9, 10, 11, 12],
        },
        b: vec![20.0; 3],
        cost: vec![-10.0, -12.0, -12.0, 0.0, 0.0, 0.0],
        nr_constraints: 3,
        nr_variables: 6,
        slack_basis: vec![3, 4, 5],
    }
}
