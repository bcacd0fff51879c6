//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use relp_standard_form::algorithm::standard_form::{Phase, StandardFormConverter};
use relp_standard_form::data::linear_program::elements::ConstraintType;
use relp_standard_form::data::linear_program::problem::Problem;
use relp_standard_form::error::ConversionError;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Knapsack-like problem with an equality and a few bounded variables.
///
/// min -x0 - 2 x1 + x2 - x3
/// s.t.
///     x0 + x1 + x2 + x3 == 4
///     x0 - x3          >= -2
///     x0 <= 3, -1 <= x1 <= 2, x2 >= 1, x3 free
fn problem() -> Problem<f64> {
    Problem::from_csr(
        2,
        4,
        &[1.0, 1.0, 1.0, 1.0, 1.0, -1.0],
        &[0, 1, 2, 3, 0, 3],
        &[0, 4, 6],
        vec![(0.0, 3.0), (-1.0, 2.0), (1.0, f64::INFINITY), (f64::NEG_INFINITY, f64::INFINITY)],
        vec![ConstraintType::Equal, ConstraintType::Greater],
        vec![4.0, -2.0],
        vec![-1.0, -2.0, 1.0, -1.0],
    ).unwrap()
}

#[test]
fn row_and_column_growth() {
    init();

    let mut problem = problem();
    let mut converter = StandardFormConverter::new(&mut problem);
    converter.to_standard_form(true).unwrap();
    let nr_split = converter.split_variables().len();

    // One equality, two nonzero finite lower bounds, two finite upper bounds
    let nr_constraints = 2 + 1 + 2 + 2;
    assert_eq!(nr_split, 4);
    assert_eq!(problem.nr_constraints(), nr_constraints);
    assert_eq!(problem.nr_variables(), 4 + nr_split + nr_constraints);
    assert_eq!(problem.b(), &[4.0, -2.0, 4.0, 3.0, -1.0, 2.0, 1.0]);
}

#[test]
fn solver_input() {
    init();

    let mut problem = problem();
    let mut converter = StandardFormConverter::new(&mut problem);
    converter.to_standard_form(false).unwrap();
    let standard_form = converter.finish().unwrap();

    assert_eq!(standard_form.constraints.nr_columns(), standard_form.nr_variables);
    assert_eq!(standard_form.cost.len(), standard_form.nr_variables);
    assert_eq!(standard_form.b.len(), standard_form.nr_constraints);
    assert_eq!(standard_form.slack_basis.len(), standard_form.nr_constraints);

    // Each slack is a unit column for its own row
    for (i, &slack) in standard_form.slack_basis.iter().enumerate() {
        let column = standard_form.constraints.column(slack).collect::<Vec<_>>();
        assert_eq!(column.len(), 1);
        assert_eq!(column[0].0, i);
        assert_eq!(column[0].1.abs(), 1.0);
    }
    // No explicit zeros, rows increasing within each column
    assert!(standard_form.constraints.values.iter().all(|&value| value != 0.0));
    for j in 0..standard_form.nr_variables {
        let rows = standard_form.constraints.column(j).map(|(i, _)| i).collect::<Vec<_>>();
        assert!(rows.is_sorted());
    }
}

#[test]
fn single_use() {
    init();

    let mut problem = problem();
    let mut converter = StandardFormConverter::new(&mut problem);
    converter.to_standard_form(false).unwrap();

    assert!(matches!(
        converter.to_standard_form(false),
        Err(ConversionError::PhaseOrder { found: Phase::SenseHandled, .. }),
    ));
}
