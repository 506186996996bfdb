#![allow(clippy::float_cmp)]

use flowlp_solver::{Basis, LpError, LpSolver, SimplexSolver, SolutionStatus, Status};

/// Two rows fixed at 1 and -1 joined by one arc of cost 5.
fn solved_single_arc() -> SimplexSolver {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(2).unwrap();
    solver.add_columns(1).unwrap();
    solver.set_row_bounds(0, 1.0).unwrap();
    solver.set_row_bounds(1, -1.0).unwrap();
    solver.set_column_coefficients(0, 0, 1).unwrap();
    solver.set_column_bounds_lower(0, 0.0).unwrap();
    solver.set_column_objective(0, 5.0).unwrap();
    solver.solve_lp().unwrap();
    assert!(solver.is_optimal());
    solver
}

#[test]
fn test_calls_before_create_report_no_problem() {
    let mut solver = SimplexSolver::new();
    assert_eq!(solver.num_rows(), Err(LpError::NoProblem));
    assert_eq!(solver.add_rows(1), Err(LpError::NoProblem));
    assert_eq!(solver.solve_lp(), Err(LpError::NoProblem));
    assert_eq!(solver.objective_value(), Err(LpError::NoProblem));
    assert_eq!(solver.solution_status(), SolutionStatus::Undefined);
    assert!(!solver.is_optimal());
}

#[test]
fn test_delete_is_idempotent() {
    let mut solver = SimplexSolver::new();
    solver.delete_lp();
    solver.delete_lp();

    let mut solver = solved_single_arc();
    solver.delete_lp();
    assert_eq!(solver.num_columns(), Err(LpError::NoProblem));
    solver.delete_lp();
    assert_eq!(solver.solution_status(), SolutionStatus::Undefined);
}

#[test]
fn test_create_replaces_the_previous_problem() {
    let mut solver = solved_single_arc();
    solver.create_lp(3, 4);
    assert_eq!(solver.num_rows(), Ok(0));
    assert_eq!(solver.num_columns(), Ok(0));
    assert_eq!(solver.objective_value(), Err(LpError::NotSolved));
}

#[test]
fn test_counts_follow_additions() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(2, 3);
    assert_eq!(solver.add_rows(2), Ok(0));
    assert_eq!(solver.add_rows(3), Ok(2));
    assert_eq!(solver.add_columns(6), Ok(0));
    assert_eq!(solver.add_columns(1), Ok(6));
    assert_eq!(solver.num_rows(), Ok(5));
    assert_eq!(solver.num_columns(), Ok(7));

    // new rows are basic, new columns free
    assert_eq!(solver.row_status(4), Ok(Status::Basic));
    assert_eq!(solver.column_status(6), Ok(Status::Free));
    assert_eq!(solver.row_bounds(0), Ok(f64::INFINITY));
    assert_eq!(solver.column(0), Ok(vec![]));
}

#[test]
fn test_row_bounds_read_back() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(1).unwrap();
    solver.set_row_bounds(0, -7.5).unwrap();
    assert_eq!(solver.row_bounds(0), Ok(-7.5));
    assert_eq!(solver.row_status(0), Ok(Status::Basic));
}

#[test]
fn test_column_entries_are_ascending() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(2, 2);
    solver.add_rows(4).unwrap();
    solver.add_columns(2).unwrap();
    solver.set_column_coefficients(0, 1, 3).unwrap();
    solver.set_column_coefficients(1, 2, 0).unwrap();

    assert_eq!(solver.column(0), Ok(vec![(1, 1.0), (3, -1.0)]));
    assert_eq!(solver.column(1), Ok(vec![(0, -1.0), (2, 1.0)]));
}

#[test]
fn test_coefficients_are_set_once() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(2).unwrap();
    solver.add_columns(1).unwrap();
    solver.set_column_coefficients(0, 0, 1).unwrap();
    assert_eq!(
        solver.set_column_coefficients(0, 1, 0),
        Err(LpError::CoefficientsAlreadySet(0))
    );
    assert_eq!(solver.column(0), Ok(vec![(0, 1.0), (1, -1.0)]));
}

#[test]
fn test_source_and_target_must_differ() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(2).unwrap();
    solver.add_columns(1).unwrap();
    assert_eq!(
        solver.set_column_coefficients(0, 1, 1),
        Err(LpError::DuplicateRow { column: 0, row: 1 })
    );
    assert_eq!(solver.column(0), Ok(vec![]));
}

#[test]
fn test_out_of_range_indices() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(2).unwrap();
    solver.add_columns(1).unwrap();

    assert_eq!(
        solver.set_row_bounds(2, 1.0),
        Err(LpError::RowOutOfRange { index: 2, count: 2 })
    );
    assert_eq!(
        solver.column_primal(1),
        Err(LpError::ColumnOutOfRange { index: 1, count: 1 })
    );
    assert_eq!(
        solver.set_column_coefficients(0, 0, 5),
        Err(LpError::RowOutOfRange { index: 5, count: 2 })
    );
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_columns(1).unwrap();
    assert_eq!(
        solver.set_column_bounds(0, 2.0, 1.0),
        Err(LpError::InvalidBounds {
            lower: 2.0,
            upper: 1.0
        })
    );
    assert!(matches!(
        solver.set_column_bounds_lower(0, f64::NEG_INFINITY),
        Err(LpError::InvalidBounds { .. })
    ));
    assert_eq!(solver.column_status(0), Ok(Status::Free));
}

#[test]
fn test_statuses_round_trip() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(1).unwrap();
    solver.add_columns(1).unwrap();

    for status in Status::ALL {
        solver.set_row_status(0, status).unwrap();
        assert_eq!(solver.row_status(0), Ok(status));
        solver.set_column_status(0, status).unwrap();
        assert_eq!(solver.column_status(0), Ok(status));
    }
}

#[test]
fn test_rebounding_keeps_upper_status_of_boxed_column() {
    let mut solver = SimplexSolver::new();
    solver.create_lp(1, 1);
    solver.add_rows(2).unwrap();
    solver.add_columns(1).unwrap();

    solver.set_column_bounds(0, 0.0, 3.0).unwrap();
    assert_eq!(solver.column_status(0), Ok(Status::Lower));
    solver.set_column_status(0, Status::Upper).unwrap();
    solver.set_column_bounds(0, 0.0, 2.5).unwrap();
    assert_eq!(solver.column_status(0), Ok(Status::Upper));

    // no upper bound left to sit on
    solver.set_column_bounds_lower(0, 0.0).unwrap();
    assert_eq!(solver.column_status(0), Ok(Status::Lower));
}

#[test]
fn test_mutation_discards_results() {
    let mut solver = solved_single_arc();
    assert_eq!(solver.iteration_count(), Ok(1));

    solver.set_column_objective(0, 6.0).unwrap();
    assert_eq!(solver.solution_status(), SolutionStatus::Undefined);
    assert!(!solver.is_optimal());
    assert_eq!(solver.objective_value(), Err(LpError::NotSolved));
    assert_eq!(solver.iteration_count(), Err(LpError::NotSolved));
    assert_eq!(solver.row_dual(0), Err(LpError::NotSolved));
    assert_eq!(solver.column_primal(0), Err(LpError::NotSolved));

    solver.solve_lp().unwrap();
    assert_eq!(solver.objective_value(), Ok(6.0));
}

#[test]
fn test_status_change_discards_results() {
    let mut solver = solved_single_arc();
    solver.set_row_status(1, Status::Basic).unwrap();
    assert_eq!(solver.objective_value(), Err(LpError::NotSolved));
}

#[test]
fn test_rejected_mutation_keeps_results() {
    let mut solver = solved_single_arc();

    assert!(solver.set_row_bounds(9, 0.0).is_err());
    assert!(solver.set_column_coefficients(0, 0, 1).is_err());
    assert!(solver.set_column_objective(0, f64::NAN).is_err());

    assert!(solver.is_optimal());
    assert_eq!(solver.objective_value(), Ok(5.0));
    assert_eq!(solver.column_primal(0), Ok(1.0));
}

#[test]
fn test_basis_snapshot_must_match_the_problem() {
    let mut solver = solved_single_arc();
    let basis = solver.basis().unwrap();
    assert_eq!(basis.rows.len(), 2);
    assert_eq!(basis.columns.len(), 1);
    assert!(basis.is_complete());

    let short = Basis::new(vec![Status::Basic], vec![Status::Lower]);
    assert_eq!(
        solver.set_basis(&short),
        Err(LpError::BasisSizeMismatch {
            rows: 1,
            columns: 1,
            expected_rows: 2,
            expected_columns: 1
        })
    );
    // nothing was applied
    assert!(solver.is_optimal());
}

#[test]
fn test_solve_rejects_a_basis_of_the_wrong_size() {
    let mut solver = solved_single_arc();
    solver.set_column_status(0, Status::Lower).unwrap();
    assert_eq!(
        solver.solve_lp(),
        Err(LpError::InvalidBasis { basic: 1, rows: 2 })
    );
    assert_eq!(solver.solution_status(), SolutionStatus::Undefined);
}
