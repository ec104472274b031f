#![allow(non_snake_case)]

use ipqp::{algebra::*, solver::*};

fn quiet() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

#[allow(clippy::type_complexity)]
fn basic_qp_data() -> (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>) {
    // minimize x'x subject to x ≤ 1
    let P = Matrix::from(&[[2., 0.], [0., 2.]]);
    let G = Matrix::identity(2);
    let c = vec![0., 0.];
    let h = vec![1., 1.];
    (P, G, c, h)
}

#[allow(clippy::type_complexity)]
fn box_qp_data() -> (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>) {
    // P = [4. 1;1 2], with -1 ≤ x ≤ 0.3 and x₂ ≤ 0.4
    let P = Matrix::from(&[[4., 1.], [1., 2.]]);
    let G = Matrix::from(&[
        [1., 0.],
        [0., 1.],
        [-1., 0.],
        [0., -1.],
        [0., 1.],
    ]);
    let c = vec![-4., -6.];
    let h = vec![0.3, 0.3, 1., 1., 0.4];
    (P, G, c, h)
}

#[test]
fn test_qp_univariate() {
    let P = Matrix::identity(1);
    let G = Matrix::identity(1);
    let c = [0.];
    let h = [1.];

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();

    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(f64::abs(solver.solution.x[0]) <= 1e-6);
    assert!(f64::abs(solver.solution.obj_val) <= 1e-6);
    assert!(f64::abs(solver.solution.obj_val_dual) <= 1e-6);
}

#[test]
fn test_qp_interior_minimizer() {
    let (P, G, c, h) = basic_qp_data();

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();

    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert!(solver.solution.x.norm_inf() <= 1e-6);
    assert!(solver.solution.gap <= 1e-8);
    assert!(solver.solution.iterations <= 15);

    // inactive constraints have vanishing multipliers
    assert!(solver.solution.z.norm_inf() <= 1e-6);
}

#[test]
fn test_qp_nonnegative_orthant() {
    // x ≥ 0, unconstrained minimizer [1,1] is feasible
    let P = Matrix::identity(2);
    let G = Matrix::from(&[[-1., 0.], [0., -1.]]);
    let c = [-1., -1.];
    let h = [0., 0.];

    let result = solve_qp(&P, &G, &c, &h, quiet()).unwrap();

    assert_eq!(result.status, SolverStatus::Solved);
    assert!(!result.is_warning());
    assert!(result.x.norm_inf_diff(&[1., 1.]) <= 1e-6);
}

#[test]
fn test_qp_active_constraints() {
    let (P, G, c, h) = box_qp_data();

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();
    assert_eq!(solver.solution.status, SolverStatus::Solved);

    // both upper bounds at 0.3 are active:
    // ∇f = Px + c = [1.5 - 4, 0.9 - 6] < 0 at x = [0.3, 0.3]
    let x = &solver.solution.x;
    assert!(x.norm_inf_diff(&[0.3, 0.3]) <= 1e-6);

    let refobj = 0.5 * (4. * 0.09 + 2. * 0.09 + 2. * 0.09) - 4. * 0.3 - 6. * 0.3;
    assert!(f64::abs(solver.solution.obj_val - refobj) <= 1e-6);
    assert!(f64::abs(solver.solution.obj_val_dual - refobj) <= 1e-6);

    // multipliers on the active bounds, none elsewhere
    let z = &solver.solution.z;
    assert!(z[0] > 1. && z[1] > 1.);
    assert!(z[2..].norm_inf() <= 1e-6);
}

#[test]
fn test_qp_zero_constraint_matrix() {
    // G = 0 with h ≥ 0 leaves the unconstrained minimizer -P⁻¹c
    let P = Matrix::from(&[[2., 1.], [1., 3.]]);
    let G = Matrix::zeros((3, 2));
    let c = [1., -2.];
    let h = [1., 0., 2.];

    let result = solve_qp(&P, &G, &c, &h, quiet()).unwrap();
    assert!(result.status.is_ok());
    assert!(result.x.norm_inf_diff(&[-1., 1.]) <= 1e-6);
}

#[test]
fn test_qp_unconstrained() {
    let P = Matrix::from(&[[2., 1.], [1., 3.]]);
    let G = Matrix::zeros((0, 2));
    let c = [1., -2.];
    let h: [f64; 0] = [];

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();

    // solved by the initial point alone
    assert_eq!(solver.solution.status, SolverStatus::Solved);
    assert_eq!(solver.solution.iterations, 0);
    assert!(solver.solution.x.norm_inf_diff(&[-1., 1.]) <= 1e-12);
    assert!(solver.solution.s.is_empty());
}

#[test]
fn test_qp_max_iterations() {
    let (P, G, c, h) = basic_qp_data();
    let settings = DefaultSettingsBuilder::default()
        .verbose(false)
        .max_iter(1)
        .build()
        .unwrap();

    // non-convergence is not an error
    let result = solve_qp(&P, &G, &c, &h, settings).unwrap();

    assert_eq!(result.iterations, 1);
    assert_eq!(result.status, SolverStatus::MaxIterations);
    assert!(result.is_warning());
    assert_eq!(result.x.len(), 2);
    assert!(result.x.is_finite());
    assert!(result.residual_norm.is_finite());
}

#[test]
fn test_qp_repeat_solve() {
    let (P, G, c, h) = box_qp_data();

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();
    let first = solver.solution.clone();

    // resolving the same object starts from scratch
    solver.solve().unwrap();
    assert_eq!(solver.solution.x, first.x);
    assert_eq!(solver.solution.iterations, first.iterations);

    // as does an independent solver on the same data
    let mut solver2 = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver2.solve().unwrap();
    assert_eq!(solver2.solution.x, first.x);
    assert_eq!(solver2.solution.z, first.z);
    assert_eq!(solver2.solution.s, first.s);
    assert_eq!(solver2.solution.residual_norm, first.residual_norm);
}

#[test]
fn test_qp_timers() {
    let (P, G, c, h) = basic_qp_data();

    let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
    solver.solve().unwrap();

    let timers = solver.timers.as_ref().unwrap();
    assert!(timers.elapsed(&["setup"]).is_some());
    assert!(timers.elapsed(&["solve", "IP iteration"]).is_some());
    assert!(solver.solution.solve_time >= 0.);
}

#[test]
fn test_qp_f32() {
    let P = Matrix::<f32>::from(&[[2., 0.], [0., 2.]]);
    let G = Matrix::<f32>::identity(2);
    let settings = DefaultSettingsBuilder::<f32>::default()
        .verbose(false)
        .tol_feas(1e-5)
        .tol_gap_abs(1e-5)
        .tol_gap_rel(1e-5)
        .rootfinding_tol(1e-6)
        .build()
        .unwrap();

    let result = solve_qp(&P, &G, &[1., 1.], &[1., 1.], settings).unwrap();
    assert!(result.status.is_ok());
    assert!(result.x.norm_inf_diff(&[-0.5, -0.5]) <= 1e-3);
}

#[test]
fn test_solver_is_send() {
    fn assert_send<S: Send>() {}
    assert_send::<DefaultSolver<f64>>();
    assert_send::<QPResult<f64>>();
}
