#![allow(non_snake_case)]

use ipqp::{algebra::*, solver::*};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

fn quiet() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap()
}

// P = A'A + I for a random square A
fn spd_matrix(n: usize, a: &[f64]) -> Matrix<f64> {
    let mut P = Matrix::identity(n);
    for i in 0..n {
        for j in 0..n {
            P[(i, j)] += (0..n).map(|k| a[k + i * n] * a[k + j * n]).sum::<f64>();
        }
    }
    P
}

fn strictly_feasible_qp() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>)> {
    (1usize..5, 1usize..7).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(-1.0..1.0, n * n),
            prop::collection::vec(-1.0..1.0, m * n),
            prop::collection::vec(-5.0..5.0, n),
            prop::collection::vec(-2.0..2.0, n),
            prop::collection::vec(0.1..2.0, m),
        )
            .prop_map(move |(a, g, c, x0, slack)| {
                let P = spd_matrix(n, &a);
                let G = Matrix::new_from_slice((m, n), &g);

                // h = Gx₀ + slack, so x₀ is strictly feasible
                let mut h = slack;
                G.gemv(&mut h, &x0, 1.0, 1.0);
                (P, G, c, h)
            })
    })
}

fn box_qp() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>)> {
    (1usize..5).prop_flat_map(|n| {
        (
            prop::collection::vec(1.0..10.0, n),
            prop::collection::vec(-5.0..5.0, n),
            prop::collection::vec(0.5..3.0, n),
        )
            .prop_map(move |(d, c, u)| {
                let mut P = Matrix::zeros((n, n));
                for (i, &di) in d.iter().enumerate() {
                    P[(i, i)] = di;
                }

                // -u ≤ x ≤ u
                let mut G = Matrix::zeros((2 * n, n));
                for i in 0..n {
                    G[(i, i)] = 1.;
                    G[(n + i, i)] = -1.;
                }
                let h = [u.clone(), u].concat();
                (P, G, c, h)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn feasible_qp_solution_is_feasible((P, G, c, h) in strictly_feasible_qp()) {
        let result = solve_qp(&P, &G, &c, &h, quiet()).unwrap();

        // Invariant: the returned iterate satisfies Gx ≤ h.
        let mut Gx = vec![0.; h.len()];
        G.gemv(&mut Gx, &result.x, 1.0, 0.0);
        for (gx, hi) in Gx.iter().zip(&h) {
            prop_assert!(*gx <= hi + 1e-6);
        }
        prop_assert!(result.status.is_ok());
    }

    #[test]
    fn box_qp_gap_decreases((P, G, c, h) in box_qp()) {
        let gaps = Arc::new(Mutex::new(Vec::<f64>::new()));
        let recorder = Arc::clone(&gaps);

        let mut solver = DefaultSolver::new(&P, &G, &c, &h, quiet()).unwrap();
        solver.set_iteration_callback(move |info| recorder.lock().unwrap().push(info.gap_abs));
        solver.solve().unwrap();
        prop_assert_eq!(solver.solution.status, SolverStatus::Solved);

        // Invariant: after the first two iterations the gap never grows.
        let gaps = gaps.lock().unwrap();
        for pair in gaps.iter().skip(2).collect::<Vec<_>>().windows(2) {
            prop_assert!(*pair[1] <= *pair[0] * (1. + 1e-8) + 1e-14);
        }

        // Invariant: the solution matches the clipped unconstrained minimizer.
        for i in 0..c.len() {
            let xi = (-c[i] / P[(i, i)]).clamp(-h[i], h[i]);
            prop_assert!((solver.solution.x[i] - xi).abs() <= 1e-5);
        }
    }

    #[test]
    fn repeated_solves_are_identical((P, G, c, h) in strictly_feasible_qp()) {
        let first = solve_qp(&P, &G, &c, &h, quiet());
        let second = solve_qp(&P, &G, &c, &h, quiet());

        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.x, b.x);
                prop_assert_eq!(a.iterations, b.iterations);
                prop_assert_eq!(a.status, b.status);
            }
            (Err(a), Err(b)) => {
                prop_assert_eq!(a.to_string(), b.to_string());
            }
            _ => {
                prop_assert!(false, "solves disagree");
            }
        }
    }
}
