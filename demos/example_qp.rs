#![allow(non_snake_case)]

use ipqp::algebra::*;
use ipqp::solver::*;

fn problem_data() -> (Matrix<f64>, Matrix<f64>, Vec<f64>, Vec<f64>) {
    let P = Matrix::from(&[
        [6., 0.], //
        [0., 4.],
    ]);

    let c = vec![-1., -4.];

    // x₁ - 2x₂ ≤ 0 together with the box |x| ≤ 1
    let G = Matrix::from(&[
        [1., -2.],
        [1., 0.],
        [0., 1.],
        [-1., 0.],
        [0., -1.],
    ]);

    let h = vec![0., 1., 1., 1., 1.];

    (P, G, c, h)
}

fn main() {
    let (P, G, c, h) = problem_data();

    let settings = DefaultSettingsBuilder::default()
        .max_iter(50)
        .build()
        .unwrap();

    let mut solver = match DefaultSolver::new(&P, &G, &c, &h, settings) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("bad problem: {}", e);
            return;
        }
    };

    if let Err(e) = solver.solve() {
        eprintln!("solve failed: {}", e);
        return;
    }

    println!("x = {:?}", solver.solution.x);
}
