#![allow(non_snake_case)]

use ipqp::algebra::*;
use ipqp::solver::*;
use std::fs::File;

fn main() {
    let P = Matrix::from(&[[4., 1.], [1., 2.]]);
    let G = Matrix::from(&[[1., 0.], [0., 1.], [-1., 0.], [0., -1.]]);
    let c = [-4., -6.];
    let h = [0.3, 0.3, 1., 1.];

    let settings = DefaultSettingsBuilder::default()
        .verbose(false)
        .build()
        .unwrap();
    let solver = DefaultSolver::new(&P, &G, &c, &h, settings).unwrap();

    let path = std::env::temp_dir().join("ipqp_example.json");
    let mut file = File::create(&path).unwrap();
    solver.write_to_file(&mut file).unwrap();

    // load the problem back with new settings and solve it
    let source = JsonProblemFile::new(&path);
    let mut solver = DefaultSolver::<f64>::from_source(&source, DefaultSettings::default()).unwrap();
    solver.solve().unwrap();

    println!("x = {:?}", solver.solution.x);
}
