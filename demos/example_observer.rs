#![allow(non_snake_case)]

use ipqp::algebra::*;
use ipqp::io::ConfigurablePrintTarget;
use ipqp::solver::*;

fn main() {
    // minimize ½‖x‖² - x₁ - x₂  subject to  x ≥ 0
    let P = Matrix::identity(2);
    let G = Matrix::from(&[[-1., 0.], [0., -1.]]);
    let c = [-1., -1.];
    let h = [0., 0.];

    let settings = DefaultSettings::default();
    let mut solver = DefaultSolver::new(&P, &G, &c, &h, settings).unwrap();

    // keep the progress table in memory and report
    // the iterations through an observer instead
    solver.print_to_buffer();
    solver.set_iteration_callback(|info| {
        println!(
            "iter {:>2}: gap = {:.3e}, pres = {:.3e}, dres = {:.3e}",
            info.iterations, info.gap_abs, info.res_primal, info.res_dual
        );
    });

    match solver.solve() {
        Ok(()) => println!(
            "status = {}, x = {:?}",
            solver.solution.status, solver.solution.x
        ),
        Err(e) => println!("solve failed: {}", e),
    }

    println!("\n{}", solver.get_print_buffer().unwrap());
}
