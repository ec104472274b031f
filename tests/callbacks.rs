#![allow(non_snake_case)]

#[cfg(test)]
mod callback_test {

    use ipqp::{algebra::*, solver::*};
    use std::sync::{Arc, Mutex};

    fn test_callback_solver() -> DefaultSolver<f64> {
        let P = Matrix::from(&[[4., 1.], [1., 2.]]);
        let G = Matrix::from(&[[1., 0.], [0., 1.], [-1., 0.], [0., -1.]]);
        let c = [-4., -6.];
        let h = [0.3, 0.3, 1., 1.];
        let settings = DefaultSettingsBuilder::default()
            .verbose(false)
            .build()
            .unwrap();
        DefaultSolver::new(&P, &G, &c, &h, settings).unwrap()
    }

    #[test]
    fn test_iteration_callback() {
        let seen = Arc::new(Mutex::new(Vec::<(u32, f64)>::new()));
        let recorder = Arc::clone(&seen);

        let mut solver = test_callback_solver();
        solver.set_iteration_callback(move |info: &DefaultInfo<f64>| {
            recorder
                .lock()
                .unwrap()
                .push((info.iterations, info.gap_abs));
        });
        solver.solve().unwrap();
        assert_eq!(solver.solution.status, SolverStatus::Solved);

        // one call per residual evaluation, including iteration zero
        let seen_now = seen.lock().unwrap().clone();
        let iterations = solver.solution.iterations;
        assert_eq!(seen_now.len() as u32, iterations + 1);
        for (k, &(iter, _)) in seen_now.iter().enumerate() {
            assert_eq!(iter, k as u32);
        }
        // the final call sees the returned gap
        assert_eq!(seen_now.last().unwrap().1, solver.solution.gap);

        // turn it off and run again
        solver.unset_iteration_callback();
        solver.solve().unwrap();
        assert_eq!(seen.lock().unwrap().len(), seen_now.len());
    }

    #[test]
    fn test_callback_gap_decrease() {
        let gaps = Arc::new(Mutex::new(Vec::<f64>::new()));
        let recorder = Arc::clone(&gaps);

        let mut solver = test_callback_solver();
        solver.set_iteration_callback(move |info| recorder.lock().unwrap().push(info.gap_abs));
        solver.solve().unwrap();

        let gaps = gaps.lock().unwrap();
        assert!(gaps.len() > 3);
        for pair in gaps[2..].windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }
}
