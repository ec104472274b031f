use super::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::{
    callbacks::{Callback, SolverCallbacks},
    cones::NonnegativeCone,
    IPSolver, Solver, SolverError, SolverStatus,
};

use crate::algebra::*;
use crate::timers::*;
use std::io::Write;

/// Solver for problems of the form
/// ```text
/// minimize    ½x'Px + c'x
/// subject to  Gx ≤ h
/// ```

pub type DefaultSolver<T = f64> = Solver<
    DefaultProblemData<T>,
    DefaultVariables<T>,
    DefaultResiduals<T>,
    DefaultKKTSystem<T>,
    NonnegativeCone<T>,
    DefaultInfo<T>,
    DefaultSolution<T>,
    DefaultSettings<T>,
>;

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    /// Create a solver for the problem `min ½x'Px + c'x  s.t.  Gx ≤ h`.
    ///
    /// `P` must be `n × n` and `G` must be `m × n`, with `c` of length `n`
    /// and `h` of length `m`.  Settings are validated before any data is copied.
    pub fn new(
        P: &Matrix<T>,
        G: &Matrix<T>,
        c: &[T],
        h: &[T],
        settings: DefaultSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate()?;

        let mut timers = Timers::default();
        let mut output;

        timeit! {timers => "setup"; {

        let info = DefaultInfo::<T>::new();
        let data = DefaultProblemData::<T>::new(P,G,c,h)?;
        let cones = NonnegativeCone::<T>::new(data.m);
        let variables = DefaultVariables::<T>::new(data.n,data.m);
        let residuals = DefaultResiduals::<T>::new(data.n,data.m);

        let kktsystem;
        timeit!{timers => "kktinit"; {
            kktsystem = DefaultKKTSystem::<T>::new(&data);
        }}

        // work variables for assembling step direction LHS/RHS
        let step_rhs  = DefaultVariables::<T>::new(data.n,data.m);
        let step_lhs  = DefaultVariables::<T>::new(data.n,data.m);
        let prev_vars = DefaultVariables::<T>::new(data.n,data.m);

        // user facing results go here.
        let solution = DefaultSolution::<T>::new(data.n,data.m);

        output = Self{data,variables,residuals,kktsystem,step_lhs,
             step_rhs,prev_vars,info,solution,cones,settings,
             timers: None, callbacks: SolverCallbacks::default()};

        }} //end "setup" timer.

        //now that the timer is finished we can swap our
        //timer object into the solver structure
        output.timers.replace(timers);

        Ok(output)
    }

    /// Create a solver from any [`ProblemSource`]
    pub fn from_source<S>(source: &S, settings: DefaultSettings<T>) -> Result<Self, SolverError>
    where
        S: ProblemSource<T> + ?Sized,
    {
        let problem = source.problem()?;
        Self::new(&problem.P, &problem.G, &problem.c, &problem.h, settings)
    }

    /// Register an observer called with the solver info once per iteration,
    /// after the residuals and costs have been updated.
    pub fn set_iteration_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&DefaultInfo<T>) + Send + 'static,
    {
        self.callbacks.iteration_callback = Callback::Rust(Box::new(callback));
    }

    pub fn unset_iteration_callback(&mut self) {
        self.callbacks.iteration_callback = Callback::None;
    }
}

impl<T> ConfigurablePrintTarget for DefaultSolver<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.info.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.info.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.info.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.info.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.info.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.info.get_print_buffer()
    }
}

// ---------------------------------
// one-shot interface
// ---------------------------------

/// Result of [`solve_qp`]
#[derive(Debug, Clone)]
pub struct QPResult<T = f64> {
    /// primal solution
    pub x: Vec<T>,
    /// number of interior point iterations taken
    pub iterations: u32,
    /// ‖rx‖² + ‖rz‖² + s'z at the returned iterate
    pub residual_norm: T,
    /// termination status
    pub status: SolverStatus,
}

impl<T> QPResult<T> {
    /// `true` if `x` was returned without convergence, either at the
    /// iteration limit or after falling back to an earlier iterate.
    pub fn is_warning(&self) -> bool {
        self.status.is_warning()
    }
}

impl<T> From<&DefaultSolution<T>> for QPResult<T>
where
    T: FloatT,
{
    fn from(solution: &DefaultSolution<T>) -> Self {
        Self {
            x: solution.x.clone(),
            iterations: solution.iterations,
            residual_norm: solution.residual_norm,
            status: solution.status,
        }
    }
}

/// Solve `min ½x'Px + c'x  s.t.  Gx ≤ h` in a single call.
///
/// ```
/// use ipqp::algebra::Matrix;
/// use ipqp::solver::*;
///
/// let P = Matrix::<f64>::from(&[[1., 0.], [0., 1.]]);
/// let G = Matrix::from(&[[-1., 0.], [0., -1.]]);
///
/// let settings = DefaultSettingsBuilder::default()
///     .verbose(false)
///     .build()
///     .unwrap();
///
/// let result = solve_qp(&P, &G, &[-1., -1.], &[0., 0.], settings).unwrap();
/// assert!(!result.is_warning());
/// assert!((result.x[0] - 1.).abs() < 1e-6);
/// ```
pub fn solve_qp<T>(
    P: &Matrix<T>,
    G: &Matrix<T>,
    c: &[T],
    h: &[T],
    settings: DefaultSettings<T>,
) -> Result<QPResult<T>, SolverError>
where
    T: FloatT,
{
    let mut solver = DefaultSolver::new(P, G, c, h, settings)?;
    solver.solve()?;
    Ok(QPResult::from(&solver.solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::core::traits::KKTSystem;
    use crate::solver::core::{KKTSolveError, StepDirection};

    // Wraps the default KKT system and fails the update with the
    // given (1-based) count.  The first update is the initial point.
    struct FailingKKTSystem {
        inner: DefaultKKTSystem<f64>,
        updates: usize,
        fail_on: usize,
    }

    impl KKTSystem<f64> for FailingKKTSystem {
        type D = DefaultProblemData<f64>;
        type V = DefaultVariables<f64>;
        type C = NonnegativeCone<f64>;
        type SE = DefaultSettings<f64>;

        fn update(
            &mut self,
            data: &DefaultProblemData<f64>,
            cones: &NonnegativeCone<f64>,
            settings: &DefaultSettings<f64>,
        ) -> Result<(), KKTSolveError> {
            self.updates += 1;
            if self.updates == self.fail_on {
                return Err(DenseFactorizationError::Cholesky.into());
            }
            self.inner.update(data, cones, settings)
        }

        fn solve(
            &mut self,
            lhs: &mut DefaultVariables<f64>,
            rhs: &DefaultVariables<f64>,
            data: &DefaultProblemData<f64>,
            variables: &DefaultVariables<f64>,
            cones: &mut NonnegativeCone<f64>,
            step_direction: StepDirection,
            settings: &DefaultSettings<f64>,
        ) -> Result<(), KKTSolveError> {
            self.inner
                .solve(lhs, rhs, data, variables, cones, step_direction, settings)
        }

        fn solve_initial_point(
            &mut self,
            variables: &mut DefaultVariables<f64>,
            data: &DefaultProblemData<f64>,
            settings: &DefaultSettings<f64>,
        ) -> Result<(), KKTSolveError> {
            self.inner.solve_initial_point(variables, data, settings)
        }
    }

    type FailingSolver = Solver<
        DefaultProblemData<f64>,
        DefaultVariables<f64>,
        DefaultResiduals<f64>,
        FailingKKTSystem,
        NonnegativeCone<f64>,
        DefaultInfo<f64>,
        DefaultSolution<f64>,
        DefaultSettings<f64>,
    >;

    fn failing_solver(
        P: Matrix<f64>,
        G: Matrix<f64>,
        c: &[f64],
        h: &[f64],
        fail_on: usize,
    ) -> FailingSolver {
        let settings = DefaultSettingsBuilder::default()
            .verbose(false)
            .build()
            .unwrap();
        let Solver {
            data,
            variables,
            residuals,
            kktsystem,
            cones,
            step_lhs,
            step_rhs,
            prev_vars,
            info,
            solution,
            settings,
            timers,
            callbacks,
        } = DefaultSolver::new(&P, &G, c, h, settings).unwrap();

        let kktsystem = FailingKKTSystem {
            inner: kktsystem,
            updates: 0,
            fail_on,
        };

        Solver {
            data,
            variables,
            residuals,
            kktsystem,
            cones,
            step_lhs,
            step_rhs,
            prev_vars,
            info,
            solution,
            settings,
            timers,
            callbacks,
        }
    }

    #[test]
    fn test_failure_after_one_step_falls_back() {
        // the initial point satisfies Gx + s = h exactly,
        // and every later iterate keeps it
        let P = Matrix::from(&[[2., 0.], [0., 2.]]);
        let G = Matrix::identity(2);
        let (c, h) = ([0., 0.], [1., 1.]);

        let mut solver = failing_solver(P, G, &c, &h, 3);
        assert!(solver.solve().is_ok());

        let solution = &solver.solution;
        assert_eq!(solution.status, SolverStatus::NumericalFallback);
        assert_eq!(solution.iterations, 1);
        assert!(solution.residual_norm.is_finite());

        // the restored iterate is the one after the first step
        let result = QPResult::from(solution);
        assert!(result.is_warning());
        assert!(result.x.iter().all(|&x| x < 1. + 1e-4));
    }

    #[test]
    fn test_failure_from_infeasible_iterate_is_hard() {
        // x ≤ -1: the shifted initial point has Gx + s - h = 1.5
        let P = Matrix::from(&[[1.]]);
        let G = Matrix::from(&[[1.]]);
        let (c, h) = ([0.], [-1.]);

        let mut solver = failing_solver(P, G, &c, &h, 2);
        let err = solver.solve().unwrap_err();

        assert!(matches!(
            err,
            SolverError::ConstraintViolation { iterations: 0, .. }
        ));
        assert_eq!(solver.solution.status, SolverStatus::ConstraintViolation);
        assert_eq!(solver.solution.iterations, 0);
    }

    #[test]
    fn test_failure_at_initial_point() {
        let P = Matrix::from(&[[1.]]);
        let G = Matrix::from(&[[1.]]);
        let (c, h) = ([0.], [1.]);

        let mut solver = failing_solver(P, G, &c, &h, 1);
        let err = solver.solve().unwrap_err();

        assert!(matches!(
            err,
            SolverError::NumericalFailure { iterations: 0, .. }
        ));
        assert_eq!(solver.solution.status, SolverStatus::NumericalError);
    }
}
