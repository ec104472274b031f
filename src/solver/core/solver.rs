use self::internal::*;
use super::callbacks::SolverCallbacks;
use super::cones::Cone;
use super::traits::*;
use super::{KKTSolveError, SolverError};
use crate::algebra::*;
use crate::timers::*;
use log::{debug, error, info};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a solution.
    Solved,
    /// Iteration limit reached, but the final iterate passed the
    /// reduced accuracy checks.
    AlmostSolved,
    /// Iteration limit reached before a solution was found.  The final
    /// iterate satisfies the constraints and is returned with a warning.
    MaxIterations,
    /// A linear solve failed and the solver returned the previous iterate.
    NumericalFallback,
    /// The returned iterate violates the inequality constraints.
    ConstraintViolation,
    /// Solver terminated with a numerical error before any iterate
    /// was available.
    NumericalError,
}

impl SolverStatus {
    /// `true` for any status that reports a usable solution
    pub fn is_ok(&self) -> bool {
        matches!(
            *self,
            SolverStatus::Solved
                | SolverStatus::AlmostSolved
                | SolverStatus::MaxIterations
                | SolverStatus::NumericalFallback
        )
    }

    /// `true` when a usable solution is returned with reduced
    /// confidence, i.e. without convergence
    pub fn is_warning(&self) -> bool {
        matches!(
            *self,
            SolverStatus::MaxIterations | SolverStatus::NumericalFallback
        )
    }

    /// `true` if the solve ended in an error
    pub fn is_errored(&self) -> bool {
        matches!(
            *self,
            SolverStatus::ConstraintViolation | SolverStatus::NumericalError
        )
    }
}

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum StepDirection {
    Affine,
    Combined,
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// top level solver container type
// ---------------------------------

// The top-level solver.

// This trait is defined with a collection of mutually interacting associated types.
// See the [`DefaultSolver`](crate::solver::implementations::default) for an example.

pub struct Solver<D, V, R, K, C, I, SO, SE> {
    pub data: D,
    pub variables: V,
    pub residuals: R,
    pub kktsystem: K,
    pub cones: C,
    pub step_lhs: V,
    pub step_rhs: V,
    pub prev_vars: V,
    pub info: I,
    pub solution: SO,
    pub settings: SE,
    pub timers: Option<Timers>,
    pub(crate) callbacks: SolverCallbacks<I>,
}

// ---------------------------------
// IPSolver trait and its standard implementation.
// ---------------------------------

/// An interior point solver implementing a predictor-corrector scheme

// Only the main solver function lives in IPSolver, since this is the
// only publicly facing trait we want to give the solver.   Additional
// internal functionality for the top level solver object is implemented
// for the IPSolverInternals trait below, upon which IPSolver depends

pub trait IPSolver<T, D, V, R, K, C, I, SO, SE> {
    /// Run the solver.
    ///
    /// Returns `Ok` whenever a usable iterate is available in the
    /// solution, including the non-converged cases reported by
    /// [`SolverStatus::MaxIterations`] and [`SolverStatus::NumericalFallback`].
    fn solve(&mut self) -> Result<(), SolverError>;
}

impl<T, D, V, R, K, C, I, SO, SE> IPSolver<T, D, V, R, K, C, I, SO, SE>
    for Solver<D, V, R, K, C, I, SO, SE>
where
    T: FloatT,
    D: ProblemData<T, V = V>,
    V: Variables<T, D = D, R = R, C = C, SE = SE> + std::fmt::Debug,
    R: Residuals<T, D = D, V = V>,
    K: KKTSystem<T, D = D, V = V, C = C, SE = SE>,
    C: Cone<T>,
    I: Info<T, D = D, V = V, R = R, C = C, SE = SE>,
    SO: Solution<T, D = D, V = V, I = I>,
    SE: Settings<T>,
{
    fn solve(&mut self) -> Result<(), SolverError> {
        // various initializations
        let mut iter: u32 = 0;
        let mut σ = T::one();
        let mut α = T::zero();
        let mut failure: Option<KKTSolveError> = None;

        //timers is stored as an option so that
        //we can swap it out here and avoid
        //borrow conflicts with other fields.
        let mut timers = self.timers.take().unwrap_or_default();

        // solver release info, solver config
        // problem dimensions etc
        notimeit! {timers; {
            let printed = self
                .info
                .print_configuration(&self.settings, &self.data, &self.cones)
                .and_then(|_| self.info.print_status_header(&self.settings));
            _log_print_error(printed);
        }}

        let (n, m) = self.data.dims();
        debug!("starting solve with n = {}, m = {}", n, m);

        self.info.reset(&mut timers);

        timeit! {timers => "solve"; {

        // initialize variables to some reasonable starting point
        timeit!{timers => "default start"; {
            if let Err(e) = self.default_start() {
                error!("initial point solve failed: {}", e);
                self.info.set_status(SolverStatus::NumericalError);
                failure = Some(e);
            }
        }}

        timeit!{timers => "IP iteration"; {

        // ----------
        // main loop
        // ----------

        while failure.is_none() {

            //update the residuals
            //--------------
            self.residuals.update(&self.variables, &self.data);

            //calculate duality gap (scaled)
            //--------------
            let μ = self.variables.calc_mu(&self.residuals, &self.cones);

            // record scalar values from most recent iteration.
            // This captures μ at iteration zero.
            self.info.save_scalars(μ, α, σ, iter);

            // convergence check and printing
            // --------------
            self.info.update(
                &self.data,
                &self.variables,
                &self.residuals,&timers);

            notimeit!{timers; {
                _log_print_error(self.info.print_status(&self.settings));
            }}

            self.callbacks.notify_iteration(&self.info);

            let isdone = self.info.check_termination(&self.residuals, &self.settings, iter);
            if isdone {
                break;
            }

            // Copy previous iterate in case the next one is a dud
            self.info.save_prev_iterate(&self.variables,&mut self.prev_vars);

            match self.step(μ, &mut timers) {
                Ok((αstep, σstep)) => {
                    α = αstep;
                    σ = σstep;
                    //only count iterations that produce an update
                    iter += 1;
                }
                Err(e) => {
                    error!(
                        "numerical failure at iteration {}: {}.  Iterate: {:?}",
                        iter, e, self.variables
                    );
                    self.info.reset_to_prev_iterate(&mut self.variables, &self.prev_vars);

                    // residuals still correspond to the previous iterate
                    if self.residuals.constraints_satisfied() {
                        info!("falling back to the iterate from iteration {}", iter);
                        self.info.set_status(SolverStatus::NumericalFallback);
                    } else {
                        self.info.set_status(SolverStatus::ConstraintViolation);
                    }
                    break;
                }
            }

        } //end loop
        // ----------
        // ----------

        }} //end "IP iteration" timer

        }} // end "solve" timer

        //store final solution, timing etc
        self.info
            .finalize(&self.residuals, &self.settings, &mut timers);

        self.solution
            .finalize(&self.data, &self.variables, &self.info);

        _log_print_error(self.info.print_footer(&self.settings));

        //stow the timers back into Option in the solver struct
        self.timers.replace(timers);

        match (self.info.get_status(), failure) {
            (_, Some(source)) => Err(SolverError::NumericalFailure {
                iterations: iter,
                source,
            }),
            (SolverStatus::ConstraintViolation, None) => {
                Err(self.info.constraint_violation_error())
            }
            _ => Ok(()),
        }
    }
}

fn _log_print_error(result: std::io::Result<()>) {
    if let Err(e) = result {
        debug!("progress printing failed: {}", e);
    }
}

// Encapsulate the internal helpers trait in a private module
// so it doesn't get exported
mod internal {
    use super::super::cones::Cone;
    use super::super::traits::*;
    use super::*;

    pub(super) trait IPSolverInternals<T, D, V, R, K, C, I, SO, SE> {
        /// Find an initial condition
        fn default_start(&mut self) -> Result<(), KKTSolveError>;

        /// Compute a centering parameter
        fn centering_parameter(&self, α: T) -> T;

        /// Compute the current step length
        fn get_step_length(&mut self, step_direction: StepDirection) -> T;

        /// Take one predictor-corrector step, returning
        /// the step length and centering parameter used
        fn step(&mut self, μ: T, timers: &mut Timers) -> Result<(T, T), KKTSolveError>;
    }

    impl<T, D, V, R, K, C, I, SO, SE> IPSolverInternals<T, D, V, R, K, C, I, SO, SE>
        for Solver<D, V, R, K, C, I, SO, SE>
    where
        T: FloatT,
        D: ProblemData<T, V = V>,
        V: Variables<T, D = D, R = R, C = C, SE = SE>,
        R: Residuals<T, D = D, V = V>,
        K: KKTSystem<T, D = D, V = V, C = C, SE = SE>,
        C: Cone<T>,
        I: Info<T, D = D, V = V, R = R, C = C, SE = SE>,
        SO: Solution<T, D = D, V = V, I = I>,
        SE: Settings<T>,
    {
        fn default_start(&mut self) -> Result<(), KKTSolveError> {
            // set all scalings to identity
            self.cones.set_identity_scaling();
            // Refactor
            self.kktsystem
                .update(&self.data, &self.cones, &self.settings)?;
            // solve for primal/dual initial points via KKT
            self.kktsystem
                .solve_initial_point(&mut self.variables, &self.data, &self.settings)?;
            // fix up (z,s) so that they are in the cone
            self.variables.symmetric_initialization(&self.cones);
            Ok(())
        }

        fn centering_parameter(&self, α: T) -> T {
            self.step_lhs.centering_parameter(&self.cones, α)
        }

        fn get_step_length(&mut self, step_direction: StepDirection) -> T {
            //step length to stay within the cones
            self.variables.calc_step_length(
                &self.step_lhs,
                &mut self.cones,
                &self.settings,
                step_direction,
            )
        }

        fn step(&mut self, μ: T, timers: &mut Timers) -> Result<(T, T), KKTSolveError> {
            // update the scalings
            // --------------
            if !self.variables.scale_cones(&mut self.cones) {
                return Err(KKTSolveError::NonFinite);
            }

            // Update the KKT system and the constant parts of its solution.
            // --------------
            let factored;
            timeit!{timers => "kkt update"; {
                factored = self.kktsystem.update(&self.data, &self.cones, &self.settings);
            }}
            factored?;

            // calculate the affine step
            // --------------
            self.step_rhs
                .affine_step_rhs(&self.residuals, &self.cones);

            let solved;
            timeit!{timers => "kkt solve"; {
                solved = self.kktsystem.solve(
                    &mut self.step_lhs,
                    &self.step_rhs,
                    &self.data,
                    &self.variables,
                    &mut self.cones,
                    StepDirection::Affine,
                    &self.settings,
                );
            }}
            solved?;

            //calculate step length and centering parameter
            // --------------
            let α = self.get_step_length(StepDirection::Affine);
            let σ = self.centering_parameter(α);

            // calculate the combined step and length
            // --------------
            self.step_rhs.combined_step_rhs(
                &self.residuals,
                &self.cones,
                &self.step_lhs,
                σ,
                μ,
            );

            let solved;
            timeit!{timers => "kkt solve"; {
                solved = self.kktsystem.solve(
                    &mut self.step_lhs,
                    &self.step_rhs,
                    &self.data,
                    &self.variables,
                    &mut self.cones,
                    StepDirection::Combined,
                    &self.settings,
                );
            }}
            solved?;

            // compute final step length and update the current iterate
            // --------------
            let α = self.get_step_length(StepDirection::Combined);

            self.variables.add_step(&self.step_lhs, α);
            if !self.variables.is_finite() {
                return Err(KKTSolveError::NonFinite);
            }

            Ok((α, σ))
        }
    } // end trait impl
} //end internals module
