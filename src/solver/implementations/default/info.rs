use super::*;
use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::core::{
    traits::{Info, Residuals},
    SolverError, SolverStatus,
};
use crate::solver::traits::Variables;
use crate::timers::*;
use log::{debug, info, warn};

// reduced accuracy thresholds applied when the
// iteration limit is reached
const FEASIBLE_TOL: f64 = 1e-8;
const ABSOLUTE_TOL: f64 = 1e-5;
const REL_BUFFER: f64 = 1e4;

/// Standard-form solver type implementing the [`Info`](crate::solver::core::traits::Info) and [`InfoPrint`](crate::solver::core::traits::InfoPrint) traits

#[derive(Default, Debug)]
pub struct DefaultInfo<T> {
    pub μ: T,
    pub sigma: T,
    pub step_length: T,
    pub iterations: u32,
    pub cost_primal: T,
    pub cost_dual: T,
    /// ‖rx‖ relative to max(1,‖c‖)
    pub res_primal: T,
    /// ‖rz‖ relative to max(1,‖h‖)
    pub res_dual: T,
    /// duality gap s'z
    pub gap_abs: T,
    /// gap relative to the objective, or `+Inf` where undefined
    pub gap_rel: T,
    /// ‖rx‖² + ‖rz‖² + s'z
    pub res_norm: T,

    // previous iterate
    prev_cost_primal: T,
    prev_cost_dual: T,
    prev_res_primal: T,
    prev_res_dual: T,
    prev_gap_abs: T,
    prev_gap_rel: T,
    prev_res_norm: T,

    pub solve_time: f64,
    pub status: SolverStatus,

    // target stream for printing
    pub(crate) stream: PrintTarget,
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Info<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type V = DefaultVariables<T>;
    type R = DefaultResiduals<T>;

    fn reset(&mut self, timers: &mut Timers) {
        self.status = SolverStatus::Unsolved;
        self.iterations = 0;
        self.solve_time = 0f64;

        timers.reset_timer("solve");
    }

    fn finalize(
        &mut self,
        residuals: &DefaultResiduals<T>,
        _settings: &DefaultSettings<T>,
        timers: &mut Timers,
    ) {
        // if we ran out of iterations, check for
        // partial convergence
        if self.status == SolverStatus::MaxIterations {
            self.validate_final_iterate(residuals);
        }

        self.solve_time = timers.total_time().as_secs_f64();
    }

    fn update(
        &mut self,
        data: &DefaultProblemData<T>,
        _variables: &DefaultVariables<T>,
        residuals: &DefaultResiduals<T>,
        timers: &Timers,
    ) {
        // primal and dual costs
        let half: T = (0.5).as_T();
        self.cost_primal = half * residuals.dot_xPx + residuals.dot_cx;
        self.cost_dual = self.cost_primal + residuals.dot_xGtz - residuals.dot_hz;

        // relative residuals
        self.res_primal = residuals.rx.norm() / T::max(T::one(), data.normc);
        self.res_dual = residuals.rz.norm() / T::max(T::one(), data.normh);

        // absolute and relative gaps
        self.gap_abs = residuals.dot_sz;
        self.gap_rel = {
            if self.cost_primal < T::zero() {
                self.gap_abs / -self.cost_primal
            } else if self.cost_dual > T::zero() {
                self.gap_abs / self.cost_dual
            } else {
                T::infinity()
            }
        };

        self.res_norm = residuals.norm;

        // solve time so far (includes setup)
        self.solve_time = timers.total_time().as_secs_f64();

        debug!(
            "iter {}: pcost = {:e}, dcost = {:e}, gap = {:e}, norm = {:e}",
            self.iterations, self.cost_primal, self.cost_dual, self.gap_abs, self.res_norm
        );
    }

    fn check_termination(
        &mut self,
        _residuals: &DefaultResiduals<T>,
        settings: &DefaultSettings<T>,
        iter: u32,
    ) -> bool {
        //  optimality
        // ---------------------
        if self.is_solved(settings.tol_gap_abs, settings.tol_gap_rel, settings.tol_feas) {
            debug!("converged after {} iterations", iter);
            self.status = SolverStatus::Solved;
        }
        // iteration limits
        // ----------------------
        else if iter >= settings.max_iter {
            info!("stopping at the iteration limit ({})", settings.max_iter);
            self.status = SolverStatus::MaxIterations;
        }

        // return TRUE if we settled on a final status
        self.status != SolverStatus::Unsolved
    }

    fn save_prev_iterate(&mut self, variables: &Self::V, prev_variables: &mut Self::V) {
        self.prev_cost_primal = self.cost_primal;
        self.prev_cost_dual = self.cost_dual;
        self.prev_res_primal = self.res_primal;
        self.prev_res_dual = self.res_dual;
        self.prev_gap_abs = self.gap_abs;
        self.prev_gap_rel = self.gap_rel;
        self.prev_res_norm = self.res_norm;

        prev_variables.copy_from(variables);
    }

    fn reset_to_prev_iterate(&mut self, variables: &mut Self::V, prev_variables: &Self::V) {
        self.cost_primal = self.prev_cost_primal;
        self.cost_dual = self.prev_cost_dual;
        self.res_primal = self.prev_res_primal;
        self.res_dual = self.prev_res_dual;
        self.gap_abs = self.prev_gap_abs;
        self.gap_rel = self.prev_gap_rel;
        self.res_norm = self.prev_res_norm;

        variables.copy_from(prev_variables);
    }

    fn save_scalars(&mut self, μ: T, α: T, σ: T, iter: u32) {
        self.μ = μ;
        self.step_length = α;
        self.sigma = σ;
        self.iterations = iter;
    }

    fn get_status(&self) -> SolverStatus {
        self.status
    }

    fn set_status(&mut self, status: SolverStatus) {
        self.status = status;
    }

    fn constraint_violation_error(&self) -> SolverError {
        SolverError::ConstraintViolation {
            iterations: self.iterations,
            gap: self.gap_abs.as_f64(),
            res_primal: self.res_primal.as_f64(),
            res_dual: self.res_dual.as_f64(),
        }
    }
}

// Utility functions for convergence checking

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    fn is_solved(&self, tol_gap_abs: T, tol_gap_rel: T, tol_feas: T) -> bool {
        ((self.gap_abs <= tol_gap_abs) || (self.gap_rel <= tol_gap_rel))
            && (self.res_primal <= tol_feas)
            && (self.res_dual <= tol_feas)
    }

    fn validate_final_iterate(&mut self, residuals: &DefaultResiduals<T>) {
        let tol_feas: T = (FEASIBLE_TOL * REL_BUFFER).as_T();
        let tol_gap: T = (ABSOLUTE_TOL * REL_BUFFER).as_T();

        if !residuals.constraints_satisfied() {
            self.status = SolverStatus::ConstraintViolation;
        } else if self.res_primal <= tol_feas && self.res_dual <= tol_feas && self.gap_abs <= tol_gap
        {
            self.status = SolverStatus::AlmostSolved;
        } else {
            warn!(
                "no convergence after {} iterations (gap = {:e}, pres = {:e}, dres = {:e})",
                self.iterations, self.gap_abs, self.res_primal, self.res_dual
            );
        }
    }
}
