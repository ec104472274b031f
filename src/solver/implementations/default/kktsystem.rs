use super::*;
use crate::solver::core::{
    cones::{Cone, NonnegativeCone},
    kktsolvers::{direct::*, *},
    traits::KKTSystem,
    KKTSolveError, StepDirection,
};

use crate::algebra::*;

// We require Send here so that solver objects can be
// moved between threads.

type BoxedKKTSolver<T> = Box<dyn KKTSolver<T> + Send>;

/// Standard-form solver type implementing the [`KKTSystem`](crate::solver::core::traits::KKTSystem) trait

pub struct DefaultKKTSystem<T> {
    kktsolver: BoxedKKTSolver<T>,

    // work vectors for assembling/dissambling vectors
    workx: Vec<T>,
    workz: Vec<T>,
    work_conic: Vec<T>,
}

impl<T> DefaultKKTSystem<T>
where
    T: FloatT,
{
    pub fn new(data: &DefaultProblemData<T>) -> Self {
        let (m, n) = (data.m, data.n);

        let kktsolver = Box::new(DenseCholeskyKKTSolver::<T>::new(&data.P, &data.G));

        //workspace compatible with (x,z)
        let workx = vec![T::zero(); n];
        let workz = vec![T::zero(); m];

        //additional conic workspace vector compatible with s and z
        let work_conic = vec![T::zero(); m];

        Self {
            kktsolver,
            workx,
            workz,
            work_conic,
        }
    }
}

impl<T> KKTSystem<T> for DefaultKKTSystem<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;
    type C = NonnegativeCone<T>;
    type SE = DefaultSettings<T>;

    fn update(
        &mut self,
        _data: &DefaultProblemData<T>,
        cones: &NonnegativeCone<T>,
        _settings: &DefaultSettings<T>,
    ) -> Result<(), KKTSolveError> {
        // update the linear solver with new cones
        self.kktsolver.update(cones)
    }

    fn solve(
        &mut self,
        lhs: &mut DefaultVariables<T>,
        rhs: &DefaultVariables<T>,
        _data: &DefaultProblemData<T>,
        _variables: &DefaultVariables<T>,
        cones: &mut NonnegativeCone<T>,
        _step_direction: StepDirection,
        _settings: &DefaultSettings<T>,
    ) -> Result<(), KKTSolveError> {
        // rhs.s holds the centrality shift ds, which
        // enters the z part of the system as -Wλ⁻¹ds
        self.workx.copy_from(&rhs.x);
        cones.mul_Wλinv(&mut self.work_conic, &rhs.s);
        self.workz
            .waxpby(T::one(), &rhs.z, -T::one(), &self.work_conic);

        self.kktsolver.setrhs(&self.workx, &self.workz);
        self.kktsolver.solve(&mut lhs.x, &mut lhs.z)?;

        // solve for Δs
        // -------------
        cones.Δs_from_Δz(&mut lhs.s, &rhs.s, &lhs.z);

        if !lhs.s.is_finite() {
            return Err(KKTSolveError::NonFinite);
        }
        Ok(())
    }

    fn solve_initial_point(
        &mut self,
        variables: &mut DefaultVariables<T>,
        data: &DefaultProblemData<T>,
        _settings: &DefaultSettings<T>,
    ) -> Result<(), KKTSolveError> {
        // with unit scaling, solving with [-c;h] as a RHS
        // gives x and z = Gx - h, i.e. the negated slack
        self.workx.scalarop_from(|c| -c, &data.c);
        self.workz.copy_from(&data.h);
        self.kktsolver.setrhs(&self.workx, &self.workz);
        self.kktsolver.solve(&mut variables.x, &mut variables.z)?;
        variables.s.scalarop_from(|z| -z, &variables.z);
        Ok(())
    }
}
