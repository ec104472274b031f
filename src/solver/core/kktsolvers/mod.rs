use super::{cones::NonnegativeCone, KKTSolveError};
use crate::algebra::*;

pub mod direct;

/// Linear solver for the Newton system of the interior point method.
///
/// The system is posed with respect to the current cone scaling `W`,
/// and is solved in two stages: the right hand side is set with
/// [`setrhs`](KKTSolver::setrhs) and the solution is then written by
/// [`solve`](KKTSolver::solve) into `x` and `z`.
pub trait KKTSolver<T: FloatT> {
    /// Refactor with the current scaling of `cones`
    fn update(&mut self, cones: &NonnegativeCone<T>) -> Result<(), KKTSolveError>;
    fn setrhs(&mut self, x: &[T], z: &[T]);
    fn solve(&mut self, x: &mut [T], z: &mut [T]) -> Result<(), KKTSolveError>;
}
