#![allow(non_snake_case)]

use crate::algebra::FloatT;
use crate::solver::CoreSettings;

mod nonnegativecone;
pub use nonnegativecone::*;

/// Operations required of the constraint cone in the interior
/// point iteration.  `s` is the primal slack and `z` the dual
/// variable, both held strictly inside the cone while iterating.
pub trait Cone<T: FloatT> {
    /// number of elements in the cone
    fn numel(&self) -> usize;

    /// degree of the cone, i.e. the normalizing term in μ = s'z/degree
    fn degree(&self) -> usize;

    /// Shift `z` into the cone interior if it is not already there.
    fn shift_to_cone(&self, z: &mut [T]);

    /// Set the scaling to the identity, i.e. W = I
    fn set_identity_scaling(&mut self);

    /// Update the scaling point for the pair (s,z).  Returns
    /// false if the scaling is not finite or not positive.
    fn update_scaling(&mut self, s: &[T], z: &[T]) -> bool;

    /// Copy out the diagonal of the scaling matrix W
    fn get_W(&self, w: &mut [T]);

    /// Write the affine centrality shift ds = -λ∘λ
    fn affine_ds(&self, ds: &mut [T]);

    /// Write the combined centrality shift
    /// ds = -λ∘λ - (W⁻¹Δs)∘(WΔz) + σμe, where (Δs,Δz) is the
    /// affine step direction
    fn combined_ds_shift(&self, ds: &mut [T], step_z: &[T], step_s: &[T], σμ: T);

    /// y = Wλ⁻¹x, i.e. the correction to the z part of the
    /// KKT right hand side induced by the shift ds = x
    fn mul_Wλinv(&self, y: &mut [T], x: &[T]);

    /// Recover Δs = W(λ⁻¹ds - WΔz) from a solved Δz
    fn Δs_from_Δz(&self, out: &mut [T], ds: &[T], dz: &[T]);

    /// Maximum step length in (0,1] in the direction (dz,ds)
    fn step_length(&mut self, dz: &[T], ds: &[T], settings: &CoreSettings<T>) -> T;

    /// Centering parameter for the predictor step of length `α`
    fn centering_parameter(&self, dz: &[T], ds: &[T], α: T) -> T;
}
