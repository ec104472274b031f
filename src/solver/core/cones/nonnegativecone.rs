use super::*;
use crate::{
    algebra::*,
    solver::{utils::rootfinding::brent_root, CoreSettings},
};
use itertools::izip;
use std::iter::zip;

// -------------------------------------
// Nonnegative Cone
// -------------------------------------

/// The nonnegative orthant R^m_+ with diagonal
/// primal-dual scaling w = √(s/z), λ = √(s∘z)
#[derive(Debug, Clone)]
pub struct NonnegativeCone<T> {
    dim: usize,
    w: Vec<T>,
    λ: Vec<T>,
    work: Vec<T>,
}

impl<T> NonnegativeCone<T>
where
    T: FloatT,
{
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            w: vec![T::one(); dim],
            λ: vec![T::one(); dim],
            work: vec![T::zero(); dim],
        }
    }

    pub(crate) fn λ(&self) -> &[T] {
        &self.λ
    }
}

impl<T> Cone<T> for NonnegativeCone<T>
where
    T: FloatT,
{
    fn numel(&self) -> usize {
        self.dim
    }

    fn degree(&self) -> usize {
        self.dim
    }

    fn shift_to_cone(&self, z: &mut [T]) {
        // α = max(-z), with no shift over an empty set
        let α = -z.minimum();
        if α >= T::zero() {
            z.translate(T::one() + α);
        }
    }

    fn set_identity_scaling(&mut self) {
        self.w.fill(T::one());
        self.λ.fill(T::one());
    }

    fn update_scaling(&mut self, s: &[T], z: &[T]) -> bool {
        for (λ, w, s, z) in izip!(&mut self.λ, &mut self.w, s, z) {
            *λ = T::sqrt((*s) * (*z));
            *w = T::sqrt((*s) / (*z));
        }

        let is_positive = |v: &[T]| v.iter().all(|&x| x > T::zero() && x.is_finite());
        is_positive(&self.w) && is_positive(&self.λ)
    }

    fn get_W(&self, w: &mut [T]) {
        w.copy_from(&self.w);
    }

    fn affine_ds(&self, ds: &mut [T]) {
        assert_eq!(self.λ.len(), ds.len());
        for (dsi, &λi) in zip(ds, &self.λ) {
            *dsi = -λi * λi;
        }
    }

    fn combined_ds_shift(&self, ds: &mut [T], step_z: &[T], step_s: &[T], σμ: T) {
        // NB: (W⁻¹Δs)∘(WΔz) = Δs∘Δz for diagonal W
        for (dsi, &λi, &Δz, &Δs) in izip!(ds, &self.λ, step_z, step_s) {
            *dsi = -λi * λi - Δs * Δz + σμ;
        }
    }

    fn mul_Wλinv(&self, y: &mut [T], x: &[T]) {
        for (yi, &wi, &λi, &xi) in izip!(y, &self.w, &self.λ, x) {
            *yi = (wi / λi) * xi;
        }
    }

    fn Δs_from_Δz(&self, out: &mut [T], ds: &[T], dz: &[T]) {
        for (outi, &wi, &λi, &dsi, &dzi) in izip!(out, &self.w, &self.λ, ds, dz) {
            *outi = wi * (dsi / λi - wi * dzi);
        }
    }

    fn step_length(&mut self, dz: &[T], ds: &[T], settings: &CoreSettings<T>) -> T {
        let tol = settings.rootfinding_tol;
        let max_iter = settings.rootfinding_max_iter;

        // step in the scaled coordinates, i.e. keeping λ + α⋅W⁻¹Δs
        // and λ + α⋅WΔz in the cone
        self.work.scalarop_from(|x| x, ds);
        zip(&mut self.work, &self.w).for_each(|(v, &w)| *v /= w);
        let αs = _max_step_scaled(&self.λ, &self.work, tol, max_iter);

        self.work.scalarop_from(|x| x, dz);
        self.work.hadamard(&self.w);
        let αz = _max_step_scaled(&self.λ, &self.work, tol, max_iter);

        T::min(αs, αz)
    }

    fn centering_parameter(&self, dz: &[T], ds: &[T], α: T) -> T {
        let λλ = self.λ.sumsq();
        let mut ρ = T::one() - α;
        if λλ > T::zero() {
            ρ += α * α * ds.dot(dz) / λλ;
        }
        T::powi(ρ.clip(T::zero(), T::one()), 3)
    }
}

// largest α in [0,1] with min(λ + α⋅d) >= 0, given λ > 0
fn _max_step_scaled<T: FloatT>(λ: &[T], d: &[T], tol: T, max_iter: u32) -> T {
    let r = |α: T| zip(λ, d).fold(T::infinity(), |acc, (&λi, &di)| T::min(acc, λi + α * di));

    if r(T::one()) >= T::zero() {
        T::one()
    } else {
        brent_root(r, T::zero(), T::one(), tol, max_iter)
    }
}
