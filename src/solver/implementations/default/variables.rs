use super::*;
use crate::algebra::*;
use crate::solver::core::{
    cones::{Cone, NonnegativeCone},
    traits::{Settings, Variables},
    StepDirection,
};

// ---------------
// Variables type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Variables`](crate::solver::core::traits::Variables) trait.
///
/// The same type is used for the iterate `(x, s, z)` itself and for
/// the left and right hand sides of the Newton system.
pub struct DefaultVariables<T> {
    /// primal variables
    pub x: Vec<T>,
    /// slack variables
    pub s: Vec<T>,
    /// dual variables
    pub z: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for DefaultVariables<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, s: {:?}, z: {:?}", self.x, self.s, self.z)
    }
}

impl<T> DefaultVariables<T>
where
    T: FloatT,
{
    /// Create a new `DefaultVariables` object
    pub fn new(n: usize, m: usize) -> Self {
        let x = vec![T::zero(); n];
        let s = vec![T::zero(); m];
        let z = vec![T::zero(); m];

        Self { x, s, z }
    }
}

impl<T> Variables<T> for DefaultVariables<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type R = DefaultResiduals<T>;
    type C = NonnegativeCone<T>;
    type SE = DefaultSettings<T>;

    fn calc_mu(&self, residuals: &DefaultResiduals<T>, cones: &NonnegativeCone<T>) -> T {
        // no constraints means no gap to close
        match cones.degree() {
            0 => T::zero(),
            d => residuals.dot_sz / d.as_T(),
        }
    }

    fn affine_step_rhs(&mut self, residuals: &DefaultResiduals<T>, cones: &NonnegativeCone<T>) {
        self.x.scalarop_from(|v| -v, &residuals.rx);
        self.z.scalarop_from(|v| -v, &residuals.rz);
        cones.affine_ds(&mut self.s);
    }

    fn combined_step_rhs(
        &mut self,
        residuals: &DefaultResiduals<T>,
        cones: &NonnegativeCone<T>,
        step: &Self,
        σ: T,
        μ: T,
    ) {
        self.x.scalarop_from(|v| -v, &residuals.rx);
        self.z.scalarop_from(|v| -v, &residuals.rz);
        cones.combined_ds_shift(&mut self.s, &step.z, &step.s, σ * μ);
    }

    fn calc_step_length(
        &self,
        step: &Self,
        cones: &mut NonnegativeCone<T>,
        settings: &DefaultSettings<T>,
        step_direction: StepDirection,
    ) -> T {
        let mut α = cones.step_length(&step.z, &step.s, settings.core());

        if step_direction == StepDirection::Combined {
            α *= settings.core().max_step_fraction;
        }

        α
    }

    fn centering_parameter(&self, cones: &NonnegativeCone<T>, α: T) -> T {
        cones.centering_parameter(&self.z, &self.s, α)
    }

    fn add_step(&mut self, step: &Self, α: T) {
        self.x.axpby(α, &step.x, T::one());
        self.s.axpby(α, &step.s, T::one());
        self.z.axpby(α, &step.z, T::one());
    }

    fn symmetric_initialization(&mut self, cones: &NonnegativeCone<T>) {
        cones.shift_to_cone(&mut self.s);
        cones.shift_to_cone(&mut self.z);
    }

    fn copy_from(&mut self, src: &Self) {
        self.x.copy_from(&src.x);
        self.s.copy_from(&src.s);
        self.z.copy_from(&src.z);
    }

    fn scale_cones(&self, cones: &mut NonnegativeCone<T>) -> bool {
        cones.update_scaling(&self.s, &self.z)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.s.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_step_and_copy() {
        let mut v = DefaultVariables::<f64>::new(2, 1);
        let mut step = DefaultVariables::<f64>::new(2, 1);
        step.x = vec![1., -1.];
        step.s = vec![2.];
        step.z = vec![-4.];

        v.add_step(&step, 0.5);
        assert_eq!(v.x, [0.5, -0.5]);
        assert_eq!(v.s, [1.]);
        assert_eq!(v.z, [-2.]);
        assert!(v.is_finite());

        let mut w = DefaultVariables::<f64>::new(2, 1);
        w.copy_from(&v);
        assert_eq!(format!("{:?}", w), format!("{:?}", v));

        v.z[0] = f64::NAN;
        assert!(!v.is_finite());
    }

    #[test]
    fn test_symmetric_initialization() {
        let cones = NonnegativeCone::<f64>::new(2);
        let mut v = DefaultVariables::<f64>::new(1, 2);
        // s = mz, z = -mz with mz = [1, -0.5]
        v.s = vec![1., -0.5];
        v.z = vec![-1., 0.5];
        v.symmetric_initialization(&cones);
        assert_eq!(v.s, [2.5, 1.]);
        assert_eq!(v.z, [1., 2.5]);
    }

    #[test]
    fn test_combined_step_length_fraction() {
        let settings = DefaultSettings::<f64>::default();
        let mut cones = NonnegativeCone::<f64>::new(1);
        let mut v = DefaultVariables::<f64>::new(1, 1);
        v.s = vec![1.];
        v.z = vec![1.];
        assert!(v.scale_cones(&mut cones));

        let mut step = DefaultVariables::<f64>::new(1, 1);
        step.s = vec![1.];
        step.z = vec![1.];

        let αa = v.calc_step_length(&step, &mut cones, &settings, StepDirection::Affine);
        let αc = v.calc_step_length(&step, &mut cones, &settings, StepDirection::Combined);
        assert_eq!(αa, 1.);
        assert_eq!(αc, settings.max_step_fraction);
    }
}
