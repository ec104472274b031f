#![allow(non_snake_case)]
use super::*;
use crate::algebra::*;
use crate::solver::core::traits::Residuals;
use crate::solver::utils::PositionAll;
use log::debug;

/// Maximum absolute violation of `Gx + s = h` accepted for a returned iterate
pub const CONSTRAINT_TOL: f64 = 1e-4;

// ---------------
// Residuals type for default problem format
// ---------------

/// Standard-form solver type implementing the [`Residuals`](crate::solver::core::traits::Residuals) trait

pub struct DefaultResiduals<T> {
    // the main KKT residuals
    // rx = Px + G'z + c
    // rz = s + Gx - h
    pub rx: Vec<T>,
    pub rz: Vec<T>,

    // various inner products
    pub dot_cx: T,
    pub dot_hz: T,
    pub dot_sz: T,
    pub dot_xPx: T,
    pub dot_xGtz: T,

    // ‖rx‖² + ‖rz‖² + s'z
    pub norm: T,

    // products reused across the residual terms
    pub Px: Vec<T>,
    pub Gx: Vec<T>,
    pub Gtz: Vec<T>,
}

impl<T> DefaultResiduals<T>
where
    T: FloatT,
{
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            rx: vec![T::zero(); n],
            rz: vec![T::zero(); m],
            dot_cx: T::zero(),
            dot_hz: T::zero(),
            dot_sz: T::zero(),
            dot_xPx: T::zero(),
            dot_xGtz: T::zero(),
            norm: T::zero(),
            Px: vec![T::zero(); n],
            Gx: vec![T::zero(); m],
            Gtz: vec![T::zero(); n],
        }
    }
}

impl<T> Residuals<T> for DefaultResiduals<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type V = DefaultVariables<T>;

    fn update(&mut self, variables: &DefaultVariables<T>, data: &DefaultProblemData<T>) {
        let (x, s, z) = (&variables.x, &variables.s, &variables.z);

        data.P.gemv(&mut self.Px, x, T::one(), T::zero());
        data.G.gemv(&mut self.Gx, x, T::one(), T::zero());
        data.G.t().gemv(&mut self.Gtz, z, T::one(), T::zero());

        // rx = Px + G'z + c
        self.rx.waxpby(T::one(), &self.Px, T::one(), &self.Gtz);
        self.rx.axpby(T::one(), &data.c, T::one());

        // rz = s + Gx - h
        self.rz.waxpby(T::one(), s, T::one(), &self.Gx);
        self.rz.axpby(-T::one(), &data.h, T::one());

        self.dot_cx = data.c.dot(x);
        self.dot_hz = data.h.dot(z);
        self.dot_sz = s.dot(z);
        self.dot_xPx = x.dot(&self.Px);
        self.dot_xGtz = x.dot(&self.Gtz);

        self.norm = self.rx.sumsq() + self.rz.sumsq() + self.dot_sz;
    }

    fn constraints_satisfied(&self) -> bool {
        let tol: T = CONSTRAINT_TOL.as_T();

        // NaN entries count as violations
        let violated = self.rz.iter().position_all(|&v| !(v.abs() <= tol));

        for &i in violated.iter() {
            debug!("constraint {} violated by {:e}", i, self.rz[i]);
        }
        violated.is_empty()
    }
}

#[test]
fn test_residuals_update() {
    let P = Matrix::from(&[[2., 0.], [0., 2.]]);
    let G = Matrix::from(&[[1., 0.], [0., 1.]]);
    let data = DefaultProblemData::new(&P, &G, &[1., -1.], &[1., 1.]).unwrap();

    let mut v = DefaultVariables::<f64>::new(2, 2);
    v.x = vec![1., 0.];
    v.s = vec![0.5, 1.];
    v.z = vec![1., 2.];

    let mut r = DefaultResiduals::<f64>::new(2, 2);
    r.update(&v, &data);

    // rx = [2,0] + [1,2] + [1,-1]
    assert_eq!(r.rx, [4., 1.]);
    // rz = [0.5,1] + [1,0] - [1,1]
    assert_eq!(r.rz, [0.5, 0.]);
    assert_eq!(r.dot_sz, 2.5);
    assert_eq!(r.dot_xPx, 2.);
    assert_eq!(r.dot_cx, 1.);
    assert_eq!(r.dot_hz, 3.);
    assert_eq!(r.dot_xGtz, 1.);
    assert_eq!(r.norm, 17. + 0.25 + 2.5);

    // 0.5 > CONSTRAINT_TOL
    assert!(!r.constraints_satisfied());

    v.s = vec![0., 1.];
    r.update(&v, &data);
    assert!(r.constraints_satisfied());
}
