#![allow(non_snake_case)]

use crate::algebra::*;
use crate::solver::core::cones::*;
use crate::solver::core::kktsolvers::KKTSolver;
use crate::solver::core::KKTSolveError;

// -------------------------------------
// KKTSolver using a dense Cholesky factorisation
// of the reduced system
//
//   (P + G'W⁻²G) Δx = bx + G'W⁻²bz
//   Δz = W⁻²(GΔx - bz)
//
// which follows from eliminating Δz from the
// quasidefinite system [P G'; G -W²].
// -------------------------------------

pub struct DenseCholeskyKKTSolver<T> {
    // problem dimensions
    m: usize,
    n: usize,

    // copies of problem data
    P: Matrix<T>,
    G: Matrix<T>,

    // H = G'W⁻¹ and the reduced matrix M = P + HH'
    H: Matrix<T>,
    M: Matrix<T>,

    // diagonal scaling terms
    winv: Vec<T>,
    winv2: Vec<T>,

    // right hand sides
    bx: Vec<T>,
    bz: Vec<T>,

    // internal workspace
    work: Vec<T>,

    // the dense Cholesky engine
    cholengine: CholeskyEngine<T>,
}

impl<T> DenseCholeskyKKTSolver<T>
where
    T: FloatT,
{
    pub fn new(P: &Matrix<T>, G: &Matrix<T>) -> Self {
        let (m, n) = G.size();
        assert_eq!(P.size(), (n, n));

        Self {
            m,
            n,
            P: P.clone(),
            G: G.clone(),
            H: Matrix::zeros((n, m)),
            M: Matrix::zeros((n, n)),
            winv: vec![T::one(); m],
            winv2: vec![T::one(); m],
            bx: vec![T::zero(); n],
            bz: vec![T::zero(); m],
            work: vec![T::zero(); m],
            cholengine: CholeskyEngine::new(n),
        }
    }
}

impl<T> KKTSolver<T> for DenseCholeskyKKTSolver<T>
where
    T: FloatT,
{
    fn update(&mut self, cones: &NonnegativeCone<T>) -> Result<(), KKTSolveError> {
        cones.get_W(&mut self.winv);
        self.winv.recip();
        self.winv2.scalarop_from(|w| w * w, &self.winv);

        // H = G'W⁻¹
        self.H.copy_transpose(&self.G);
        self.H.rscale(&self.winv);

        // M = P + HH'
        self.M.copy_from_slice(&self.P.data);
        self.M.syrk(&self.H, T::one(), T::one());

        self.cholengine.factor(&self.M)?;
        Ok(())
    }

    fn setrhs(&mut self, x: &[T], z: &[T]) {
        self.bx.copy_from(x);
        self.bz.copy_from(z);
    }

    fn solve(&mut self, x: &mut [T], z: &mut [T]) -> Result<(), KKTSolveError> {
        assert_eq!(x.len(), self.n);
        assert_eq!(z.len(), self.m);

        // x = (P + G'W⁻²G) \ (bx + G'W⁻²bz)
        self.work.copy_from(&self.bz).hadamard(&self.winv2);
        x.copy_from(&self.bx);
        self.G.t().gemv(x, &self.work, T::one(), T::one());
        if !x.is_finite() {
            return Err(KKTSolveError::NonFinite);
        }
        self.cholengine.solve(x);

        // z = W⁻²(Gx - bz)
        z.copy_from(&self.bz);
        self.G.gemv(z, x, T::one(), -T::one());
        z.hadamard(&self.winv2);

        if !(x.is_finite() && z.is_finite()) {
            return Err(KKTSolveError::NonFinite);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // residuals of the unreduced system [P G'; G -W²][x;z] = [bx;bz]
    fn kkt_residual(
        P: &Matrix<f64>,
        G: &Matrix<f64>,
        w: &[f64],
        x: &[f64],
        z: &[f64],
        bx: &[f64],
        bz: &[f64],
    ) -> f64 {
        let mut rx = bx.to_vec();
        P.gemv(&mut rx, x, 1., -1.);
        G.t().gemv(&mut rx, z, 1., 1.);

        let mut rz = bz.to_vec();
        G.gemv(&mut rz, x, 1., -1.);
        for i in 0..rz.len() {
            rz[i] -= w[i] * w[i] * z[i];
        }
        f64::max(rx.norm_inf(), rz.norm_inf())
    }

    #[test]
    fn test_reduced_solve() {
        let P = Matrix::from(&[[4., 1.], [1., 2.]]);
        let G = Matrix::from(&[[1., 1.], [-1., 0.], [0., -1.]]);

        // s = [4,1,1], z = [1,1,4] gives w = [2,1,1/2]
        let s = [4., 1., 1.];
        let zv = [1., 1., 4.];
        let mut cones = NonnegativeCone::<f64>::new(3);
        assert!(cones.update_scaling(&s, &zv));
        let w = [2., 1., 0.5];

        let mut kkt = DenseCholeskyKKTSolver::new(&P, &G);
        kkt.update(&cones).unwrap();

        let bx = [1., -2.];
        let bz = [0.5, 1., -1.];
        let mut x = vec![0.; 2];
        let mut z = vec![0.; 3];
        kkt.setrhs(&bx, &bz);
        kkt.solve(&mut x, &mut z).unwrap();

        assert!(kkt_residual(&P, &G, &w, &x, &z, &bx, &bz) < 1e-12);
    }

    #[test]
    fn test_identity_scaling_no_constraints() {
        // m = 0 reduces to P x = bx
        let P = Matrix::from(&[[2., 0.], [0., 4.]]);
        let G = Matrix::<f64>::zeros((0, 2));
        let cones = NonnegativeCone::<f64>::new(0);

        let mut kkt = DenseCholeskyKKTSolver::new(&P, &G);
        kkt.update(&cones).unwrap();

        let mut x = vec![0.; 2];
        let mut z = vec![];
        kkt.setrhs(&[2., 2.], &[]);
        kkt.solve(&mut x, &mut z).unwrap();
        assert!(x.norm_inf_diff(&[1., 0.5]) < 1e-14);
    }

    #[test]
    fn test_singular_reduced_matrix() {
        // P = 0 and G has rank 1 < n
        let P = Matrix::<f64>::zeros((2, 2));
        let G = Matrix::from(&[[1., 0.]]);
        let mut cones = NonnegativeCone::<f64>::new(1);
        cones.set_identity_scaling();

        let mut kkt = DenseCholeskyKKTSolver::new(&P, &G);
        assert_eq!(
            kkt.update(&cones),
            Err(KKTSolveError::Factorization(
                DenseFactorizationError::Cholesky
            ))
        );
    }

    #[test]
    fn test_nonfinite_rhs() {
        let P = Matrix::<f64>::identity(2);
        let G = Matrix::from(&[[1., 1.]]);
        let mut cones = NonnegativeCone::<f64>::new(1);
        cones.set_identity_scaling();

        let mut kkt = DenseCholeskyKKTSolver::new(&P, &G);
        kkt.update(&cones).unwrap();
        kkt.setrhs(&[f64::NAN, 0.], &[1.]);

        let mut x = vec![0.; 2];
        let mut z = vec![0.; 1];
        assert_eq!(kkt.solve(&mut x, &mut z), Err(KKTSolveError::NonFinite));
    }
}
