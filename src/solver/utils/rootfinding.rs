use crate::algebra::*;

/// Brent's method for a root of `f` on the bracket `[a, b]`, given
/// `f(a) > 0 > f(b)`.
///
/// The function is only evaluated inside the bracket.  On exit the
/// bracket end on the nonnegative side of the root is returned, i.e.
/// the returned `x` always satisfies `f(x) >= 0`.
pub(crate) fn brent_root<T, F>(f: F, a: T, b: T, xtol: T, max_iter: u32) -> T
where
    T: FloatT,
    F: Fn(T) -> T,
{
    let two: T = (2.).as_T();
    let three: T = (3.).as_T();
    let half: T = (0.5).as_T();
    let rtol = T::epsilon() * two;

    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    // c is the contrapoint of b, i.e. [b,c] brackets the root
    let (mut c, mut fc) = (a, fa);
    let mut d = b - a;
    let mut e = d;

    for _ in 0..max_iter {
        if fb.signum() == fc.signum() && fb != T::zero() && fc != T::zero() {
            (c, fc) = (a, fa);
            d = b - a;
            e = d;
        }
        // b should always be the best guess
        if fc.abs() < fb.abs() {
            (a, fa) = (b, fb);
            (b, fb) = (c, fc);
            (c, fc) = (a, fa);
        }

        let tol = rtol * b.abs() + half * xtol;
        let m = half * (c - b);
        if m.abs() <= tol || fb == T::zero() {
            break;
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // attempt inverse quadratic interpolation, or secant
            // when only two distinct points are available
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (two * m * s, T::one() - s)
            } else {
                let qq = fa / fc;
                let r = fb / fc;
                (
                    s * (two * m * qq * (qq - r) - (b - a) * (r - T::one())),
                    (qq - T::one()) * (r - T::one()) * (s - T::one()),
                )
            };
            if p > T::zero() {
                q = -q;
            } else {
                p = -p;
            }
            if two * p < T::min(three * m * q - (tol * q).abs(), (e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                // interpolation rejected, bisect
                d = m;
                e = d;
            }
        } else {
            d = m;
            e = d;
        }

        (a, fa) = (b, fb);
        if d.abs() > tol {
            b += d;
        } else if m > T::zero() {
            b += tol;
        } else {
            b -= tol;
        }
        fb = f(b);
    }

    // restore the bracket if the last update moved b across
    // to the same side as c
    if fb.signum() == fc.signum() && fb != T::zero() && fc != T::zero() {
        (c, fc) = (a, fa);
    }

    if fb >= T::zero() {
        b
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brent_linear() {
        let f = |x: f64| 1.0 - 4.0 * x;
        let x = brent_root(f, 0.0, 1.0, 2e-12, 100);
        assert!((x - 0.25).abs() < 1e-11);
        assert!(f(x) >= 0.0);
    }

    #[test]
    fn test_brent_piecewise_min() {
        // concave piecewise linear, like a step length search
        let λ = [1.0, 0.5, 2.0];
        let d = [-0.5, -2.0, 1.0];
        let f = |α: f64| {
            λ.iter()
                .zip(d.iter())
                .map(|(l, d)| l + α * d)
                .fold(f64::INFINITY, f64::min)
        };
        let x = brent_root(f, 0.0, 1.0, 2e-12, 100);
        assert!((x - 0.25).abs() < 1e-11);
        assert!(f(x) >= 0.0);
        assert!(x <= 0.25);
    }

    #[test]
    fn test_brent_nonlinear() {
        let f = |x: f64| 0.1 - x * x * x;
        let x = brent_root(f, 0.0, 1.0, 1e-14, 100);
        assert!((x - 0.1f64.cbrt()).abs() < 1e-12);
        assert!(f(x) >= 0.0);
    }

    #[test]
    fn test_brent_iteration_limit() {
        // with too few iterations the result is still feasible
        let f = |x: f64| 0.3 - x;
        for max_iter in 0..4 {
            let x = brent_root(f, 0.0, 1.0, 2e-12, max_iter);
            assert!((0.0..=1.0).contains(&x));
            assert!(f(x) >= 0.0);
        }
    }
}
