#![allow(non_snake_case)]
use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

use crate::algebra::dense::FaerFloatT;

/// Core traits for internal floating point values.
///
/// This trait defines the bounds for `FloatT`, which is preferred
/// throughout for use in the solver.
pub trait CoreFloatT:
    'static
    + Send
    + Sync
    + Float
    + FloatConst
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + FloatConst
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

/// Main trait for floating point types used in the solver.
///
/// All floating point calculations are represented internally on values
/// implementing the `FloatT` trait.  Dense factorizations and matrix
/// products are delegated to [`faer`](https://docs.rs/faer), so `FloatT`
/// is implemented for the native f32 and f64 types only.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
pub trait FloatT: CoreFloatT + FaerFloatT {}

impl<T> FloatT for T where T: CoreFloatT + FaerFloatT {}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// This convenience trait is implemented on f32/64 and u32/64/usize.  It is
/// used internally for converting constant primitives to
/// [`FloatT`](crate::algebra::FloatT), and by the
/// [user settings](crate::solver::implementations::default::DefaultSettings)
/// for converting defaults of primitive type.

// NB: allows things like (2.0).as_T() on constants
// rather than T::from_f64(2.0).unwrap()
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_FloatT {
    ($ty:ty, $ident:ident) => {
        impl<T> AsFloatT<T> for $ty
        where
            T: Float + FromPrimitive + 'static,
        {
            #[inline]
            fn as_T(&self) -> T {
                T::$ident(*self).unwrap_or_else(T::nan)
            }
        }
    };
}
impl_as_FloatT!(u32, from_u32);
impl_as_FloatT!(u64, from_u64);
impl_as_FloatT!(usize, from_usize);
impl_as_FloatT!(f32, from_f32);
impl_as_FloatT!(f64, from_f64);

/// Lossy conversion of [`FloatT`](crate::algebra::FloatT) values to `f64`
/// for error reporting and logging.
pub trait AsF64 {
    fn as_f64(&self) -> f64;
}

impl<T: FloatT> AsF64 for T {
    #[inline]
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

#[test]
fn test_as_float_conversions() {
    let a: f64 = (3u32).as_T();
    let b: f32 = (0.5f64).as_T();
    let c: f64 = (7usize).as_T();
    assert_eq!(a, 3.0);
    assert_eq!(b, 0.5f32);
    assert_eq!(c, 7.0);
    assert_eq!((1.5f32).as_f64(), 1.5);
}
