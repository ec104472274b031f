use super::{FloatT, ScalarMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;
    fn clip(&self, lo: T, hi: T) -> T {
        if *self > hi {
            hi
        } else if *self >= lo {
            *self
        } else {
            // below range or NaN
            lo
        }
    }
}

#[test]
fn test_clip() {
    assert_eq!((0.5f64).clip(0.0, 1.0), 0.5);
    assert_eq!((-2.0f64).clip(0.0, 1.0), 0.0);
    assert_eq!((3.0f64).clip(0.0, 1.0), 1.0);
    assert_eq!(f64::NAN.clip(0.0, 1.0), 0.0);
}
