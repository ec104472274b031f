//! Internal utility functions and helpers.

pub(crate) mod rootfinding;

// assorted other functionality missing from std

// a drop-in replacement for the julia "findall" function,
// which serves as a vectorized version of the std::iter::position
// returning indices of *all* elements satisfying a predicate

pub(crate) trait PositionAll<T>: Iterator<Item = T> {
    fn position_all<F>(&mut self, predicate: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool;
}

impl<T, I> PositionAll<T> for I
where
    I: Iterator<Item = T>,
{
    fn position_all<F>(&mut self, mut f: F) -> Vec<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.enumerate()
            .filter(|(_, item)| f(item))
            .map(|(index, _)| index)
            .collect::<Vec<_>>()
    }
}

#[test]
fn test_position_all() {
    let residual = [1e-9, -2e-3, 0.0, 5e-4, f64::NAN];
    // NaN entries count as violations
    let idx = residual.iter().position_all(|&v| !(v.abs() <= 1e-4));
    assert_eq!(idx, vec![1, 3, 4]);

    let idx = residual[..1].iter().position_all(|&v| v.abs() > 1.0);
    assert_eq!(idx, Vec::<usize>::new());
}
