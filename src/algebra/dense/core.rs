use crate::algebra::{
    Adjoint, DenseFormatError, DenseMatrix, FloatT, Matrix, MatrixMath, MatrixShape,
    ShapedMatrix, VectorMath,
};
use std::iter::zip;
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> DenseMatrix for Adjoint<'a, Matrix<T>>
where
    T: FloatT,
{
    type T = T;
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Construct from column major data, checking that
    /// the data length is compatible with `size`.
    pub fn new(size: (usize, usize), data: Vec<T>) -> Result<Self, DenseFormatError> {
        let (m, n) = size;
        if m * n != data.len() {
            return Err(DenseFormatError::IncompatibleDimension {
                m,
                n,
                len: data.len(),
            });
        }
        Ok(Self { m, n, data })
    }

    /// Construct from column major data
    ///
    /// # Panics
    /// Panics if `src.len()` is not equal to `size.0 * size.1`
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// Construct from a collection of rows
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, DenseFormatError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != n) {
            return Err(DenseFormatError::RaggedRows);
        }
        let mut mat = Self::zeros((m, n));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.as_ref().iter().enumerate() {
                mat[(i, j)] = v;
            }
        }
        Ok(mat)
    }

    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data.copy_from_slice(src);
        self
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Overwrite `self` with the transpose of `src`
    pub(crate) fn copy_transpose(&mut self, src: &Matrix<T>) -> &mut Self {
        assert_eq!(self.size(), (src.n, src.m));
        for c in 0..src.n {
            for (r, &v) in src.col_slice(c).iter().enumerate() {
                self[(c, r)] = v;
            }
        }
        self
    }

    /// Checks if all elements are finite, i.e. no Infs or NaNs
    pub fn is_finite(&self) -> bool {
        self.data.is_finite()
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    // rows of a nested array become rows of the matrix
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut mat = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                mat[(i, j)] = v;
            }
        }
        mat
    }
}

impl<T> MatrixMath for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn rscale(&mut self, r: &[T]) {
        assert_eq!(self.n, r.len());
        for (col, &rc) in r.iter().enumerate() {
            self.col_slice_mut(col).scale(rc);
        }
    }

    fn quad_form(&self, y: &[T], x: &[T]) -> T {
        assert_eq!(self.m, y.len());
        assert_eq!(self.n, x.len());
        let mut out = T::zero();
        for (col, &xc) in x.iter().enumerate() {
            let colsum = zip(self.col_slice(col), y).fold(T::zero(), |acc, (&a, &y)| acc + a * y);
            out += colsum * xc;
        }
        out
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<'a, M> ShapedMatrix for Adjoint<'a, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.ncols()
    }
    fn ncols(&self) -> usize {
        self.src.nrows()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::T
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_indexing() {
        // column major 3x3
        // [ 1.0  4.0  7.0 ]
        // [ 2.0  5.0  8.0 ]
        // [ 3.0  6.0  9.0 ]
        let A = Matrix::from(&[[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);

        assert_eq!(A.data, (1..=9).map(|v| v as f64).collect::<Vec<_>>());
        assert_eq!(A[(2, 0)], 3.0);
        assert_eq!(A[(0, 2)], 7.0);

        let At = A.t();
        assert_eq!(At.size(), (3, 3));
        assert_eq!(At[(0, 2)], 3.0);
        assert_eq!(At[(2, 0)], 7.0);
    }

    #[test]
    fn test_constructors() {
        let A = Matrix::<f64>::new((2, 3), vec![0.; 6]);
        assert!(A.is_ok());

        let A = Matrix::<f64>::new((2, 3), vec![0.; 5]);
        assert_eq!(
            A,
            Err(DenseFormatError::IncompatibleDimension { m: 2, n: 3, len: 5 })
        );

        let A = Matrix::from_rows(&[vec![1., 2.], vec![3., 4.], vec![5., 6.]]).unwrap();
        assert_eq!(A, Matrix::from(&[[1., 2.], [3., 4.], [5., 6.]]));

        let A = Matrix::from_rows(&[vec![1., 2.], vec![3.]]);
        assert_eq!(A, Err(DenseFormatError::RaggedRows));

        let I = Matrix::<f64>::identity(2);
        assert_eq!(I.data, vec![1., 0., 0., 1.]);
    }

    #[test]
    fn test_copy_transpose_and_rscale() {
        let G = Matrix::from(&[[1., 2.], [3., 4.], [5., 6.]]);
        let mut H = Matrix::<f64>::zeros((2, 3));
        H.copy_transpose(&G);
        assert_eq!(H, Matrix::from(&[[1., 3., 5.], [2., 4., 6.]]));

        H.rscale(&[1., 0.5, 2.]);
        assert_eq!(H, Matrix::from(&[[1., 1.5, 10.], [2., 2., 12.]]));
    }

    #[test]
    fn test_quad_form() {
        let P = Matrix::from(&[[2., 1.], [1., 3.]]);
        let x = [1., -1.];
        let y = [2., 1.];
        // y'Px = [2 1] * [1, -2] = 0
        assert_eq!(P.quad_form(&y, &x), 0.);
        assert_eq!(P.quad_form(&x, &x), 3.);
    }
}
