//! Owned square matrix with flat row-major storage.

use std::ops::{Index, IndexMut};

use crate::Float;

/// Square matrix stored as a flat row-major buffer.
///
/// After an LU factorization the buffer holds the compressed factors (U in
/// place, the strictly-lower multipliers of L below it) and rows must be
/// read through the factorization's permutation, never directly; the
/// [`permuted`](Matrix::permuted) accessor exists for that purpose.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<Float>,
}

impl Matrix {
    /// n x n matrix of zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build from row-major data. Panics if `data` is not n*n long.
    pub fn from_rows(n: usize, data: &[Float]) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "matrix data has length {}, expected {}",
            data.len(),
            n * n
        );
        Self {
            n,
            data: data.to_vec(),
        }
    }

    /// Matrix dimension n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Read entry at virtual row `r`, column `c` through a row permutation.
    #[inline]
    pub fn permuted(&self, index: &[usize], r: usize, c: usize) -> Float {
        self.data[index[r] * self.n + c]
    }

    /// Mutable entry at virtual row `r`, column `c` through a row permutation.
    #[inline]
    pub fn permuted_mut(&mut self, index: &[usize], r: usize, c: usize) -> &mut Float {
        &mut self.data[index[r] * self.n + c]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Float;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &Float {
        &self.data[r * self.n + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Float {
        &mut self.data[r * self.n + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let mut m = Matrix::zeros(3);
        m[(1, 2)] = 4.5;
        assert_eq!(m[(1, 2)], 4.5);
        assert_eq!(m[(2, 1)], 0.0);
    }

    #[test]
    fn permuted_reads_follow_the_index() {
        let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        let swapped = [1, 0];
        assert_eq!(m.permuted(&swapped, 0, 0), 3.0);
        assert_eq!(m.permuted(&swapped, 1, 1), 2.0);
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let m = Matrix::identity(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }
}
