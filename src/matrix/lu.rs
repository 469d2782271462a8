//! LU decomposition with logical row permutation, and the matching solve.
//!
//! The factorization never moves matrix rows physically: pivot swaps touch
//! only the permutation array, and every later access goes through it. The
//! factors share the original buffer, with U on and above the diagonal and
//! the multipliers of L (unit diagonal implicit) in the cells the
//! elimination would otherwise zero out.

use crate::{Error, Float};

use super::base::Matrix;

/// Result of a completed factorization: the row permutation plus a
/// numerical diagnostic.
#[derive(Clone, Debug)]
pub struct Lu {
    index: Vec<usize>,
    min_pivot: Float,
}

impl Lu {
    /// The row permutation. Always a permutation of `0..n`; identity when
    /// no pivot swap was triggered.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// Smallest pivot magnitude encountered during elimination.
    ///
    /// Pivoting only reacts to pivots that are exactly zero, so a tiny
    /// value here signals that the elimination may have amplified
    /// floating-point error even though it completed.
    pub fn min_pivot(&self) -> Float {
        self.min_pivot
    }

    /// Copy a solved right-hand side into natural order.
    ///
    /// [`Matrix::lu_solve`] stores the solution component `x[i]` at
    /// `b[index[i]]`; this gathers the components back into `0..n` order.
    pub fn solution(&self, b: &[Float]) -> Vec<Float> {
        self.index.iter().map(|&r| b[r]).collect()
    }
}

impl Matrix {
    /// Factor the matrix in place into compressed LU form.
    ///
    /// Works column by column. A pivot swap is attempted only when the
    /// current pivot (read through the permutation) is exactly zero; the
    /// scan then picks the largest-magnitude candidate in the remaining
    /// virtual rows. This is weaker than standard partial pivoting, which
    /// re-picks the pivot in every column: a nonzero but tiny pivot is
    /// accepted and may amplify floating-point error. Callers that care
    /// can inspect [`Lu::min_pivot`] to see how close the elimination came
    /// to a breakdown.
    ///
    /// Returns [`Error::SingularMatrix`] with the offending column when no
    /// nonzero pivot candidate exists.
    pub fn lu_decompose(&mut self) -> Result<Lu, Error> {
        let n = self.n();
        let mut index: Vec<usize> = (0..n).collect();
        let mut min_pivot = Float::INFINITY;

        for k in 0..n {
            if self.permuted(&index, k, k).abs() == 0.0 {
                let mut swap_index = k;
                let mut max_val = 0.0;
                for i in (k + 1)..n {
                    let val = self.permuted(&index, i, k).abs();
                    if val > max_val {
                        max_val = val;
                        swap_index = i;
                    }
                }
                if max_val == 0.0 {
                    return Err(Error::SingularMatrix { column: k });
                }
                if swap_index != k {
                    index.swap(k, swap_index);
                }
            }

            let pivot = self.permuted(&index, k, k);
            if pivot.abs() < min_pivot {
                min_pivot = pivot.abs();
            }

            // Eliminate below the pivot, storing each multiplier in the
            // cell it just zeroed.
            for i in (k + 1)..n {
                let multiplier = self.permuted(&index, i, k) / pivot;
                *self.permuted_mut(&index, i, k) = multiplier;
                for j in (k + 1)..n {
                    let update = multiplier * self.permuted(&index, k, j);
                    *self.permuted_mut(&index, i, j) -= update;
                }
            }
        }

        Ok(Lu { index, min_pivot })
    }

    /// Solve A x = b using a prior factorization, overwriting `b`.
    ///
    /// Forward substitution (L y = P b, no division thanks to the unit
    /// diagonal) followed by back substitution (U x = y). The solution
    /// component `x[i]` ends up at `b[index[i]]`; with an identity
    /// permutation `b` simply becomes `x`. Use [`Lu::solution`] to gather
    /// natural order after a run that pivoted.
    pub fn lu_solve(&self, lu: &Lu, b: &mut [Float]) {
        let n = self.n();
        assert_eq!(
            b.len(),
            n,
            "dimension mismatch in solve: A is {}x{}, b has length {}",
            n,
            n,
            b.len()
        );
        let index = &lu.index;

        // Forward substitution: L y = P b
        for i in 0..n {
            let mut sum = b[index[i]];
            for j in 0..i {
                sum -= self.permuted(index, i, j) * b[index[j]];
            }
            b[index[i]] = sum;
        }

        // Back substitution: U x = y
        for i in (0..n).rev() {
            let mut sum = b[index[i]];
            for j in (i + 1)..n {
                sum -= self.permuted(index, i, j) * b[index[j]];
            }
            b[index[i]] = sum / self.permuted(index, i, i);
        }
    }

    /// Factor and solve in one call, discarding the permutation.
    ///
    /// Convenience for matrices that never trigger a pivot swap (such as
    /// the diagonally dominant systems the implicit scheme assembles),
    /// where the discarded permutation is known to be the identity and `b`
    /// holds the solution in natural order on return.
    pub fn lu_decompose_and_solve(&mut self, b: &mut [Float]) -> Result<(), Error> {
        let lu = self.lu_decompose()?;
        self.lu_solve(&lu, b);
        Ok(())
    }
}
