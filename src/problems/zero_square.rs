//! Largest all-zero square submatrix via a rolling two-row recurrence.
//!
//! Cell `(i, j)` of the conceptual table holds the side length of the
//! largest all-zero square whose bottom-right corner sits at matrix cell
//! `(i-1, j-1)`:
//!
//! ```text
//! side(i,j) = 0                                              if cell is 1
//!           = 1 + min(side(i-1,j), side(i,j-1), side(i-1,j-1)) otherwise
//! ```
//!
//! Only the previous and current rows are live at any time. The two
//! buffers are swapped by reference after each row, never reallocated,
//! keeping working space at O(n) for an m×n matrix. Index 0 of each
//! buffer is the permanent zero border.
//!
//! The global maximum is tracked with a strict `>` comparison, so among
//! equal-sized squares the first one reached in row-major scan order is
//! reported.

use crate::input::BoolMatrix;
use crate::traits::DpProblem;

/// One zero-square search instance over a borrowed matrix.
#[derive(Clone)]
pub struct ZeroSquareProblem<'a> {
    pub matrix: &'a BoolMatrix,
}

/// Largest all-zero square found by [`ZeroSquareProblem::solve`].
///
/// `top_row`/`top_col` are the 1-based coordinates of the square's
/// top-left cell. `k == 0` means no zero cell exists at all (including
/// empty matrices), and both coordinates are 0 by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareResult {
    pub k: usize,
    pub top_row: usize,
    pub top_col: usize,
}

impl<'a> ZeroSquareProblem<'a> {
    pub fn new(matrix: &'a BoolMatrix) -> Self {
        Self { matrix }
    }
}

impl DpProblem for ZeroSquareProblem<'_> {
    type Output = SquareResult;

    fn solve(&self) -> SquareResult {
        let m = self.matrix.rows();
        let n = self.matrix.cols();

        let mut prev = vec![0u16; n + 1];
        let mut cur = vec![0u16; n + 1];
        let mut best_k = 0u16;
        let (mut best_i, mut best_j) = (0usize, 0usize);

        for i in 1..=m {
            cur[0] = 0;
            for j in 1..=n {
                if self.matrix.get(i - 1, j - 1) == 1 {
                    cur[j] = 0;
                } else {
                    let side = prev[j].min(cur[j - 1]).min(prev[j - 1]) + 1;
                    cur[j] = side;
                    if side > best_k {
                        best_k = side;
                        best_i = i;
                        best_j = j;
                    }
                }
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        let k = best_k as usize;
        if k == 0 {
            SquareResult {
                k: 0,
                top_row: 0,
                top_col: 0,
            }
        } else {
            SquareResult {
                k,
                top_row: best_i - k + 1,
                top_col: best_j - k + 1,
            }
        }
    }

    fn mem_estimate(&self) -> u64 {
        let m = self.matrix.rows() as u64;
        let n = self.matrix.cols() as u64;
        // 1 byte per matrix cell plus two rolling buffers of 2-byte slots.
        m * n + 2 * (n + 1) * 2
    }
}
