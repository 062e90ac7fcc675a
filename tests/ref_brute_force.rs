//! Property tests against independent brute-force baselines.
//!
//! The baselines deliberately avoid the production recurrences: the
//! scorer baseline scans diagonal suffix windows directly, and the
//! square baseline checks every candidate square cell by cell. Both
//! reproduce the row-major first-seen tie-break so coordinates can be
//! compared exactly, not just optima.

use dpmark::input::BoolMatrix;
use dpmark::problems::local_score::LocalScoreProblem;
use dpmark::problems::zero_square::{SquareResult, ZeroSquareProblem};
use dpmark::{DpProblem, WeightTable};
use proptest::prelude::*;

/// Best running score over diagonal suffix windows ending at 1-based (i, j).
///
/// Equals the floor-at-zero table cell by Kadane's suffix identity.
fn brute_cell(a: &[u8], b: &[u8], w: &WeightTable, delta: i32, i: usize, j: usize) -> i32 {
    let mut best = 0i32;
    let mut sum = 0i32;
    for t in 0..i.min(j) {
        let (ca, cb) = (a[i - 1 - t], b[j - 1 - t]);
        sum += if ca == cb { w.reward(ca) } else { -delta };
        if sum > best {
            best = sum;
        }
    }
    best
}

/// Row-major argmax over [`brute_cell`] with strict-greater tie-break.
fn brute_best(a: &[u8], b: &[u8], w: &WeightTable, delta: i32) -> (i32, usize, usize) {
    let mut best = 0i32;
    let (mut bi, mut bj) = (0usize, 0usize);
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let v = brute_cell(a, b, w, delta, i, j);
            if v > best {
                best = v;
                bi = i;
                bj = j;
            }
        }
    }
    (best, bi, bj)
}

/// Backtrack length at (i, j): positive cells along the diagonal.
fn brute_len(a: &[u8], b: &[u8], w: &WeightTable, delta: i32, i: usize, j: usize) -> usize {
    let mut len = 0;
    let (mut i, mut j) = (i, j);
    while i > 0 && j > 0 && brute_cell(a, b, w, delta, i, j) > 0 {
        len += 1;
        i -= 1;
        j -= 1;
    }
    len
}

fn brute_square(m: &BoolMatrix) -> SquareResult {
    let mut best = SquareResult {
        k: 0,
        top_row: 0,
        top_col: 0,
    };
    for i in 1..=m.rows() {
        for j in 1..=m.cols() {
            let mut k = 0;
            'grow: for size in 1..=i.min(j) {
                for r in (i - size)..i {
                    for c in (j - size)..j {
                        if m.get(r, c) == 1 {
                            break 'grow;
                        }
                    }
                }
                k = size;
            }
            if k > best.k {
                best = SquareResult {
                    k,
                    top_row: i - k + 1,
                    top_col: j - k + 1,
                };
            }
        }
    }
    best
}

fn weight_table(frequency_scaled: bool) -> WeightTable {
    if frequency_scaled {
        WeightTable::frequency_scaled()
    } else {
        WeightTable::uniform()
    }
}

fn small_matrix() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (0usize..8, 0usize..8)
        .prop_flat_map(|(rows, cols)| prop::collection::vec(prop::collection::vec(0u8..2, cols), rows))
}

proptest! {
    #[test]
    fn scorer_matches_brute_force(
        a in "[A-E]{0,12}",
        b in "[A-E]{0,12}",
        scaled in any::<bool>(),
        delta in 0i32..=10,
    ) {
        let w = weight_table(scaled);
        let result = LocalScoreProblem::new(a.as_bytes(), b.as_bytes(), &w, delta).solve();
        let (score, bi, bj) = brute_best(a.as_bytes(), b.as_bytes(), &w, delta);

        prop_assert_eq!(result.best_score, score);
        prop_assert!(result.best_score >= 0);
        if score == 0 {
            prop_assert_eq!(result.best_len, 0);
            prop_assert!(result.a_sub.is_empty() && result.b_sub.is_empty());
            prop_assert_eq!((result.a_start, result.b_start), (0, 0));
        } else {
            let len = brute_len(a.as_bytes(), b.as_bytes(), &w, delta, bi, bj);
            prop_assert_eq!(result.best_len, len);
            prop_assert_eq!(result.a_start + result.best_len - 1, bi);
            prop_assert_eq!(result.b_start + result.best_len - 1, bj);
        }
    }

    #[test]
    fn substrings_are_slices_at_reported_offsets(
        a in "[A-C]{0,14}",
        b in "[A-C]{0,14}",
        delta in 0i32..=4,
    ) {
        let w = WeightTable::uniform();
        let r = LocalScoreProblem::new(a.as_bytes(), b.as_bytes(), &w, delta).solve();
        if r.best_len > 0 {
            prop_assert_eq!(r.a_sub.as_str(), &a[r.a_start - 1..r.a_start - 1 + r.best_len]);
            prop_assert_eq!(r.b_sub.as_str(), &b[r.b_start - 1..r.b_start - 1 + r.best_len]);
        }
    }

    #[test]
    fn shared_run_scores_its_length(run_len in 1usize..8, prefix in "[XY]{0,4}") {
        // A common run of 'A's at matching offsets behind prefixes drawn
        // from disjoint alphabets, so every prefix position mismatches
        // and delta = 10 never lets a window bridge into it.
        let mut a = prefix.clone();
        let mut b = "Z".repeat(prefix.len());
        a.push_str(&"A".repeat(run_len));
        b.push_str(&"A".repeat(run_len));
        let w = WeightTable::uniform();
        let r = LocalScoreProblem::new(a.as_bytes(), b.as_bytes(), &w, 10).solve();
        prop_assert_eq!(r.best_score, run_len as i32);
        prop_assert_eq!(r.best_len, run_len);
    }

    #[test]
    fn zero_square_matches_brute_force(rows in small_matrix()) {
        let refs: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
        let m = BoolMatrix::from_rows(&refs);
        let result = ZeroSquareProblem::new(&m).solve();
        prop_assert_eq!(result, brute_square(&m));
    }

    #[test]
    fn zero_square_bounds(rows in small_matrix()) {
        let refs: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
        let m = BoolMatrix::from_rows(&refs);
        let r = ZeroSquareProblem::new(&m).solve();
        prop_assert!(r.k <= m.rows().min(m.cols()));
        if r.k > 0 {
            prop_assert!(r.top_row >= 1 && r.top_row + r.k - 1 <= m.rows());
            prop_assert!(r.top_col >= 1 && r.top_col + r.k - 1 <= m.cols());
            // The reported square really is all zeros.
            for i in r.top_row - 1..r.top_row - 1 + r.k {
                for j in r.top_col - 1..r.top_col - 1 + r.k {
                    prop_assert_eq!(m.get(i, j), 0);
                }
            }
        } else {
            prop_assert_eq!((r.top_row, r.top_col), (0, 0));
        }
    }
}
