//! The benchmarked dynamic programs.
//!
//! Each module holds one problem struct implementing
//! [`DpProblem`](crate::traits::DpProblem):
//! - [`local_score`] : weighted local-similarity substring scoring with a
//!   reset-to-zero floor and diagonal backtracking.
//! - [`zero_square`] : largest all-zero square submatrix via a rolling
//!   two-row recurrence.

pub mod local_score;
pub mod zero_square;
