//! Benchmark harness for two classic table-filling dynamic programs.
//!
//! This crate implements, and measures, two independent DPs over
//! synthetically generated inputs:
//!
//! 1. A weighted, penalty-tolerant *local similarity* scorer: find the
//!    best-scoring aligned substring pair of two uppercase sequences under
//!    a per-symbol match reward and a flat mismatch penalty, with the
//!    running score floored at zero.
//! 2. A largest *all-zero square* finder: locate the biggest square block
//!    of zeros in a boolean matrix using an O(n)-space rolling-row
//!    recurrence.
//!
//! ## Core idea
//! 1. Seed an [`input::InputGen`] and draw sequences/matrices from it.
//! 2. Wrap the inputs in a problem struct
//!    ([`LocalScoreProblem`](problems::local_score::LocalScoreProblem) or
//!    [`ZeroSquareProblem`](problems::zero_square::ZeroSquareProblem)) and
//!    call [`DpProblem::solve`].
//! 3. Let the [`harness`] drive whole scenario suites, timing each solve
//!    and attaching the documented memory estimate, and feed the resulting
//!    records to the [`report`] writers.
//!
//! ## Quick start
//! ```
//! use dpmark::{problems::local_score::LocalScoreProblem, DpProblem, WeightTable};
//!
//! let w = WeightTable::uniform();
//! let problem = LocalScoreProblem::new(b"AAAA", b"AAAA", &w, 10);
//! let result = problem.solve();
//! assert_eq!(result.best_score, 4);
//! assert_eq!(result.best_len, 4);
//! assert_eq!((result.a_start, result.b_start), (1, 1));
//! ```
//!
//! The memory figure attached to every record is an *estimator* derived
//! from the input dimensions, kept stable across releases so that result
//! files stay comparable; it is not an allocation measurement.

pub mod harness;
pub mod input;
pub mod problems;
pub mod report;
pub mod traits;
pub mod weights;

pub use crate::input::{BoolMatrix, InputGen};
pub use crate::traits::DpProblem;
pub use crate::weights::WeightTable;
