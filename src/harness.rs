//! Drives scenario suites over the two DPs and produces result records.
//!
//! Configuration is table-driven: the batteries of problem sizes, weight
//! variants, and penalty sweeps are explicit constants here rather than
//! implicit argument positions. Each invocation allocates its inputs
//! fresh, runs to completion on the current thread, and yields one record
//! combining the algorithm's result with [`RunMetrics`].
//!
//! Timing is wall-clock around a single [`DpProblem::solve`] call. The
//! memory figure is the problem's documented estimator, never a measured
//! allocation — operators who want RSS numbers get them separately from
//! the suite binary's diagnostics.

use std::time::Instant;

use crate::input::InputGen;
use crate::problems::local_score::{AlignmentResult, LocalScoreProblem};
use crate::problems::zero_square::{SquareResult, ZeroSquareProblem};
use crate::traits::DpProblem;
use crate::weights::WeightTable;

/// (n, m) sequence-length pairs exercised by [`run_scorer_batch`].
pub const SCORER_BATCH_SIZES: &[(usize, usize)] = &[
    (500, 500),
    (800, 1200),
    (1000, 1500),
    (1500, 2000),
    (2000, 2500),
];

/// (rows, cols) matrix shapes exercised by [`run_square_suite`].
pub const SQUARE_SIZES: &[(usize, usize)] = &[
    (10, 10),
    (10, 100),
    (10, 1000),
    (100, 1000),
    (1000, 1000),
];

/// Which reward table a scorer scenario uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeightKind {
    Uniform,
    FrequencyScaled,
}

impl WeightKind {
    /// Materialize the table for this variant.
    pub fn table(self) -> WeightTable {
        match self {
            WeightKind::Uniform => WeightTable::uniform(),
            WeightKind::FrequencyScaled => WeightTable::frequency_scaled(),
        }
    }
}

/// One named scorer scenario: a weight variant plus a penalty sweep,
/// executed in declared order.
#[derive(Clone, Copy, Debug)]
pub struct ScorerScenario {
    pub tag: &'static str,
    pub weights: WeightKind,
    pub deltas: &'static [i32],
}

/// The fixed scenario battery run against every sequence pair.
pub const SCORER_SCENARIOS: &[ScorerScenario] = &[
    ScorerScenario {
        tag: "S1",
        weights: WeightKind::Uniform,
        deltas: &[10],
    },
    ScorerScenario {
        tag: "S2",
        weights: WeightKind::FrequencyScaled,
        deltas: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    },
];

/// Per-invocation measurements attached to every record.
#[derive(Clone, Copy, Debug)]
pub struct RunMetrics {
    /// Wall-clock time of the solve, in milliseconds.
    pub elapsed_ms: f64,
    /// Documented memory estimate for the instance, in bytes.
    pub mem_bytes: u64,
}

/// One scorer invocation: parameters, result, and measurements.
#[derive(Clone, Debug)]
pub struct AlignmentRecord {
    pub scenario: &'static str,
    pub delta: i32,
    pub n: usize,
    pub m: usize,
    pub result: AlignmentResult,
    pub metrics: RunMetrics,
}

/// One zero-square invocation: parameters, result, and measurements.
#[derive(Clone, Debug)]
pub struct SquareRecord {
    pub rows: usize,
    pub cols: usize,
    pub p_one: f64,
    pub result: SquareResult,
    pub metrics: RunMetrics,
}

/// Time a single solve and pair its result with the metrics.
fn measure<P: DpProblem>(problem: &P) -> (P::Output, RunMetrics) {
    let start = Instant::now();
    let result = problem.solve();
    let elapsed = start.elapsed();
    (
        result,
        RunMetrics {
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
            mem_bytes: problem.mem_estimate(),
        },
    )
}

/// Run the full scorer scenario battery over one freshly drawn sequence
/// pair (A of length `n` drawn before B of length `m`).
///
/// Returns one record per (scenario, delta) combination, in declared
/// order: `S1` with delta 10, then `S2` with delta 1 through 10.
pub fn run_scorer_suite(n: usize, m: usize, seed: u64) -> Vec<AlignmentRecord> {
    let mut gen = InputGen::from_seed(seed);
    let a = gen.upper_seq(n);
    let b = gen.upper_seq(m);

    let mut records = Vec::new();
    for scenario in SCORER_SCENARIOS {
        let weights = scenario.weights.table();
        for &delta in scenario.deltas {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("scorer_run", scenario = scenario.tag, delta, n, m);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let problem = LocalScoreProblem::new(&a, &b, &weights, delta);
            let (result, metrics) = measure(&problem);
            records.push(AlignmentRecord {
                scenario: scenario.tag,
                delta,
                n,
                m,
                result,
                metrics,
            });
        }
    }
    records
}

/// Run [`run_scorer_suite`] once per [`SCORER_BATCH_SIZES`] entry.
///
/// Every size pair restarts from the same seed, so a batch entry is
/// bit-identical to a single suite run of the same dimensions.
pub fn run_scorer_batch(seed: u64) -> Vec<Vec<AlignmentRecord>> {
    SCORER_BATCH_SIZES
        .iter()
        .map(|&(n, m)| run_scorer_suite(n, m, seed))
        .collect()
}

/// Run the zero-square search over every [`SQUARE_SIZES`] shape.
///
/// A single generator, seeded once, feeds all five matrices in declared
/// order; each matrix is dropped as soon as its record is produced.
pub fn run_square_suite(p_one: f64, seed: u64) -> Vec<SquareRecord> {
    let mut gen = InputGen::from_seed(seed);
    SQUARE_SIZES
        .iter()
        .map(|&(rows, cols)| {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("square_run", rows, cols, p_one);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let matrix = gen.bernoulli_matrix(rows, cols, p_one);
            let problem = ZeroSquareProblem::new(&matrix);
            let (result, metrics) = measure(&problem);
            SquareRecord {
                rows,
                cols,
                p_one,
                result,
                metrics,
            }
        })
        .collect()
}
