//! The seam between the algorithms and the run harness.
//!
//! Each benchmarked dynamic program is a struct capturing one fixed
//! instance (sequences plus scoring parameters, or a matrix). The harness
//! only needs two things from it: run the computation, and report the
//! documented memory estimate for the instance. Everything else — input
//! generation, timing, record assembly, output — lives outside the
//! problem structs.

/// A single benchmarkable DP instance.
///
/// Implementations are stateless between calls: `solve` may be invoked
/// repeatedly and must return bit-identical results each time.
pub trait DpProblem {
    /// Result record produced by one solve.
    type Output;

    /// Run the DP to completion and return its result.
    fn solve(&self) -> Self::Output;

    /// Estimated memory footprint of one solve, in bytes.
    ///
    /// A deterministic formula over the input dimensions, kept stable for
    /// output compatibility; not a measured allocation.
    fn mem_estimate(&self) -> u64;
}
