//! Random draws used by the Gillespie loop.
//!
//! Kept free of `rand_distr`: the only distributions needed are the
//! unit exponential and uniform choice, both one-liners on top of a
//! uniform `[0, 1)` draw. Initial infected nodes are picked with
//! `SliceRandom::partial_shuffle`.

use rand::Rng;

/// Unit-rate exponential variate by inverse CDF.
pub(crate) fn unit_exponential<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 1 - U lies in (0, 1], so the log is finite.
    -(1.0 - rng.random::<f64>()).ln()
}

/// Uniform index in `[0, len)`. `len` must be non-zero.
pub(crate) fn uniform_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "uniform_index on empty range");
    let k = (len as f64 * rng.random::<f64>()) as usize;
    k.min(len - 1)
}
