//! Time-varying control parameters of the optimizer loop.

use super::config::WeightRange;

/// Inertia weight for iteration `iter` of a `max_iter`-long run.
///
/// `((max_iter - iter) - (begin - end)) / max_iter + end`, which falls from
/// roughly `1 + end` at the start towards `end` at the last iteration.
pub fn inertia_weight(iter: usize, max_iter: usize, weight_range: &WeightRange) -> f64 {
    let remaining = max_iter as f64 - iter as f64;
    (remaining - (weight_range.begin - weight_range.end)) / max_iter as f64 + weight_range.end
}

/// Mutation probability for iteration `iter`: `(1 - iter/den)^(1/mu)`, with
/// `den = max_iter - 1` (or 1 for runs of at most one iteration).
///
/// Starts at 1 and decays to 0 on the final iteration.
pub fn mutation_probability(iter: usize, max_iter: usize, mu: f64) -> f64 {
    let den = if max_iter > 1 {
        max_iter as f64 - 1.0
    } else {
        1.0
    };
    (1.0 - iter as f64 / den).powf(1.0 / mu)
}
