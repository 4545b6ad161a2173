use std::f64::consts::FRAC_PI_2;

use crate::prelude::*;

mod optimizer;

/// Sum of sines objective with the mean of `sin(x)` pinned to 0.7.
pub(super) fn sine_sum(x: &[f64]) -> Cost {
    let objective: f64 = x
        .iter()
        .map(|v| (v * 5.0).sin() + (v * 7.0).sin() + (v * 11.0).sin())
        .sum();
    let mean_sin = x.iter().map(|v| v.sin()).sum::<f64>() / x.len() as f64;
    Cost::new(objective.abs(), (mean_sin - 0.7).abs())
}

/// Objective is the first coordinate, infeasibility the second.
pub(super) fn split_coords(x: &[f64]) -> Cost {
    Cost::new(x[0], x[1])
}

pub(super) fn sphere(x: &[f64]) -> Cost {
    Cost::new(x.iter().map(|v| v * v).sum(), 0.0)
}

pub(super) fn sine_bounds<const N: usize>() -> Bounds<N> {
    Bounds::uniform(0.0, FRAC_PI_2).unwrap()
}
