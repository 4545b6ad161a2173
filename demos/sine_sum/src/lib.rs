use std::f64::consts::FRAC_PI_2;

use constrained_pso::prelude::*;

/// Target for the mean of `sin(x)` over all coordinates.
pub const TARGET_MEAN_SIN: f64 = 0.7;

/// `|sum(sin 5x + sin 7x + sin 11x)|`, constrained so that the mean of
/// `sin(x)` is [`TARGET_MEAN_SIN`].
pub fn sine_sum_cost(x: &[f64]) -> Cost {
    let objective: f64 = x
        .iter()
        .map(|v| (v * 5.0).sin() + (v * 7.0).sin() + (v * 11.0).sin())
        .sum();
    let mean_sin = x.iter().map(|v| v.sin()).sum::<f64>() / x.len() as f64;
    Cost::new(objective.abs(), (mean_sin - TARGET_MEAN_SIN).abs())
}

/// `[0, pi/2]` in every dimension.
pub fn sine_sum_bounds<const N: usize>() -> Result<Bounds<N>, PsoError> {
    Bounds::uniform(0.0, FRAC_PI_2)
}

pub fn print_pre_optimization_summary<const N: usize>(bounds: &Bounds<N>, config: &PsoConfig) {
    println!("\n------- pre optimization -------");
    println!("dimensions: {}", bounds.dim());
    println!("lower bounds: {:?}", bounds.lower().as_slice());
    println!("upper bounds: {:?}", bounds.upper().as_slice());
    println!("config: {:#?}", config);
}

pub fn print_post_optimization_summary<const N: usize>(solution: &Solution<N>) {
    println!("------- post optimization -------");
    println!("evaluations: {}", solution.evaluations);
    let feasible = solution
        .swarm
        .iter()
        .filter(|p| p.cost().infeasibility == 0.0)
        .count();
    println!(
        "exactly feasible particles: {feasible} of {}",
        solution.swarm.len()
    );
    print!("{}", solution.g_best);
}
