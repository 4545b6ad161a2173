use std::f64::consts::FRAC_PI_2;

use pretty_assertions::assert_eq;

use super::{sine_bounds, sine_sum, sphere};
use crate::prelude::*;

fn small_config() -> PsoConfig {
    PsoConfig::default().with_swarm_size(30).with_max_iter(200)
}

#[test]
fn seeded_runs_are_identical() {
    let bounds = sine_bounds::<4>();
    let a = pso(&bounds, &sine_sum, small_config(), &mut SwarmRng::seeded(7)).unwrap();
    let b = pso(&bounds, &sine_sum, small_config(), &mut SwarmRng::seeded(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_swarms() {
    let bounds = sine_bounds::<4>();
    let a = pso(&bounds, &sine_sum, small_config(), &mut SwarmRng::seeded(7)).unwrap();
    let b = pso(&bounds, &sine_sum, small_config(), &mut SwarmRng::seeded(8)).unwrap();
    assert_ne!(a.swarm, b.swarm);
}

#[test]
fn zero_iterations_returns_initial_swarm() {
    let bounds = sine_bounds::<2>();
    let config = PsoConfig::default().with_swarm_size(10).with_max_iter(0);
    let solution = pso(&bounds, &sine_sum, config, &mut SwarmRng::seeded(3)).unwrap();

    let initial = Swarm::new(10, &bounds, &sine_sum, &mut SwarmRng::seeded(3)).unwrap();
    assert_eq!(solution.swarm, initial);
    assert_eq!(solution.g_best, initial[0]);
    assert_eq!(solution.evaluations, 10);
}

#[test]
fn invalid_config_fails_before_sampling() {
    let bounds = sine_bounds::<2>();
    let config = PsoConfig::default().with_swarm_size(0);
    assert!(matches!(
        pso(&bounds, &sine_sum, config, &mut SwarmRng::seeded(0)),
        Err(PsoError::EmptySwarm)
    ));
    assert!(matches!(
        ParticleSwarm::new(bounds, PsoConfig::default().with_mu(0.0)),
        Err(PsoError::InvalidParameter { name: "mu", .. })
    ));
}

#[test]
fn evaluation_count_is_within_per_iteration_limits() {
    let bounds = sine_bounds::<3>();
    let config = PsoConfig::default().with_swarm_size(12).with_max_iter(40);
    let solution = pso(&bounds, &sine_sum, config, &mut SwarmRng::seeded(4)).unwrap();
    // One evaluation per particle at start, then one or two per particle per iteration.
    assert!(solution.evaluations >= 12 + 12 * 40);
    assert!(solution.evaluations <= 12 + 2 * 12 * 40);
}

#[test]
fn global_best_only_moves_to_dominating_particles() {
    let history = CostHistory::new();
    let bounds = sine_bounds::<2>();
    let mut optimizer = ParticleSwarm::new(bounds, small_config())
        .unwrap()
        .with_observer(history.clone());
    let solution = optimizer.run(&sine_sum, &mut SwarmRng::seeded(12)).unwrap();

    let per_iter = history.cost_history();
    assert_eq!(per_iter.len(), 200);
    for pair in per_iter.windows(2) {
        assert!(pair[1] == pair[0] || pair[1].dominates(&pair[0]));
    }

    let improvements = history.improvements();
    for pair in improvements.windows(2) {
        assert!(pair[1].0 > pair[0].0);
        assert!(pair[1].1.objective < pair[0].1.objective);
        assert!(pair[1].1.infeasibility <= pair[0].1.infeasibility);
    }

    // The last update happens before the final swarm move, so the returned
    // best is the one recorded on the last iteration.
    assert_eq!(per_iter.last().copied(), Some(solution.g_best.cost()));
}

#[test]
fn solution_is_inside_bounds_and_consistent() {
    let bounds = Bounds::new([-2.0, 0.0, 1.0], [2.0, 3.0, 4.0]).unwrap();
    let solution = pso(&bounds, &sphere, small_config(), &mut SwarmRng::seeded(13)).unwrap();

    assert!(bounds.contains_all(solution.g_best.position()));
    assert_eq!(
        solution.g_best.cost(),
        sphere(solution.g_best.position().as_slice())
    );
    for p in &solution.swarm {
        assert!(bounds.contains_all(p.position()));
    }
    assert_eq!(solution.swarm.len(), 30);
}

#[test]
fn sphere_minimum_is_approached() {
    let bounds = Bounds::<2>::uniform(-5.0, 5.0).unwrap();
    let config = PsoConfig::default().with_swarm_size(40).with_max_iter(300);
    let solution = pso(&bounds, &sphere, config, &mut SwarmRng::seeded(14)).unwrap();
    let initial = Swarm::new(40, &bounds, &sphere, &mut SwarmRng::seeded(14)).unwrap();
    assert!(solution.g_best.cost().objective <= initial[0].cost().objective);
    assert!(solution.g_best.cost().objective < 1e-2);
}

/// Best grid objective among points no less feasible than `infeasibility`
/// (with a small slack for the grid resolution).
fn grid_best_objective(infeasibility: f64) -> f64 {
    let steps = 10_000;
    (0..=steps)
        .map(|k| sine_sum(&[FRAC_PI_2 * k as f64 / steps as f64]))
        .filter(|c| c.infeasibility <= infeasibility + 1e-3)
        .map(|c| c.objective)
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn sine_sum_one_dimension_matches_grid_search() {
    let history = CostHistory::new();
    let config = PsoConfig::default().with_swarm_size(50).with_max_iter(500);
    let mut optimizer = ParticleSwarm::new(sine_bounds::<1>(), config)
        .unwrap()
        .with_observer(history.clone());
    let solution = optimizer.run(&sine_sum, &mut SwarmRng::seeded(2024)).unwrap();

    let objectives: Vec<f64> = history
        .cost_history()
        .iter()
        .map(|c| c.objective)
        .collect();
    assert!(objectives.windows(2).all(|w| w[1] <= w[0]));

    let best = solution.g_best.cost();
    let grid = grid_best_objective(best.infeasibility);
    assert!(
        best.objective <= grid + 0.05,
        "pso objective {} vs grid {}",
        best.objective,
        grid
    );
}

#[test]
fn nan_costs_stall_the_global_best() {
    let nan_problem = |_: &[f64]| Cost::new(f64::NAN, f64::NAN);
    let history = CostHistory::new();
    let mut optimizer = ParticleSwarm::new(sine_bounds::<2>(), small_config())
        .unwrap()
        .with_observer(history.clone());
    let solution = optimizer
        .run(&nan_problem, &mut SwarmRng::seeded(15))
        .unwrap();

    assert!(history.improvements().is_empty());
    assert!(!solution.g_best.cost().is_finite());
    for p in &solution.swarm {
        assert!(sine_bounds::<2>().contains_all(p.position()));
    }
}
