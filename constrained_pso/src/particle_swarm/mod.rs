use std::cell::Cell;

use crate::{
    error::PsoError,
    particle_swarm::{
        bounds::Bounds,
        config::PsoConfig,
        cost::{Cost, Problem},
        observer::{IterState, Observe},
        particle::Particle,
        rng::RandomSource,
        schedule::{inertia_weight, mutation_probability},
        swarm::Swarm,
    },
};

pub mod bounds;
pub mod config;
pub mod cost;
pub mod observer;
pub mod particle;
pub mod report;
pub mod rng;
pub mod schedule;
pub mod swarm;

#[cfg(test)]
mod tests;

/// Result of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<const N: usize> {
    /// Best particle observed over the whole run.
    pub g_best: Particle<N>,
    /// Swarm as it stood after the last iteration.
    pub swarm: Swarm<N>,
    /// Number of calls made to the problem function.
    pub evaluations: usize,
}

/// Constrained particle swarm optimizer.
///
/// Minimizes the objective of a [`Problem`] inside a box, using the
/// infeasibility as a no-worse requirement whenever two costs are compared.
/// Always runs exactly `config.max_iter` iterations.
pub struct ParticleSwarm<const N: usize> {
    bounds: Bounds<N>,
    config: PsoConfig,
    observers: Vec<Box<dyn Observe<N>>>,
}

impl<const N: usize> ParticleSwarm<N> {
    pub fn new(bounds: Bounds<N>, config: PsoConfig) -> Result<Self, PsoError> {
        config.validate()?;
        Ok(Self {
            bounds,
            config,
            observers: Vec::new(),
        })
    }

    pub fn with_observer<O: Observe<N> + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn bounds(&self) -> &Bounds<N> {
        &self.bounds
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    pub fn run<P, R>(&mut self, problem: &P, rng: &mut R) -> Result<Solution<N>, PsoError>
    where
        P: Problem + ?Sized,
        R: RandomSource + ?Sized,
    {
        let problem = CountingProblem::new(problem);
        let PsoConfig {
            swarm_size,
            max_iter,
            coefficients,
            weight_range,
            mu,
        } = self.config;

        log::info!(
            "particle swarm: {swarm_size} particles, {} dimensions, {max_iter} iterations",
            N
        );

        let mut swarm = Swarm::new(swarm_size, &self.bounds, &problem, rng)?;
        let mut g_best = swarm[0].clone();

        for observer in self.observers.iter_mut() {
            observer.observe_init(&swarm, &g_best);
        }

        for iter in 0..max_iter {
            let candidate = swarm.best();
            if candidate.dominates(&g_best) {
                g_best = candidate.clone();
                log::debug!(
                    "iter {iter}: new global best, objective {:.6e}, infeasibility {:.6e}",
                    g_best.cost().objective,
                    g_best.cost().infeasibility
                );
                for observer in self.observers.iter_mut() {
                    observer.observe_new_best(iter, &g_best);
                }
            }

            let weight = inertia_weight(iter, max_iter, &weight_range);
            let mutation_prob = mutation_probability(iter, max_iter, mu);
            log::trace!("iter {iter}: weight {weight:.4}, mutation probability {mutation_prob:.4}");

            let state = IterState {
                iter,
                max_iter,
                g_best: &g_best,
                weight,
                mutation_probability: mutation_prob,
            };
            for observer in self.observers.iter_mut() {
                observer.observe_iter(&state);
            }

            swarm.update_particles(
                &g_best,
                &problem,
                weight,
                &coefficients,
                mutation_prob,
                rng,
            );
        }

        let evaluations = problem.calls();
        log::info!(
            "particle swarm done: best objective {:.6e}, infeasibility {:.6e}, {evaluations} evaluations",
            g_best.cost().objective,
            g_best.cost().infeasibility
        );

        Ok(Solution {
            g_best,
            swarm,
            evaluations,
        })
    }
}

/// Runs a [`ParticleSwarm`] once with no observers.
pub fn pso<const N: usize, P, R>(
    bounds: &Bounds<N>,
    problem: &P,
    config: PsoConfig,
    rng: &mut R,
) -> Result<Solution<N>, PsoError>
where
    P: Problem + ?Sized,
    R: RandomSource + ?Sized,
{
    ParticleSwarm::new(*bounds, config)?.run(problem, rng)
}

struct CountingProblem<'a, P: ?Sized> {
    inner: &'a P,
    calls: Cell<usize>,
}

impl<'a, P: Problem + ?Sized> CountingProblem<'a, P> {
    fn new(inner: &'a P) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<P: Problem + ?Sized> Problem for CountingProblem<'_, P> {
    fn evaluate(&self, position: &[f64]) -> Cost {
        self.calls.set(self.calls.get() + 1);
        self.inner.evaluate(position)
    }
}
