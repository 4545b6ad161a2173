use std::{cell::RefCell, rc::Rc};

use crate::particle_swarm::{cost::Cost, particle::Particle, swarm::Swarm};

/// Snapshot handed to observers once per iteration, after the global best has
/// been refreshed and before the swarm moves.
#[derive(Debug)]
pub struct IterState<'a, const N: usize> {
    pub iter: usize,
    pub max_iter: usize,
    pub g_best: &'a Particle<N>,
    pub weight: f64,
    pub mutation_probability: f64,
}

/// Hooks into the optimizer loop. All methods default to no-ops.
pub trait Observe<const N: usize> {
    fn observe_init(&mut self, _swarm: &Swarm<N>, _g_best: &Particle<N>) {}

    fn observe_iter(&mut self, _state: &IterState<'_, N>) {}

    /// Called whenever the global best is replaced.
    fn observe_new_best(&mut self, _iter: usize, _g_best: &Particle<N>) {}
}

/// Records the global best cost seen at every iteration.
///
/// Clones share the same history, so keep one clone and hand the other to
/// the optimizer.
#[derive(Clone, Debug, Default)]
pub struct CostHistory {
    per_iter: Rc<RefCell<Vec<Cost>>>,
    improvements: Rc<RefCell<Vec<(usize, Cost)>>>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global best cost at the start of each iteration.
    pub fn cost_history(&self) -> Vec<Cost> {
        self.per_iter.borrow().clone()
    }

    /// `(iteration, cost)` at each global best replacement.
    pub fn improvements(&self) -> Vec<(usize, Cost)> {
        self.improvements.borrow().clone()
    }
}

impl<const N: usize> Observe<N> for CostHistory {
    fn observe_iter(&mut self, state: &IterState<'_, N>) {
        self.per_iter.borrow_mut().push(state.g_best.cost());
    }

    fn observe_new_best(&mut self, iter: usize, g_best: &Particle<N>) {
        self.improvements.borrow_mut().push((iter, g_best.cost()));
    }
}
