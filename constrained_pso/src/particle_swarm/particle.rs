use nalgebra::SVector;

use crate::error::PsoError;
use crate::particle_swarm::{
    bounds::Bounds,
    config::Coefficients,
    cost::{Cost, Problem},
    rng::RandomSource,
};

/// Probability of keeping a mutation that does not strictly improve both
/// cost fields.
pub const MUTATION_ACCEPT_THRESHOLD: f64 = 0.5;

/// Velocity damping applied on every extra pass of the boundary reflection.
const REFLECTION_DAMPING: f64 = -0.5;

/// A single candidate solution with its own memory of the best position it
/// has visited.
///
/// Invariant: `position` lies inside `bounds` whenever it can be observed
/// from outside [`Particle::update`], and `best_cost` is the cost of
/// `best_position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<const N: usize> {
    bounds: Bounds<N>,
    position: SVector<f64, N>,
    velocity: SVector<f64, N>,
    cost: Cost,
    best_position: SVector<f64, N>,
    best_cost: Cost,
}

impl<const N: usize> Particle<N> {
    /// Places a particle uniformly at random inside `bounds`, at rest, and
    /// evaluates it once.
    pub fn new<P, R>(bounds: &Bounds<N>, problem: &P, rng: &mut R) -> Self
    where
        P: Problem + ?Sized,
        R: RandomSource + ?Sized,
    {
        let position = SVector::<f64, N>::from_fn(|i, _| {
            rng.uniform_real(bounds.lower()[i], bounds.upper()[i])
        });
        Self::at(*bounds, position, SVector::zeros(), problem)
    }

    /// Builds a particle at a chosen state, e.g. to warm-start a swarm.
    pub fn from_state<P>(
        bounds: &Bounds<N>,
        position: [f64; N],
        velocity: [f64; N],
        problem: &P,
    ) -> Result<Self, PsoError>
    where
        P: Problem + ?Sized,
    {
        for (dim, &value) in position.iter().enumerate() {
            if !bounds.contains(dim, value) {
                return Err(PsoError::PositionOutOfBounds { dim, value });
            }
        }
        Ok(Self::at(
            *bounds,
            SVector::from(position),
            SVector::from(velocity),
            problem,
        ))
    }

    fn at<P>(
        bounds: Bounds<N>,
        position: SVector<f64, N>,
        velocity: SVector<f64, N>,
        problem: &P,
    ) -> Self
    where
        P: Problem + ?Sized,
    {
        let cost = problem.evaluate(position.as_slice());
        Self {
            bounds,
            position,
            velocity,
            cost,
            best_position: position,
            best_cost: cost,
        }
    }

    pub fn bounds(&self) -> &Bounds<N> {
        &self.bounds
    }

    pub fn position(&self) -> &SVector<f64, N> {
        &self.position
    }

    pub fn velocity(&self) -> &SVector<f64, N> {
        &self.velocity
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn best_position(&self) -> &SVector<f64, N> {
        &self.best_position
    }

    pub fn best_cost(&self) -> Cost {
        self.best_cost
    }

    /// See [`Cost::dominates`]. Not a total order.
    #[inline]
    pub fn dominates(&self, other: &Particle<N>) -> bool {
        self.cost.dominates(&other.cost)
    }

    /// One iteration: velocity, position (with reflection), evaluation,
    /// mutation, then personal best.
    pub fn update<P, R>(
        &mut self,
        g_best: &Particle<N>,
        problem: &P,
        weight: f64,
        coefficients: &Coefficients,
        mutation_probability: f64,
        rng: &mut R,
    ) where
        P: Problem + ?Sized,
        R: RandomSource + ?Sized,
    {
        self.update_velocity(g_best, weight, coefficients, rng);
        self.update_position();
        self.cost = problem.evaluate(self.position.as_slice());
        self.mutate(problem, mutation_probability, rng);
        self.update_best();
    }

    fn update_velocity<R>(
        &mut self,
        g_best: &Particle<N>,
        weight: f64,
        coefficients: &Coefficients,
        rng: &mut R,
    ) where
        R: RandomSource + ?Sized,
    {
        for i in 0..N {
            let r_personal = rng.unit();
            let r_global = rng.unit();
            self.velocity[i] = weight * self.velocity[i]
                + coefficients.personal * r_personal * (self.best_position[i] - self.position[i])
                + coefficients.global * r_global * (g_best.position[i] - self.position[i]);
        }
    }

    fn update_position(&mut self) {
        for i in 0..N {
            let (x, v) = reflect_into_bounds(
                self.position[i],
                self.velocity[i],
                self.bounds.lower()[i],
                self.bounds.upper()[i],
            );
            self.position[i] = x;
            self.velocity[i] = v;
        }
    }

    /// Perturbs one random coordinate with probability
    /// `mutation_probability`, inside a window whose half-width shrinks with
    /// that probability.
    ///
    /// The candidate is kept when it strictly improves both cost fields, or
    /// otherwise with probability [`MUTATION_ACCEPT_THRESHOLD`]. Returns
    /// whether the particle moved. Does not touch the personal best.
    pub fn mutate<P, R>(&mut self, problem: &P, mutation_probability: f64, rng: &mut R) -> bool
    where
        P: Problem + ?Sized,
        R: RandomSource + ?Sized,
    {
        if rng.unit() > mutation_probability {
            return false;
        }
        let c = rng.uniform_int(0, N - 1);

        let (lower, upper) = (self.bounds.lower()[c], self.bounds.upper()[c]);
        let delta = self.bounds.width(c) * mutation_probability;
        let window_lower = (self.position[c] - delta).max(lower);
        let window_upper = (self.position[c] + delta).min(upper);

        let mut candidate = self.position;
        candidate[c] = rng.uniform_real(window_lower, window_upper);
        let candidate_cost = problem.evaluate(candidate.as_slice());

        if candidate_cost.strictly_dominates(&self.cost) || rng.unit() < MUTATION_ACCEPT_THRESHOLD
        {
            self.position[c] = candidate[c];
            self.cost = candidate_cost;
            return true;
        }
        false
    }

    fn update_best(&mut self) {
        if self.cost.dominates(&self.best_cost) {
            self.best_position = self.position;
            self.best_cost = self.cost;
        }
    }
}

/// Moves `x` by `v` and bounces it back into `[lower, upper]` if it left.
///
/// On overshoot the velocity is reversed and the step is mirrored. While the
/// coordinate is still outside, the step is undone and retried with the
/// velocity reversed and halved. Returns the new `(position, velocity)`.
///
/// `x` must start inside the bounds. If the damped velocity underflows to
/// zero first, the coordinate is put on the nearest bound.
pub fn reflect_into_bounds(x: f64, v: f64, lower: f64, upper: f64) -> (f64, f64) {
    let outside = |x: f64| !(x >= lower && x <= upper);

    let mut x = x + v;
    let mut v = v;
    if outside(x) {
        v = -v;
        x += 2.0 * v;
        while outside(x) {
            if v == 0.0 || !v.is_finite() {
                x = x.max(lower).min(upper);
                break;
            }
            x -= v;
            v *= REFLECTION_DAMPING;
            x += v;
        }
    }
    (x, v)
}
