use std::ops::Index;

use crate::error::PsoError;
use crate::particle_swarm::{
    bounds::Bounds,
    config::Coefficients,
    cost::Problem,
    particle::Particle,
    rng::RandomSource,
};

/// Fixed-size population of particles sharing one search box.
#[derive(Clone, Debug, PartialEq)]
pub struct Swarm<const N: usize> {
    particles: Vec<Particle<N>>,
}

impl<const N: usize> Swarm<N> {
    /// Creates `size` independently initialized particles.
    pub fn new<P, R>(
        size: usize,
        bounds: &Bounds<N>,
        problem: &P,
        rng: &mut R,
    ) -> Result<Self, PsoError>
    where
        P: Problem + ?Sized,
        R: RandomSource + ?Sized,
    {
        if size == 0 {
            return Err(PsoError::EmptySwarm);
        }
        let particles = (0..size)
            .map(|_| Particle::new(bounds, problem, rng))
            .collect();
        Ok(Self { particles })
    }

    pub fn from_particles(particles: Vec<Particle<N>>) -> Result<Self, PsoError> {
        if particles.is_empty() {
            return Err(PsoError::EmptySwarm);
        }
        Ok(Self { particles })
    }

    /// Returns a non-dominated particle.
    ///
    /// Single pass over the swarm in order, keeping a running incumbent that
    /// is only replaced by a particle that strictly dominates it. Dominance is
    /// not a total order, so among mutually non-dominating particles the
    /// result depends on swarm order.
    pub fn best(&self) -> &Particle<N> {
        // `Swarm` is never empty.
        let mut best = &self.particles[0];
        for particle in &self.particles[1..] {
            if particle.dominates(best) {
                best = particle;
            }
        }
        best
    }

    /// Runs [`Particle::update`] on every particle against the same frozen
    /// `g_best`.
    pub fn update_particles<P, R>(
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
        for particle in &mut self.particles {
            particle.update(
                g_best,
                problem,
                weight,
                coefficients,
                mutation_probability,
                rng,
            );
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Never true for a constructed swarm.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle<N>] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle<N>> {
        self.particles.iter()
    }
}

impl<const N: usize> Index<usize> for Swarm<N> {
    type Output = Particle<N>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.particles[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a Swarm<N> {
    type Item = &'a Particle<N>;
    type IntoIter = std::slice::Iter<'a, Particle<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
