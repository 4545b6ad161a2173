pub mod error;
pub mod particle_swarm;

pub mod prelude {
    pub use crate::{
        error::*,
        particle_swarm::{
            ParticleSwarm, Solution,
            bounds::*,
            config::*,
            cost::*,
            observer::*,
            particle::*,
            pso,
            rng::*,
            schedule::{self, *},
            swarm::*,
        },
    };

    pub use nalgebra;
}
