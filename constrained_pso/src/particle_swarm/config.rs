use crate::error::PsoError;

/// Acceleration coefficients of the velocity update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    /// Pull towards the particle's own best position.
    pub personal: f64,
    /// Pull towards the swarm's best position.
    pub global: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            personal: 0.2,
            global: 0.2,
        }
    }
}

/// Parameters of the inertia weight annealing schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange {
    pub begin: f64,
    pub end: f64,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            begin: 0.1,
            end: 0.01,
        }
    }
}

/// Configuration for a particle swarm run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PsoConfig {
    /// Number of particles. Fixed for the whole run.
    pub swarm_size: usize,

    /// Number of iterations. The run always performs exactly this many.
    pub max_iter: usize,

    pub coefficients: Coefficients,

    pub weight_range: WeightRange,

    /// Curvature of the mutation probability decay `(1 - t)^(1/mu)`.
    ///
    /// Small values make mutation die out early in the run; `mu = 1` is a
    /// linear decay.
    pub mu: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 100,
            max_iter: 1000,
            coefficients: Coefficients::default(),
            weight_range: WeightRange::default(),
            mu: 0.1,
        }
    }
}

impl PsoConfig {
    pub fn with_swarm_size(mut self, swarm_size: usize) -> Self {
        self.swarm_size = swarm_size;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_coefficients(mut self, personal: f64, global: f64) -> Self {
        self.coefficients = Coefficients { personal, global };
        self
    }

    pub fn with_weight_range(mut self, begin: f64, end: f64) -> Self {
        self.weight_range = WeightRange { begin, end };
        self
    }

    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    pub fn validate(&self) -> Result<(), PsoError> {
        if self.swarm_size == 0 {
            return Err(PsoError::EmptySwarm);
        }
        if !(self.mu.is_finite() && self.mu > 0.0) {
            return Err(PsoError::InvalidParameter {
                name: "mu",
                value: self.mu,
            });
        }
        let finite_params = [
            ("coefficients.personal", self.coefficients.personal),
            ("coefficients.global", self.coefficients.global),
            ("weight_range.begin", self.weight_range.begin),
            ("weight_range.end", self.weight_range.end),
        ];
        for (name, value) in finite_params {
            if !value.is_finite() {
                return Err(PsoError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
