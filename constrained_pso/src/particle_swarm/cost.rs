use serde::Serialize;

/// Two-component score of a position. Lower is better for both fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Cost {
    /// The quantity being minimized.
    pub objective: f64,
    /// Magnitude of the constraint violation; zero means feasible.
    pub infeasibility: f64,
}

impl Cost {
    pub fn new(objective: f64, infeasibility: f64) -> Self {
        Self {
            objective,
            infeasibility,
        }
    }

    /// Feasibility no worse and objective strictly better.
    ///
    /// This is a partial order: two costs may each fail to dominate the other
    /// (lower objective but higher infeasibility, for example). NaN in either
    /// field makes every comparison false.
    #[inline]
    pub fn dominates(&self, other: &Cost) -> bool {
        self.infeasibility <= other.infeasibility && self.objective < other.objective
    }

    /// Both fields strictly better.
    #[inline]
    pub fn strictly_dominates(&self, other: &Cost) -> bool {
        self.infeasibility < other.infeasibility && self.objective < other.objective
    }

    pub fn is_finite(&self) -> bool {
        self.objective.is_finite() && self.infeasibility.is_finite()
    }
}

/// A cost function over a position in the search space.
///
/// The engine treats it as pure; reproducible runs require it to return the
/// same cost for the same input.
pub trait Problem {
    fn evaluate(&self, position: &[f64]) -> Cost;
}

impl<F> Problem for F
where
    F: Fn(&[f64]) -> Cost,
{
    fn evaluate(&self, position: &[f64]) -> Cost {
        self(position)
    }
}
