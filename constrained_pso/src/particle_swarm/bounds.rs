use nalgebra::SVector;

use crate::error::PsoError;

/// Per-dimension box constraints `lower[i] <= x[i] <= upper[i]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<const N: usize> {
    lower: SVector<f64, N>,
    upper: SVector<f64, N>,
}

impl<const N: usize> Bounds<N> {
    /// Validates and builds the search box.
    ///
    /// Fails on a zero-dimensional space, on non-finite limits, on any
    /// dimension with `lower > upper` and on finite limits whose width
    /// overflows `f64`. Equal limits are allowed and pin that coordinate.
    pub fn new(lower: [f64; N], upper: [f64; N]) -> Result<Self, PsoError> {
        if N == 0 {
            return Err(PsoError::EmptyDimension);
        }
        for dim in 0..N {
            let (lo, hi) = (lower[dim], upper[dim]);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(PsoError::NonFiniteBound { dim });
            }
            if lo > hi {
                return Err(PsoError::InvertedBounds {
                    dim,
                    lower: lo,
                    upper: hi,
                });
            }
            if !(hi - lo).is_finite() {
                return Err(PsoError::UnboundedWidth {
                    dim,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self {
            lower: SVector::from(lower),
            upper: SVector::from(upper),
        })
    }

    /// Same limits on every dimension.
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, PsoError> {
        Self::new([lower; N], [upper; N])
    }

    pub fn dim(&self) -> usize {
        N
    }

    pub fn lower(&self) -> &SVector<f64, N> {
        &self.lower
    }

    pub fn upper(&self) -> &SVector<f64, N> {
        &self.upper
    }

    pub fn width(&self, dim: usize) -> f64 {
        self.upper[dim] - self.lower[dim]
    }

    #[inline]
    pub fn contains(&self, dim: usize, value: f64) -> bool {
        value >= self.lower[dim] && value <= self.upper[dim]
    }

    pub fn contains_all(&self, position: &SVector<f64, N>) -> bool {
        (0..N).all(|dim| self.contains(dim, position[dim]))
    }
}
