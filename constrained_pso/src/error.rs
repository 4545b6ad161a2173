use thiserror::Error;

#[derive(Error, Debug)]
pub enum PsoError {
    #[error("Search space must have at least one dimension")]
    EmptyDimension,

    #[error("Swarm must contain at least one particle")]
    EmptySwarm,

    #[error("Lower bound exceeds upper bound in dimension {dim}: {lower} > {upper}")]
    InvertedBounds { dim: usize, lower: f64, upper: f64 },

    #[error("Non-finite bound in dimension {dim}")]
    NonFiniteBound { dim: usize },

    #[error("Width of dimension {dim} overflows: {lower} to {upper}")]
    UnboundedWidth { dim: usize, lower: f64, upper: f64 },

    #[error("Position {value} lies outside the bounds of dimension {dim}")]
    PositionOutOfBounds { dim: usize, value: f64 },

    #[error("Invalid value for parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
