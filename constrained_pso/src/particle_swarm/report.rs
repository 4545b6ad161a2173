//! Human-readable and CSV dumps of particles and swarms.

use std::{fmt, fs::File, io, path::Path};

use nalgebra::SVector;
use serde::Serialize;

use crate::{
    error::PsoError,
    particle_swarm::{particle::Particle, swarm::Swarm},
};

/// Column names follow the historical export format, spelling included.
const CSV_HEADER: [&str; 6] = [
    "x",
    "cost",
    "infeasiblity",
    "pBest",
    "pBest_cost",
    "pBest_infeasiblity",
];

/// One CSV row, fields in [`CSV_HEADER`] order.
#[derive(Serialize)]
struct ParticleRecord {
    x: String,
    cost: f64,
    infeasibility: f64,
    p_best: String,
    p_best_cost: f64,
    p_best_infeasibility: f64,
}

impl<const N: usize> From<&Particle<N>> for ParticleRecord {
    fn from(particle: &Particle<N>) -> Self {
        Self {
            x: join_coords(particle.position(), ","),
            cost: particle.cost().objective,
            infeasibility: particle.cost().infeasibility,
            p_best: join_coords(particle.best_position(), ","),
            p_best_cost: particle.best_cost().objective,
            p_best_infeasibility: particle.best_cost().infeasibility,
        }
    }
}

fn join_coords<const N: usize>(v: &SVector<f64, N>, sep: &str) -> String {
    v.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

impl<const N: usize> fmt::Display for Particle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "particle info:")?;
        writeln!(f, "\tcost = {}", self.cost().objective)?;
        writeln!(f, "\tinfeasiblity = {}", self.cost().infeasibility)?;
        writeln!(f, "\tx=({})", join_coords(self.position(), ", "))?;
        writeln!(f, "\tv=({})", join_coords(self.velocity(), ", "))?;
        writeln!(f, "\tpBest:")?;
        writeln!(f, "\t\tcost = {}", self.best_cost().objective)?;
        writeln!(f, "\t\tinfeasiblity = {}", self.best_cost().infeasibility)?;
        writeln!(f, "\t\tx=({})", join_coords(self.best_position(), ", "))
    }
}

impl<const N: usize> Swarm<N> {
    /// Writes a bare header row, then one CSV row per particle.
    ///
    /// Coordinate lists are comma-joined into a single field. Row fields are
    /// always quoted, so a one-dimensional coordinate list stays a quoted
    /// string rather than a bare number.
    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> Result<(), PsoError> {
        {
            let mut header = csv::Writer::from_writer(&mut writer);
            header.write_record(CSV_HEADER)?;
            header.flush()?;
        }
        let mut rows = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(&mut writer);
        for particle in self {
            rows.serialize(ParticleRecord::from(particle))?;
        }
        rows.flush()?;
        Ok(())
    }

    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), PsoError> {
        let file = File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
