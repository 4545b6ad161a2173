use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use constrained_pso::prelude::*;
use sine_sum_demo::{
    print_post_optimization_summary, print_pre_optimization_summary, sine_sum_bounds,
    sine_sum_cost,
};

#[derive(Parser)]
#[command(
    name = "sine_sum_demo",
    version,
    about = "Minimize a constrained sum of sines with particle swarm optimization"
)]
struct Cli {
    /// Number of variables (1 to 8).
    #[arg(long, default_value_t = 4usize)]
    dim: usize,
    /// Number of particles.
    #[arg(long, default_value_t = 200usize)]
    swarm_size: usize,
    /// Number of iterations.
    #[arg(long, default_value_t = 2000usize)]
    max_iter: usize,
    /// Seed for a reproducible run; seeds from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Write the final swarm to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.dim {
        1 => solve::<1>(&cli),
        2 => solve::<2>(&cli),
        3 => solve::<3>(&cli),
        4 => solve::<4>(&cli),
        5 => solve::<5>(&cli),
        6 => solve::<6>(&cli),
        7 => solve::<7>(&cli),
        8 => solve::<8>(&cli),
        n => bail!("unsupported dimension {n}; expected 1 to 8"),
    }
}

fn solve<const N: usize>(cli: &Cli) -> Result<()> {
    let bounds = sine_sum_bounds::<N>()?;
    let config = PsoConfig::default()
        .with_swarm_size(cli.swarm_size)
        .with_max_iter(cli.max_iter);
    let mut rng = cli.seed.map_or_else(SwarmRng::from_entropy, SwarmRng::seeded);

    print_pre_optimization_summary(&bounds, &config);
    let solution = pso(&bounds, &sine_sum_cost, config, &mut rng)?;
    print_post_optimization_summary(&solution);

    if let Some(path) = &cli.csv {
        log::info!(
            "exporting {} particles to {}",
            solution.swarm.len(),
            path.display()
        );
        solution.swarm.export_csv(path)?;
        println!("swarm written to {}", path.display());
    }
    Ok(())
}
