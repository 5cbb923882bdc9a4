//! Samples a Hadamard-prepared qubit repeatedly to show the outcomes are
//! uniformly distributed.

use anyhow::Result;
use clap::Parser;
use qkdsim::protocols::qrng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qrng")]
#[command(about = "Quantum random number generator demo")]
struct Args {
    /// Number of prepare-and-measure shots
    #[arg(long, default_value_t = 10_000)]
    shots: usize,

    /// Seed for the random source, for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = qrng::run(args.shots, &mut rng)?;

    println!(
        "Number found in |0> state is {}, and number found in |1> state is {}",
        result.zeros, result.ones
    );
    println!("Observed frequency of |1> is {}", result.frequency_of_one());

    Ok(())
}
