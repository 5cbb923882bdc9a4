//! Runs one BB84 key exchange and writes the resulting key to disk.

use anyhow::Result;
use clap::Parser;
use qkdsim::protocols::qkd::bb84::{self, Bb84Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bb84")]
#[command(about = "Simulate a BB84 key exchange between two concurrent parties")]
struct Args {
    /// Target key length in bits
    #[arg(long, default_value_t = 1024)]
    key_bits: usize,

    /// Seed for the random sources, for a reproducible exchange
    #[arg(long)]
    seed: Option<u64>,

    /// File the sender writes the hex-rendered key to
    #[arg(long, default_value = "SecretKey.txt")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Bb84Config {
        key_bits: args.key_bits,
        seed: args.seed,
        key_path: Some(args.out.clone()),
    };

    let result = bb84::run(&config)?;

    println!(
        "The secret key that both parties now have is:\n{}",
        result.key.to_hex()
    );
    println!(
        "({} bits sifted from {} rounds, {} discarded, written to {})",
        result.key.len(),
        result.rounds,
        result.discarded,
        args.out.display()
    );

    Ok(())
}
