use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use car_seeder::generator::{CarGenerator, DEFAULT_FLEET_SIZE};
use car_seeder::writer::write_fleet;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of car records to generate
    #[clap(long, default_value_t = DEFAULT_FLEET_SIZE)]
    pub(crate) count: usize,
    /// The output file for the generated records (overwritten if present)
    #[clap(long, default_value = "cars.json")]
    pub(crate) output: PathBuf,
    /// Seed the generator to make the output reproducible
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut generator = match cli.seed {
        Some(seed) => CarGenerator::with_seed(seed),
        None => CarGenerator::new(),
    };
    let fleet = generator.generate_fleet(cli.count);
    write_fleet(&fleet, &cli.output)?;
    info!("seeded {} records into {}", fleet.len(), cli.output.display());

    Ok(())
}
