use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use fixture_gen::fixture::{self, Config, DEFAULT_LOOPS, DEFAULT_OUTPUT};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of events to generate; 5x as many participants and 8x as many tickets
    #[clap(default_value_t = DEFAULT_LOOPS)]
    pub(crate) loops: u32,
    /// Where to write the SQL statements, overwriting any existing file
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    pub(crate) output: PathBuf,
    /// Seed for reproducible output
    #[clap(short, long)]
    pub(crate) seed: Option<u64>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            loops: cli.loops,
            output: cli.output,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::from(Cli::parse());
    fixture::run(&config)?;

    Ok(())
}
