use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use fixture_gen::generator::FixtureGenerator;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = FixtureGenerator::new(StdRng::seed_from_u64(0));
    let start = Instant::now();
    let fixture = generator.generate(1_000)?;
    let elapsed = start.elapsed();
    warn!("Generating took: {:.2?}", elapsed);

    let start_writing = Instant::now();
    fixture.write_to(io::sink())?;
    warn!("Writing took: {:.2?}", start_writing.elapsed());

    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
