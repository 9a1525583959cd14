use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::FixtureError;
use crate::generator::FixtureGenerator;
use crate::statement::{EventRow, ParticipantRow, Statement, TicketRow};

pub const DEFAULT_LOOPS: u32 = 10;
pub const DEFAULT_OUTPUT: &str = "../out/statements.sql";

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of events; participants and tickets are derived from it
    pub loops: u32,
    pub output: PathBuf,
    /// Seeds the RNG for reproducible output. Seeded from entropy when `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            loops: DEFAULT_LOOPS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

/// Every row of one generation run, each table in generation order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Fixture {
    events: Vec<EventRow>,
    participants: Vec<ParticipantRow>,
    tickets: Vec<TicketRow>,
}

impl Fixture {
    #[must_use]
    pub fn new(
        events: Vec<EventRow>,
        participants: Vec<ParticipantRow>,
        tickets: Vec<TicketRow>,
    ) -> Self {
        Fixture {
            events,
            participants,
            tickets,
        }
    }

    #[must_use]
    pub fn events(&self) -> &[EventRow] {
        &self.events
    }

    #[must_use]
    pub fn participants(&self) -> &[ParticipantRow] {
        &self.participants
    }

    #[must_use]
    pub fn tickets(&self) -> &[TicketRow] {
        &self.tickets
    }

    /// Total number of statements
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len() + self.participants.len() + self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events, then participants, then tickets.
    pub fn statements(&self) -> impl Iterator<Item = Statement<'_>> {
        self.events
            .iter()
            .map(Statement::Event)
            .chain(self.participants.iter().map(Statement::Participant))
            .chain(self.tickets.iter().map(Statement::Ticket))
    }

    /// Writes one statement per line.
    ///
    /// # Errors
    /// Errors when `writer` fails
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), FixtureError> {
        for statement in self.statements() {
            writeln!(writer, "{}", statement)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Creates or truncates the file at `path`, creating missing parent directories.
    ///
    /// # Errors
    /// Errors when the directories or the file cannot be created or written
    pub fn write_to_path(&self, path: &Path) -> Result<(), FixtureError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.write_to(BufWriter::new(File::create(path)?))
    }
}

/// Generates a fixture for `config` and writes it to `config.output`.
///
/// # Errors
/// Errors when generation fails (see [`FixtureGenerator::generate`]) or the output
/// cannot be written. Nothing is written when generation fails.
pub fn run(config: &Config) -> Result<Fixture, FixtureError> {
    let rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let fixture = FixtureGenerator::new(rng).generate(config.loops)?;
    fixture.write_to_path(&config.output)?;
    info!(
        "Wrote {} statements to {}",
        fixture.len(),
        config.output.display()
    );
    Ok(fixture)
}
