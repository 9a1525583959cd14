use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("No unused name found after {attempts} attempts")]
    NamesExhausted { attempts: usize },
    #[error("Name must have a first and a last part: {0:?}")]
    MalformedName(String),
    #[error("Tickets need at least one event and one participant")]
    EmptyPool,
    #[error("Every pair of {events} events and {participants} participants is already used")]
    PairsExhausted { events: u32, participants: u32 },
    #[error("Requested row count does not fit in a u32")]
    TooManyRows,
}
