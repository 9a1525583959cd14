use std::fmt;
use std::ops::RangeInclusive;

use log::warn;

use crate::error::FixtureError;

pub const AGE_RANGE: RangeInclusive<u8> = 18..=129;

/// A row of the `events` table. `id` is never written, the database assigns it,
/// but it matches the position of the row in the generated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub age: u8,
}

/// A row of the `tickets` table, referencing an event and a participant by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketRow {
    pub event: u32,
    pub participant: u32,
}

/// One insert statement of any of the three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Event(&'a EventRow),
    Participant(&'a ParticipantRow),
    Ticket(&'a TicketRow),
}

/// Splits `"First Last"` into its first two tokens.
///
/// Tokens after the second are dropped, so `"Dr. Jane Doe"` becomes
/// `("Dr.", "Jane")`.
///
/// # Errors
/// Errors when `full_name` has fewer than two tokens
pub fn split_full_name(full_name: &str) -> Result<(&str, &str), FixtureError> {
    let mut tokens = full_name.split(' ');
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
            let dropped = tokens.count();
            if dropped > 0 {
                warn!(
                    "Dropping {} trailing token(s) from name {:?}",
                    dropped, full_name
                );
            }
            Ok((first, last))
        }
        _ => Err(FixtureError::MalformedName(full_name.to_owned())),
    }
}

struct SqlStr<'a>(&'a str);

impl fmt::Display for SqlStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0.replace('\'', "''"))
    }
}

impl fmt::Display for EventRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO events(name) VALUES({});", SqlStr(&self.name))
    }
}

impl fmt::Display for ParticipantRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO participants(firstname, lastname, age) VALUES({}, {}, {});",
            SqlStr(&self.firstname),
            SqlStr(&self.lastname),
            self.age
        )
    }
}

impl fmt::Display for TicketRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO tickets(event, participant) VALUES({}, {});",
            self.event, self.participant
        )
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Event(row) => fmt::Display::fmt(row, f),
            Statement::Participant(row) => fmt::Display::fmt(row, f),
            Statement::Ticket(row) => fmt::Display::fmt(row, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_name() {
        assert_eq!(split_full_name("Ada Lovelace").unwrap(), ("Ada", "Lovelace"));
        assert_eq!(split_full_name("Dr. Ada Lovelace").unwrap(), ("Dr.", "Ada"));
        assert_eq!(
            split_full_name("Ada Lovelace Jr. MD").unwrap(),
            ("Ada", "Lovelace")
        );

        assert!(split_full_name("Ada").is_err());
        assert!(split_full_name("").is_err());
        assert!(split_full_name(" Lovelace").is_err());
    }

    #[test]
    fn test_event_statement() {
        let row = EventRow {
            id: 1,
            name: "Grace Hopper".to_owned(),
        };
        assert_eq!(
            row.to_string(),
            "INSERT INTO events(name) VALUES('Grace Hopper');"
        );
    }

    #[test]
    fn test_participant_statement() {
        let row = ParticipantRow {
            id: 3,
            firstname: "Grace".to_owned(),
            lastname: "Hopper".to_owned(),
            age: 85,
        };
        assert_eq!(
            Statement::Participant(&row).to_string(),
            "INSERT INTO participants(firstname, lastname, age) VALUES('Grace', 'Hopper', 85);"
        );
    }

    #[test]
    fn test_ticket_statement() {
        let row = TicketRow {
            event: 4,
            participant: 17,
        };
        assert_eq!(
            Statement::Ticket(&row).to_string(),
            "INSERT INTO tickets(event, participant) VALUES(4, 17);"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let row = ParticipantRow {
            id: 1,
            firstname: "Sean".to_owned(),
            lastname: "O'Brien".to_owned(),
            age: 18,
        };
        assert_eq!(
            row.to_string(),
            "INSERT INTO participants(firstname, lastname, age) VALUES('Sean', 'O''Brien', 18);"
        );
    }
}
