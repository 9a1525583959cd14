use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::error::FixtureError;
use crate::fixture::Fixture;
use crate::names::{NameSource, UniqueNames};
use crate::statement::{split_full_name, EventRow, ParticipantRow, TicketRow, AGE_RANGE};

pub const PARTICIPANTS_PER_LOOP: u32 = 5;
pub const TICKETS_PER_LOOP: u32 = 8;

/// Produces rows for the three tables, handing out sequential ids and keeping
/// every ticket's `(event, participant)` pair unique.
#[derive(Debug)]
pub struct FixtureGenerator<R, N = UniqueNames> {
    rng: R,
    names: N,
    /// Last event id handed out, also the number of events
    events: u32,
    /// Last participant id handed out, also the number of participants
    participants: u32,
    used_pairs: HashSet<TicketRow>,
}

impl<R: Rng> FixtureGenerator<R, UniqueNames> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        FixtureGenerator::with_names(rng, UniqueNames::default())
    }
}

impl<R: Rng, N: NameSource> FixtureGenerator<R, N> {
    #[must_use]
    pub fn with_names(rng: R, names: N) -> Self {
        FixtureGenerator {
            rng,
            names,
            events: 0,
            participants: 0,
            used_pairs: HashSet::new(),
        }
    }

    #[must_use]
    pub fn event_count(&self) -> u32 {
        self.events
    }

    #[must_use]
    pub fn participant_count(&self) -> u32 {
        self.participants
    }

    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.used_pairs.len()
    }

    /// # Errors
    /// Errors when the name source runs out of names or the id space is exhausted
    pub fn gen_event(&mut self) -> Result<EventRow, FixtureError> {
        let name = self.names.unique_name(&mut self.rng)?;
        let id = self.events.checked_add(1).ok_or(FixtureError::TooManyRows)?;
        self.events = id;
        Ok(EventRow { id, name })
    }

    /// # Errors
    /// Errors when the name source runs out of names, hands out a name without a
    /// last part, or the id space is exhausted
    pub fn gen_participant(&mut self) -> Result<ParticipantRow, FixtureError> {
        let full_name = self.names.unique_name(&mut self.rng)?;
        let (firstname, lastname) = split_full_name(&full_name)?;
        let id = self
            .participants
            .checked_add(1)
            .ok_or(FixtureError::TooManyRows)?;
        let row = ParticipantRow {
            id,
            firstname: firstname.to_owned(),
            lastname: lastname.to_owned(),
            age: self.rng.gen_range(AGE_RANGE),
        };
        self.participants = id;
        Ok(row)
    }

    /// Draws an event and a participant uniformly from the ids generated so far,
    /// redrawing until the pair has not been used by an earlier ticket.
    ///
    /// # Errors
    /// 1. No event or no participant exists yet
    /// 2. Every `(event, participant)` pair is already used
    pub fn gen_ticket(&mut self) -> Result<TicketRow, FixtureError> {
        if self.events == 0 || self.participants == 0 {
            return Err(FixtureError::EmptyPool);
        }
        let capacity = u64::from(self.events) * u64::from(self.participants);
        if u64::try_from(self.used_pairs.len()).unwrap_or(u64::MAX) >= capacity {
            return Err(FixtureError::PairsExhausted {
                events: self.events,
                participants: self.participants,
            });
        }

        loop {
            let ticket = TicketRow {
                event: self.rng.gen_range(1..=self.events),
                participant: self.rng.gen_range(1..=self.participants),
            };
            if self.used_pairs.insert(ticket) {
                return Ok(ticket);
            }
            debug!(
                "Pair ({}, {}) already used, redrawing",
                ticket.event, ticket.participant
            );
        }
    }

    /// Generates `loops` events, then `5 * loops` participants, then `8 * loops`
    /// tickets.
    ///
    /// # Errors
    /// Errors when the tickets cannot all get a distinct pair (checked before any
    /// row is generated), when the counts overflow, or when any row fails to
    /// generate
    pub fn generate(&mut self, loops: u32) -> Result<Fixture, FixtureError> {
        let participants = loops
            .checked_mul(PARTICIPANTS_PER_LOOP)
            .ok_or(FixtureError::TooManyRows)?;
        let tickets = loops
            .checked_mul(TICKETS_PER_LOOP)
            .ok_or(FixtureError::TooManyRows)?;
        let total_events = self
            .events
            .checked_add(loops)
            .ok_or(FixtureError::TooManyRows)?;
        let total_participants = self
            .participants
            .checked_add(participants)
            .ok_or(FixtureError::TooManyRows)?;

        let free_pairs = (u64::from(total_events) * u64::from(total_participants))
            .saturating_sub(u64::try_from(self.used_pairs.len()).unwrap_or(u64::MAX));
        if u64::from(tickets) > free_pairs {
            return Err(FixtureError::PairsExhausted {
                events: total_events,
                participants: total_participants,
            });
        }

        info!(
            "Generating {} events, {} participants and {} tickets",
            loops, participants, tickets
        );
        let events = (0..loops)
            .map(|_| self.gen_event())
            .collect::<Result<Vec<_>, _>>()?;
        let participants = (0..participants)
            .map(|_| self.gen_participant())
            .collect::<Result<Vec<_>, _>>()?;
        let tickets = (0..tickets)
            .map(|_| self.gen_ticket())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Fixture::new(events, participants, tickets))
    }
}
