use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::FixtureError;

pub const MAX_ATTEMPTS: usize = 1000;

static FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alexis", "Alice", "Amanda", "Amber", "Andrea", "Andrew",
    "Angela", "Anna", "Anthony", "Ashley", "Barbara", "Benjamin", "Brandon", "Brian",
    "Brittany", "Carlos", "Carol", "Catherine", "Charles", "Christina", "Christopher",
    "Cynthia", "Daniel", "David", "Deborah", "Dennis", "Diana", "Donald", "Dylan", "Edward",
    "Elizabeth", "Emily", "Emma", "Eric", "Ethan", "Evelyn", "Frank", "Gabriel", "Gary",
    "George", "Grace", "Gregory", "Hannah", "Heather", "Henry", "Isabella", "Jacob", "James",
    "Jason", "Jeffrey", "Jennifer", "Jessica", "John", "Jonathan", "Jose", "Joseph", "Joshua",
    "Julia", "Justin", "Karen", "Katherine", "Kelly", "Kenneth", "Kevin", "Kimberly", "Laura",
    "Lauren", "Linda", "Lisa", "Logan", "Madison", "Margaret", "Maria", "Mark", "Mary",
    "Matthew", "Megan", "Melissa", "Michael", "Michelle", "Nancy", "Nathan", "Nicholas",
    "Nicole", "Olivia", "Patricia", "Patrick", "Paul", "Rachel", "Rebecca", "Richard",
    "Robert", "Ryan", "Samantha", "Samuel", "Sandra", "Sarah", "Scott", "Sean", "Sophia",
    "Stephanie", "Steven", "Susan", "Thomas", "Timothy", "Tyler", "Victoria", "William",
];

static LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Bennett", "Brooks", "Brown",
    "Campbell", "Carter", "Castillo", "Chavez", "Clark", "Collins", "Cook", "Cooper", "Cox",
    "Cruz", "Davis", "Diaz", "Edwards", "Evans", "Fisher", "Flores", "Foster", "Garcia",
    "Gomez", "Gonzalez", "Gray", "Green", "Gutierrez", "Hall", "Harris", "Hernandez", "Hill",
    "Howard", "Hughes", "Jackson", "James", "Jenkins", "Johnson", "Jones", "Kelly", "Kim",
    "King", "Lee", "Lewis", "Long", "Lopez", "Martin", "Martinez", "Miller", "Mitchell",
    "Moore", "Morales", "Morgan", "Morris", "Murphy", "Myers", "Nelson", "Nguyen", "O'Brien",
    "O'Connor", "Ortiz", "Parker", "Patel", "Perez", "Peterson", "Phillips", "Powell", "Price",
    "Ramirez", "Reed", "Reyes", "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez",
    "Rogers", "Ross", "Russell", "Sanchez", "Sanders", "Scott", "Smith", "Stewart",
    "Sullivan", "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "Ward",
    "Watson", "White", "Williams", "Wilson", "Wood", "Wright", "Young",
];

static PREFIXES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr."];

static SUFFIXES: &[&str] = &["Jr.", "II", "III", "IV", "MD", "DDS", "PhD", "DVM"];

/// Supplies fake "First Last" names, each distinct from every name the same
/// source has handed out before.
pub trait NameSource {
    /// # Errors
    /// Errors when no unused name could be produced
    fn unique_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, FixtureError>;
}

/// Draws names from built-in lists, rejecting any name already handed out.
///
/// About one name in twenty carries an honorific prefix and about one in twenty a
/// suffix, so a few names have more than two tokens.
#[derive(Debug)]
pub struct UniqueNames {
    first_names: &'static [&'static str],
    last_names: &'static [&'static str],
    prefixes: &'static [&'static str],
    suffixes: &'static [&'static str],
    max_attempts: usize,
    used: HashSet<String>,
}

impl Default for UniqueNames {
    fn default() -> Self {
        UniqueNames {
            first_names: FIRST_NAMES,
            last_names: LAST_NAMES,
            prefixes: PREFIXES,
            suffixes: SUFFIXES,
            max_attempts: MAX_ATTEMPTS,
            used: HashSet::new(),
        }
    }
}

impl UniqueNames {
    /// Plain two-token names built only from the given lists.
    #[must_use]
    pub fn from_lists(
        first_names: &'static [&'static str],
        last_names: &'static [&'static str],
    ) -> Self {
        UniqueNames {
            first_names,
            last_names,
            prefixes: &[],
            suffixes: &[],
            ..UniqueNames::default()
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of names handed out so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let first = self.first_names.choose(rng)?;
        let last = self.last_names.choose(rng)?;
        let mut name = String::new();
        if !self.prefixes.is_empty() && rng.gen_ratio(1, 20) {
            name.push_str(self.prefixes.choose(rng)?);
            name.push(' ');
        }
        name.push_str(first);
        name.push(' ');
        name.push_str(last);
        if !self.suffixes.is_empty() && rng.gen_ratio(1, 20) {
            name.push(' ');
            name.push_str(self.suffixes.choose(rng)?);
        }
        Some(name)
    }
}

impl NameSource for UniqueNames {
    fn unique_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, FixtureError> {
        for attempt in 0..self.max_attempts {
            let name = self.random_name(rng).ok_or(FixtureError::NamesExhausted {
                attempts: attempt,
            })?;
            if self.used.insert(name.clone()) {
                return Ok(name);
            }
            debug!("Name {:?} already used, retrying", name);
        }
        Err(FixtureError::NamesExhausted {
            attempts: self.max_attempts,
        })
    }
}
