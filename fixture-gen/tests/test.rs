use std::collections::HashSet;
use std::fs;

use fixture_gen::error::FixtureError;
use fixture_gen::fixture::{self, Config};

const EVENT_PREFIX: &str = "INSERT INTO events(name) VALUES(";
const PARTICIPANT_PREFIX: &str = "INSERT INTO participants(firstname, lastname, age) VALUES(";
const TICKET_PREFIX: &str = "INSERT INTO tickets(event, participant) VALUES(";

fn run_to_string(loops: u32, seed: u64) -> String {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("statements.sql");
    let config = Config {
        loops,
        output: output.clone(),
        seed: Some(seed),
    };
    fixture::run(&config).unwrap();
    fs::read_to_string(output).unwrap()
}

fn ticket_pair(line: &str) -> (u32, u32) {
    let values = line
        .strip_prefix(TICKET_PREFIX)
        .and_then(|rest| rest.strip_suffix(");"))
        .unwrap();
    let (event, participant) = values.split_once(", ").unwrap();
    (event.parse().unwrap(), participant.parse().unwrap())
}

fn participant_age(line: &str) -> u8 {
    let values = line.strip_suffix(");").unwrap();
    values.rsplit(", ").next().unwrap().parse().unwrap()
}

#[test]
fn test_default_run() {
    let text = run_to_string(10, 1);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 10 + 50 + 80);
    assert!(text.ends_with('\n'));

    let (events, rest) = lines.split_at(10);
    let (participants, tickets) = rest.split_at(50);
    assert!(events.iter().all(|l| l.starts_with(EVENT_PREFIX)));
    assert!(participants.iter().all(|l| l.starts_with(PARTICIPANT_PREFIX)));
    assert!(tickets.iter().all(|l| l.starts_with(TICKET_PREFIX)));

    let mut pairs = HashSet::new();
    for line in tickets {
        let (event, participant) = ticket_pair(line);
        assert!((1..=10).contains(&event));
        assert!((1..=50).contains(&participant));
        assert!(pairs.insert((event, participant)), "duplicate ticket {}", line);
    }

    for line in participants {
        assert!((18..=129).contains(&participant_age(line)));
    }

    let names: HashSet<_> = events.iter().collect();
    assert_eq!(names.len(), 10);
}

#[test]
fn test_block_sizes_scale_with_loops() {
    for loops in [2, 3, 7] {
        let text = run_to_string(loops, u64::from(loops));
        let count = |prefix: &str| text.lines().filter(|l| l.starts_with(prefix)).count();
        let loops = usize::try_from(loops).unwrap();
        assert_eq!(count(EVENT_PREFIX), loops);
        assert_eq!(count(PARTICIPANT_PREFIX), 5 * loops);
        assert_eq!(count(TICKET_PREFIX), 8 * loops);
    }
}

#[test]
fn test_zero_loops_writes_empty_file() {
    assert!(run_to_string(0, 1).is_empty());
}

#[test]
fn test_same_seed_same_file() {
    assert_eq!(run_to_string(4, 99), run_to_string(4, 99));
}

#[test]
fn test_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("statements.sql");
    fs::write(&output, "stale\n".repeat(1_000)).unwrap();

    let config = Config {
        loops: 0,
        output: output.clone(),
        seed: Some(1),
    };
    fixture::run(&config).unwrap();
    assert_eq!(fs::read_to_string(output).unwrap(), "");
}

#[test]
fn test_single_loop_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("statements.sql");
    let config = Config {
        loops: 1,
        output: output.clone(),
        seed: Some(1),
    };
    let res = fixture::run(&config);
    assert!(matches!(res, Err(FixtureError::PairsExhausted { .. })));
    assert!(!output.exists());
}
