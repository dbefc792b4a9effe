//! Synthetic users for a freshly started directory.
//!
//! The data is plausible-looking but random: names, contact details and
//! booleans are drawn independently, identifiers are random UUIDs, and every
//! record is stamped with the same startup time.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::Rng;
use roster_core::{Preferences, User, UserFields};
use uuid::Uuid;

use crate::MemoryStore;

/// How many users a seeded store starts with.
pub const SEED_COUNT: RangeInclusive<usize> = 5..=20;

const FIRST_NAMES: &[&str] = &[
  "Ada", "Alan", "Barbara", "Claude", "Dennis", "Donald", "Edsger", "Frances",
  "Grace", "John", "Katherine", "Ken", "Leslie", "Margaret", "Niklaus",
  "Radia", "Shafi", "Tony", "Whitfield", "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
  "Allen", "Backus", "Dijkstra", "Hamilton", "Hoare", "Hopper", "Johnson",
  "Knuth", "Lamport", "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie",
  "Shannon", "Thompson", "Turing", "Wirth",
];

const MAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const STREETS: &[&str] = &[
  "Analytical", "Babbage", "Compiler", "Difference", "Lambda", "Register",
  "Relay", "Vacuum",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Road", "Avenue", "Lane", "Way"];

const CITIES: &[&str] = &[
  "Boston", "Cambridge", "Edinburgh", "London", "Manchester", "Oslo",
  "Palo Alto", "Zurich",
];

/// Generate `count` independent synthetic users, all created at `now`.
pub fn synthetic_users<R>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<User>
where
  R: Rng + ?Sized,
{
  (0..count)
    .map(|_| User::new(Uuid::new_v4().to_string(), synthetic_fields(rng), now))
    .collect()
}

/// A store holding a random number (within [`SEED_COUNT`]) of synthetic
/// users.
pub fn seeded_store<R>(now: DateTime<Utc>, rng: &mut R) -> MemoryStore
where
  R: Rng + ?Sized,
{
  let count = rng.gen_range(SEED_COUNT);
  let users = synthetic_users(count, now, rng);
  tracing::info!(count, "seeded user store with synthetic users");
  MemoryStore::with_records(users)
}

fn synthetic_fields<R>(rng: &mut R) -> UserFields
where
  R: Rng + ?Sized,
{
  let first_name = pick(rng, FIRST_NAMES);
  let last_name = pick(rng, LAST_NAMES);
  let email = format!(
    "{}.{}{}@{}",
    first_name.to_lowercase(),
    last_name.to_lowercase(),
    rng.gen_range(1..=99),
    pick(rng, MAIL_DOMAINS),
  );
  let phone = format!(
    "+1-555-{:03}-{:04}",
    rng.gen_range(100..=999),
    rng.gen_range(0..=9999),
  );
  let address = format!(
    "{} {} {}, {}",
    rng.gen_range(1..=999),
    pick(rng, STREETS),
    pick(rng, STREET_SUFFIXES),
    pick(rng, CITIES),
  );

  UserFields {
    first_name: first_name.to_owned(),
    last_name: last_name.to_owned(),
    email,
    phone,
    address,
    active: rng.gen_bool(0.5),
    preferences: Preferences {
      email: rng.gen_bool(0.5),
      sms:   rng.gen_bool(0.5),
    },
  }
}

fn pick<R>(rng: &mut R, items: &[&'static str]) -> &'static str
where
  R: Rng + ?Sized,
{
  items[rng.gen_range(0..items.len())]
}
