//! Source record enrichment
//!
//! Turns a raw source record into an `Employee` by synthesizing the fields the
//! upstream source does not provide.

use crate::domain::entities::{Employee, SourceRecord};
use crate::domain::ports::{choose, RandomSource};
use crate::domain::value_objects::{Department, Rating};

pub const PLACEHOLDER_BIO: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Department and performance are uniform draws from `random`; the address
/// joins street and city.
pub fn enrich(record: SourceRecord, random: &mut dyn RandomSource) -> Employee {
    let department = *choose(random, &Department::ALL);
    let performance = *choose(random, &Rating::ALL);

    Employee {
        id: record.id,
        address: format!("{}, {}", record.street, record.city),
        first_name: record.first_name,
        last_name: record.last_name,
        email: record.email,
        age: record.age,
        department,
        performance,
        phone: record.phone,
        bio: PLACEHOLDER_BIO.to_string(),
    }
}
