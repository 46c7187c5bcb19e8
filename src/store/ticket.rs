//! Ticket id generation.
//!
//! Tickets are human-facing: `TRL-<year>-<4-digit suffix>`. The suffix is
//! picked at random and linearly probed against the existing set, so two
//! bookings can never share a ticket id within a process lifetime.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use rand::Rng;

use crate::errors::AppError;

const SUFFIX_SPACE: u32 = 10_000;

/// Generate a ticket id that does not collide with any id in `existing`.
/// `existing` must contain lowercased ticket ids (lookups are
/// case-insensitive, so uniqueness is too).
pub fn generate(existing: &HashSet<String>) -> Result<String, AppError> {
    let year = Utc::now().year();
    let start = rand::thread_rng().gen_range(0..SUFFIX_SPACE);

    for offset in 0..SUFFIX_SPACE {
        let suffix = (start + offset) % SUFFIX_SPACE;
        let candidate = format!("TRL-{}-{:04}", year, suffix);
        if !existing.contains(&candidate.to_lowercase()) {
            return Ok(candidate);
        }
    }

    Err(AppError::Internal(format!(
        "Ticket number space exhausted for {}",
        year
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_format() {
        let ticket = generate(&HashSet::new()).unwrap();
        let parts: Vec<&str> = ticket.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "TRL");
        assert_eq!(parts[1], Utc::now().year().to_string());
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_no_collision_with_existing() {
        let mut existing = HashSet::new();
        for _ in 0..1_000 {
            let ticket = generate(&existing).unwrap();
            assert!(
                existing.insert(ticket.to_lowercase()),
                "generated a duplicate ticket id"
            );
        }
        assert_eq!(existing.len(), 1_000);
    }

    #[test]
    fn test_exhausted_space_is_an_error() {
        let year = Utc::now().year();
        let existing: HashSet<String> = (0..SUFFIX_SPACE)
            .map(|n| format!("trl-{}-{:04}", year, n))
            .collect();
        assert!(generate(&existing).is_err());
    }

    #[test]
    fn test_probing_finds_the_last_free_slot() {
        let year = Utc::now().year();
        let existing: HashSet<String> = (0..SUFFIX_SPACE)
            .filter(|n| *n != 7_777)
            .map(|n| format!("trl-{}-{:04}", year, n))
            .collect();
        let ticket = generate(&existing).unwrap();
        assert_eq!(ticket, format!("TRL-{}-7777", year));
    }
}
