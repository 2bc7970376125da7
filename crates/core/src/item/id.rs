//! Item id generation.
//!
//! Ids have the shape `<millis>-<suffix>`: a millisecond timestamp followed by nine
//! random base-36 characters. The timestamp part is strictly increasing for a given
//! generator, so ids handed out by one generator never collide even when requested
//! within the same millisecond.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;

/// Alphabet for the random suffix (base 36, lowercase).
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters appended to the timestamp.
pub const SUFFIX_LEN: usize = 9;

/// Generates unique item ids.
#[derive(Debug, Default)]
pub struct ItemIdGenerator {
    last_millis: AtomicI64,
}

impl ItemIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new id based on the current wall clock.
    pub fn next_id(&self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Returns a new id as if the clock read `now_millis`.
    pub fn next_id_at(&self, now_millis: i64) -> String {
        let millis = self.reserve_millis(now_millis);
        format!("{millis}-{}", random_suffix())
    }

    /// Reserves a timestamp strictly greater than any previously reserved one.
    fn reserve_millis(&self, now_millis: i64) -> i64 {
        let advance = |last: i64| if now_millis > last { now_millis } else { last + 1 };

        let previous = match self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(advance(last))
            }) {
            Ok(previous) | Err(previous) => previous,
        };

        advance(previous)
    }
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn split(id: &str) -> (i64, &str) {
        let (millis, suffix) = id.split_once('-').unwrap();
        (millis.parse().unwrap(), suffix)
    }

    #[test]
    fn test_id_has_timestamp_and_suffix() {
        let generator = ItemIdGenerator::new();

        let id = generator.next_id_at(1_700_000_000_000);
        let (millis, suffix) = split(&id);

        assert_eq!(millis, 1_700_000_000_000);
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_same_millisecond_yields_distinct_timestamps() {
        let generator = ItemIdGenerator::new();

        let first = generator.next_id_at(1_700_000_000_000);
        let second = generator.next_id_at(1_700_000_000_000);

        assert_eq!(split(&first).0, 1_700_000_000_000);
        assert_eq!(split(&second).0, 1_700_000_000_001);
        assert_ne!(first, second);
    }

    #[test]
    fn test_clock_going_backwards_keeps_increasing() {
        let generator = ItemIdGenerator::new();

        let first = generator.next_id_at(1_700_000_000_500);
        let second = generator.next_id_at(1_700_000_000_000);

        assert!(split(&second).0 > split(&first).0);
    }

    #[test]
    fn test_wall_clock_ids_are_unique() {
        let generator = ItemIdGenerator::new();

        let ids: HashSet<String> = (0..1_000).map(|_| generator.next_id()).collect();

        assert_eq!(ids.len(), 1_000);
    }
}
