use chrono::{DateTime, Duration, Utc};

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Linear-congruential PRNG. The sole entropy source used during dataset
/// generation, so the same seed always yields the same dataset.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Next value in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform integer in [0, bound).
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_usize(items.len())]
    }

    /// Lowercase alphanumeric string of the given length.
    pub fn alphanumeric(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| ALPHANUMERIC[self.next_usize(ALPHANUMERIC.len())] as char)
            .collect()
    }

    /// Uniform timestamp in [start, end).
    pub fn datetime_between(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
        let span_ms = (end - start).num_milliseconds();
        start + Duration::milliseconds((self.next_f64() * span_ms as f64) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);

        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(54321);

        let seq_a: Vec<f64> = (0..10).map(|_| a.next_f64()).collect();
        let seq_b: Vec<f64> = (0..10).map(|_| b.next_f64()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_next_f64_in_unit_interval() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_next_usize_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_usize(10) < 10);
        }
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SeededRng::new(1);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert!(items.contains(rng.choose(&items)));
        }
    }

    #[test]
    fn test_alphanumeric_length_and_charset() {
        let mut rng = SeededRng::new(42);
        let s = rng.alphanumeric(13);
        assert_eq!(s.len(), 13);
        assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_datetime_between_bounds() {
        let mut rng = SeededRng::new(5);
        let start = Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();

        for _ in 0..200 {
            let ts = rng.datetime_between(start, end);
            assert!(ts >= start && ts < end);
        }
    }
}
