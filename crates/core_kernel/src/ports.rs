//! Ports for nondeterministic inputs
//!
//! The underwriting engine is a pure function of its inputs except for two
//! things: the date on which a client's age is computed, and the random draw
//! used by lottery-style rules. Both are modelled as ports so production code
//! reads the system clock and an entropy-seeded generator while tests pin
//! them to fixed values.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::ports::{Clock, FixedClock, RandomSource, SequenceSource};
//!
//! let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
//! let mut random = SequenceSource::constant(0.3);
//!
//! assert_eq!(clock.today().year(), 2024);
//! assert_eq!(random.next_unit(), 0.3);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Marker trait for port implementations that can be shared across threads
pub trait DomainPort: Send + Sync + 'static {}

/// Source of the current date and time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date (UTC)
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at midnight UTC of the given date
    pub fn on(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Source of uniformly distributed draws in `[0, 1)`
///
/// Each evaluation owns its source exclusively (`&mut self`), so no
/// synchronization is needed when evaluations run concurrently.
pub trait RandomSource {
    /// Returns the next draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Random source backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a reproducible generator from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Random source that replays a fixed sequence of draws
///
/// The sequence wraps around once exhausted. An empty sequence always
/// yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Creates a source replaying the given draws in order
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            position: 0,
        }
    }

    /// Creates a source that always yields the same draw
    pub fn constant(draw: f64) -> Self {
        Self::new([draw])
    }

    /// Returns how many draws have been taken so far
    pub fn draws_taken(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_on_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_sequence_source_wraps_around() {
        let mut source = SequenceSource::new([0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.draws_taken(), 3);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut source = SequenceSource::default();
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
