use chrono::{DateTime, Duration, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// If this is a fixed clock, advance it by the given duration.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Returns true if this clock is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// The absolute time window of one quiz session.
///
/// Opened once at session start; every control-flow decision afterwards is a
/// comparison against `expires_at` with a caller-supplied `now`, so the same
/// window works under a real or a fixed clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    started_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Deadline {
    /// Opens a window of `budget` starting at `now`.
    #[must_use]
    pub fn starting(now: DateTime<Utc>, budget: Duration) -> Self {
        Self {
            started_at: now,
            expires_at: now + budget,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Time left before expiry, clamped to zero.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        let left = self.expires_at - now;
        if left < Duration::zero() {
            Duration::zero()
        } else {
            left
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whole seconds elapsed since the window opened, truncated.
    ///
    /// A `now` before `started_at` reads as zero rather than underflowing.
    #[must_use]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_down_and_clamps() {
        let start = fixed_now();
        let deadline = Deadline::starting(start, Duration::seconds(60));

        assert_eq!(deadline.remaining(start), Duration::seconds(60));
        assert_eq!(
            deadline.remaining(start + Duration::seconds(45)),
            Duration::seconds(15)
        );
        assert_eq!(
            deadline.remaining(start + Duration::seconds(90)),
            Duration::zero()
        );
    }

    #[test]
    fn expiry_is_inclusive_at_the_boundary() {
        let start = fixed_now();
        let deadline = Deadline::starting(start, Duration::seconds(60));

        assert!(!deadline.is_expired(start + Duration::seconds(59)));
        assert!(deadline.is_expired(start + Duration::seconds(60)));
        assert!(deadline.is_expired(start + Duration::seconds(61)));
    }

    #[test]
    fn elapsed_secs_truncates() {
        let start = fixed_now();
        let deadline = Deadline::starting(start, Duration::seconds(60));

        let now = start + Duration::milliseconds(2_900);
        assert_eq!(deadline.elapsed_secs(now), 2);
        assert_eq!(deadline.elapsed_secs(start), 0);
    }

    #[test]
    fn fixed_clock_advances() {
        let mut clock = fixed_clock();
        let before = clock.now();
        clock.advance(Duration::seconds(10));
        assert_eq!(clock.now() - before, Duration::seconds(10));
    }
}
