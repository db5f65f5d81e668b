//! Time primitives for timepred
//!
//! A [`Timestamp`] is a point on the time axis, stored as signed nanoseconds
//! since the Unix epoch. It is totally ordered, so any two timestamps are
//! comparable and exactly one of `is_after`, `is_before`, `coincides_with`
//! holds between them.
//!
//! There is no "unset" timestamp. `Timestamp::default()` is the epoch itself
//! and compares like any other instant.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{TimepredError, TimepredResult};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Nanoseconds since the Unix epoch
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);
    pub const MAX: Timestamp = Timestamp(i64::MAX);
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    #[inline]
    pub fn from_nanos(nanos: i64) -> Self {
        Timestamp(nanos)
    }

    #[inline]
    pub fn from_micros(micros: i64) -> Self {
        Timestamp(micros.saturating_mul(1_000))
    }

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis.saturating_mul(1_000_000))
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(NANOS_PER_SEC as i64))
    }

    /// Float seconds, saturating at the representable range
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        Timestamp((secs * NANOS_PER_SEC as f64) as i64)
    }

    /// Convert a wall-clock time, failing if it does not fit in `i64` nanoseconds
    pub fn try_from_system_time(time: SystemTime) -> TimepredResult<Self> {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_nanos())
                .map(Timestamp)
                .map_err(|_| TimepredError::TimestampOutOfRange),
            // i64::MIN has no positive counterpart, so negate in i128.
            Err(err) => i64::try_from(-(err.duration().as_nanos() as i128))
                .map(Timestamp)
                .map_err(|_| TimepredError::TimestampOutOfRange),
        }
    }

    /// Convert a wall-clock time, saturating at `MIN`/`MAX`
    pub fn from_system_time(time: SystemTime) -> Self {
        match Self::try_from_system_time(time) {
            Ok(t) => t,
            Err(_) if time >= UNIX_EPOCH => Timestamp::MAX,
            Err(_) => Timestamp::MIN,
        }
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    #[inline]
    pub fn as_nanos(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_micros(self) -> i64 {
        self.0 / 1_000
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0 / 1_000_000
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC as f64
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_add(duration_nanos(duration)))
    }

    #[inline]
    pub fn saturating_sub(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_sub(duration_nanos(duration)))
    }

    /// Signed distance from `earlier` to `self`, in nanoseconds
    #[inline]
    pub fn signed_nanos_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Strictly later than `other`
    #[inline]
    pub fn is_after(self, other: Timestamp) -> bool {
        self > other
    }

    /// Strictly earlier than `other`
    #[inline]
    pub fn is_before(self, other: Timestamp) -> bool {
        self < other
    }

    /// Same instant as `other`
    #[inline]
    pub fn coincides_with(self, other: Timestamp) -> bool {
        self == other
    }
}

#[inline]
fn duration_nanos(duration: Duration) -> i64 {
    i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX)
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// Elapsed time from `rhs` to `self`; zero if `rhs` is later
    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff = i128::from(self.0) - i128::from(rhs.0);
        if diff > 0 {
            let diff = diff as u128;
            Duration::new(
                (diff / NANOS_PER_SEC as u128) as u64,
                (diff % NANOS_PER_SEC as u128) as u32,
            )
        } else {
            Duration::ZERO
        }
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Timestamp::from_system_time(time)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t({})", self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:09}s",
            sign,
            abs / NANOS_PER_SEC,
            abs % NANOS_PER_SEC
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_constructors_agree() {
        assert_eq!(Timestamp::from_secs(2), Timestamp::from_millis(2_000));
        assert_eq!(Timestamp::from_millis(3), Timestamp::from_micros(3_000));
        assert_eq!(Timestamp::from_micros(4), Timestamp::from_nanos(4_000));
        assert_eq!(Timestamp::from_secs_f64(1.5), Timestamp::from_millis(1_500));
    }

    #[test]
    fn test_point_comparisons() {
        let t1 = Timestamp::from_secs(1);
        let t2 = Timestamp::from_secs(2);

        assert!(t2.is_after(t1));
        assert!(t1.is_before(t2));
        assert!(t1.coincides_with(t1));
        assert!(!t1.is_after(t1));
        assert!(!t1.is_before(t1));
    }

    #[test]
    fn test_zero_is_an_ordinary_instant() {
        let zero = Timestamp::default();
        assert_eq!(zero, Timestamp::ZERO);
        assert!(zero.is_before(Timestamp::from_nanos(1)));
        assert!(zero.is_after(Timestamp::from_nanos(-1)));
    }

    #[test]
    fn test_duration_arithmetic() {
        let t = Timestamp::from_secs(10);
        let later = t + Duration::from_millis(250);

        assert_eq!(later.as_millis(), 10_250);
        assert_eq!(later - t, Duration::from_millis(250));
        assert_eq!(t - later, Duration::ZERO);
        assert_eq!(later - Duration::from_millis(250), t);
        assert_eq!(t.signed_nanos_since(later), -250_000_000);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(Timestamp::MAX + Duration::from_secs(1), Timestamp::MAX);
        assert_eq!(Timestamp::MIN - Duration::from_secs(1), Timestamp::MIN);

        let span = Timestamp::MAX - Timestamp::MIN;
        assert_eq!(span.as_nanos(), u128::from(u64::MAX));
    }

    #[test]
    fn test_system_time_conversion() {
        let wall = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(Timestamp::from(wall), Timestamp::from_secs(1_700_000_000));

        let before_epoch = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(
            Timestamp::try_from_system_time(before_epoch),
            Ok(Timestamp::from_secs(-5))
        );
    }

    #[test]
    fn test_system_time_lower_bound() {
        let earliest = UNIX_EPOCH - Duration::from_nanos(1 << 63);
        assert_eq!(Timestamp::try_from_system_time(earliest), Ok(Timestamp::MIN));
        assert_eq!(Timestamp::from_system_time(earliest), Timestamp::MIN);

        let too_early = earliest - Duration::from_nanos(1);
        assert_eq!(
            Timestamp::try_from_system_time(too_early),
            Err(TimepredError::TimestampOutOfRange)
        );
        assert_eq!(Timestamp::from_system_time(too_early), Timestamp::MIN);
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(Timestamp::now().is_after(Timestamp::ZERO));
    }

    #[test]
    fn test_display() {
        assert_eq!(Timestamp::from_millis(1_500).to_string(), "1.500000000s");
        assert_eq!(Timestamp::from_millis(-1_500).to_string(), "-1.500000000s");
        assert_eq!(format!("{:?}", Timestamp::ZERO), "t(0.000000000s)");
    }
}
