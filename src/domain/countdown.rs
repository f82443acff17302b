//! Countdown helpers: splitting a duration into hours, minutes and seconds and
//! walking the ticks of a countdown.

/// Label shown once a countdown has run out.
pub const FINISHED_LABEL: &str = "00";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HmsParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl HmsParts {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: total % 3600 / 60,
            seconds: total % 60,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::from_seconds(millis / 1000)
    }

    /// Zero-padded two digit labels for hours, minutes and seconds.
    pub fn labels(&self) -> (String, String, String) {
        (
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        )
    }
}

/// Remaining milliseconds at each tick of a countdown, starting from the full
/// duration and stepping down by `interval` while time remains.
#[derive(Clone, Debug)]
pub struct Countdown {
    remaining: u64,
    interval: u64,
}

impl Countdown {
    pub const DEFAULT_MILLIS_IN_FUTURE: u64 = 60_000;
    pub const DEFAULT_INTERVAL: u64 = 1_000;

    /// An interval of zero is treated as one millisecond.
    pub fn new(millis_in_future: u64, interval: u64) -> Self {
        Self {
            remaining: millis_in_future,
            interval: interval.max(1),
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MILLIS_IN_FUTURE, Self::DEFAULT_INTERVAL)
    }
}

impl Iterator for Countdown {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tick = self.remaining;
        self.remaining = self.remaining.saturating_sub(self.interval);
        Some(tick)
    }
}
