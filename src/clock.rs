use chrono::Local;

/// Source of timestamps for recipe ids and collision-breaking suffixes.
///
/// Injected wherever time matters so tests can pin it down.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Human-readable local timestamp, used when renaming a colliding title.
    fn timestamp_label(&self) -> String;
}

/// Wall-clock implementation used everywhere outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn timestamp_label(&self) -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Clock pinned to fixed values, for deterministic tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub millis: i64,
    pub label: String,
}

impl FixedClock {
    pub fn new(millis: i64, label: impl Into<String>) -> Self {
        FixedClock {
            millis,
            label: label.into(),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn timestamp_label(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
    }

    #[test]
    fn fixed_clock_returns_pinned_values() {
        let clock = FixedClock::new(1_700_000_000_000, "2023-11-14 22:13:20");
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
        assert_eq!(clock.timestamp_label(), "2023-11-14 22:13:20");
    }
}
