//! Repeating progress timer for image and text stories.
//!
//! The ticker is deadline based: the caller passes the current `Instant`
//! and the ticker reports how many intervals have elapsed. A ticker only
//! exists while its story is on screen; dropping it cancels it.

use std::time::{Duration, Instant};

use crate::config::PlaybackConfig;

/// Display duration and tick interval for timed stories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(5000),
            interval: Duration::from_millis(50),
        }
    }
}

impl Timing {
    /// Create timing; a zero interval is raised to 1 ms.
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            duration,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Progress added per tick: `100 / (duration / interval)`.
    pub fn step(&self) -> f64 {
        let ticks = self.duration.as_nanos() as f64 / self.interval.as_nanos() as f64;
        if ticks <= 0.0 {
            100.0
        } else {
            100.0 / ticks
        }
    }

    /// Number of ticks a story lasts: `floor(duration / interval)`, at least one.
    pub fn ticks_per_story(&self) -> u32 {
        let ticks = self.duration.as_nanos() / self.interval.as_nanos();
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

impl From<&PlaybackConfig> for Timing {
    fn from(config: &PlaybackConfig) -> Self {
        Self::new(
            Duration::from_millis(config.image_duration_ms),
            Duration::from_millis(config.tick_interval_ms),
        )
    }
}

/// Handle to the running timer of one story.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    step: f64,
    next_due: Instant,
    /// Played ticks before the story is complete
    ticks_left: u32,
}

impl Ticker {
    /// Start ticking; the first tick is due one interval after `now`.
    pub fn start(timing: &Timing, now: Instant) -> Self {
        Self {
            interval: timing.interval,
            step: timing.step(),
            next_due: now + timing.interval,
            ticks_left: timing.ticks_per_story(),
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Consume one tick if it is due at `now`.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due += self.interval;
            true
        } else {
            false
        }
    }

    /// Count one played tick. Returns true on the story's last tick.
    ///
    /// Ticks consumed while held are not counted.
    pub fn count_tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }

    /// Restart the schedule from `now`, discarding any backlog.
    pub fn rearm(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_one_percent() {
        let timing = Timing::default();
        assert_eq!(timing.ticks_per_story(), 100);
        assert!((timing.step() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn step_scales_with_duration() {
        let timing = Timing::new(Duration::from_millis(2000), Duration::from_millis(100));
        assert_eq!(timing.ticks_per_story(), 20);
        assert!((timing.step() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_completes_in_one_tick() {
        let timing = Timing::new(Duration::ZERO, Duration::from_millis(50));
        assert_eq!(timing.step(), 100.0);
        assert_eq!(timing.ticks_per_story(), 1);
    }

    #[test]
    fn ticks_per_story_rounds_down() {
        let timing = Timing::new(Duration::from_millis(1000), Duration::from_millis(30));
        assert_eq!(timing.ticks_per_story(), 33);
    }

    #[test]
    fn count_tick_reports_last_tick() {
        let timing = Timing::new(Duration::from_millis(100), Duration::from_millis(30));
        let mut ticker = Ticker::start(&timing, Instant::now());
        assert!(!ticker.count_tick());
        assert!(!ticker.count_tick());
        assert!(ticker.count_tick());
    }

    #[test]
    fn zero_interval_is_raised() {
        let timing = Timing::new(Duration::from_secs(1), Duration::ZERO);
        assert_eq!(timing.interval, Duration::from_millis(1));
    }

    #[test]
    fn from_config_uses_playback_settings() {
        let config = PlaybackConfig {
            image_duration_ms: 3000,
            tick_interval_ms: 30,
            ..PlaybackConfig::default()
        };
        let timing = Timing::from(&config);
        assert_eq!(timing.duration, Duration::from_millis(3000));
        assert_eq!(timing.interval, Duration::from_millis(30));
    }

    #[test]
    fn fire_due_consumes_one_interval_at_a_time() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(&Timing::default(), t0);

        assert!(!ticker.fire_due(t0 + Duration::from_millis(49)));
        let later = t0 + Duration::from_millis(120);
        assert!(ticker.fire_due(later));
        assert!(ticker.fire_due(later));
        assert!(!ticker.fire_due(later));
        assert_eq!(ticker.next_due(), t0 + Duration::from_millis(150));
    }

    #[test]
    fn rearm_discards_backlog() {
        let t0 = Instant::now();
        let mut ticker = Ticker::start(&Timing::default(), t0);
        let resume = t0 + Duration::from_secs(10);

        ticker.rearm(resume);

        assert!(!ticker.fire_due(resume));
        assert!(ticker.fire_due(resume + Duration::from_millis(50)));
    }
}
