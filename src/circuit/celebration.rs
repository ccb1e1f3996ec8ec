use std::time::{Duration, Instant};

pub const CELEBRATION_GEMS: usize = 3;
const GEM_INTERVAL: Duration = Duration::from_millis(200);

/// Gems lighting up one after another once the circuit is complete.
/// Purely visual; the event loop polls it while drawing.
#[derive(Debug, Clone, Copy)]
pub struct Celebration {
    started: Instant,
    delay: Duration,
}

impl Celebration {
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            started: now,
            delay,
        }
    }

    pub fn lit_gems(&self, now: Instant) -> usize {
        let Some(elapsed) = now.checked_duration_since(self.started) else {
            return 0;
        };
        let Some(since_first) = elapsed.checked_sub(self.delay) else {
            return 0;
        };
        let steps = (since_first.as_millis() / GEM_INTERVAL.as_millis()) as usize;
        (steps + 1).min(CELEBRATION_GEMS)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.lit_gems(now) == CELEBRATION_GEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gems_light_up_in_sequence() {
        let start = Instant::now();
        let c = Celebration::start(start, Duration::from_millis(500));
        let at = |ms| start + Duration::from_millis(ms);

        assert_eq!(c.lit_gems(at(0)), 0);
        assert_eq!(c.lit_gems(at(499)), 0);
        assert_eq!(c.lit_gems(at(500)), 1);
        assert_eq!(c.lit_gems(at(700)), 2);
        assert_eq!(c.lit_gems(at(900)), 3);
        assert_eq!(c.lit_gems(at(5000)), 3);
        assert!(c.is_finished(at(900)));
        assert!(!c.is_finished(at(899)));
    }

    #[test]
    fn test_clock_before_start_shows_nothing() {
        let start = Instant::now() + Duration::from_secs(1);
        let c = Celebration::start(start, Duration::ZERO);
        assert_eq!(c.lit_gems(Instant::now()), 0);
        assert_eq!(c.lit_gems(start), 1);
    }
}
