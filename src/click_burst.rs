//! Rapid-click detector - fires after N clicks with no long pause between them.

use std::time::{Duration, Instant};

use crate::watcher::WatcherError;

pub const DEFAULT_THRESHOLD: u32 = 5;

/// Pause after which the click count starts over.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct ClickBurstWatcher {
    threshold: u32,
    quiet_window: Duration,
    count: u32,
    last_click: Option<Instant>,
}

impl ClickBurstWatcher {
    /// # Errors
    ///
    /// Returns [`WatcherError::ZeroThreshold`] if `threshold` is 0.
    pub fn new(threshold: u32, quiet_window: Duration) -> Result<Self, WatcherError> {
        if threshold == 0 {
            return Err(WatcherError::ZeroThreshold);
        }
        Ok(Self {
            threshold,
            quiet_window,
            count: 0,
            last_click: None,
        })
    }

    pub fn observe(&mut self) -> bool {
        self.observe_at(Instant::now())
    }

    /// Records a click at `now`. Returns `true` when the burst completes.
    pub fn observe_at(&mut self, now: Instant) -> bool {
        let expired = self
            .last_click
            .is_some_and(|last| now.saturating_duration_since(last) >= self.quiet_window);
        if expired {
            self.count = 0;
        }

        self.last_click = Some(now);
        self.count += 1;

        if self.count >= self.threshold {
            #[cfg(feature = "tracing")]
            tracing::debug!("Click burst of {} reached", self.count);
            self.count = 0;
            return true;
        }
        false
    }

    /// Clicks counted toward the current burst.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for ClickBurstWatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            quiet_window: DEFAULT_QUIET_WINDOW,
            count: 0,
            last_click: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks(watcher: &mut ClickBurstWatcher, start: Instant, offsets_ms: &[u64]) -> Vec<bool> {
        offsets_ms
            .iter()
            .map(|&ms| watcher.observe_at(start + Duration::from_millis(ms)))
            .collect()
    }

    #[test]
    fn test_five_quick_clicks_fire_once() {
        let mut watcher = ClickBurstWatcher::default();
        let hits = clicks(&mut watcher, Instant::now(), &[0, 100, 200, 300, 400]);
        assert_eq!(hits, vec![false, false, false, false, true]);
        assert_eq!(watcher.count(), 0);
    }

    #[test]
    fn test_slow_clicks_never_fire() {
        let mut watcher = ClickBurstWatcher::default();
        let hits = clicks(&mut watcher, Instant::now(), &[0, 2000, 4000, 6000, 8000, 10000]);
        assert!(hits.iter().all(|&h| !h));
        assert_eq!(watcher.count(), 1);
    }

    #[test]
    fn test_pause_restarts_count() {
        let mut watcher = ClickBurstWatcher::default();
        let start = Instant::now();
        let hits = clicks(&mut watcher, start, &[0, 100, 200, 300, 2400, 2500, 2600, 2700]);
        assert!(hits.iter().all(|&h| !h));
        assert_eq!(watcher.count(), 4);
        assert!(watcher.observe_at(start + Duration::from_millis(2800)));
    }

    #[test]
    fn test_gap_is_measured_from_last_click() {
        // total span exceeds the window, but no single gap does
        let mut watcher = ClickBurstWatcher::default();
        let hits = clicks(&mut watcher, Instant::now(), &[0, 1500, 3000, 4500, 6000]);
        assert_eq!(hits.last(), Some(&true));
    }

    #[test]
    fn test_rearms_after_burst() {
        let mut watcher = ClickBurstWatcher::new(2, Duration::from_millis(500)).unwrap();
        let hits = clicks(&mut watcher, Instant::now(), &[0, 10, 20, 30]);
        assert_eq!(hits, vec![false, true, false, true]);
    }

    #[test]
    fn test_threshold_one() {
        let mut watcher = ClickBurstWatcher::new(1, DEFAULT_QUIET_WINDOW).unwrap();
        assert!(watcher.observe());
        assert!(watcher.observe());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = ClickBurstWatcher::new(0, DEFAULT_QUIET_WINDOW);
        assert!(matches!(result, Err(WatcherError::ZeroThreshold)));
    }
}
