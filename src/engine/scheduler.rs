use std::time::{Duration, Instant};

/// A periodic timer driven by the caller's clock.
///
/// The scheduler never sleeps or spawns anything; the host loop asks how long
/// it may wait ([`TickScheduler::time_until()`]) and reports the current time
/// back through [`TickScheduler::fire()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickScheduler {
    /// Create a stopped scheduler with the given period
    pub(crate) fn new(interval: Duration) -> TickScheduler {
        TickScheduler {
            interval,
            deadline: None,
        }
    }

    /// Arm the scheduler so that the first tick falls one interval after
    /// `now`.  Restarts the countdown if already running.
    pub(crate) fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub(crate) fn stop(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the period.  A tick that is already pending keeps its
    /// deadline; the new interval applies from the next re-arm onwards.
    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// How long the host may wait before the next tick is due.  Returns zero
    /// if the tick is overdue and `None` if the scheduler is stopped.
    pub(crate) fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|when| when.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, re-arm for the following one and return
    /// `true`
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(when) if now >= when => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
impl TickScheduler {
    pub(crate) fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn stopped_never_fires() {
        let mut sched = TickScheduler::new(150 * MS);
        let now = Instant::now();
        assert!(!sched.is_running());
        assert_eq!(sched.time_until(now), None);
        assert!(!sched.fire(now + 1000 * MS));
    }

    #[test]
    fn fires_at_deadline_and_rearms() {
        let mut sched = TickScheduler::new(150 * MS);
        let t0 = Instant::now();
        sched.start(t0);
        assert_eq!(sched.deadline(), Some(t0 + 150 * MS));
        assert_eq!(sched.time_until(t0 + 50 * MS), Some(100 * MS));
        assert!(!sched.fire(t0 + 149 * MS));
        assert!(sched.fire(t0 + 150 * MS));
        assert_eq!(sched.deadline(), Some(t0 + 300 * MS));
        assert!(!sched.fire(t0 + 299 * MS));
    }

    #[test]
    fn late_fire_rearms_from_now() {
        let mut sched = TickScheduler::new(100 * MS);
        let t0 = Instant::now();
        sched.start(t0);
        assert_eq!(sched.time_until(t0 + 130 * MS), Some(Duration::ZERO));
        assert!(sched.fire(t0 + 130 * MS));
        assert_eq!(sched.deadline(), Some(t0 + 230 * MS));
    }

    #[test]
    fn set_interval_keeps_pending_deadline() {
        let mut sched = TickScheduler::new(150 * MS);
        let t0 = Instant::now();
        sched.start(t0);
        sched.set_interval(140 * MS);
        assert_eq!(sched.interval(), 140 * MS);
        assert_eq!(sched.deadline(), Some(t0 + 150 * MS));
        assert!(sched.fire(t0 + 150 * MS));
        assert_eq!(sched.deadline(), Some(t0 + 290 * MS));
    }

    #[test]
    fn stop_and_restart() {
        let mut sched = TickScheduler::new(200 * MS);
        let t0 = Instant::now();
        sched.start(t0);
        sched.stop();
        assert!(!sched.is_running());
        assert!(!sched.fire(t0 + 500 * MS));
        sched.start(t0 + 500 * MS);
        assert!(sched.is_running());
        assert_eq!(sched.deadline(), Some(t0 + 700 * MS));
    }
}
