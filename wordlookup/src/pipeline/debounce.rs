use std::time::{Duration, Instant};

/// A cancellable, restartable delay holding the value to deliver.
///
/// At most one value is pending. Scheduling replaces it and restarts the
/// delay, so only the last value of a burst is ever delivered.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Debouncer<T> {
        Debouncer {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drops the pending value, returning whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// The value waiting for its deadline, if any.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, v)| v)
    }

    /// Delivers the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(self.pending, Some((deadline, _)) if now >= deadline);

        if due {
            self.pending.take().map(|(_, v)| v)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_after_quiescence() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);

        d.schedule("b", t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(299)), None);
        assert_eq!(d.next_deadline(), Some(t0 + DELAY));
        assert_eq!(d.poll(t0 + DELAY), Some("b"));
        assert_eq!(d.poll(t0 + DELAY * 2), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn rescheduling_restarts_the_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);

        d.schedule("b", t0);
        d.schedule("bo", t0 + Duration::from_millis(100));
        d.schedule("boo", t0 + Duration::from_millis(200));

        assert_eq!(d.poll(t0 + DELAY), None);
        assert_eq!(d.pending(), Some(&"boo"));
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), Some("boo"));
        assert_eq!(d.pending(), None);
    }

    #[test]
    fn cancel() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);

        assert!(!d.cancel());
        d.schedule(1, t0);
        assert!(d.cancel());
        assert_eq!(d.poll(t0 + DELAY * 10), None);
        assert_eq!(d.next_deadline(), None);
    }
}
