use std::time::Duration;

// Gaze dwell countdown, advanced by the host's frame tick. Cancellation
// replaces the pending slot, so a completion can never fire for a target
// that was cancelled earlier in the same frame.
#[derive(Clone, Debug)]
pub(super) struct DwellTimer {
    duration: Duration,
    pending: Option<Pending>,
}

#[derive(Clone, Debug)]
struct Pending {
    target: String,
    remaining: Duration,
}

impl DwellTimer {
    pub(super) fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub(super) fn arm(&mut self, target: &str) {
        // Re-arming the current target keeps the running countdown.
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.target == target)
        {
            return;
        }

        self.pending = Some(Pending {
            target: target.to_string(),
            remaining: self.duration,
        });
    }

    pub(super) fn cancel_if(&mut self, target: &str) {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.target == target)
        {
            self.pending = None;
        }
    }

    pub(super) fn cancel_unless(&mut self, target: &str) {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.target != target)
        {
            self.pending = None;
        }
    }

    pub(super) fn clear(&mut self) {
        self.pending = None;
    }

    pub(super) fn target(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.target.as_str())
    }

    pub(super) fn tick(&mut self, dt: Duration) -> Option<String> {
        let pending = self.pending.as_mut()?;
        match pending.remaining.checked_sub(dt) {
            Some(remaining) if !remaining.is_zero() => {
                pending.remaining = remaining;
                None
            }
            _ => self.pending.take().map(|pending| pending.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DWELL: Duration = Duration::from_millis(1500);

    #[test]
    fn fires_once_after_the_full_duration() {
        let mut timer = DwellTimer::new(DWELL);
        timer.arm("frodo");

        assert_eq!(timer.tick(Duration::from_millis(900)), None);
        assert_eq!(
            timer.tick(Duration::from_millis(600)),
            Some("frodo".to_string())
        );
        assert_eq!(timer.tick(Duration::from_millis(600)), None);
        assert_eq!(timer.target(), None);
    }

    #[test]
    fn re_arming_the_same_target_keeps_the_countdown() {
        let mut timer = DwellTimer::new(DWELL);
        timer.arm("frodo");
        timer.tick(Duration::from_millis(1000));
        timer.arm("frodo");

        assert_eq!(
            timer.tick(Duration::from_millis(500)),
            Some("frodo".to_string())
        );
    }

    #[test]
    fn arming_a_different_target_restarts_the_countdown() {
        let mut timer = DwellTimer::new(DWELL);
        timer.arm("frodo");
        timer.tick(Duration::from_millis(1400));
        timer.arm("sam");

        assert_eq!(timer.tick(Duration::from_millis(1400)), None);
        assert_eq!(
            timer.tick(Duration::from_millis(100)),
            Some("sam".to_string())
        );
    }

    #[test]
    fn cancel_if_only_matches_the_pending_target() {
        let mut timer = DwellTimer::new(DWELL);
        timer.arm("frodo");
        timer.cancel_if("sam");
        assert_eq!(timer.target(), Some("frodo"));

        timer.cancel_if("frodo");
        assert_eq!(timer.target(), None);
        assert_eq!(timer.tick(Duration::from_secs(10)), None);
    }

    #[test]
    fn cancel_unless_drops_competing_targets() {
        let mut timer = DwellTimer::new(DWELL);
        timer.arm("frodo");
        timer.cancel_unless("frodo");
        assert_eq!(timer.target(), Some("frodo"));

        timer.cancel_unless("sam");
        assert_eq!(timer.target(), None);
    }
}
