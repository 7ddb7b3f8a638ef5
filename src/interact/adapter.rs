use std::collections::VecDeque;
use std::time::Duration;

use super::InputEvent;
use super::dwell::DwellTimer;

pub const DEFAULT_DWELL: Duration = Duration::from_millis(1500);

// Funnels pointer, gaze, and controller notifications into the shared
// four-event vocabulary. Only gaze arms the dwell timer; a hover-leave for
// the pending target or a hover-enter for any other node, from any device,
// cancels it.
#[derive(Clone, Debug)]
pub struct InputAdapter {
    queue: VecDeque<InputEvent>,
    dwell: DwellTimer,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::with_dwell(DEFAULT_DWELL)
    }

    pub fn with_dwell(duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            dwell: DwellTimer::new(duration),
        }
    }

    pub fn pointer_entered(&mut self, id: &str) {
        self.push_hover_enter(id);
    }

    pub fn pointer_left(&mut self, id: &str) {
        self.push_hover_leave(id);
    }

    pub fn pointer_clicked(&mut self, id: &str) {
        self.queue.push_back(InputEvent::Activate(id.to_string()));
    }

    pub fn background_clicked(&mut self) {
        self.queue.push_back(InputEvent::ActivateBackground);
    }

    pub fn gaze_entered(&mut self, id: &str) {
        self.push_hover_enter(id);
        self.dwell.arm(id);
    }

    pub fn gaze_left(&mut self, id: &str) {
        self.push_hover_leave(id);
    }

    pub fn controller_ray_entered(&mut self, id: &str) {
        self.push_hover_enter(id);
    }

    pub fn controller_ray_left(&mut self, id: &str) {
        self.push_hover_leave(id);
    }

    pub fn controller_trigger_pressed(&mut self, id: &str) {
        self.queue.push_back(InputEvent::Activate(id.to_string()));
    }

    pub fn controller_trigger_background(&mut self) {
        self.queue.push_back(InputEvent::ActivateBackground);
    }

    pub fn dwell_target(&self) -> Option<&str> {
        self.dwell.target()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.dwell.clear();
    }

    // Queued events come out in arrival order; a dwell completion is
    // appended last, so a leave queued this frame has already cancelled it.
    pub fn drain(&mut self, dt: Duration) -> Vec<InputEvent> {
        let mut events = self.queue.drain(..).collect::<Vec<_>>();
        if let Some(target) = self.dwell.tick(dt) {
            events.push(InputEvent::Activate(target));
        }
        events
    }

    fn push_hover_enter(&mut self, id: &str) {
        self.dwell.cancel_unless(id);
        self.queue.push_back(InputEvent::HoverEnter(id.to_string()));
    }

    fn push_hover_leave(&mut self, id: &str) {
        self.dwell.cancel_if(id);
        self.queue.push_back(InputEvent::HoverLeave(id.to_string()));
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_all(adapter: &mut InputAdapter) -> Vec<InputEvent> {
        adapter.drain(Duration::ZERO)
    }

    #[test]
    fn every_device_produces_the_same_vocabulary() {
        let mut adapter = InputAdapter::new();
        adapter.pointer_entered("frodo");
        adapter.pointer_left("frodo");
        adapter.controller_ray_entered("frodo");
        adapter.controller_trigger_pressed("frodo");
        adapter.background_clicked();

        assert_eq!(
            drain_all(&mut adapter),
            vec![
                InputEvent::HoverEnter("frodo".to_string()),
                InputEvent::HoverLeave("frodo".to_string()),
                InputEvent::HoverEnter("frodo".to_string()),
                InputEvent::Activate("frodo".to_string()),
                InputEvent::ActivateBackground,
            ]
        );
        assert!(drain_all(&mut adapter).is_empty());
    }

    #[test]
    fn gaze_dwell_fires_an_activation_after_the_timeout() {
        let mut adapter = InputAdapter::with_dwell(Duration::from_millis(1500));
        adapter.gaze_entered("frodo");

        assert_eq!(
            adapter.drain(Duration::from_millis(700)),
            vec![InputEvent::HoverEnter("frodo".to_string())]
        );
        assert!(adapter.drain(Duration::from_millis(700)).is_empty());
        assert_eq!(
            adapter.drain(Duration::from_millis(100)),
            vec![InputEvent::Activate("frodo".to_string())]
        );
        assert!(adapter.drain(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn leaving_before_the_timeout_cancels_the_dwell() {
        let mut adapter = InputAdapter::with_dwell(Duration::from_millis(1500));
        adapter.gaze_entered("frodo");
        adapter.drain(Duration::from_millis(1400));

        adapter.gaze_left("frodo");
        let events = adapter.drain(Duration::from_millis(200));
        assert_eq!(events, vec![InputEvent::HoverLeave("frodo".to_string())]);
        assert!(adapter.drain(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn a_competing_hover_from_another_device_cancels_the_dwell() {
        let mut adapter = InputAdapter::with_dwell(Duration::from_millis(1500));
        adapter.gaze_entered("frodo");
        adapter.drain(Duration::from_millis(1400));

        adapter.pointer_entered("sam");
        let events = adapter.drain(Duration::from_millis(200));
        assert_eq!(events, vec![InputEvent::HoverEnter("sam".to_string())]);
    }

    #[test]
    fn hovering_the_pending_target_from_another_device_keeps_the_dwell() {
        let mut adapter = InputAdapter::with_dwell(Duration::from_millis(1500));
        adapter.gaze_entered("frodo");
        adapter.drain(Duration::from_millis(1000));

        adapter.pointer_entered("frodo");
        let events = adapter.drain(Duration::from_millis(500));
        assert_eq!(
            events,
            vec![
                InputEvent::HoverEnter("frodo".to_string()),
                InputEvent::Activate("frodo".to_string()),
            ]
        );
    }

    #[test]
    fn gaze_moving_to_a_new_node_restarts_the_countdown() {
        let mut adapter = InputAdapter::with_dwell(Duration::from_millis(1500));
        adapter.gaze_entered("frodo");
        adapter.drain(Duration::from_millis(1400));

        adapter.gaze_left("frodo");
        adapter.gaze_entered("sam");
        adapter.drain(Duration::ZERO);

        assert!(adapter.drain(Duration::from_millis(1400)).is_empty());
        assert_eq!(
            adapter.drain(Duration::from_millis(100)),
            vec![InputEvent::Activate("sam".to_string())]
        );
    }

    #[test]
    fn clear_drops_queued_events_and_the_pending_dwell() {
        let mut adapter = InputAdapter::new();
        adapter.gaze_entered("frodo");
        adapter.clear();

        assert_eq!(adapter.dwell_target(), None);
        assert!(adapter.drain(Duration::from_secs(10)).is_empty());
    }
}
