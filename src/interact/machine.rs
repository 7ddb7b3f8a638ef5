use log::{debug, warn};

use crate::graph::GraphIndex;

use super::{InputEvent, InteractionState, SelectionEvent, Transition};

#[derive(Clone, Debug, Default)]
pub struct InteractionMachine {
    state: InteractionState,
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn reset(&mut self) -> bool {
        let was_idle = self.state.is_idle();
        self.state = InteractionState::default();
        !was_idle
    }

    pub fn apply(&mut self, index: &GraphIndex, event: InputEvent) -> Transition {
        match event {
            InputEvent::HoverEnter(id) => self.hover_enter(index, id),
            InputEvent::HoverLeave(id) => self.hover_leave(id),
            InputEvent::Activate(id) => self.activate(index, id),
            InputEvent::ActivateBackground => self.activate_background(),
        }
    }

    fn hover_enter(&mut self, index: &GraphIndex, id: String) -> Transition {
        if !index.contains(&id) {
            warn!("hover-enter for unknown node id {id:?}; ignored");
            return Transition::default();
        }

        // Selection keeps precedence; hovering the selected node changes
        // nothing. Re-entering the hovered node is idempotent.
        if self.state.selected.as_deref() == Some(id.as_str()) {
            return Transition::default();
        }
        if self.state.hovered.as_deref() == Some(id.as_str()) {
            return Transition::default();
        }

        self.state.hovered = Some(id);
        Transition {
            changed: true,
            selection: None,
        }
    }

    fn hover_leave(&mut self, id: String) -> Transition {
        if self.state.hovered.as_deref() != Some(id.as_str()) {
            debug!("stale hover-leave for {id:?}; ignored");
            return Transition::default();
        }

        self.state.hovered = None;
        Transition {
            changed: true,
            selection: None,
        }
    }

    fn activate(&mut self, index: &GraphIndex, id: String) -> Transition {
        if !index.contains(&id) {
            warn!("activate for unknown node id {id:?}; ignored");
            return Transition::default();
        }

        if self.state.selected.as_deref() == Some(id.as_str()) {
            self.state.selected = None;
            return Transition {
                changed: true,
                selection: Some(SelectionEvent::Deselected(id)),
            };
        }

        if self.state.hovered.as_deref() == Some(id.as_str()) {
            self.state.hovered = None;
        }
        self.state.selected = Some(id.clone());
        Transition {
            changed: true,
            selection: Some(SelectionEvent::Selected(id)),
        }
    }

    fn activate_background(&mut self) -> Transition {
        let deselected = self.state.selected.take();
        let hover_cleared = self.state.hovered.take().is_some();

        match deselected {
            Some(id) => Transition {
                changed: true,
                selection: Some(SelectionEvent::Deselected(id)),
            },
            None => Transition {
                changed: hover_cleared,
                selection: None,
            },
        }
    }
}
