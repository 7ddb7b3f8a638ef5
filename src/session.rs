use std::time::Duration;

use anyhow::Result;

use crate::graph::{GraphIndex, parse_graph_document};
use crate::highlight::{self, EmphasisTier, HighlightPolicy};
use crate::interact::{
    DEFAULT_DWELL, InputAdapter, InteractionMachine, InteractionState, SelectionEvent,
};
use crate::panel::{self, PanelRecord};

pub trait SceneSink {
    fn apply_node_emphasis(&mut self, node_id: &str, tier: EmphasisTier);
    fn apply_edge_emphasis(&mut self, edge_id: usize, tier: EmphasisTier);
    fn reset_all_emphasis(&mut self);
}

pub trait PanelSink {
    fn show_panel(&mut self, record: &PanelRecord);
    fn hide_panel(&mut self);
}

pub trait InteractionObserver {
    fn node_selected(&mut self, _node_id: &str) {}
    fn node_deselected(&mut self, _node_id: &str) {}
    fn state_changed(&mut self, _state: &InteractionState) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelPolicy {
    // While a selection is active, let a hover take over the panel instead
    // of keeping the selected node's record.
    pub follow_hover: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub highlight: HighlightPolicy,
    pub panel: PanelPolicy,
    pub dwell: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightPolicy::default(),
            panel: PanelPolicy::default(),
            dwell: DEFAULT_DWELL,
        }
    }
}

// Owns the machine, the adapter, and the collaborator sinks. The host
// forwards device notifications into `adapter()` and calls `tick` once per
// frame; any state change triggers one full emphasis/panel push.
pub struct Session<S, P> {
    index: GraphIndex,
    config: SessionConfig,
    machine: InteractionMachine,
    adapter: InputAdapter,
    scene: S,
    panel: P,
    observers: Vec<Box<dyn InteractionObserver>>,
}

impl<S: SceneSink, P: PanelSink> Session<S, P> {
    pub fn new(index: GraphIndex, config: SessionConfig, scene: S, panel: P) -> Self {
        Self {
            adapter: InputAdapter::with_dwell(config.dwell),
            machine: InteractionMachine::new(),
            observers: Vec::new(),
            index,
            config,
            scene,
            panel,
        }
    }

    pub fn from_json(raw: &str, config: SessionConfig, scene: S, panel: P) -> Result<Self> {
        let document = parse_graph_document(raw)?;
        let index = GraphIndex::from_document(document)?;
        Ok(Self::new(index, config, scene, panel))
    }

    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    pub fn state(&self) -> &InteractionState {
        self.machine.state()
    }

    pub fn adapter(&mut self) -> &mut InputAdapter {
        &mut self.adapter
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn subscribe(&mut self, observer: Box<dyn InteractionObserver>) {
        self.observers.push(observer);
    }

    pub fn tick(&mut self, dt: Duration) {
        let events = self.adapter.drain(dt);
        let mut dirty = false;

        for event in events {
            let transition = self.machine.apply(&self.index, event);
            if let Some(selection) = &transition.selection {
                self.notify_selection(selection);
            }
            if transition.changed {
                dirty = true;
                self.notify_state_changed();
            }
        }

        if dirty {
            self.refresh();
        }
    }

    // Scene-teardown reset: drops queued input and the pending dwell and
    // returns to the idle visuals without emitting selection events.
    pub fn reset(&mut self) {
        self.adapter.clear();
        if self.machine.reset() {
            self.scene.reset_all_emphasis();
            self.panel.hide_panel();
        }
    }

    fn notify_selection(&mut self, selection: &SelectionEvent) {
        match selection {
            SelectionEvent::Selected(id) => {
                for observer in &mut self.observers {
                    observer.node_selected(id);
                }
            }
            SelectionEvent::Deselected(id) => {
                for observer in &mut self.observers {
                    observer.node_deselected(id);
                }
            }
        }
    }

    fn notify_state_changed(&mut self) {
        for observer in &mut self.observers {
            observer.state_changed(self.machine.state());
        }
    }

    fn refresh(&mut self) {
        if self.machine.state().is_idle() {
            self.scene.reset_all_emphasis();
            self.panel.hide_panel();
            return;
        }

        let frame = highlight::resolve(self.machine.state(), &self.index, self.config.highlight);
        for (position, tier) in frame.node_tiers.iter().enumerate() {
            if let Some(node) = self.index.node(position) {
                self.scene.apply_node_emphasis(&node.id, *tier);
            }
        }
        for (position, tier) in frame.edge_tiers.iter().enumerate() {
            self.scene.apply_edge_emphasis(position, *tier);
        }

        let target = self.panel_target().map(str::to_string);
        match target.and_then(|id| panel::project(&id, &self.index)) {
            Some(record) => self.panel.show_panel(&record),
            None => self.panel.hide_panel(),
        }
    }

    fn panel_target(&self) -> Option<&str> {
        let state = self.machine.state();
        match (state.selected(), state.hovered()) {
            (Some(selected), Some(hovered)) => Some(if self.config.panel.follow_hover {
                hovered
            } else {
                selected
            }),
            (Some(selected), None) => Some(selected),
            (None, Some(hovered)) => Some(hovered),
            (None, None) => None,
        }
    }
}
