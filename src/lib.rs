//! Interaction and highlight-state engine for a VR visualization of a
//! character co-occurrence graph. Device notifications feed a
//! hover/selection state machine; pure projections turn its state into
//! per-element emphasis tiers and info-panel records. Rendering and
//! panel layout stay with the host behind the `session` traits.

pub mod graph;
pub mod highlight;
pub mod interact;
pub mod panel;
pub mod session;

pub use graph::{
    Gender, GraphDocument, GraphEdge, GraphIndex, GraphNode, Neighbor, Race, parse_graph_document,
};
pub use highlight::{EmphasisFrame, EmphasisTier, HighlightPolicy};
pub use interact::{
    DEFAULT_DWELL, Focus, InputAdapter, InputEvent, InteractionMachine, InteractionState,
    SelectionEvent, Transition,
};
pub use panel::{PanelRecord, TopConnection};
pub use session::{InteractionObserver, PanelPolicy, PanelSink, SceneSink, Session, SessionConfig};
