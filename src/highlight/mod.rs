use std::collections::HashSet;

use crate::graph::GraphIndex;
use crate::interact::{Focus, InteractionState};

mod style;

pub use style::{
    DIMMED_DARKEN, DIMMED_EDGE_OPACITY, DIMMED_OPACITY, EdgeStyle, NodeStyle, Rgb, edge_style,
    neutral_edge_opacity, node_style,
};

// Declaration order is precedence order: when memberships overlap, the
// higher tier wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmphasisTier {
    Selected,
    Hovered,
    ConnectedToBoth,
    ConnectedToSelected,
    ConnectedToHovered,
    Neutral,
    Dimmed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightPolicy {
    // Marks nodes adjacent to both the selected and the hovered node (and
    // edges in both closures) as ConnectedToBoth instead of letting the
    // selection side win.
    pub mark_shared_neighbors: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmphasisFrame {
    pub node_tiers: Vec<EmphasisTier>,
    pub edge_tiers: Vec<EmphasisTier>,
}

impl EmphasisFrame {
    pub fn neutral(index: &GraphIndex) -> Self {
        Self {
            node_tiers: vec![EmphasisTier::Neutral; index.node_count()],
            edge_tiers: vec![EmphasisTier::Neutral; index.edge_count()],
        }
    }

    fn dimmed(index: &GraphIndex) -> Self {
        Self {
            node_tiers: vec![EmphasisTier::Dimmed; index.node_count()],
            edge_tiers: vec![EmphasisTier::Dimmed; index.edge_count()],
        }
    }
}

pub fn resolve(
    state: &InteractionState,
    index: &GraphIndex,
    policy: HighlightPolicy,
) -> EmphasisFrame {
    match state.focus() {
        Focus::Idle => EmphasisFrame::neutral(index),
        Focus::Hovering { hovered } => match index.index_of(hovered) {
            Some(hovered) => hover_frame(index, hovered),
            None => EmphasisFrame::neutral(index),
        },
        Focus::Selected { selected } => match index.index_of(selected) {
            Some(selected) => selection_frame(index, selected),
            None => EmphasisFrame::neutral(index),
        },
        Focus::SelectedAndHovering { selected, hovered } => {
            match (index.index_of(selected), index.index_of(hovered)) {
                (Some(selected), Some(hovered)) => {
                    combined_frame(index, selected, hovered, policy)
                }
                (Some(selected), None) => selection_frame(index, selected),
                (None, Some(hovered)) => hover_frame(index, hovered),
                (None, None) => EmphasisFrame::neutral(index),
            }
        }
    }
}

fn closure_of(index: &GraphIndex, center: usize) -> (HashSet<usize>, HashSet<usize>) {
    let mut nodes = HashSet::new();
    let mut edges = HashSet::new();
    for neighbor in index.neighbors_of_index(center) {
        nodes.insert(neighbor.node);
        edges.insert(neighbor.edge);
    }
    (nodes, edges)
}

fn hover_frame(index: &GraphIndex, hovered: usize) -> EmphasisFrame {
    let mut frame = EmphasisFrame::dimmed(index);
    let (neighbor_nodes, touched_edges) = closure_of(index, hovered);

    for node in neighbor_nodes {
        frame.node_tiers[node] = EmphasisTier::ConnectedToHovered;
    }
    for edge in touched_edges {
        frame.edge_tiers[edge] = EmphasisTier::ConnectedToHovered;
    }
    frame.node_tiers[hovered] = EmphasisTier::Hovered;

    frame
}

fn selection_frame(index: &GraphIndex, selected: usize) -> EmphasisFrame {
    let mut frame = EmphasisFrame::dimmed(index);
    let (neighbor_nodes, touched_edges) = closure_of(index, selected);

    for node in neighbor_nodes {
        frame.node_tiers[node] = EmphasisTier::ConnectedToSelected;
    }
    for edge in touched_edges {
        frame.edge_tiers[edge] = EmphasisTier::ConnectedToSelected;
    }
    frame.node_tiers[selected] = EmphasisTier::Selected;

    frame
}

fn combined_frame(
    index: &GraphIndex,
    selected: usize,
    hovered: usize,
    policy: HighlightPolicy,
) -> EmphasisFrame {
    let mut frame = EmphasisFrame::dimmed(index);
    let (selected_nodes, selected_edges) = closure_of(index, selected);
    let (hovered_nodes, hovered_edges) = closure_of(index, hovered);

    for &node in &hovered_nodes {
        frame.node_tiers[node] = EmphasisTier::ConnectedToHovered;
    }
    for &node in &selected_nodes {
        frame.node_tiers[node] = if policy.mark_shared_neighbors && hovered_nodes.contains(&node) {
            EmphasisTier::ConnectedToBoth
        } else {
            EmphasisTier::ConnectedToSelected
        };
    }

    for &edge in &hovered_edges {
        frame.edge_tiers[edge] = EmphasisTier::ConnectedToHovered;
    }
    for &edge in &selected_edges {
        frame.edge_tiers[edge] = if policy.mark_shared_neighbors && hovered_edges.contains(&edge) {
            EmphasisTier::ConnectedToBoth
        } else {
            EmphasisTier::ConnectedToSelected
        };
    }

    // The two focus centers outrank every membership tier.
    frame.node_tiers[hovered] = EmphasisTier::Hovered;
    frame.node_tiers[selected] = EmphasisTier::Selected;

    frame
}
