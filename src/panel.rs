use crate::graph::{Gender, GraphIndex};

pub const TOP_CONNECTION_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRecord {
    pub name: String,
    pub race_display_name: &'static str,
    pub gender_display_name: &'static str,
    pub appearance_count: u64,
    pub connection_count: usize,
    pub top_connections: Vec<TopConnection>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopConnection {
    pub label: String,
    pub weight: u64,
}

pub fn project(id: &str, index: &GraphIndex) -> Option<PanelRecord> {
    let node_index = index.index_of(id)?;
    let node = index.node(node_index)?;
    let neighbors = index.neighbors_of_index(node_index);

    let mut top_connections = neighbors
        .iter()
        .filter_map(|neighbor| {
            index.node(neighbor.node).map(|other| TopConnection {
                label: other.label.clone(),
                weight: neighbor.weight,
            })
        })
        .collect::<Vec<_>>();
    // Stable sort keeps edge insertion order among equal weights.
    top_connections.sort_by(|a, b| b.weight.cmp(&a.weight));
    top_connections.truncate(TOP_CONNECTION_LIMIT);

    let connection_count = node.recorded_connections.unwrap_or(neighbors.len());

    Some(PanelRecord {
        name: node.label.clone(),
        race_display_name: node.race.display_name(),
        gender_display_name: node.gender.map(Gender::display_name).unwrap_or("-"),
        appearance_count: node.weight,
        connection_count,
        top_connections,
    })
}
