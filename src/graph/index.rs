use std::collections::{HashMap, HashSet};

use anyhow::{Result, anyhow};
use log::warn;

use super::data::{GraphEdge, GraphNode};
use super::document::{DocumentNode, GraphDocument};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub node: usize,
    pub edge: usize,
    pub weight: u64,
}

#[derive(Clone, Debug)]
pub struct GraphIndex {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    edge_endpoints: Vec<(usize, usize)>,
    index_by_id: HashMap<String, usize>,
    neighbors: Vec<Vec<Neighbor>>,
    max_edge_weight: u64,
    min_node_weight: u64,
    max_node_weight: u64,
}

impl GraphIndex {
    pub fn build(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Result<GraphIndex> {
        if nodes.is_empty() {
            return Err(anyhow!("character graph has no nodes; nothing to index"));
        }

        let mut kept_nodes: Vec<GraphNode> = Vec::with_capacity(nodes.len());
        let mut index_by_id = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if index_by_id.contains_key(&node.id) {
                warn!(
                    "duplicate node id {:?}; keeping the first occurrence",
                    node.id
                );
                continue;
            }
            index_by_id.insert(node.id.clone(), kept_nodes.len());
            kept_nodes.push(node);
        }

        let mut kept_edges = Vec::with_capacity(edges.len());
        let mut edge_endpoints = Vec::with_capacity(edges.len());
        let mut seen_pairs = HashSet::with_capacity(edges.len());
        let mut neighbors = vec![Vec::new(); kept_nodes.len()];
        let mut max_edge_weight = 0u64;

        for edge in edges {
            let (Some(&source), Some(&target)) = (
                index_by_id.get(&edge.source),
                index_by_id.get(&edge.target),
            ) else {
                warn!(
                    "edge {} -- {} references a missing node; dropped",
                    edge.source, edge.target
                );
                continue;
            };

            if source == target {
                warn!("edge {} -- {} is a self-loop; dropped", edge.source, edge.target);
                continue;
            }

            // Links are undirected; a repeat in either orientation is the same pair.
            if !seen_pairs.insert((source.min(target), source.max(target))) {
                warn!(
                    "edge {} -- {} duplicates an earlier edge; dropped",
                    edge.source, edge.target
                );
                continue;
            }

            let edge_index = kept_edges.len();
            neighbors[source].push(Neighbor {
                node: target,
                edge: edge_index,
                weight: edge.weight,
            });
            neighbors[target].push(Neighbor {
                node: source,
                edge: edge_index,
                weight: edge.weight,
            });
            edge_endpoints.push((source, target));
            max_edge_weight = max_edge_weight.max(edge.weight);
            kept_edges.push(edge);
        }

        let mut min_node_weight = u64::MAX;
        let mut max_node_weight = 0u64;
        for node in &kept_nodes {
            min_node_weight = min_node_weight.min(node.weight);
            max_node_weight = max_node_weight.max(node.weight);
        }

        Ok(GraphIndex {
            nodes: kept_nodes,
            edges: kept_edges,
            edge_endpoints,
            index_by_id,
            neighbors,
            max_edge_weight,
            min_node_weight,
            max_node_weight,
        })
    }

    pub fn from_document(document: GraphDocument) -> Result<GraphIndex> {
        let GraphDocument {
            metadata,
            nodes,
            links,
        } = document;

        let nodes = nodes
            .into_iter()
            .map(|node| {
                let DocumentNode {
                    id,
                    label,
                    race,
                    gender,
                    weight,
                    total_connections,
                } = node;
                let label = label.unwrap_or_else(|| id.clone());
                GraphNode {
                    id,
                    label,
                    race,
                    gender,
                    weight,
                    recorded_connections: total_connections,
                }
            })
            .collect::<Vec<_>>();

        let edges = links
            .into_iter()
            .map(|link| GraphEdge {
                source: link.source,
                target: link.target,
                weight: link.weight,
            })
            .collect::<Vec<_>>();

        let index = Self::build(nodes, edges)?;

        if let Some(metadata) = metadata {
            if metadata.node_count != 0 && metadata.node_count != index.node_count() {
                warn!(
                    "document metadata lists {} nodes but {} were indexed",
                    metadata.node_count,
                    index.node_count()
                );
            }
            if metadata.edge_count != 0 && metadata.edge_count != index.edge_count() {
                warn!(
                    "document metadata lists {} edges but {} were indexed",
                    metadata.edge_count,
                    index.edge_count()
                );
            }
            if metadata.max_edge_weight != 0 && metadata.max_edge_weight != index.max_edge_weight()
            {
                warn!(
                    "document metadata lists max edge weight {} but the indexed maximum is {}",
                    metadata.max_edge_weight,
                    index.max_edge_weight()
                );
            }
        }

        Ok(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    pub fn edge(&self, index: usize) -> Option<&GraphEdge> {
        self.edges.get(index)
    }

    pub fn edge_endpoints(&self, index: usize) -> Option<(usize, usize)> {
        self.edge_endpoints.get(index).copied()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&GraphNode> {
        self.index_of(id).and_then(|index| self.nodes.get(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn neighbors_of(&self, id: &str) -> &[Neighbor] {
        self.index_of(id)
            .map(|index| self.neighbors_of_index(index))
            .unwrap_or(&[])
    }

    pub fn neighbors_of_index(&self, index: usize) -> &[Neighbor] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn max_edge_weight(&self) -> u64 {
        self.max_edge_weight
    }

    pub fn min_node_weight(&self) -> u64 {
        self.min_node_weight
    }

    pub fn max_node_weight(&self) -> u64 {
        self.max_node_weight
    }
}
