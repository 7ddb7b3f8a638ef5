use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};

use super::data::{Gender, Race};

#[derive(Clone, Debug, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub nodes: Vec<DocumentNode>,
    #[serde(default)]
    pub links: Vec<DocumentLink>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub node_count: usize,
    #[serde(default)]
    pub edge_count: usize,
    #[serde(default)]
    pub max_edge_weight: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    pub race: Race,
    #[serde(default, deserialize_with = "gender_or_unknown")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub weight: u64,
    #[serde(default)]
    pub total_connections: Option<usize>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DocumentLink {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub weight: u64,
}

// The preprocessing step writes the literal string "unknown" for
// characters without a recorded gender.
fn gender_or_unknown<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("male") => Some(Gender::Male),
        Some("female") => Some(Gender::Female),
        _ => None,
    })
}

pub fn parse_graph_document(raw: &str) -> Result<GraphDocument> {
    let document: GraphDocument =
        serde_json::from_str(raw).context("invalid character graph JSON")?;

    if document.nodes.is_empty() {
        return Err(anyhow!("character graph document contains no nodes"));
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positioned_document_and_ignores_layout_fields() {
        let raw = r#"{
            "metadata": {"node_count": 2, "edge_count": 1, "max_edge_weight": 10},
            "nodes": [
                {"id": "frodo", "label": "Frodo", "race": "hobbit", "gender": "male",
                 "weight": 2258, "total_connections": 19, "x": 1.5, "y": 0.2, "z": -3.0},
                {"id": "gwaihir", "label": "Gwaihir", "race": "animal", "gender": "unknown",
                 "weight": 17, "x": 0.0, "y": 0.0, "z": 0.0}
            ],
            "links": [
                {"source": "frodo", "target": "gwaihir", "weight": 10}
            ]
        }"#;

        let document = parse_graph_document(raw).unwrap();
        let metadata = document.metadata.unwrap();
        assert_eq!(metadata.node_count, 2);
        assert_eq!(metadata.edge_count, 1);
        assert_eq!(metadata.max_edge_weight, 10);

        assert_eq!(document.nodes.len(), 2);
        assert_eq!(document.nodes[0].race, Race::Hobbit);
        assert_eq!(document.nodes[0].gender, Some(Gender::Male));
        assert_eq!(document.nodes[0].total_connections, Some(19));
        assert_eq!(document.nodes[1].gender, None);

        assert_eq!(document.links.len(), 1);
        assert_eq!(document.links[0].weight, 10);
    }

    #[test]
    fn missing_gender_reads_as_none() {
        let raw = r#"{
            "nodes": [{"id": "shadowfax", "label": "Shadowfax", "race": "animal", "weight": 9}],
            "links": []
        }"#;

        let document = parse_graph_document(raw).unwrap();
        assert_eq!(document.nodes[0].gender, None);
    }

    #[test]
    fn rejects_document_without_nodes() {
        assert!(parse_graph_document(r#"{"nodes": [], "links": []}"#).is_err());
        assert!(parse_graph_document("not json").is_err());
    }

    #[test]
    fn rejects_unrecognized_race() {
        let raw = r#"{
            "nodes": [{"id": "x", "label": "X", "race": "wizards", "weight": 1}],
            "links": []
        }"#;

        assert!(parse_graph_document(raw).is_err());
    }
}
