mod data;
mod document;
mod index;

pub use data::{Gender, GraphEdge, GraphNode, Race};
pub use document::{
    DocumentLink, DocumentMetadata, DocumentNode, GraphDocument, parse_graph_document,
};
pub use index::{GraphIndex, Neighbor};
