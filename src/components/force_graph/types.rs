//! Graph data structures and the generated graph document they load from.

use serde::Deserialize;

use crate::error::Result;

/// One article in the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Article id. Links reference nodes by this.
	pub id: String,
	/// Where tapping the node navigates to.
	pub url: String,
	/// Text drawn next to the node.
	pub label: String,
}

/// A relation between two articles. Direction is kept but ignored when
/// highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Articles.
	pub nodes: Vec<GraphNode>,
	/// Relations between articles.
	pub links: Vec<GraphLink>,
}

// Element-list shape written by the site generator:
// `{ "nodes": [{ "data": {..} }], "edges": [{ "data": {..} }] }`

#[derive(Deserialize)]
struct Document {
	#[serde(default)]
	nodes: Vec<Element<NodeFields>>,
	#[serde(default)]
	edges: Vec<Element<EdgeFields>>,
}

#[derive(Deserialize)]
struct Element<T> {
	data: T,
}

#[derive(Deserialize)]
struct NodeFields {
	id: String,
	url: String,
	label: Option<String>,
}

#[derive(Deserialize)]
struct EdgeFields {
	source: String,
	target: String,
}

impl GraphData {
	/// Parse a graph document. Missing labels fall back to the node id.
	pub fn from_json(json: &str) -> Result<Self> {
		let doc: Document = serde_json::from_str(json)?;
		let nodes = doc
			.nodes
			.into_iter()
			.map(|Element { data }| GraphNode {
				label: data.label.unwrap_or_else(|| data.id.clone()),
				id: data.id,
				url: data.url,
			})
			.collect();
		let links = doc
			.edges
			.into_iter()
			.map(|Element { data }| GraphLink {
				source: data.source,
				target: data.target,
			})
			.collect();
		Ok(Self { nodes, links })
	}
}
