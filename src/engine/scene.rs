//! What the canvas shows, keyed by entity id, and the trait steps are
//! replayed into.

use std::collections::{BTreeMap, HashMap};

use super::graph::{EdgeKey, VertexId};
use super::step::{Algorithm, EdgeColor, NodeColor};

/// Receiver of replayed steps. Implementations only change what is shown;
/// they never touch the graph.
pub trait RenderSink {
	/// Recolors one edge.
	fn set_edge_color(&mut self, key: EdgeKey, color: EdgeColor);
	/// Recolors one vertex.
	fn set_node_color(&mut self, vertex: VertexId, color: NodeColor);
	/// Every edge back to neutral, every node back to idle. Recorded totals
	/// are kept.
	fn reset_all_to_neutral(&mut self);
	/// Replaces the status line.
	fn set_status_text(&mut self, text: &str);
	/// Shows the final weight of a finished run.
	fn record_total(&mut self, _algorithm: Algorithm, _total: f64) {}
	/// Forgets every recorded total.
	fn clear_totals(&mut self) {}
}

/// Current visual properties keyed by entity id. Absent entries are
/// neutral edges and idle nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	edges: HashMap<EdgeKey, EdgeColor>,
	nodes: HashMap<VertexId, NodeColor>,
	status: String,
	totals: BTreeMap<Algorithm, f64>,
}

impl Scene {
	/// An all-neutral scene showing `status`.
	pub fn new(status: impl Into<String>) -> Self {
		Self {
			status: status.into(),
			..Self::default()
		}
	}

	/// Current color of `key`; neutral when never set.
	pub fn edge_color(&self, key: EdgeKey) -> EdgeColor {
		self.edges.get(&key).copied().unwrap_or_default()
	}

	/// Current color of `vertex`; idle when never set.
	pub fn node_color(&self, vertex: VertexId) -> NodeColor {
		self.nodes.get(&vertex).copied().unwrap_or_default()
	}

	/// The status line.
	pub fn status(&self) -> &str {
		&self.status
	}

	/// Total recorded for `algorithm` by an applied `RecordTotal` step.
	pub fn total(&self, algorithm: Algorithm) -> Option<f64> {
		self.totals.get(&algorithm).copied()
	}

	/// Edges currently drawn in the given color, sorted by key.
	pub fn edges_with(&self, color: EdgeColor) -> Vec<EdgeKey> {
		let mut keys: Vec<EdgeKey> = self
			.edges
			.iter()
			.filter(|&(_, &c)| c == color)
			.map(|(&k, _)| k)
			.collect();
		keys.sort();
		keys
	}

	/// Vertices currently drawn as visited, ascending.
	pub fn visited_nodes(&self) -> Vec<VertexId> {
		let mut nodes: Vec<VertexId> = self
			.nodes
			.iter()
			.filter(|&(_, &c)| c == NodeColor::Visited)
			.map(|(&v, _)| v)
			.collect();
		nodes.sort_unstable();
		nodes
	}
}

impl RenderSink for Scene {
	fn set_edge_color(&mut self, key: EdgeKey, color: EdgeColor) {
		if color == EdgeColor::Neutral {
			self.edges.remove(&key);
		} else {
			self.edges.insert(key, color);
		}
	}

	fn set_node_color(&mut self, vertex: VertexId, color: NodeColor) {
		if color == NodeColor::Idle {
			self.nodes.remove(&vertex);
		} else {
			self.nodes.insert(vertex, color);
		}
	}

	fn reset_all_to_neutral(&mut self) {
		self.edges.clear();
		self.nodes.clear();
	}

	fn set_status_text(&mut self, text: &str) {
		text.clone_into(&mut self.status);
	}

	fn record_total(&mut self, algorithm: Algorithm, total: f64) {
		self.totals.insert(algorithm, total);
	}

	fn clear_totals(&mut self) {
		self.totals.clear();
	}
}
