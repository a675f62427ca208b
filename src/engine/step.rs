//! Replayable visual steps recorded by the algorithm runners.

use std::fmt;

use super::graph::{EdgeKey, VertexId};
use super::scene::RenderSink;

/// How a vertex is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeColor {
	/// Not yet reached.
	#[default]
	Idle,
	/// Reached by the running algorithm.
	Visited,
}

/// How an edge is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeColor {
	/// Plain edge.
	#[default]
	Neutral,
	/// Under consideration.
	Candidate,
	/// Would close a cycle.
	Rejected,
	/// Part of the spanning tree.
	Accepted,
}

/// The two spanning tree algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
	/// Sort edges, join components.
	Kruskal,
	/// Grow one tree from a start vertex.
	Prim,
}

impl Algorithm {
	/// Lowercase name, used in logs.
	pub fn name(self) -> &'static str {
		match self {
			Self::Kruskal => "kruskal",
			Self::Prim => "prim",
		}
	}

	/// Capitalized name, used in status lines.
	pub fn title(self) -> &'static str {
		match self {
			Self::Kruskal => "Kruskal",
			Self::Prim => "Prim",
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// One atomic visual change. Everything a step shows (including running
/// totals) is fixed when the step is recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
	/// All colors back to neutral.
	Reset,
	/// Recolor one edge.
	SetEdgeColor(EdgeKey, EdgeColor),
	/// Recolor one vertex.
	SetNodeColor(VertexId, NodeColor),
	/// Replace the status line.
	SetStatus(String),
	/// Publish the final weight of a run.
	RecordTotal(Algorithm, f64),
}

impl Step {
	/// Replays this step into `sink`. Applying the same step twice shows the
	/// same thing as applying it once.
	pub fn apply<S: RenderSink + ?Sized>(&self, sink: &mut S) {
		match self {
			Step::Reset => sink.reset_all_to_neutral(),
			Step::SetEdgeColor(key, color) => sink.set_edge_color(*key, *color),
			Step::SetNodeColor(v, color) => sink.set_node_color(*v, *color),
			Step::SetStatus(text) => sink.set_status_text(text),
			Step::RecordTotal(algorithm, total) => sink.record_total(*algorithm, *total),
		}
	}
}
