//! The demonstration graph offered by "Load sample graph".

use super::error::Result;
use super::graph::Graph;

/// Labels of the demonstration graph, indexed by vertex id.
pub const SAMPLE_LABELS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

const SAMPLE_EDGES: [(usize, usize, f64); 11] = [
	(0, 1, 7.0),
	(0, 3, 5.0),
	(1, 2, 8.0),
	(1, 3, 9.0),
	(1, 4, 7.0),
	(2, 4, 5.0),
	(3, 4, 15.0),
	(3, 5, 6.0),
	(4, 5, 8.0),
	(4, 6, 9.0),
	(5, 6, 11.0),
];

/// The classic seven-vertex graph A..G. Its minimum spanning tree weighs 39.
pub fn sample_graph() -> Result<Graph> {
	let mut graph = Graph::with_vertex_count(SAMPLE_LABELS.len())?;
	while graph.place_vertex().is_some() {}
	for (u, v, w) in SAMPLE_EDGES {
		graph.add_edge(u, v, w)?;
	}
	Ok(graph)
}
