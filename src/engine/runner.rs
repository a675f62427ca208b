//! Kruskal's and Prim's algorithms, recorded as step timelines.
//!
//! Runners read the graph and return a fresh `Vec<Step>`; they never mutate
//! the graph and never fail. Every total shown in a status line is computed
//! here, when the step is recorded.

use log::info;

use super::graph::{Edge, EdgeKey, Graph, VertexId};
use super::heap::MinHeap;
use super::step::{Algorithm, EdgeColor, NodeColor, Step};
use super::union_find::DisjointSet;

#[derive(Default)]
struct Recorder {
	steps: Vec<Step>,
}

impl Recorder {
	fn reset(&mut self) {
		self.steps.push(Step::Reset);
	}

	fn status(&mut self, text: String) {
		self.steps.push(Step::SetStatus(text));
	}

	fn edge(&mut self, edge: &Edge, color: EdgeColor) {
		self.steps.push(Step::SetEdgeColor(edge.key(), color));
	}

	fn edge_key(&mut self, key: EdgeKey, color: EdgeColor) {
		self.steps.push(Step::SetEdgeColor(key, color));
	}

	fn node(&mut self, vertex: VertexId, color: NodeColor) {
		self.steps.push(Step::SetNodeColor(vertex, color));
	}

	fn total(&mut self, algorithm: Algorithm, total: f64) {
		self.steps.push(Step::RecordTotal(algorithm, total));
	}

	fn finish(self, algorithm: Algorithm) -> Vec<Step> {
		info!(
			"{} recorded {} steps",
			algorithm.title(),
			self.steps.len()
		);
		self.steps
	}
}

/// Records Kruskal's algorithm over `graph`.
///
/// `start` only adds an initial visited highlight. Edges are processed in a
/// stable ascending weight order, and processing stops once a spanning tree
/// has `vertex_count - 1` edges.
pub fn kruskal(graph: &Graph, start: Option<VertexId>) -> Vec<Step> {
	let mut rec = Recorder::default();
	rec.reset();
	rec.status("Running Kruskal visualization...".into());
	if let Some(s) = start.filter(|&s| s < graph.placed()) {
		rec.node(s, NodeColor::Visited);
	}

	let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
	sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

	let mut sets = DisjointSet::new(graph.vertex_count());
	let tree_size = graph.vertex_count().saturating_sub(1);
	let (mut total, mut accepted) = (0.0, 0);

	for edge in sorted {
		if accepted == tree_size {
			break;
		}
		let (u, v, w) = (edge.u, edge.v, edge.weight);
		rec.edge(edge, EdgeColor::Candidate);
		rec.status(format!("Kruskal: considering edge ({},{}) w={}", u, v, w));
		if sets.union(u, v) {
			accepted += 1;
			total += w;
			rec.edge(edge, EdgeColor::Accepted);
			rec.node(u, NodeColor::Visited);
			rec.node(v, NodeColor::Visited);
			rec.status(format!(
				"Kruskal: accepted edge ({},{}) | MST total (green) = {}",
				u, v, total
			));
		} else {
			rec.edge(edge, EdgeColor::Rejected);
			rec.status(format!("Kruskal: rejected edge ({},{}) (forms a cycle)", u, v));
			rec.edge(edge, EdgeColor::Neutral);
		}
	}

	rec.total(Algorithm::Kruskal, total);
	if accepted < tree_size {
		rec.status(format!(
			"Kruskal completed. Graph is disconnected: spanning forest of {} edges, total weight = {}",
			accepted, total
		));
	} else {
		rec.status(format!("Kruskal completed. Total weight (green) = {}", total));
	}
	info!("Kruskal total = {} over {} edges", total, accepted);
	rec.finish(Algorithm::Kruskal)
}

/// Records Prim's algorithm from `start`.
///
/// An invalid start yields a short timeline reporting it. A frontier that
/// empties before every vertex is reached ends the run with a partial total.
pub fn prim(graph: &Graph, start: VertexId) -> Vec<Step> {
	let mut rec = Recorder::default();
	rec.reset();
	let n = graph.vertex_count();
	if start >= graph.placed() {
		rec.status(format!(
			"Prim: invalid start vertex {} (expected 0..{})",
			start,
			graph.placed()
		));
		return rec.finish(Algorithm::Prim);
	}
	rec.status(format!("Running Prim visualization from vertex {}...", start));

	let mut adjacency: Vec<Vec<(f64, VertexId)>> = vec![Vec::new(); n];
	for edge in graph.edges() {
		adjacency[edge.u].push((edge.weight, edge.v));
		adjacency[edge.v].push((edge.weight, edge.u));
	}

	let mut visited = vec![false; n];
	let mut heap = MinHeap::new();
	let push_frontier = |heap: &mut MinHeap, visited: &[bool], u: VertexId| {
		for &(w, v) in &adjacency[u] {
			if !visited[v] {
				heap.push(w, u, v);
			}
		}
	};

	visited[start] = true;
	let mut reached = 1;
	rec.node(start, NodeColor::Visited);
	rec.status(format!("Prim: visited {}", start));
	push_frontier(&mut heap, &visited, start);

	let mut total = 0.0;
	while reached < n {
		let Some(entry) = heap.pop() else {
			break;
		};
		let (u, v, w) = (entry.from, entry.to, entry.weight);
		let key = EdgeKey::new(u, v);
		rec.edge_key(key, EdgeColor::Candidate);
		rec.status(format!("Prim: considering ({},{}) w={}", u, v, w));
		if visited[v] {
			rec.edge_key(key, EdgeColor::Rejected);
			rec.status(format!("Prim: rejected ({},{}) (forms a cycle)", u, v));
			rec.edge_key(key, EdgeColor::Neutral);
			continue;
		}
		visited[v] = true;
		reached += 1;
		total += w;
		rec.edge_key(key, EdgeColor::Accepted);
		rec.status(format!(
			"Prim: accepted ({},{}) | MST total (green) = {}",
			u, v, total
		));
		rec.node(v, NodeColor::Visited);
		push_frontier(&mut heap, &visited, v);
	}

	rec.total(Algorithm::Prim, total);
	if reached < n {
		rec.status(format!(
			"Prim stopped: reached {} of {} vertices from {}. Partial total weight = {}",
			reached, n, start, total
		));
	} else {
		rec.status(format!("Prim completed. Total weight (green) = {}", total));
	}
	info!("Prim total = {} ({} of {} vertices reached)", total, reached, n);
	rec.finish(Algorithm::Prim)
}

/// Kruskal's timeline followed by Prim's, closed by a combined summary.
pub fn kruskal_then_prim(graph: &Graph, start: VertexId) -> Vec<Step> {
	let mut steps = kruskal(graph, Some(start));
	let kruskal_total = recorded_total(&steps, Algorithm::Kruskal);
	let prim_steps = prim(graph, start);
	let prim_total = recorded_total(&prim_steps, Algorithm::Prim);
	steps.extend(prim_steps);

	let summary = match (kruskal_total, prim_total) {
		(Some(k), Some(p)) => format!(
			"Completed: Kruskal then Prim. Totals — Kruskal: {}, Prim: {}",
			k, p
		),
		(Some(k), None) => format!("Completed: Kruskal then Prim. Kruskal total = {}", k),
		(None, Some(p)) => format!("Completed: Kruskal then Prim. Prim total = {}", p),
		(None, None) => "Completed: Kruskal then Prim.".to_string(),
	};
	steps.push(Step::SetStatus(summary));
	steps
}

/// The last total recorded for `algorithm` in `steps`.
pub fn recorded_total(steps: &[Step], algorithm: Algorithm) -> Option<f64> {
	steps.iter().rev().find_map(|step| match step {
		Step::RecordTotal(a, total) if *a == algorithm => Some(*total),
		_ => None,
	})
}
