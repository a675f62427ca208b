//! In-memory weighted undirected graph built by the user.

use std::collections::HashSet;
use std::fmt;

use log::debug;

use super::error::{GraphError, Result};

/// Sequential vertex identifier, assigned in placement order.
pub type VertexId = usize;

/// Canonical key of an undirected edge: endpoints sorted ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub VertexId, pub VertexId);

impl EdgeKey {
	/// Builds the canonical key for the unordered pair `(u, v)`.
	pub fn new(u: VertexId, v: VertexId) -> Self {
		if u <= v { Self(u, v) } else { Self(v, u) }
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.0, self.1)
	}
}

/// A weighted undirected edge as the user entered it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	/// First endpoint as entered.
	pub u: VertexId,
	/// Second endpoint as entered.
	pub v: VertexId,
	/// Finite, non-negative weight.
	pub weight: f64,
}

impl Edge {
	/// Canonical key of this edge.
	pub fn key(&self) -> EdgeKey {
		EdgeKey::new(self.u, self.v)
	}
}

/// Vertex capacity, placed vertices and the edge list in insertion order.
///
/// Vertices are placed sequentially, so the placed ids are always
/// `0..placed()`.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertex_count: usize,
	placed: usize,
	edges: Vec<Edge>,
	keys: HashSet<EdgeKey>,
}

impl Graph {
	/// Creates an empty graph with room for `n` vertices.
	pub fn with_vertex_count(n: usize) -> Result<Self> {
		let mut graph = Self::default();
		graph.set_vertex_count(n)?;
		Ok(graph)
	}

	/// Clears every vertex and edge and sets the capacity to `n`.
	pub fn set_vertex_count(&mut self, n: usize) -> Result<()> {
		if n == 0 {
			return Err(GraphError::invalid(
				"vertex count must be a positive integer",
			));
		}
		*self = Self {
			vertex_count: n,
			..Self::default()
		};
		debug!("Graph reset to {} vertices", n);
		Ok(())
	}

	/// Places the next vertex, or returns `None` once every vertex is placed.
	pub fn place_vertex(&mut self) -> Option<VertexId> {
		if self.placed >= self.vertex_count {
			return None;
		}
		let id = self.placed;
		self.placed += 1;
		Some(id)
	}

	/// Adds an undirected edge between two placed vertices. Self-loops,
	/// duplicates in either direction and negative or non-finite weights are
	/// rejected without changing the graph.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<EdgeKey> {
		if u == v {
			return Err(GraphError::invalid(format!(
				"self-loop on vertex {} is not allowed",
				u
			)));
		}
		if u >= self.placed || v >= self.placed {
			return Err(GraphError::invalid(format!(
				"edge ({}, {}) references a vertex that is not placed",
				u, v
			)));
		}
		if !weight.is_finite() || weight < 0.0 {
			return Err(GraphError::invalid(format!(
				"weight {} must be a finite non-negative number",
				weight
			)));
		}
		let key = EdgeKey::new(u, v);
		if !self.keys.insert(key) {
			return Err(GraphError::invalid(format!("edge {} already exists", key)));
		}
		self.edges.push(Edge { u, v, weight });
		debug!("Added edge {} w={}", key, weight);
		Ok(key)
	}

	/// `(weight, other)` for every edge touching `v`, in insertion order.
	pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (f64, VertexId)> + '_ {
		self.edges.iter().filter_map(move |e| {
			if e.u == v {
				Some((e.weight, e.v))
			} else if e.v == v {
				Some((e.weight, e.u))
			} else {
				None
			}
		})
	}

	/// Declared number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertex_count
	}

	/// How many vertices have been placed so far.
	pub fn placed(&self) -> usize {
		self.placed
	}

	/// True once every declared vertex is placed.
	pub fn is_complete(&self) -> bool {
		self.placed == self.vertex_count
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// True if `(u, v)` exists in either direction.
	pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
		self.keys.contains(&EdgeKey::new(u, v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle() -> Graph {
		let mut g = Graph::with_vertex_count(3).unwrap();
		for _ in 0..3 {
			g.place_vertex();
		}
		g
	}

	#[test]
	fn zero_vertex_count_is_rejected() {
		let mut g = triangle();
		assert!(matches!(
			g.set_vertex_count(0),
			Err(GraphError::InvalidInput(_))
		));
		// prior state survives
		assert_eq!(g.vertex_count(), 3);
		assert_eq!(g.placed(), 3);
	}

	#[test]
	fn changing_vertex_count_clears_everything() {
		let mut g = triangle();
		g.add_edge(0, 1, 1.0).unwrap();
		g.set_vertex_count(5).unwrap();
		assert_eq!(g.placed(), 0);
		assert!(g.edges().is_empty());
		assert!(!g.contains_edge(0, 1));
	}

	#[test]
	fn placement_stops_at_capacity() {
		let mut g = Graph::with_vertex_count(2).unwrap();
		assert_eq!(g.place_vertex(), Some(0));
		assert_eq!(g.place_vertex(), Some(1));
		assert_eq!(g.place_vertex(), None);
		assert!(g.is_complete());
	}

	#[test]
	fn self_loop_and_duplicates_are_rejected() {
		let mut g = triangle();
		assert!(g.add_edge(1, 1, 3.0).is_err());
		g.add_edge(0, 2, 3.0).unwrap();
		assert!(g.add_edge(2, 0, 7.0).is_err());
		assert_eq!(g.edges().len(), 1);
		assert_eq!(g.edges()[0].key(), EdgeKey(0, 2));
		assert_eq!(g.edges()[0].weight, 3.0);
	}

	#[test]
	fn bad_weights_are_rejected() {
		let mut g = triangle();
		assert!(g.add_edge(0, 1, -1.0).is_err());
		assert!(g.add_edge(0, 1, f64::NAN).is_err());
		assert!(g.add_edge(0, 1, f64::INFINITY).is_err());
		assert!(g.add_edge(0, 1, 0.0).is_ok());
	}

	#[test]
	fn unplaced_endpoint_is_rejected() {
		let mut g = Graph::with_vertex_count(3).unwrap();
		g.place_vertex();
		g.place_vertex();
		assert!(g.add_edge(0, 2, 1.0).is_err());
	}

	#[test]
	fn neighbors_cover_both_directions() {
		let mut g = triangle();
		g.add_edge(0, 1, 4.0).unwrap();
		g.add_edge(2, 1, 2.0).unwrap();
		let n: Vec<_> = g.neighbors(1).collect();
		assert_eq!(n, vec![(4.0, 0), (2.0, 2)]);
		assert_eq!(g.neighbors(0).count(), 1);
	}
}
