//! Parsing of raw text typed into the sidebar fields.

use super::error::{GraphError, Result};
use super::graph::VertexId;

/// Parses a positive integer vertex count.
pub fn parse_vertex_count(text: &str) -> Result<usize> {
	match text.trim().parse::<usize>() {
		Ok(n) if n > 0 => Ok(n),
		_ => Err(GraphError::invalid(format!(
			"'{}' is not a positive integer vertex count",
			text.trim()
		))),
	}
}

/// Parses a finite, non-negative edge weight.
pub fn parse_weight(text: &str) -> Result<f64> {
	let weight: f64 = text
		.trim()
		.parse()
		.map_err(|_| GraphError::invalid(format!("'{}' is not a numeric weight", text.trim())))?;
	if !weight.is_finite() || weight < 0.0 {
		return Err(GraphError::invalid("weight must be non-negative"));
	}
	Ok(weight)
}

/// Parses a 0-based start vertex and checks it against `vertex_count`.
pub fn parse_start_vertex(text: &str, vertex_count: usize) -> Result<VertexId> {
	match text.trim().parse::<VertexId>() {
		Ok(v) if v < vertex_count => Ok(v),
		_ => Err(GraphError::invalid(format!(
			"start vertex must be an integer in 0..{}",
			vertex_count
		))),
	}
}
