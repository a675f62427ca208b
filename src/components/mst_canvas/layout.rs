use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::engine::{Graph, VertexId};

const ITERATIONS: usize = 400;
const MARGIN: f64 = 60.0;

/// Spring layout for a graph that arrives without user-placed positions.
///
/// Vertices start on a circle, the force simulation settles them and the
/// result is scaled into the canvas, keeping `MARGIN` pixels free on every
/// side.
pub fn spring_layout(graph: &Graph, width: f64, height: f64) -> Vec<(f64, f64)> {
	let n = graph.placed();
	let mut sim: ForceGraph<VertexId, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let nodes: Vec<_> = (0..n)
		.map(|id| {
			let angle = (id as f64) * 2.0 * PI / n as f64;
			sim.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: id,
			})
		})
		.collect();
	for edge in graph.edges() {
		sim.add_edge(nodes[edge.u], nodes[edge.v], EdgeData::default());
	}
	for _ in 0..ITERATIONS {
		sim.update(0.016);
	}

	let mut raw = vec![(0.0, 0.0); n];
	sim.visit_nodes(|node| {
		raw[node.data.user_data] = (node.x() as f64, node.y() as f64);
	});
	fit(&raw, width, height)
}

fn fit(points: &[(f64, f64)], width: f64, height: f64) -> Vec<(f64, f64)> {
	let (min_x, max_x) = bounds(points.iter().map(|p| p.0));
	let (min_y, max_y) = bounds(points.iter().map(|p| p.1));
	let (span_x, span_y) = (max_x - min_x, max_y - min_y);
	let (avail_x, avail_y) = (
		(width - 2.0 * MARGIN).max(1.0),
		(height - 2.0 * MARGIN).max(1.0),
	);
	let k = (avail_x / span_x.max(1.0)).min(avail_y / span_y.max(1.0));
	let (off_x, off_y) = (
		MARGIN + (avail_x - span_x * k) / 2.0,
		MARGIN + (avail_y - span_y * k) / 2.0,
	);
	points
		.iter()
		.map(|&(x, y)| (off_x + (x - min_x) * k, off_y + (y - min_y) * k))
		.collect()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
	values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
		(lo.min(v), hi.max(v))
	})
}
