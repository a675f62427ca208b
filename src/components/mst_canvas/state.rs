use std::time::Duration;

use log::debug;

use crate::engine::input::parse_weight;
use crate::engine::sample::{SAMPLE_LABELS, sample_graph};
use crate::engine::{GraphError, Result, Session, VertexId};

use super::layout::spring_layout;

pub const NODE_RADIUS: f64 = 16.0;
pub const HIT_RADIUS: f64 = 16.0;

/// Longest frame gap fed to the playback clock; a backgrounded tab should
/// not fast-forward the whole timeline when it comes back.
const MAX_FRAME_DT: f64 = 250.0;

#[derive(Clone, Debug, Default)]
pub struct VertexInfo {
	pub x: f64,
	pub y: f64,
	pub label: String,
}

/// Everything the canvas needs: the engine session plus the purely visual
/// data it does not own (positions, labels, the click selection).
pub struct MstCanvasState {
	pub session: Session,
	pub vertices: Vec<VertexInfo>,
	pub selection: Option<VertexId>,
	pub hover: Option<VertexId>,
	pub width: f64,
	pub height: f64,
	last_frame: Option<f64>,
}

impl MstCanvasState {
	pub fn new(step_interval: Duration, width: f64, height: f64) -> Self {
		Self {
			session: Session::new(step_interval),
			vertices: Vec::new(),
			selection: None,
			hover: None,
			width,
			height,
			last_frame: None,
		}
	}

	pub fn vertex_at(&self, x: f64, y: f64) -> Option<VertexId> {
		self.vertices.iter().position(|v| {
			let (dx, dy) = (v.x - x, v.y - y);
			dx * dx + dy * dy <= HIT_RADIUS * HIT_RADIUS
		})
	}

	pub fn set_vertex_count(&mut self, n: usize) -> Result<()> {
		self.session.set_vertex_count(n)?;
		self.vertices.clear();
		self.selection = None;
		self.hover = None;
		Ok(())
	}

	/// A canvas click: places the next vertex while placement is incomplete,
	/// otherwise selects vertices pairwise and joins each pair with an edge
	/// weighted by `weight_text`.
	pub fn click(&mut self, x: f64, y: f64, weight_text: &str) -> Result<()> {
		if self.session.is_running() {
			return Err(GraphError::Busy);
		}
		let graph = self.session.graph();
		if graph.placed() < graph.vertex_count() {
			if let Some(id) = self.session.place_vertex()? {
				self.vertices.push(VertexInfo {
					x,
					y,
					label: id.to_string(),
				});
			}
			return Ok(());
		}

		let Some(clicked) = self.vertex_at(x, y) else {
			return Ok(());
		};
		let Some(first) = self.selection.take() else {
			self.selection = Some(clicked);
			debug!("Selected vertex {}", clicked);
			return Ok(());
		};
		if first == clicked {
			return Ok(());
		}
		if self.session.graph().contains_edge(first, clicked) {
			return Err(GraphError::InvalidInput(format!(
				"edge ({}, {}) already exists",
				first, clicked
			)));
		}
		let weight = parse_weight(weight_text)?;
		self.session.add_edge(first, clicked, weight)?;
		Ok(())
	}

	/// Replaces the graph with the lettered sample graph laid out by the
	/// force simulation.
	pub fn load_sample(&mut self) -> Result<()> {
		let graph = sample_graph()?;
		let positions = spring_layout(&graph, self.width, self.height);
		self.session.load_graph(graph)?;
		self.vertices = positions
			.into_iter()
			.zip(SAMPLE_LABELS)
			.map(|((x, y), label)| VertexInfo {
				x,
				y,
				label: label.to_string(),
			})
			.collect();
		self.selection = None;
		Ok(())
	}

	pub fn set_hover(&mut self, vertex: Option<VertexId>) {
		self.hover = vertex;
	}

	/// Called once per animation frame with the frame timestamp in
	/// milliseconds.
	pub fn frame(&mut self, now_ms: f64) {
		let dt = self
			.last_frame
			.map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_DT));
		self.last_frame = Some(now_ms);
		self.session.tick(Duration::from_secs_f64(dt / 1000.0));
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
