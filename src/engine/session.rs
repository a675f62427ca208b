//! The visualizer's single context object: graph, timeline player and the
//! scene they draw into.

use std::time::Duration;

use log::{debug, info, warn};

use super::error::{GraphError, Result};
use super::graph::{EdgeKey, Graph, VertexId};
use super::player::Player;
use super::runner;
use super::scene::{RenderSink, Scene};
use super::step::{Algorithm, Step};

/// Graph, player and scene for one visualizer instance.
#[derive(Clone, Debug)]
pub struct Session {
	graph: Graph,
	player: Player,
	scene: Scene,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(super::player::DEFAULT_STEP_INTERVAL)
	}
}

impl Session {
	/// An empty session playing one step per `step_interval`.
	pub fn new(step_interval: Duration) -> Self {
		Self {
			graph: Graph::default(),
			player: Player::new(step_interval),
			scene: Scene::new("Set the number of vertices to begin"),
		}
	}

	/// The graph being edited.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// What the canvas should currently show.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// The timeline player.
	pub fn player(&self) -> &Player {
		&self.player
	}

	/// True while a timeline is auto-playing. Graph edits are refused then.
	pub fn is_running(&self) -> bool {
		self.player.is_playing()
	}

	/// Total of `algorithm` as far as the timeline has been played: set only
	/// once its `RecordTotal` step is applied.
	pub fn total(&self, algorithm: Algorithm) -> Option<f64> {
		self.scene.total(algorithm)
	}

	/// Shows `err` in the status line and hands it back.
	pub fn report(&mut self, err: GraphError) -> GraphError {
		warn!("{}", err);
		self.scene.set_status_text(&err.to_string());
		err
	}

	/// Clears the graph and makes room for `n` vertices.
	pub fn set_vertex_count(&mut self, n: usize) -> Result<()> {
		self.ensure_idle()?;
		self.graph.set_vertex_count(n)?;
		self.player.clear(&mut self.scene);
		self.scene
			.set_status_text(&format!("Place {} vertices by clicking on the canvas", n));
		info!("Session reset for {} vertices", n);
		Ok(())
	}

	/// Replaces the whole graph, e.g. with the sample graph.
	pub fn load_graph(&mut self, graph: Graph) -> Result<()> {
		self.ensure_idle()?;
		self.graph = graph;
		self.player.clear(&mut self.scene);
		self.scene.set_status_text(&format!(
			"Loaded graph with {} vertices and {} edges",
			self.graph.vertex_count(),
			self.graph.edges().len()
		));
		Ok(())
	}

	/// Places the next vertex. `Ok(None)` once every vertex is placed.
	pub fn place_vertex(&mut self) -> Result<Option<VertexId>> {
		self.ensure_idle()?;
		let Some(id) = self.graph.place_vertex() else {
			return Ok(None);
		};
		let remaining = self.graph.vertex_count() - self.graph.placed();
		if remaining == 0 {
			self.scene
				.set_status_text("Vertices placed. Create edges by selecting two vertices.");
		} else {
			self.scene
				.set_status_text(&format!("Place {} more vertices.", remaining));
		}
		debug!("Placed vertex {}", id);
		Ok(Some(id))
	}

	/// Adds the edge `(u, v)` and drops any loaded timeline.
	pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> Result<EdgeKey> {
		self.ensure_idle()?;
		let key = self.graph.add_edge(u, v, weight)?;
		// A timeline recorded against the old edge set no longer applies.
		self.player.clear(&mut self.scene);
		self.scene.set_status_text(&format!(
			"Added edge ({}, {}, {}). Add more or run a visualization.",
			u, v, weight
		));
		Ok(key)
	}

	/// Records Kruskal's run and starts playing it.
	pub fn run_kruskal(&mut self, start: Option<VertexId>) -> Result<()> {
		self.check_runnable(start)?;
		let steps = runner::kruskal(&self.graph, start);
		self.start_timeline(steps);
		Ok(())
	}

	/// Records Prim's run from `start` and starts playing it.
	pub fn run_prim(&mut self, start: VertexId) -> Result<()> {
		self.check_runnable(Some(start))?;
		let steps = runner::prim(&self.graph, start);
		self.start_timeline(steps);
		Ok(())
	}

	/// Kruskal's run followed by Prim's from `start`, as one timeline.
	pub fn run_both(&mut self, start: VertexId) -> Result<()> {
		self.check_runnable(Some(start))?;
		let steps = runner::kruskal_then_prim(&self.graph, start);
		self.start_timeline(steps);
		Ok(())
	}

	/// Drops the current timeline and shows every entity in its neutral color.
	pub fn reset_colors(&mut self) {
		self.player.clear(&mut self.scene);
		self.scene.set_status_text("Colors reset. Ready.");
	}

	/// Starts or resumes playback.
	pub fn play(&mut self) {
		self.player.play();
	}

	/// Pauses playback.
	pub fn pause(&mut self) {
		self.player.pause();
	}

	/// Play/pause button.
	pub fn toggle_play(&mut self) {
		self.player.toggle();
	}

	/// Applies the next step.
	pub fn step_forward(&mut self) -> bool {
		self.player.step_forward(&mut self.scene)
	}

	/// Moves back one step.
	pub fn step_backward(&mut self) -> bool {
		self.player.step_backward(&mut self.scene)
	}

	/// Back to the start of the loaded timeline.
	pub fn rewind(&mut self) {
		self.player.rewind(&mut self.scene);
	}

	/// Feeds elapsed wall time to the playback clock.
	pub fn tick(&mut self, dt: Duration) -> usize {
		self.player.tick(dt, &mut self.scene)
	}

	fn ensure_idle(&self) -> Result<()> {
		if self.is_running() {
			return Err(GraphError::Busy);
		}
		Ok(())
	}

	fn check_runnable(&self, start: Option<VertexId>) -> Result<()> {
		if !self.graph.is_complete() {
			return Err(GraphError::invalid(format!(
				"place exactly {} vertices first ({} placed)",
				self.graph.vertex_count(),
				self.graph.placed()
			)));
		}
		if let Some(s) = start {
			if s >= self.graph.vertex_count() {
				return Err(GraphError::invalid(format!(
					"start vertex {} is out of range 0..{}",
					s,
					self.graph.vertex_count()
				)));
			}
		}
		Ok(())
	}

	fn start_timeline(&mut self, steps: Vec<Step>) {
		// Replacing the timeline also drops any pending playback interval.
		self.player.load(steps);
		self.player.seek(None, &mut self.scene);
		self.player.play();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::step::EdgeColor;

	fn triangle_session() -> Session {
		let mut s = Session::new(Duration::from_millis(10));
		s.set_vertex_count(3).unwrap();
		while s.place_vertex().unwrap().is_some() {}
		s.add_edge(0, 1, 4.0).unwrap();
		s.add_edge(1, 2, 2.0).unwrap();
		s.add_edge(0, 2, 5.0).unwrap();
		s
	}

	#[test]
	fn editing_is_blocked_while_playing() {
		let mut s = triangle_session();
		s.run_kruskal(None).unwrap();
		assert!(s.is_running());
		assert_eq!(s.add_edge(0, 1, 1.0), Err(GraphError::Busy));
		assert_eq!(s.set_vertex_count(4), Err(GraphError::Busy));
		s.pause();
		assert!(!s.is_running());
		assert!(matches!(s.add_edge(0, 1, 1.0), Err(GraphError::InvalidInput(_))));
	}

	#[test]
	fn run_plays_to_completion() {
		let mut s = triangle_session();
		s.run_prim(0).unwrap();
		s.tick(Duration::from_secs(60));
		assert!(!s.is_running());
		assert_eq!(s.total(Algorithm::Prim), Some(6.0));
		assert_eq!(s.scene().total(Algorithm::Prim), Some(6.0));
		assert_eq!(
			s.scene().edges_with(EdgeColor::Accepted),
			vec![EdgeKey(0, 1), EdgeKey(1, 2)]
		);
		assert_eq!(s.scene().status(), "Prim completed. Total weight (green) = 6");
	}

	#[test]
	fn new_run_replaces_the_playing_timeline() {
		let mut s = triangle_session();
		s.run_kruskal(None).unwrap();
		s.tick(Duration::from_millis(35));
		s.run_prim(2).unwrap();
		assert_eq!(s.player().cursor(), None);
		assert!(s.is_running());
	}

	#[test]
	fn incomplete_placement_and_bad_start_are_rejected() {
		let mut s = Session::default();
		s.set_vertex_count(3).unwrap();
		s.place_vertex().unwrap();
		assert!(matches!(s.run_kruskal(None), Err(GraphError::InvalidInput(_))));

		let mut s = triangle_session();
		assert!(matches!(s.run_prim(3), Err(GraphError::InvalidInput(_))));
		assert!(matches!(s.run_both(9), Err(GraphError::InvalidInput(_))));
		assert!(!s.is_running());
	}

	#[test]
	fn reset_colors_clears_the_scene() {
		let mut s = triangle_session();
		s.run_both(0).unwrap();
		s.tick(Duration::from_secs(60));
		s.reset_colors();
		assert!(s.scene().edges_with(EdgeColor::Accepted).is_empty());
		assert!(s.scene().visited_nodes().is_empty());
		assert_eq!(s.scene().status(), "Colors reset. Ready.");
		assert_eq!(s.total(Algorithm::Kruskal), None);
	}

	#[test]
	fn totals_follow_the_cursor() {
		let mut s = triangle_session();
		s.run_kruskal(None).unwrap();
		s.pause();
		assert_eq!(s.player().cursor(), None);
		assert_eq!(s.total(Algorithm::Kruskal), None);

		let record_at = runner::kruskal(s.graph(), None)
			.iter()
			.position(|step| matches!(step, Step::RecordTotal(..)))
			.unwrap();
		while s.player().cursor() < Some(record_at - 1) {
			s.step_forward();
			assert_eq!(s.total(Algorithm::Kruskal), None);
		}
		s.step_forward();
		assert_eq!(s.total(Algorithm::Kruskal), Some(6.0));

		while s.player().cursor().is_some() {
			s.step_backward();
		}
		assert_eq!(s.total(Algorithm::Kruskal), None);
		assert_eq!(s.total(Algorithm::Kruskal), s.scene().total(Algorithm::Kruskal));
	}

	#[test]
	fn new_run_hides_previous_totals_until_recorded() {
		let mut s = triangle_session();
		s.run_kruskal(None).unwrap();
		s.tick(Duration::from_secs(60));
		assert_eq!(s.total(Algorithm::Kruskal), Some(6.0));
		s.run_prim(0).unwrap();
		assert_eq!(s.total(Algorithm::Kruskal), None);
		assert_eq!(s.total(Algorithm::Prim), None);
	}

	#[test]
	fn both_runs_keep_kruskal_total_through_prims_reset() {
		let mut s = triangle_session();
		s.run_both(0).unwrap();
		s.tick(Duration::from_secs(60));
		assert_eq!(s.total(Algorithm::Kruskal), Some(6.0));
		assert_eq!(s.total(Algorithm::Prim), Some(6.0));
	}

	#[test]
	fn report_puts_error_in_status() {
		let mut s = Session::default();
		let err = s.set_vertex_count(0).unwrap_err();
		let err = s.report(err);
		assert!(matches!(err, GraphError::InvalidInput(_)));
		assert!(s.scene().status().starts_with("Invalid input"));
	}
}
