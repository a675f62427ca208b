use std::collections::VecDeque;
use std::time::Duration;

use mst_visualizer::engine::runner::{kruskal, kruskal_then_prim, prim, recorded_total};
use mst_visualizer::engine::sample::sample_graph;
use mst_visualizer::engine::{
	Algorithm, EdgeColor, EdgeKey, Graph, NodeColor, Player, Scene, Step, VertexId,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build(n: usize, edges: &[(VertexId, VertexId, f64)]) -> Graph {
	let mut g = Graph::with_vertex_count(n).unwrap();
	while g.place_vertex().is_some() {}
	for &(u, v, w) in edges {
		g.add_edge(u, v, w).unwrap();
	}
	g
}

fn random_graph(rng: &mut StdRng, max_vertices: usize, density: f64) -> Graph {
	let n = rng.random_range(1..=max_vertices);
	let mut g = Graph::with_vertex_count(n).unwrap();
	while g.place_vertex().is_some() {}
	for u in 0..n {
		for v in (u + 1)..n {
			if rng.random_bool(density) {
				// Small integer weights force plenty of ties.
				let w = rng.random_range(0..6) as f64;
				g.add_edge(u, v, w).unwrap();
			}
		}
	}
	g
}

fn accepted(steps: &[Step]) -> Vec<EdgeKey> {
	steps
		.iter()
		.filter_map(|s| match s {
			Step::SetEdgeColor(k, EdgeColor::Accepted) => Some(*k),
			_ => None,
		})
		.collect()
}

/// Component id of every vertex.
fn components(g: &Graph) -> Vec<usize> {
	let n = g.vertex_count();
	let mut comp = vec![usize::MAX; n];
	let mut next = 0;
	for root in 0..n {
		if comp[root] != usize::MAX {
			continue;
		}
		comp[root] = next;
		let mut queue = VecDeque::from([root]);
		while let Some(u) = queue.pop_front() {
			for (_, v) in g.neighbors(u) {
				if comp[v] == usize::MAX {
					comp[v] = next;
					queue.push_back(v);
				}
			}
		}
		next += 1;
	}
	comp
}

/// Minimum spanning tree weight by exhaustive search over edge subsets.
fn brute_force_mst(g: &Graph) -> Option<f64> {
	let n = g.vertex_count();
	let edges = g.edges();
	let mut best: Option<f64> = None;
	for mask in 0u32..(1 << edges.len()) {
		if mask.count_ones() as usize != n - 1 {
			continue;
		}
		let chosen: Vec<_> = (0..edges.len())
			.filter(|i| mask & (1 << i) != 0)
			.map(|i| (edges[i].u, edges[i].v, edges[i].weight))
			.collect();
		let tree = build(n, &chosen);
		if components(&tree).iter().all(|&c| c == 0) {
			let w: f64 = chosen.iter().map(|e| e.2).sum();
			best = Some(best.map_or(w, |b| b.min(w)));
		}
	}
	best
}

fn play_to_end(steps: Vec<Step>) -> Scene {
	let mut player = Player::new(Duration::from_millis(1));
	let mut scene = Scene::default();
	player.load(steps);
	player.play();
	player.tick(Duration::from_secs(3600), &mut scene);
	assert!(player.at_end());
	scene
}

#[test]
fn triangle_scenario() {
	let g = build(3, &[(0, 1, 4.0), (1, 2, 2.0), (0, 2, 5.0)]);
	for start in [None, Some(0), Some(1), Some(2)] {
		let steps = kruskal(&g, start);
		assert_eq!(accepted(&steps), vec![EdgeKey(1, 2), EdgeKey(0, 1)]);
		assert!(!steps
			.iter()
			.any(|s| matches!(s, Step::SetEdgeColor(EdgeKey(0, 2), _))));
		assert_eq!(recorded_total(&steps, Algorithm::Kruskal), Some(6.0));
	}
	let steps = prim(&g, 0);
	assert_eq!(accepted(&steps), vec![EdgeKey(0, 1), EdgeKey(1, 2)]);
	assert_eq!(recorded_total(&steps, Algorithm::Prim), Some(6.0));
}

#[test]
fn disconnected_prim_scenario() {
	let g = build(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
	let scene = play_to_end(prim(&g, 0));
	assert_eq!(scene.visited_nodes(), vec![0, 1]);
	assert_eq!(scene.node_color(2), NodeColor::Idle);
	assert_eq!(scene.total(Algorithm::Prim), Some(1.0));
	assert!(scene.status().contains("2 of 4"));
}

#[test]
fn sample_graph_weighs_39() {
	let g = sample_graph().unwrap();
	let scene = play_to_end(kruskal_then_prim(&g, 0));
	assert_eq!(scene.total(Algorithm::Prim), Some(39.0));
	assert_eq!(
		recorded_total(&kruskal(&g, None), Algorithm::Kruskal),
		Some(39.0)
	);
	assert_eq!(scene.total(Algorithm::Kruskal), Some(39.0));
	assert!(scene.status().ends_with("Totals — Kruskal: 39, Prim: 39"));
}

#[test]
fn invalid_edges_are_rejected() {
	let mut g = build(3, &[]);
	assert!(g.add_edge(1, 1, 2.0).is_err());
	assert!(g.add_edge(0, 1, 2.0).is_ok());
	assert!(g.add_edge(1, 0, 3.0).is_err());
	assert_eq!(g.edges().len(), 1);
}

#[test]
fn kruskal_accepts_one_edge_less_than_each_component() {
	let mut rng = StdRng::seed_from_u64(0x6b72);
	for _ in 0..200 {
		let g = random_graph(&mut rng, 9, 0.3);
		let comp = components(&g);
		let count = comp.iter().copied().max().map_or(0, |m| m + 1);
		let steps = kruskal(&g, None);
		assert_eq!(accepted(&steps).len(), g.vertex_count() - count);
	}
}

#[test]
fn totals_match_brute_force_and_each_other() {
	let mut rng = StdRng::seed_from_u64(0x7072);
	let mut connected = 0;
	for _ in 0..150 {
		let g = random_graph(&mut rng, 6, 0.6);
		if components(&g).iter().any(|&c| c != 0) {
			continue;
		}
		connected += 1;
		let expected = brute_force_mst(&g).unwrap_or(0.0);
		let k = recorded_total(&kruskal(&g, None), Algorithm::Kruskal).unwrap();
		assert_eq!(k, expected);
		for start in 0..g.vertex_count() {
			let p = recorded_total(&prim(&g, start), Algorithm::Prim).unwrap();
			assert_eq!(p, expected, "prim from {}", start);
		}
	}
	assert!(connected > 20);
}

#[test]
fn kruskal_processes_equal_weights_in_insertion_order() {
	let mut rng = StdRng::seed_from_u64(0x5354);
	for _ in 0..100 {
		let g = random_graph(&mut rng, 8, 0.5);
		let considered: Vec<EdgeKey> = kruskal(&g, None)
			.into_iter()
			.filter_map(|s| match s {
				Step::SetEdgeColor(k, EdgeColor::Candidate) => Some(k),
				_ => None,
			})
			.collect();
		let position = |k: EdgeKey| g.edges().iter().position(|e| e.key() == k).unwrap();
		let weight = |k: EdgeKey| g.edges()[position(k)].weight;
		for pair in considered.windows(2) {
			let (a, b) = (pair[0], pair[1]);
			let (wa, wb) = (weight(a), weight(b));
			assert!(wa <= wb);
			if wa == wb {
				assert!(position(a) < position(b));
			}
		}
	}
}

#[test]
fn totals_appear_when_recorded_and_survive_prims_reset() {
	let g = sample_graph().unwrap();
	let steps = kruskal_then_prim(&g, 0);
	let recorded_at = |algorithm| {
		steps
			.iter()
			.position(|s| matches!(s, Step::RecordTotal(a, _) if *a == algorithm))
			.unwrap()
	};
	let (k, p) = (recorded_at(Algorithm::Kruskal), recorded_at(Algorithm::Prim));
	assert!(k < p);

	let mut player = Player::new(Duration::from_millis(1));
	let mut scene = Scene::default();
	player.load(steps.clone());
	while player.step_forward(&mut scene) {
		let cursor = player.cursor().unwrap();
		let kruskal = (cursor >= k).then_some(39.0);
		let prim = (cursor >= p).then_some(39.0);
		assert_eq!(scene.total(Algorithm::Kruskal), kruskal, "cursor {}", cursor);
		assert_eq!(scene.total(Algorithm::Prim), prim, "cursor {}", cursor);
	}

	player.seek(Some(k - 1), &mut scene);
	assert_eq!(scene.total(Algorithm::Kruskal), None);
	player.seek(None, &mut scene);
	assert_eq!(scene, Scene::new("Ready."));
}

#[test]
fn backward_replay_is_pure() {
	let mut rng = StdRng::seed_from_u64(0x7265);
	for _ in 0..40 {
		let g = random_graph(&mut rng, 7, 0.5);
		let start = rng.random_range(0..g.vertex_count());
		let steps = kruskal_then_prim(&g, start);
		let len = steps.len();

		let mut player = Player::new(Duration::from_millis(1));
		let mut scene = Scene::default();
		player.load(steps.clone());
		while player.step_forward(&mut scene) {}
		let forward = scene.clone();
		assert_eq!(forward, play_to_end(steps));

		// Down to the first step and back up again.
		let mut snapshots = vec![forward.clone()];
		while player.cursor() > Some(0) {
			player.step_backward(&mut scene);
			snapshots.push(scene.clone());
		}
		assert_eq!(snapshots.len(), len);
		for expected in snapshots.iter().rev().skip(1) {
			player.step_forward(&mut scene);
			assert_eq!(&scene, expected);
		}
		assert_eq!(scene, forward);

		// Seeking to any cursor gives the same scene regardless of the path.
		let target = rng.random_range(0..len);
		let mut fresh = Scene::default();
		player.seek(Some(target), &mut fresh);
		let mut again = Scene::default();
		player.seek(Some(len - 1), &mut again);
		player.seek(Some(target), &mut again);
		assert_eq!(fresh, again);
	}
}
