//! Union-find used by Kruskal's cycle check.

/// Disjoint-set forest with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<u32>,
}

impl DisjointSet {
	/// `n` singleton sets `{0}..{n-1}`.
	pub fn new(n: usize) -> Self {
		Self {
			parent: (0..n).collect(),
			rank: vec![0; n],
		}
	}

	/// Returns the representative of `x`, repointing every node on the path
	/// directly at it.
	pub fn find(&mut self, mut x: usize) -> usize {
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		while self.parent[x] != root {
			let next = self.parent[x];
			self.parent[x] = root;
			x = next;
		}
		root
	}

	/// Merges the sets of `a` and `b`. Returns `false` when they already share
	/// a set, i.e. the edge `(a, b)` would close a cycle.
	pub fn union(&mut self, a: usize, b: usize) -> bool {
		let (ra, rb) = (self.find(a), self.find(b));
		if ra == rb {
			return false;
		}
		match self.rank[ra].cmp(&self.rank[rb]) {
			std::cmp::Ordering::Less => self.parent[ra] = rb,
			std::cmp::Ordering::Greater => self.parent[rb] = ra,
			std::cmp::Ordering::Equal => {
				self.parent[rb] = ra;
				self.rank[ra] += 1;
			}
		}
		true
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// True for a forest over no elements.
	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}
}
