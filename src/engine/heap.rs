//! Min-heap of frontier edges for Prim's algorithm.

use super::graph::VertexId;

/// A candidate frontier edge `from -> to` with its weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapEntry {
	/// Edge weight; the heap key.
	pub weight: f64,
	/// Tree-side endpoint.
	pub from: VertexId,
	/// Endpoint the edge would add to the tree.
	pub to: VertexId,
	seq: u64,
}

impl HeapEntry {
	/// Ordering key: weight first, then insertion order, so entries of equal
	/// weight pop in the order they were pushed.
	fn lighter_than(&self, other: &Self) -> bool {
		match self.weight.total_cmp(&other.weight) {
			std::cmp::Ordering::Less => true,
			std::cmp::Ordering::Greater => false,
			std::cmp::Ordering::Equal => self.seq < other.seq,
		}
	}
}

/// Binary min-heap keyed on edge weight.
#[derive(Clone, Debug, Default)]
pub struct MinHeap {
	items: Vec<HeapEntry>,
	next_seq: u64,
}

impl MinHeap {
	/// An empty heap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds the edge `from -> to`.
	pub fn push(&mut self, weight: f64, from: VertexId, to: VertexId) {
		self.items.push(HeapEntry {
			weight,
			from,
			to,
			seq: self.next_seq,
		});
		self.next_seq += 1;
		self.sift_up(self.items.len() - 1);
	}

	/// Removes the lightest entry; the earliest pushed wins a tie.
	pub fn pop(&mut self) -> Option<HeapEntry> {
		if self.items.is_empty() {
			return None;
		}
		let last = self.items.len() - 1;
		self.items.swap(0, last);
		let min = self.items.pop();
		if !self.items.is_empty() {
			self.sift_down(0);
		}
		min
	}

	/// The entry `pop` would return.
	pub fn peek(&self) -> Option<&HeapEntry> {
		self.items.first()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// True when nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	fn sift_up(&mut self, mut i: usize) {
		while i > 0 {
			let parent = (i - 1) / 2;
			if !self.items[i].lighter_than(&self.items[parent]) {
				break;
			}
			self.items.swap(i, parent);
			i = parent;
		}
	}

	fn sift_down(&mut self, mut i: usize) {
		let len = self.items.len();
		loop {
			let (left, right) = (2 * i + 1, 2 * i + 2);
			if left >= len {
				break;
			}
			let smaller = if right < len && self.items[right].lighter_than(&self.items[left]) {
				right
			} else {
				left
			};
			if !self.items[smaller].lighter_than(&self.items[i]) {
				break;
			}
			self.items.swap(i, smaller);
			i = smaller;
		}
	}
}
