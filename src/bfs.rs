//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::ErrPack;
use crate::error::BfsError;
use crate::union_find::{DEFAULT_CAPACITY, UnionFind};

//--------------------------------------------------------------------------------------------------

/// Distance of a vertex that was not reached.
pub const UNSET: isize = -1;

/// Breadth-first distances computed with disjoint sets instead of a queue.
///
/// The set containing the source holds every vertex whose distance is final.
/// Each round scans all edges and collects the vertices one edge away from that
/// set into a separate frontier set. The frontier is merged in only after the
/// scan, otherwise a vertex found in the current round would look processed to
/// the edges scanned after it.
#[derive(Clone, Debug)]
pub struct LayeredBfs {
	sets: UnionFind,
	distance: Vec<isize>,
}

impl Default for LayeredBfs {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY)
	}
}

#[allow(clippy::indexing_slicing)]
impl LayeredBfs {
	pub fn new(capacity: usize) -> Self {
		Self {
			sets: UnionFind::new(capacity),
			distance: vec![UNSET; capacity],
		}
	}

	#[inline]
	pub fn capacity(&self) -> usize {
		self.distance.len()
	}

	pub fn sets(&self) -> &UnionFind {
		&self.sets
	}

	pub fn distances(&self) -> &[isize] {
		&self.distance
	}

	pub fn distance(&self, vertex: usize) -> Option<usize> {
		usize::try_from(*self.distance.get(vertex)?).ok()
	}

	fn validate(
		&self,
		source: usize,
		vertex_count: usize,
		edges: &[[usize; 2]],
	) -> Result<(), ErrPack<BfsError>> {
		if vertex_count > self.capacity() {
			return Err(ErrPack::with_message(
				BfsError::VertexCountExceedsCapacity,
				format!("vertex_count = {vertex_count}, capacity = {}", self.capacity()),
			));
		}
		if source >= vertex_count {
			return Err(ErrPack::with_message(
				BfsError::SourceOutOfRange,
				format!("source = {source}, vertex_count = {vertex_count}"),
			));
		}
		if let Some((j, [u, v])) =
			edges.iter().enumerate().find(|(_, [u, v])| *u >= vertex_count || *v >= vertex_count)
		{
			return Err(ErrPack::with_message(
				BfsError::EdgeEndpointOutOfRange,
				format!("edges[{j}] = ({u}, {v}), vertex_count = {vertex_count}"),
			));
		}
		Ok(())
	}

	/// Fills the distance array with the number of edges on the shortest path
	/// from `source` to each vertex. Unreached vertices stay `UNSET`.
	///
	/// All sets and distances are reset first.
	///
	/// Returns the number of rounds entered. It is never more than `edges.len()`.
	pub fn bfs(
		&mut self,
		source: usize,
		vertex_count: usize,
		edges: &[[usize; 2]],
	) -> Result<usize, ErrPack<BfsError>> {
		self.validate(source, vertex_count, edges)?;

		self.sets.reset();
		self.distance.fill(UNSET);
		self.distance[source] = 0;

		let m = edges.len();
		let mut rounds = 0;
		for d in 1..=m {
			rounds = d;
			#[allow(clippy::cast_possible_wrap)]
			let dist = d as isize;

			let root_source = self.sets.find(source)?;
			let mut frontier: Option<usize> = None;
			let mut discovered = 0_usize;

			for &[u, v] in edges {
				let root_u = self.sets.find(u)?;
				let root_v = self.sets.find(v)?;
				let new_vertex = if root_u == root_source && root_v != root_source {
					v
				} else if root_u != root_source && root_v == root_source {
					u
				} else {
					continue;
				};

				match frontier {
					None => frontier = Some(new_vertex),
					Some(f) => self.sets.union(f, new_vertex)?,
				}
				self.distance[new_vertex] = dist;
				discovered += 1;
			}

			let Some(f) = frontier else {
				log::debug!("bfs({source}): round {d} found nothing, stopping");
				break;
			};
			log::debug!("bfs({source}): round {d} reached {discovered} edge endpoints");
			self.sets.union(f, source)?;
		}

		log::info!("bfs({source}): {vertex_count} vertices, {m} edges, {rounds} rounds");
		Ok(rounds)
	}
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
	use super::*;

	fn distances(bfs: &LayeredBfs, n: usize) -> Vec<isize> {
		bfs.distances()[..n].to_vec()
	}

	#[test]
	fn test_source_only() {
		let mut bfs = LayeredBfs::new(4);
		let rounds = bfs.bfs(2, 4, &[]).unwrap();
		assert_eq!(rounds, 0);
		assert_eq!(distances(&bfs, 4), [UNSET, UNSET, 0, UNSET]);
		assert_eq!(bfs.distance(2), Some(0));
		assert_eq!(bfs.distance(0), None);
	}

	#[test]
	fn test_frontier_not_merged_mid_round() {
		// Edges are listed in path order, so a vertex found by the first edge is
		// the inner endpoint of the next one in the same scan.
		let mut bfs = LayeredBfs::new(5);
		let edges = [[0, 1], [1, 2], [2, 3], [3, 4]];
		bfs.bfs(0, 5, &edges).unwrap();
		assert_eq!(distances(&bfs, 5), [0, 1, 2, 3, 4]);
	}

	#[test]
	fn test_converging_frontier() {
		//     1
		//   /   \
		// 0       3 - 4
		//   \   /
		//     2
		let mut bfs = LayeredBfs::new(5);
		let edges = [[0, 1], [1, 3], [0, 2], [2, 3], [3, 4]];
		bfs.bfs(0, 5, &edges).unwrap();
		assert_eq!(distances(&bfs, 5), [0, 1, 1, 2, 3]);
	}

	#[test]
	fn test_disconnected() {
		let mut bfs = LayeredBfs::new(6);
		let edges = [[0, 1], [2, 3], [3, 4]];
		bfs.bfs(0, 6, &edges).unwrap();
		assert_eq!(distances(&bfs, 6), [0, 1, UNSET, UNSET, UNSET, UNSET]);
	}

	#[test]
	fn test_self_loops_and_multi_edges() {
		let mut bfs = LayeredBfs::new(3);
		let edges = [[0, 0], [0, 1], [1, 0], [1, 1], [1, 2], [2, 1]];
		bfs.bfs(0, 3, &edges).unwrap();
		assert_eq!(distances(&bfs, 3), [0, 1, 2]);
	}

	#[test]
	fn test_round_bound() {
		// a path needs every round
		let mut bfs = LayeredBfs::new(4);
		assert_eq!(bfs.bfs(0, 4, &[[0, 1], [1, 2], [2, 3]]).unwrap(), 3);

		// a star is done after one round, the second one finds nothing
		let mut bfs = LayeredBfs::new(5);
		assert_eq!(bfs.bfs(0, 5, &[[0, 1], [0, 2], [3, 0], [0, 4]]).unwrap(), 2);
		assert_eq!(distances(&bfs, 5), [0, 1, 1, 1, 1]);
	}

	#[test]
	fn test_rerun_on_same_instance() {
		let edges = [[0, 1], [1, 2], [2, 3]];
		let mut bfs = LayeredBfs::new(4);
		bfs.bfs(0, 4, &edges).unwrap();
		let first = distances(&bfs, 4);
		bfs.bfs(0, 4, &edges).unwrap();
		assert_eq!(distances(&bfs, 4), first);

		bfs.bfs(3, 4, &edges).unwrap();
		assert_eq!(distances(&bfs, 4), [3, 2, 1, 0]);
	}

	#[test]
	fn test_invalid_input() {
		let mut bfs = LayeredBfs::new(4);

		let err = bfs.bfs(0, 5, &[]).unwrap_err();
		assert_eq!(err.code, BfsError::VertexCountExceedsCapacity);

		let err = bfs.bfs(3, 3, &[]).unwrap_err();
		assert_eq!(err.code, BfsError::SourceOutOfRange);

		let err = bfs.bfs(0, 3, &[[0, 1], [1, 3]]).unwrap_err();
		assert_eq!(err.code, BfsError::EdgeEndpointOutOfRange);
		assert!(err.to_string().contains("edges[1] = (1, 3)"));

		// nothing was touched
		assert!(bfs.distances().iter().all(|&d| d == UNSET));
	}
}

//--------------------------------------------------------------------------------------------------
