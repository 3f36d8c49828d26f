// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.

use dsets::ErrPack;
use dsets::bfs::LayeredBfs;
use dsets::error::BfsError;
use dsets::union_find::UnionFind;

fn path_compression_demo() -> Result<(), ErrPack<BfsError>> {
	let mut d = UnionFind::default();
	for (child, parent) in [(1, 3), (3, 5), (5, 7)] {
		if let Err(err) = d.set_parent(child, Some(parent)) {
			log::error!("cannot link {child} -> {parent}: {err}");
		}
	}

	println!("d.find(3) = {}", d.find(3)?);
	for i in [1, 3, 5, 7] {
		println!("d.s({i}) = {}", d.parent_codes()[i]);
	}
	Ok(())
}

fn bfs_demo() -> Result<(), ErrPack<BfsError>> {
	const NUM_VERTS: usize = 8;
	const START_VERTEX: usize = 3;
	let edges = [[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 6], [6, 7], [7, 3]];

	let mut d = LayeredBfs::default();
	d.bfs(START_VERTEX, NUM_VERTS, &edges)?;

	for (i, dist) in d.distances().iter().take(NUM_VERTS).enumerate() {
		println!("Distance to vertex {i} is {dist}");
	}
	Ok(())
}

fn main() -> Result<(), ErrPack<BfsError>> {
	if let Err(err) = stderrlog::new().module("dsets").verbosity(2).init() {
		eprintln!("cannot initialize logging: {err}");
	}

	path_compression_demo()?;
	println!();
	bfs_demo()
}
