//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use smallvec::SmallVec;

use crate::error::{IndexOutOfBoundsError, LinkError};

//--------------------------------------------------------------------------------------------------

pub const DEFAULT_CAPACITY: usize = 256;

/// Parent code of a root element.
pub const ROOT: isize = -1;

/// Forest of up-trees stored as parent codes.
///
/// `link_parent[i] < 0` means `i` is the root of its set,
/// otherwise `link_parent[i]` is the index of the parent of `i`.
///
/// There is no union by rank. `union()` always attaches the root of the first
/// argument under the root of the second one, so chains can get long until
/// `find()` flattens them.
#[derive(Clone, Debug)]
pub struct UnionFind {
	link_parent: Vec<isize>,
}

impl Default for UnionFind {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY)
	}
}

#[allow(clippy::indexing_slicing)]
impl UnionFind {
	pub fn new(size: usize) -> Self {
		Self { link_parent: vec![ROOT; size] }
	}

	#[inline]
	pub fn size(&self) -> usize {
		self.link_parent.len()
	}

	pub fn reset(&mut self) {
		self.link_parent.fill(ROOT);
	}

	#[inline]
	fn check_index(&self, key: usize) -> Result<(), IndexOutOfBoundsError> {
		if key < self.link_parent.len() { Ok(()) } else { Err(index_out_of_bounds(key)) }
	}

	pub fn is_root(&self, key: usize) -> Result<bool, IndexOutOfBoundsError> {
		self.check_index(key)?;
		Ok(self.link_parent[key] < 0)
	}

	/// Returns `None` for roots.
	pub fn parent(&self, key: usize) -> Result<Option<usize>, IndexOutOfBoundsError> {
		self.check_index(key)?;
		let parent = self.link_parent[key];
		#[allow(clippy::cast_sign_loss)]
		let parent = if parent < 0 { None } else { Some(parent as usize) };
		Ok(parent)
	}

	/// Overwrites the parent code of `child`. `None` makes it a root.
	///
	/// Links that would close a cycle are rejected, so every chain still ends in a root.
	pub fn set_parent(&mut self, child: usize, parent: Option<usize>) -> Result<(), LinkError> {
		self.check_index(child)?;
		let Some(parent) = parent else {
			self.link_parent[child] = ROOT;
			return Ok(());
		};
		self.check_index(parent)?;

		// walk up from `parent` without compressing
		let mut key = parent;
		loop {
			if key == child {
				return Err(LinkError::WouldCreateCycle);
			}
			let next = self.link_parent[key];
			if next < 0 {
				break;
			}
			#[allow(clippy::cast_sign_loss)]
			let next = next as usize;
			key = next;
		}

		#[allow(clippy::cast_possible_wrap)]
		let code = parent as isize;
		self.link_parent[child] = code;
		Ok(())
	}

	/// Returns the root of the set containing `key`.
	///
	/// Every element visited on the way up is re-linked directly to the root
	/// before returning, so the whole path has depth 1 afterwards.
	pub fn find(&mut self, key: usize) -> Result<usize, IndexOutOfBoundsError> {
		self.check_index(key)?;
		Ok(self.__find(key))
	}

	fn __find(&mut self, key: usize) -> usize {
		let mut root = key;
		let mut parent = self.link_parent[root];
		if parent < 0 {
			return root;
		}

		let mut path: SmallVec<[usize; 16]> = SmallVec::new();
		while parent >= 0 {
			path.push(root);
			#[allow(clippy::cast_sign_loss)]
			let next = parent as usize;
			root = next;
			parent = self.link_parent[root];
		}

		#[allow(clippy::cast_possible_wrap)]
		let code = root as isize;
		for &node in &path {
			self.link_parent[node] = code;
		}
		log::trace!("UnionFind::find({key}): root {root}, compressed {} links", path.len());
		root
	}

	/// Merges the sets of `key0` and `key1`.
	/// The root of `key0` becomes a child of the root of `key1`.
	pub fn union(&mut self, key0: usize, key1: usize) -> Result<(), IndexOutOfBoundsError> {
		self.check_index(key0)?;
		self.check_index(key1)?;
		let root0 = self.__find(key0);
		let root1 = self.__find(key1);
		if root0 != root1 {
			#[allow(clippy::cast_possible_wrap)]
			let code = root1 as isize;
			self.link_parent[root0] = code;
			log::trace!("UnionFind::union({key0}, {key1}): {root0} -> {root1}");
		}
		Ok(())
	}

	pub fn same_set(&mut self, key0: usize, key1: usize) -> Result<bool, IndexOutOfBoundsError> {
		Ok(self.find(key0)? == self.find(key1)?)
	}

	/// Raw parent codes, `ROOT` for roots.
	pub fn parent_codes(&self) -> &[isize] {
		&self.link_parent
	}
}

#[cold]
#[inline(never)]
fn index_out_of_bounds(key: usize) -> IndexOutOfBoundsError {
	log::debug!("UnionFind: index {key} out of range");
	IndexOutOfBoundsError
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
