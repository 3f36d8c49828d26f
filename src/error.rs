//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::ErrPack;

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct IndexOutOfBoundsError;

impl std::error::Error for IndexOutOfBoundsError {}

impl std::fmt::Display for IndexOutOfBoundsError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Element index out of range.")
	}
}

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinkError {
	IndexOutOfBounds,
	WouldCreateCycle,
}

impl std::error::Error for LinkError {}

impl std::fmt::Display for LinkError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::IndexOutOfBounds => write!(f, "Element index out of range."),
			Self::WouldCreateCycle => write!(f, "Parent link would create a cycle."),
		}
	}
}

impl From<IndexOutOfBoundsError> for LinkError {
	fn from(_: IndexOutOfBoundsError) -> Self {
		Self::IndexOutOfBounds
	}
}

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BfsError {
	VertexCountExceedsCapacity,
	SourceOutOfRange,
	EdgeEndpointOutOfRange,
}

impl From<IndexOutOfBoundsError> for ErrPack<BfsError> {
	fn from(_: IndexOutOfBoundsError) -> Self {
		Self {
			code: BfsError::EdgeEndpointOutOfRange,
			extra: None,
		}
	}
}

//--------------------------------------------------------------------------------------------------
