//! Node handles

use std::fmt;

/// Handle to a node of a scope tree.
///
/// A handle stays valid for as long as the node it names is part of the
/// tree. Nodes released by `push_default` bump the generation of their slot,
/// so an old handle is rejected instead of silently naming whatever node
/// reuses the slot later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
	index: usize,
	generation: u32,
}

impl NodeId {
	pub fn new(index: usize, generation: u32) -> Self {
		Self { index, generation }
	}

	pub fn index(self) -> usize {
		self.index
	}

	pub fn generation(self) -> u32 {
		self.generation
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}v{}", self.index, self.generation)
	}
}


// vim: ts=4
