//! Diagnostic dump of a scope tree
//!
//! One line per entry with its type name, indented two spaces per nesting
//! level. Entries of a scope are listed in type-name order.

use std::fmt;

use itertools::Itertools;
use scoped_settings_types::prelude::*;
use scoped_settings_types::TypeKey;

use crate::tree::ScopeTree;

/// One entry met during a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkEntry {
	/// Nesting level below the walk's starting scope, starting at 0
	pub depth: usize,
	pub key: TypeKey,
	pub id: NodeId,
}

/// Displayable dump of the entries below one scope
pub struct TreeDump<'t> {
	tree: &'t ScopeTree,
	from: NodeId,
}

impl ScopeTree {
	/// Depth-first, pre-order list of the entries below `from`
	pub fn walk(&self, from: NodeId) -> StResult<Vec<WalkEntry>> {
		let mut out = Vec::new();
		let mut pending = vec![(0usize, from)];
		while let Some((depth, id)) = pending.pop() {
			let children = self
				.node(id)?
				.entries
				.iter()
				.map(|(key, child)| (*key, *child))
				.sorted_by_key(|(key, _)| key.name())
				.collect::<Vec<_>>();

			if id != from {
				if let Some(key) = self.node(id)?.key {
					out.push(WalkEntry { depth: depth - 1, key, id });
				}
			}
			pending.extend(children.into_iter().rev().map(|(_, child)| (depth + 1, child)));
		}
		Ok(out)
	}

	/// Dump of the whole tree
	pub fn dump(&self) -> String {
		TreeDump { tree: self, from: self.root() }.to_string()
	}

	/// Dump of the entries below `from`
	pub fn dump_from(&self, from: NodeId) -> StResult<TreeDump<'_>> {
		self.node(from)?;
		Ok(TreeDump { tree: self, from })
	}

	/// Emit the dump of the whole tree through `tracing` at debug level
	pub fn log_tree(&self) {
		let _span = debug_span!("scope_tree", nodes = self.len()).entered();
		match self.walk(self.root()) {
			Ok(entries) => {
				for entry in entries {
					let line = format!("{:indent$}{}", "", entry.key, indent = entry.depth * 2);
					debug!(depth = entry.depth, "{}", line);
				}
			}
			Err(err) => warn!("Cannot walk scope tree: {}", err),
		}
	}
}

impl fmt::Display for TreeDump<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let entries = self.tree.walk(self.from).map_err(|_| fmt::Error)?;
		for entry in entries {
			writeln!(f, "{:indent$}{}", "", entry.key, indent = entry.depth * 2)?;
		}
		Ok(())
	}
}

impl fmt::Debug for TreeDump<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TreeDump").field("from", &self.from).finish_non_exhaustive()
	}
}


// vim: ts=4
