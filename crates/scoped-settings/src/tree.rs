//! Scope tree
//!
//! Every node of the tree is a scope. A scope holds at most one entry per
//! payload type, and every entry is itself a scope under which further
//! types can be pushed. Lookups walk from a node towards the root, so a
//! scope sees the nearest entry for a type among itself and its ancestors.
//!
//! Entries are created lazily. `push` gives a scope its own entry for a
//! type, starting from a copy of the nearest ancestor's value (nested
//! entries are not copied) or from the default when no ancestor has one.

use scoped_settings_types::payload::boxed_default;
use scoped_settings_types::prelude::*;
use scoped_settings_types::{ErasedPayload, Payload, TreeConfig, TypeKey};

use crate::arena::Arena;
use crate::cursor::{ScopeMut, ScopeRef};
use crate::node::Node;
use crate::path::ScopePath;

/// Arena-backed tree of type-keyed scopes.
///
/// Nodes are addressed by [`NodeId`] handles. Operations take the handle of
/// the "current" scope and return the handle of the scope or entry they
/// resolve to. [`ScopeTree::root_mut`] and [`ScopeTree::root_ref`] offer the
/// same operations through borrowing cursors.
///
/// Handles are only meaningful for the tree that produced them.
pub struct ScopeTree {
	arena: Arena,
	root: NodeId,
	config: TreeConfig,
}

impl ScopeTree {
	/// Create a tree with the default configuration (auto-insert enabled)
	pub fn new() -> Self {
		Self::with_config(TreeConfig::default())
	}

	pub fn with_config(config: TreeConfig) -> Self {
		let mut arena = Arena::default();
		let root = arena.insert(Node::root());
		debug!("Created scope tree (auto_insert: {})", config.auto_insert);
		Self { arena, root, config }
	}

	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	pub fn root(&self) -> NodeId {
		self.root
	}

	/// Number of live nodes, root included
	pub fn len(&self) -> usize {
		self.arena.len()
	}

	/// Whether the root holds no entries
	pub fn is_empty(&self) -> bool {
		self.arena.get(self.root).is_ok_and(|root| root.entries.is_empty())
	}

	pub fn is_root(&self, id: NodeId) -> bool {
		id == self.root
	}

	/// Whether the handle names a live node of this tree
	pub fn contains_node(&self, id: NodeId) -> bool {
		self.arena.get(id).is_ok()
	}

	pub fn parent(&self, id: NodeId) -> StResult<Option<NodeId>> {
		Ok(self.arena.get(id)?.parent)
	}

	/// Number of ancestors of the node (0 for the root)
	pub fn depth(&self, id: NodeId) -> StResult<usize> {
		let mut depth = 0;
		let mut cur = self.arena.get(id)?.parent;
		while let Some(parent) = cur {
			depth += 1;
			cur = self.arena.get(parent)?.parent;
		}
		Ok(depth)
	}

	/// Key the node is stored under in its parent, `None` for the root
	pub fn key_of(&self, id: NodeId) -> StResult<Option<TypeKey>> {
		Ok(self.arena.get(id)?.key)
	}

	/// Direct entries of a scope, in no particular order
	pub fn entries(&self, id: NodeId) -> StResult<impl Iterator<Item = (TypeKey, NodeId)> + '_> {
		Ok(self.arena.get(id)?.entries.iter().map(|(key, child)| (*key, *child)))
	}

	/// Whether the scope itself (ancestors not consulted) has an entry for `T`
	pub fn contains<T: Payload>(&self, at: NodeId) -> StResult<bool> {
		Ok(self.local_entry::<T>(at)?.is_some())
	}

	/// Ensure `at` has its own entry for `T` and return it.
	///
	/// An existing entry is returned as is. Otherwise the new entry starts
	/// from a copy of the nearest ancestor's value for `T` (without its
	/// nested entries), or from `T::default()` if no ancestor has one.
	pub fn push<T: Payload>(&mut self, at: NodeId) -> StResult<NodeId> {
		if let Some(existing) = self.local_entry::<T>(at)? {
			return Ok(existing);
		}

		let key = TypeKey::of::<T>();
		let donor = match self.arena.get(at)?.parent {
			Some(parent) => self.find::<T>(parent)?,
			None => None,
		};

		let payload = match donor {
			Some(donor) => {
				debug!("Inheriting {} from {} into {}", key, donor, at);
				self.payload(donor)?.clone_boxed()
			}
			None => {
				debug!("Creating default {} in {}", key, at);
				boxed_default::<T>()
			}
		};

		self.emplace(at, key, payload)
	}

	/// Push each type of the path in turn, starting at `at`; returns the last entry
	pub fn push_path<P: ScopePath>(&mut self, at: NodeId) -> StResult<NodeId> {
		P::push_from(self, at)
	}

	/// Give `at` a default-valued entry for `T`, never inheriting.
	///
	/// An existing entry is reset in place: its value becomes `T::default()`
	/// and its nested entries are released. Handles into the released
	/// entries become invalid.
	pub fn push_default<T: Payload>(&mut self, at: NodeId) -> StResult<NodeId> {
		let key = TypeKey::of::<T>();

		let Some(existing) = self.local_entry::<T>(at)? else {
			debug!("Creating default {} in {}", key, at);
			return self.emplace(at, key, boxed_default::<T>());
		};

		let released = self.release_entries(existing)?;
		if let Some(payload) = self.arena.get_mut(existing)?.payload.as_mut() {
			payload.reset();
		}
		debug!("Reset {} in {} to default ({} nested node(s) released)", key, at, released);
		Ok(existing)
	}

	/// Return the ancestor `count` levels above `at`.
	///
	/// `pop(at, 0)` returns `at` itself.
	pub fn pop(&self, at: NodeId, count: usize) -> StResult<NodeId> {
		let mut cur = at;
		for available in 0..count {
			match self.arena.get(cur)?.parent {
				Some(parent) => cur = parent,
				None => return Err(Error::NoParent { requested: count, available }),
			}
		}
		// validates `at` when count == 0
		self.arena.get(cur)?;
		Ok(cur)
	}

	/// Resolve the nearest entry for `T` from `at` up to the root.
	///
	/// A miss at the root itself falls under the auto-insert policy: if
	/// enabled a default entry is created there. Any other miss, including
	/// one from a nested scope, fails with `NotFound`.
	pub fn get<T: Payload>(&mut self, at: NodeId) -> StResult<NodeId> {
		if let Some(found) = self.find::<T>(at)? {
			return Ok(found);
		}

		let key = TypeKey::of::<T>();
		if !(self.is_root(at) && self.config.auto_insert) {
			trace!("No {} visible from {}", key, at);
			return Err(Error::NotFound { type_name: key.name() });
		}

		debug!("Auto-inserting default {} at root", key);
		self.emplace(at, key, boxed_default::<T>())
	}

	/// Chained `get`: resolve each type of the path from the previous result
	pub fn get_path<P: ScopePath>(&mut self, at: NodeId) -> StResult<NodeId> {
		P::get_from(self, at)
	}

	/// Resolve the nearest entry for `T` without ever inserting
	pub fn resolve<T: Payload>(&self, at: NodeId) -> StResult<NodeId> {
		self.find::<T>(at)?
			.ok_or(Error::NotFound { type_name: std::any::type_name::<T>() })
	}

	/// Chained `resolve`
	pub fn resolve_path<P: ScopePath>(&self, at: NodeId) -> StResult<NodeId> {
		P::resolve_from(self, at)
	}

	/// Probe for the nearest entry for `T` from `at` up to the root.
	///
	/// A miss is `Ok(None)`; only an invalid handle or a corrupted entry
	/// produce an error.
	pub fn find<T: Payload>(&self, at: NodeId) -> StResult<Option<NodeId>> {
		let mut cur = Some(at);
		while let Some(id) = cur {
			if let Some(found) = self.local_entry::<T>(id)? {
				trace!("Found {} for {} in {}", TypeKey::of::<T>(), at, id);
				return Ok(Some(found));
			}
			cur = self.arena.get(id)?.parent;
		}
		Ok(None)
	}

	/// Value held by an entry
	pub fn value<T: Payload>(&self, id: NodeId) -> StResult<&T> {
		let node = self.arena.get(id)?;
		let held = node.held_type_name();
		node.payload
			.as_deref()
			.and_then(|payload| payload.downcast_ref::<T>())
			.ok_or(Error::TypeMismatch { expected: std::any::type_name::<T>(), found: held })
	}

	pub fn value_mut<T: Payload>(&mut self, id: NodeId) -> StResult<&mut T> {
		let node = self.arena.get_mut(id)?;
		let held = node.held_type_name();
		node.payload
			.as_deref_mut()
			.and_then(|payload| payload.downcast_mut::<T>())
			.ok_or(Error::TypeMismatch { expected: std::any::type_name::<T>(), found: held })
	}

	/// Mutable cursor at the root
	pub fn root_mut(&mut self) -> ScopeMut<'_> {
		let root = self.root;
		ScopeMut::new(self, root)
	}

	/// Mutable cursor at any live node
	pub fn scope_mut(&mut self, id: NodeId) -> StResult<ScopeMut<'_>> {
		self.arena.get(id)?;
		Ok(ScopeMut::new(self, id))
	}

	/// Read-only cursor at the root
	pub fn root_ref(&self) -> ScopeRef<'_> {
		ScopeRef::new(self, self.root)
	}

	/// Read-only cursor at any live node
	pub fn scope(&self, id: NodeId) -> StResult<ScopeRef<'_>> {
		self.arena.get(id)?;
		Ok(ScopeRef::new(self, id))
	}

	/// Entry for `T` stored directly at `at`, type-checked
	fn local_entry<T: Payload>(&self, at: NodeId) -> StResult<Option<NodeId>> {
		let key = TypeKey::of::<T>();
		let Some(&child) = self.arena.get(at)?.entries.get(&key) else {
			return Ok(None);
		};

		let node = self.arena.get(child)?;
		let matches = node.payload.as_deref().is_some_and(|payload| payload.is::<T>());
		if !matches {
			let found = node.held_type_name();
			error!("Scope tree corruption: entry {} under key {} holds {}", child, key, found);
			return Err(Error::TypeMismatch { expected: key.name(), found });
		}
		Ok(Some(child))
	}

	fn payload(&self, id: NodeId) -> StResult<&dyn ErasedPayload> {
		let node = self.arena.get(id)?;
		node.payload.as_deref().ok_or(Error::InvalidNode(id))
	}

	fn emplace(
		&mut self,
		at: NodeId,
		key: TypeKey,
		payload: Box<dyn ErasedPayload>,
	) -> StResult<NodeId> {
		self.arena.get(at)?;
		let id = self.arena.insert(Node::entry(at, key, payload));
		self.arena.get_mut(at)?.entries.insert(key, id);
		Ok(id)
	}

	/// Drop every node below `id`, keeping `id` itself
	fn release_entries(&mut self, id: NodeId) -> StResult<usize> {
		let mut pending: Vec<NodeId> =
			self.arena.get_mut(id)?.entries.drain().map(|(_, child)| child).collect();
		let mut released = 0;
		while let Some(child) = pending.pop() {
			if let Some(node) = self.arena.remove(child) {
				trace!("Released {}", child);
				pending.extend(node.entries.into_values());
				released += 1;
			}
		}
		Ok(released)
	}

	pub(crate) fn node(&self, id: NodeId) -> StResult<&Node> {
		self.arena.get(id)
	}

	/// Store a payload under an arbitrary key, bypassing type checks
	#[cfg(test)]
	pub(crate) fn insert_raw(
		&mut self,
		at: NodeId,
		key: TypeKey,
		payload: Box<dyn ErasedPayload>,
	) -> StResult<NodeId> {
		self.emplace(at, key, payload)
	}
}

impl Default for ScopeTree {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ScopeTree {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScopeTree")
			.field("root", &self.root)
			.field("nodes", &self.arena.len())
			.field("config", &self.config)
			.finish()
	}
}


// vim: ts=4
