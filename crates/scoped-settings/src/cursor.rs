//! Borrowing cursors over a scope tree
//!
//! `ScopeMut` and `EntryMut` hold the tree mutably and move through it the
//! way a caller moves between scopes: `push` and `get` descend into an
//! entry, `pop` climbs back. Navigation methods consume the cursor and
//! return the next one, so calls chain naturally:
//!
//! ```text
//! tree.root_mut().push::<Window>()?.push::<Font>()?.size = 14;
//! ```
//!
//! `ScopeRef` and `EntryRef` are the read-only counterparts; their `get`
//! never auto-inserts.
//!
//! An entry cursor dereferences to its payload. Its own scope methods take
//! precedence over payload methods of the same name; use `&*entry` to reach
//! the payload explicitly.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use scoped_settings_types::prelude::*;
use scoped_settings_types::Payload;

use crate::path::ScopePath;
use crate::tree::ScopeTree;

/// Mutable cursor positioned at one scope
pub struct ScopeMut<'t> {
	tree: &'t mut ScopeTree,
	id: NodeId,
}

impl<'t> ScopeMut<'t> {
	pub(crate) fn new(tree: &'t mut ScopeTree, id: NodeId) -> Self {
		Self { tree, id }
	}

	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn is_root(&self) -> bool {
		self.tree.is_root(self.id)
	}

	pub fn tree(&self) -> &ScopeTree {
		self.tree
	}

	/// Shorter-lived cursor at the same scope, leaving this one usable afterwards
	pub fn reborrow(&mut self) -> ScopeMut<'_> {
		ScopeMut { tree: &mut *self.tree, id: self.id }
	}

	/// Read-only view of the same scope
	pub fn view(&self) -> ScopeRef<'_> {
		ScopeRef::new(self.tree, self.id)
	}

	pub fn contains<T: Payload>(&self) -> StResult<bool> {
		self.tree.contains::<T>(self.id)
	}

	/// See [`ScopeTree::push`]
	pub fn push<T: Payload>(self) -> StResult<EntryMut<'t, T>> {
		let id = self.tree.push::<T>(self.id)?;
		EntryMut::new(self.tree, id)
	}

	/// See [`ScopeTree::push_path`]
	pub fn push_path<P: ScopePath>(self) -> StResult<EntryMut<'t, P::Last>> {
		let id = self.tree.push_path::<P>(self.id)?;
		EntryMut::new(self.tree, id)
	}

	/// See [`ScopeTree::push_default`]
	pub fn push_default<T: Payload>(self) -> StResult<EntryMut<'t, T>> {
		let id = self.tree.push_default::<T>(self.id)?;
		EntryMut::new(self.tree, id)
	}

	/// See [`ScopeTree::pop`]
	pub fn pop(self, count: usize) -> StResult<ScopeMut<'t>> {
		let id = self.tree.pop(self.id, count)?;
		Ok(ScopeMut::new(self.tree, id))
	}

	/// See [`ScopeTree::get`]
	pub fn get<T: Payload>(self) -> StResult<EntryMut<'t, T>> {
		let id = self.tree.get::<T>(self.id)?;
		EntryMut::new(self.tree, id)
	}

	/// See [`ScopeTree::get_path`]
	pub fn get_path<P: ScopePath>(self) -> StResult<EntryMut<'t, P::Last>> {
		let id = self.tree.get_path::<P>(self.id)?;
		EntryMut::new(self.tree, id)
	}

	/// See [`ScopeTree::find`]
	pub fn find<T: Payload>(&self) -> StResult<Option<EntryRef<'_, T>>> {
		self.view().find::<T>()
	}

	/// Like [`ScopeMut::find`], with mutable access to the entry found
	pub fn find_mut<T: Payload>(&mut self) -> StResult<Option<EntryMut<'_, T>>> {
		match self.tree.find::<T>(self.id)? {
			Some(id) => EntryMut::new(&mut *self.tree, id).map(Some),
			None => Ok(None),
		}
	}
}

impl fmt::Debug for ScopeMut<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScopeMut").field("id", &self.id).finish_non_exhaustive()
	}
}

/// Mutable cursor positioned at the entry for `T`.
///
/// Dereferences to the entry's `T` value and doubles as a scope cursor for
/// the entry's nested types.
///
/// Every method that moves through or edits the tree consumes the cursor,
/// so the entry stays live for as long as the cursor exists. Use
/// [`EntryMut::into_scope`] and [`ScopeMut::reborrow`] for repeated
/// navigation from the entry.
pub struct EntryMut<'t, T: Payload> {
	scope: ScopeMut<'t>,
	_marker: PhantomData<fn() -> T>,
}

impl<'t, T: Payload> EntryMut<'t, T> {
	pub(crate) fn new(tree: &'t mut ScopeTree, id: NodeId) -> StResult<Self> {
		tree.value::<T>(id)?;
		Ok(Self { scope: ScopeMut::new(tree, id), _marker: PhantomData })
	}

	pub fn id(&self) -> NodeId {
		self.scope.id
	}

	/// The entry as a plain scope cursor
	pub fn into_scope(self) -> ScopeMut<'t> {
		self.scope
	}

	/// Overwrite the entry's value, leaving nested entries alone
	pub fn set(&mut self, value: T) {
		**self = value;
	}

	pub fn push<U: Payload>(self) -> StResult<EntryMut<'t, U>> {
		self.scope.push::<U>()
	}

	pub fn push_path<P: ScopePath>(self) -> StResult<EntryMut<'t, P::Last>> {
		self.scope.push_path::<P>()
	}

	pub fn push_default<U: Payload>(self) -> StResult<EntryMut<'t, U>> {
		self.scope.push_default::<U>()
	}

	pub fn pop(self, count: usize) -> StResult<ScopeMut<'t>> {
		self.scope.pop(count)
	}

	pub fn get<U: Payload>(self) -> StResult<EntryMut<'t, U>> {
		self.scope.get::<U>()
	}

	pub fn get_path<P: ScopePath>(self) -> StResult<EntryMut<'t, P::Last>> {
		self.scope.get_path::<P>()
	}

	pub fn find<U: Payload>(&self) -> StResult<Option<EntryRef<'_, U>>> {
		self.scope.find::<U>()
	}
}

impl<T: Payload> Deref for EntryMut<'_, T> {
	type Target = T;

	fn deref(&self) -> &T {
		match self.scope.tree.value::<T>(self.scope.id) {
			Ok(value) => value,
			// checked in `new`; no live cursor can release or retype its entry
			Err(err) => unreachable!("entry cursor lost its payload: {}", err),
		}
	}
}

impl<T: Payload> DerefMut for EntryMut<'_, T> {
	fn deref_mut(&mut self) -> &mut T {
		match self.scope.tree.value_mut::<T>(self.scope.id) {
			Ok(value) => value,
			Err(err) => unreachable!("entry cursor lost its payload: {}", err),
		}
	}
}

impl<T: Payload + fmt::Debug> fmt::Debug for EntryMut<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EntryMut").field("id", &self.scope.id).field("value", &**self).finish()
	}
}

/// Read-only cursor positioned at one scope
#[derive(Clone, Copy)]
pub struct ScopeRef<'t> {
	tree: &'t ScopeTree,
	id: NodeId,
}

impl<'t> ScopeRef<'t> {
	pub(crate) fn new(tree: &'t ScopeTree, id: NodeId) -> Self {
		Self { tree, id }
	}

	pub fn id(&self) -> NodeId {
		self.id
	}

	pub fn is_root(&self) -> bool {
		self.tree.is_root(self.id)
	}

	pub fn tree(&self) -> &'t ScopeTree {
		self.tree
	}

	pub fn depth(&self) -> StResult<usize> {
		self.tree.depth(self.id)
	}

	pub fn contains<T: Payload>(&self) -> StResult<bool> {
		self.tree.contains::<T>(self.id)
	}

	/// Nearest entry for `T`; never inserts. See [`ScopeTree::resolve`]
	pub fn get<T: Payload>(self) -> StResult<EntryRef<'t, T>> {
		EntryRef::new(self.tree, self.tree.resolve::<T>(self.id)?)
	}

	pub fn get_path<P: ScopePath>(self) -> StResult<EntryRef<'t, P::Last>> {
		EntryRef::new(self.tree, self.tree.resolve_path::<P>(self.id)?)
	}

	pub fn find<T: Payload>(self) -> StResult<Option<EntryRef<'t, T>>> {
		self.tree.find::<T>(self.id)?.map(|id| EntryRef::new(self.tree, id)).transpose()
	}

	pub fn pop(self, count: usize) -> StResult<ScopeRef<'t>> {
		Ok(ScopeRef::new(self.tree, self.tree.pop(self.id, count)?))
	}
}

impl fmt::Debug for ScopeRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ScopeRef").field("id", &self.id).finish_non_exhaustive()
	}
}

/// Read-only cursor positioned at the entry for `T`
pub struct EntryRef<'t, T: Payload> {
	scope: ScopeRef<'t>,
	value: &'t T,
}

impl<'t, T: Payload> EntryRef<'t, T> {
	pub(crate) fn new(tree: &'t ScopeTree, id: NodeId) -> StResult<Self> {
		Ok(Self { scope: ScopeRef::new(tree, id), value: tree.value::<T>(id)? })
	}

	pub fn id(&self) -> NodeId {
		self.scope.id
	}

	pub fn value(&self) -> &'t T {
		self.value
	}

	pub fn scope(&self) -> ScopeRef<'t> {
		self.scope
	}

	pub fn get<U: Payload>(&self) -> StResult<EntryRef<'t, U>> {
		self.scope.get::<U>()
	}

	pub fn get_path<P: ScopePath>(&self) -> StResult<EntryRef<'t, P::Last>> {
		self.scope.get_path::<P>()
	}

	pub fn find<U: Payload>(&self) -> StResult<Option<EntryRef<'t, U>>> {
		self.scope.find::<U>()
	}

	pub fn pop(&self, count: usize) -> StResult<ScopeRef<'t>> {
		self.scope.pop(count)
	}
}

impl<T: Payload> Clone for EntryRef<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: Payload> Copy for EntryRef<'_, T> {}

impl<T: Payload> Deref for EntryRef<'_, T> {
	type Target = T;

	fn deref(&self) -> &T {
		self.value
	}
}

impl<T: Payload + fmt::Debug> fmt::Debug for EntryRef<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EntryRef").field("id", &self.scope.id).field("value", self.value).finish()
	}
}


// vim: ts=4
