//! Generational node storage

use scoped_settings_types::prelude::*;

use crate::node::Node;

struct Slot {
	generation: u32,
	node: Option<Node>,
}

/// Slot arena addressed by `NodeId`.
///
/// Released slots are reused, each reuse under a new generation so stale
/// handles fail with `Error::InvalidNode`. A slot is never reused once its
/// generation counter is exhausted.
#[derive(Default)]
pub(crate) struct Arena {
	slots: Vec<Slot>,
	free: Vec<usize>,
	live: usize,
}

impl Arena {
	pub(crate) fn insert(&mut self, node: Node) -> NodeId {
		self.live += 1;
		if let Some(index) = self.free.pop() {
			if let Some(slot) = self.slots.get_mut(index) {
				slot.node = Some(node);
				return NodeId::new(index, slot.generation);
			}
		}
		let index = self.slots.len();
		self.slots.push(Slot { generation: 0, node: Some(node) });
		NodeId::new(index, 0)
	}

	pub(crate) fn get(&self, id: NodeId) -> StResult<&Node> {
		self.slots
			.get(id.index())
			.filter(|slot| slot.generation == id.generation())
			.and_then(|slot| slot.node.as_ref())
			.ok_or(Error::InvalidNode(id))
	}

	pub(crate) fn get_mut(&mut self, id: NodeId) -> StResult<&mut Node> {
		self.slots
			.get_mut(id.index())
			.filter(|slot| slot.generation == id.generation())
			.and_then(|slot| slot.node.as_mut())
			.ok_or(Error::InvalidNode(id))
	}

	/// Take the node out of its slot and retire the handle
	pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node> {
		let slot = self.slots.get_mut(id.index()).filter(|slot| slot.generation == id.generation())?;
		let node = slot.node.take()?;
		self.live -= 1;
		// a slot whose generation is exhausted stays empty for good
		match slot.generation.checked_add(1) {
			Some(generation) => {
				slot.generation = generation;
				self.free.push(id.index());
			}
			None => trace!("Retiring slot {} after {} generations", id.index(), u32::MAX),
		}
		Some(node)
	}

	pub(crate) fn len(&self) -> usize {
		self.live
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]
	use super::*;

	#[test]
	fn test_insert_get_remove() {
		let mut arena = Arena::default();
		let id = arena.insert(Node::root());
		assert!(arena.get(id).is_ok());
		assert_eq!(arena.len(), 1);

		assert!(arena.remove(id).is_some());
		assert_eq!(arena.len(), 0);
		assert_eq!(arena.get(id).err(), Some(Error::InvalidNode(id)));
		assert!(arena.remove(id).is_none());
	}

	#[test]
	fn test_reused_slot_rejects_stale_handle() {
		let mut arena = Arena::default();
		let old = arena.insert(Node::root());
		arena.remove(old);

		let new = arena.insert(Node::root());
		assert_eq!(new.index(), old.index());
		assert_ne!(new, old);
		assert!(arena.get(old).is_err());
		assert!(arena.get_mut(new).is_ok());
	}

	#[test]
	fn test_exhausted_slot_is_retired() {
		let mut arena = Arena::default();
		let first = arena.insert(Node::root());
		arena.slots[first.index()].generation = u32::MAX;
		let last = NodeId::new(first.index(), u32::MAX);

		assert!(arena.remove(last).is_some());
		assert!(arena.free.is_empty());
		assert_eq!(arena.get(last).err(), Some(Error::InvalidNode(last)));

		let next = arena.insert(Node::root());
		assert_ne!(next.index(), first.index());
		assert_eq!(next.generation(), 0);
		assert_eq!(arena.len(), 1);
	}
}

// vim: ts=4
