//! Scope tree vertices

use std::collections::HashMap;

use scoped_settings_types::{ErasedPayload, NodeId, TypeKey};

/// One vertex of the tree.
///
/// The root is a bare scope without key or payload. Every other node is the
/// entry for one type under its parent: `key` is the type it is stored
/// under and `payload` holds the settings value for that type.
pub(crate) struct Node {
	pub(crate) parent: Option<NodeId>,
	pub(crate) key: Option<TypeKey>,
	pub(crate) payload: Option<Box<dyn ErasedPayload>>,
	pub(crate) entries: HashMap<TypeKey, NodeId>,
}

impl Node {
	pub(crate) fn root() -> Self {
		Self { parent: None, key: None, payload: None, entries: HashMap::new() }
	}

	pub(crate) fn entry(parent: NodeId, key: TypeKey, payload: Box<dyn ErasedPayload>) -> Self {
		Self { parent: Some(parent), key: Some(key), payload: Some(payload), entries: HashMap::new() }
	}

	/// Label of the type actually held, for mismatch reports
	pub(crate) fn held_type_name(&self) -> &'static str {
		self.payload.as_ref().map_or("(scope root)", |p| p.type_key().name())
	}
}

// vim: ts=4
