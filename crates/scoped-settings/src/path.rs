//! Chained push/get over several types
//!
//! A path is a tuple of payload types, `(A, B, C)`. Pushing it pushes `A`
//! at the starting scope, `B` under the resulting entry, then `C` under
//! that one, and yields the last entry. Getting it resolves each type from
//! the previous result, each step following the usual lookup rules.

use scoped_settings_types::prelude::*;
use scoped_settings_types::Payload;

use crate::tree::ScopeTree;

/// A sequence of payload types walked one scope level per type
pub trait ScopePath {
	/// Type of the entry the path ends at
	type Last: Payload;

	fn push_from(tree: &mut ScopeTree, at: NodeId) -> StResult<NodeId>;

	fn get_from(tree: &mut ScopeTree, at: NodeId) -> StResult<NodeId>;

	fn resolve_from(tree: &ScopeTree, at: NodeId) -> StResult<NodeId>;
}

macro_rules! impl_scope_path {
	($($name:ident),+ => $last:ident) => {
		impl<$($name: Payload),+> ScopePath for ($($name,)+) {
			type Last = $last;

			fn push_from(tree: &mut ScopeTree, at: NodeId) -> StResult<NodeId> {
				let mut cur = at;
				$( cur = tree.push::<$name>(cur)?; )+
				Ok(cur)
			}

			fn get_from(tree: &mut ScopeTree, at: NodeId) -> StResult<NodeId> {
				let mut cur = at;
				$( cur = tree.get::<$name>(cur)?; )+
				Ok(cur)
			}

			fn resolve_from(tree: &ScopeTree, at: NodeId) -> StResult<NodeId> {
				let mut cur = at;
				$( cur = tree.resolve::<$name>(cur)?; )+
				Ok(cur)
			}
		}
	};
}

impl_scope_path!(A => A);
impl_scope_path!(A, B => B);
impl_scope_path!(A, B, C => C);
impl_scope_path!(A, B, C, D => D);
impl_scope_path!(A, B, C, D, E => E);
impl_scope_path!(A, B, C, D, E, F => F);
impl_scope_path!(A, B, C, D, E, F, G => G);
impl_scope_path!(A, B, C, D, E, F, G, H => H);

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]
	use super::*;
	use scoped_settings_types::TypeKey;

	#[derive(Clone, Default)]
	struct Window;
	#[derive(Clone, Default)]
	struct Panel;
	#[derive(Clone, Default)]
	struct Font;

	#[test]
	fn test_push_path_builds_nested_entries() {
		let mut tree = ScopeTree::new();
		let root = tree.root();
		let font = tree.push_path::<(Window, Panel, Font)>(root).unwrap();

		assert_eq!(tree.depth(font).unwrap(), 3);
		let panel = tree.pop(font, 1).unwrap();
		assert_eq!(tree.key_of(panel).unwrap(), Some(TypeKey::of::<Panel>()));
		assert_eq!(tree.pop(font, 3).unwrap(), root);
	}

	#[test]
	fn test_single_element_path_is_plain_push() {
		let mut tree = ScopeTree::new();
		let root = tree.root();
		let via_path = tree.push_path::<(Window,)>(root).unwrap();
		assert_eq!(tree.push::<Window>(root).unwrap(), via_path);
	}

	#[test]
	fn test_resolve_path_stops_at_first_miss() {
		let mut tree = ScopeTree::new();
		let root = tree.root();
		tree.push::<Window>(root).unwrap();

		let err = tree.resolve_path::<(Window, Panel)>(root).unwrap_err();
		assert_eq!(err, Error::NotFound { type_name: std::any::type_name::<Panel>() });
	}
}

// vim: ts=4
