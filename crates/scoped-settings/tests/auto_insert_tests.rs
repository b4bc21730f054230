//! Auto-insert policy tests
//!
//! A mutable `get` that misses at the root either creates a default entry
//! there or fails, depending on the tree's configuration. Misses from nested
//! scopes always fail, and read-only resolution never inserts.
#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::*;
use scoped_settings::prelude::*;

fn strict_tree() -> ScopeTree {
	ScopeTree::with_config(TreeConfig::builder().auto_insert(false).build())
}

#[test]
fn test_default_config_enables_auto_insert() {
	let tree = ScopeTree::new();
	assert!(tree.config().auto_insert);
}

#[test]
fn test_get_on_empty_root_inserts_default() {
	setup_test_logging();
	let mut tree = ScopeTree::new();
	let root = tree.root();

	let render = tree.get::<Render>(root).unwrap();
	assert_eq!(tree.value::<Render>(render).unwrap(), &Render::default());
	assert_eq!(tree.parent(render).unwrap(), Some(root));
	assert!(tree.contains::<Render>(root).unwrap());

	// second lookup finds the inserted entry
	assert_eq!(tree.get::<Render>(root).unwrap(), render);
}

#[test]
fn test_get_miss_from_nested_scope_fails() {
	setup_test_logging();
	let mut tree = ScopeTree::new();
	let root = tree.root();
	let dialog = tree.push::<Dialog>(root).unwrap();
	let theme = tree.push::<Theme>(dialog).unwrap();

	let err = tree.get::<Audio>(theme).unwrap_err();
	assert_eq!(err, Error::NotFound { type_name: std::any::type_name::<Audio>() });
	assert_eq!(tree.len(), 3);
	assert!(!tree.contains::<Audio>(root).unwrap());

	// the same miss from the root inserts there
	let audio = tree.get::<Audio>(root).unwrap();
	assert_eq!(tree.parent(audio).unwrap(), Some(root));
	assert_eq!(tree.get::<Audio>(theme).unwrap(), audio);
}

#[test]
fn test_cursor_get_miss_below_root_fails() {
	let mut tree = ScopeTree::new();
	let dialog = tree.root_mut().push::<Dialog>().unwrap();
	assert!(matches!(dialog.get::<Audio>(), Err(Error::NotFound { .. })));
	assert!(tree.root_ref().find::<Audio>().unwrap().is_none());
}

#[test]
fn test_get_fails_when_policy_disabled() {
	let mut tree = strict_tree();
	let root = tree.root();

	let err = tree.get::<Render>(root).unwrap_err();
	assert_eq!(err, Error::NotFound { type_name: std::any::type_name::<Render>() });
	assert!(!err.is_corruption());
	assert!(tree.is_empty());

	let dialog = tree.push::<Dialog>(root).unwrap();
	assert!(matches!(tree.get::<Render>(dialog), Err(Error::NotFound { .. })));
	assert_eq!(tree.len(), 2);
}

#[test]
fn test_resolve_never_inserts() {
	let mut tree = ScopeTree::new();
	let root = tree.root();

	assert!(matches!(tree.resolve::<Render>(root), Err(Error::NotFound { .. })));
	assert!(matches!(tree.root_ref().get::<Render>(), Err(Error::NotFound { .. })));
	assert!(tree.is_empty());

	tree.push::<Render>(root).unwrap();
	assert_eq!(tree.root_ref().get::<Render>().unwrap().width, 1280);
}

#[test]
fn test_chained_get_applies_policy_per_step() {
	let mut tree = ScopeTree::new();
	let root = tree.root();
	let dialog = tree.push::<Dialog>(root).unwrap();

	// Dialog resolves at the root, Audio is then looked up from Dialog's entry
	let err = tree.get_path::<(Dialog, Audio)>(root).unwrap_err();
	assert_eq!(err, Error::NotFound { type_name: std::any::type_name::<Audio>() });
	assert!(!tree.contains::<Audio>(root).unwrap());
	assert!(!tree.contains::<Audio>(dialog).unwrap());

	// the first step runs from the root and may insert, the second finds
	// Dialog through Render's ancestors
	let found = tree.get_path::<(Render, Dialog)>(root).unwrap();
	assert_eq!(found, dialog);
	assert!(tree.contains::<Render>(root).unwrap());

	let mut strict = strict_tree();
	let strict_root = strict.root();
	assert!(matches!(
		strict.get_path::<(Dialog, Audio)>(strict_root),
		Err(Error::NotFound { .. })
	));
	assert!(strict.is_empty());
}

#[test]
fn test_cursor_get_inserts_and_edits() {
	let mut tree = ScopeTree::new();
	tree.root_mut().get::<Audio>().unwrap().volume = 5;
	assert_eq!(tree.root_ref().get::<Audio>().unwrap().volume, 5);

	let mut strict = strict_tree();
	assert!(strict.root_mut().get::<Audio>().is_err());
}

// vim: ts=4
