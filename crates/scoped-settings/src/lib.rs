//! Hierarchical, type-keyed settings scopes.
//!
//! A [`ScopeTree`] is a tree of scopes. Each scope holds at most one
//! settings value per payload type, and every such entry is itself a scope
//! that can hold entries for further types. Lookups walk from the current
//! scope towards the root, so nested scopes see their ancestors' settings.
//! Pushing a type into a nested scope gives it a private copy of the
//! nearest ancestor's value to diverge from, which is how scoped overrides
//! are expressed:
//!
//! ```text
//! let mut tree = ScopeTree::new();
//! tree.root_mut().push::<Render>()?.width = 800;
//!
//! let mut dialog = tree.root_mut().push::<Dialog>()?;
//! dialog.reborrow().push::<Render>()?.width = 320;   // copy of the root's Render
//! ```
//!
//! Payload types only need `Clone + Default`; see [`Payload`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod arena;
pub mod cursor;
pub mod dump;
mod node;
pub mod path;
pub mod prelude;
pub mod tree;

pub use cursor::{EntryMut, EntryRef, ScopeMut, ScopeRef};
pub use dump::{TreeDump, WalkEntry};
pub use path::ScopePath;
pub use tree::ScopeTree;

pub use scoped_settings_types::{
	Error, NodeId, Payload, StResult, TreeConfig, TreeConfigBuilder, TypeKey,
};

// vim: ts=4
