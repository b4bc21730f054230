pub use crate::cursor::{EntryMut, EntryRef, ScopeMut, ScopeRef};
pub use crate::path::ScopePath;
pub use crate::tree::ScopeTree;

pub use scoped_settings_types::prelude::*;
pub use scoped_settings_types::{Payload, TreeConfig, TypeKey};

// vim: ts=4
