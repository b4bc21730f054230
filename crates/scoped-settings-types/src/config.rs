//! Per-tree configuration

use serde::{Deserialize, Serialize};

/// Policy for a scope tree, fixed when the tree is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreeConfig {
	/// Whether a mutable `get` called on the root inserts a default entry
	/// there instead of failing when the type is missing. Misses from nested
	/// scopes fail either way.
	pub auto_insert: bool,
}

impl TreeConfig {
	pub fn builder() -> TreeConfigBuilder {
		TreeConfigBuilder::new()
	}
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self { auto_insert: true }
	}
}

/// Builder for TreeConfig with fluent API
#[derive(Debug, Clone, Default)]
pub struct TreeConfigBuilder {
	config: TreeConfig,
}

impl TreeConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the auto-insert policy (defaults to enabled)
	pub fn auto_insert(mut self, enabled: bool) -> Self {
		self.config.auto_insert = enabled;
		self
	}

	pub fn build(self) -> TreeConfig {
		self.config
	}
}


// vim: ts=4
