//! Error types for scope tree operations

use std::fmt;

use crate::types::NodeId;

pub type StResult<T> = std::result::Result<T, Error>;

/// Scope tree errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// No entry for the type exists between the current node and the root
	NotFound { type_name: &'static str },

	/// `pop` asked to ascend past the root
	NoParent { requested: usize, available: usize },

	/// An entry stored under a type's key holds a different type.
	/// This is tree corruption, not a recoverable condition.
	TypeMismatch { expected: &'static str, found: &'static str },

	/// The handle does not name a live node of this tree
	InvalidNode(NodeId),
}

impl Error {
	/// Whether the error reports a broken tree invariant rather than a lookup miss
	pub fn is_corruption(&self) -> bool {
		matches!(self, Error::TypeMismatch { .. })
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NotFound { type_name } => {
				write!(f, "type not found: no entry for {} in any enclosing scope", type_name)
			}
			Error::NoParent { requested, available } => {
				write!(
					f,
					"no parent to pop to: requested {} level(s), only {} available",
					requested, available
				)
			}
			Error::TypeMismatch { expected, found } => {
				write!(f, "existing entry has unexpected type: expected {}, found {}", expected, found)
			}
			Error::InvalidNode(id) => write!(f, "invalid node handle: {}", id),
		}
	}
}

impl std::error::Error for Error {}


// vim: ts=4
