//! Runtime identity of payload types

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime key identifying one payload type.
///
/// Equality and hashing consider only the `TypeId`; the type name is carried
/// along as a diagnostic label.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	pub fn of<T: Any>() -> Self {
		Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
	}

	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Fully qualified type name
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Type name with module paths stripped (`Vec<alloc::string::String>` -> `Vec<String>`)
	pub fn short_name(&self) -> String {
		let mut out = String::with_capacity(self.name.len());
		let mut segment = String::new();
		for c in self.name.chars() {
			match c {
				'<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
					out.push_str(last_path_segment(&segment));
					segment.clear();
					out.push(c);
				}
				_ => segment.push(c),
			}
		}
		out.push_str(last_path_segment(&segment));
		out
	}
}

fn last_path_segment(path: &str) -> &str {
	path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeKey").field(&self.name).finish()
	}
}

impl fmt::Display for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}


// vim: ts=4
