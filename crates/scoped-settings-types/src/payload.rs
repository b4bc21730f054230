//! Payload capability traits
//!
//! A payload is the settings object stored for one type at one scope. The
//! tree needs exactly two things from it: a default value for fresh entries
//! and a value copy for inherited ones. `ErasedPayload` exposes those through
//! a trait object so a node can hold entries of many types side by side.

use std::any::Any;

use crate::type_key::TypeKey;

/// A type that can be stored in a scope tree.
///
/// Implemented for every `'static` type that is `Clone + Default`.
pub trait Payload: Any + Clone + Default {}

impl<T: Any + Clone + Default> Payload for T {}

/// Object-safe view of a payload
pub trait ErasedPayload: Any {
	/// Copy the value into a new box
	fn clone_boxed(&self) -> Box<dyn ErasedPayload>;

	/// Replace the value with the type's default
	fn reset(&mut self);

	/// Key of the concrete type behind the trait object
	fn type_key(&self) -> TypeKey;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Payload> ErasedPayload for T {
	fn clone_boxed(&self) -> Box<dyn ErasedPayload> {
		Box::new(self.clone())
	}

	fn reset(&mut self) {
		*self = T::default();
	}

	fn type_key(&self) -> TypeKey {
		TypeKey::of::<T>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl dyn ErasedPayload {
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut::<T>()
	}

	pub fn is<T: Any>(&self) -> bool {
		self.as_any().is::<T>()
	}
}

/// Box a default-constructed `T`
pub fn boxed_default<T: Payload>() -> Box<dyn ErasedPayload> {
	Box::new(T::default())
}


// vim: ts=4
