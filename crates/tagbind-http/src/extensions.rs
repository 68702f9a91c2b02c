//! Request-scoped typed storage
//!
//! A router attaches the matched [`RouteContext`](crate::RouteContext) here
//! and the binder's path lookups read it back.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

type Slots = HashMap<TypeId, Box<dyn Any + Send + Sync>>;

/// One value per type, shared by clones of the same request handle
#[derive(Clone, Default)]
pub struct Extensions {
	slots: Arc<Mutex<Slots>>,
}

impl Extensions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `value`, replacing an earlier value of the same type
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_http::{Extensions, RouteContext};
	///
	/// let extensions = Extensions::new();
	/// extensions.insert(RouteContext::from_pairs([("id", "1")]));
	/// extensions.insert(RouteContext::from_pairs([("id", "2")]));
	///
	/// let ctx = extensions.get::<RouteContext>().unwrap();
	/// assert_eq!(ctx.url_param("id"), Some("2"));
	/// ```
	pub fn insert<T: Send + Sync + 'static>(&self, value: T) {
		self.lock().insert(TypeId::of::<T>(), Box::new(value));
	}

	/// A copy of the stored `T`, if any
	pub fn get<T>(&self) -> Option<T>
	where
		T: Clone + Send + Sync + 'static,
	{
		self.lock()
			.get(&TypeId::of::<T>())
			.and_then(|slot| slot.downcast_ref::<T>())
			.cloned()
	}

	// A panic while holding the lock cannot leave a half-written map behind.
	fn lock(&self) -> std::sync::MutexGuard<'_, Slots> {
		self.slots.lock().unwrap_or_else(|e| e.into_inner())
	}
}

impl fmt::Debug for Extensions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Extensions")
			.field("len", &self.lock().len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::RouteContext;
	use rstest::rstest;

	#[rstest]
	fn test_missing_type_is_none() {
		let extensions = Extensions::new();
		extensions.insert(1u8);
		assert_eq!(extensions.get::<RouteContext>(), None);
	}

	#[rstest]
	fn test_route_context_round_trip() {
		let extensions = Extensions::new();
		let ctx = RouteContext::from_pairs([("slug", "intro")]);
		extensions.insert(ctx.clone());
		assert_eq!(extensions.get::<RouteContext>(), Some(ctx));
	}

	#[rstest]
	fn test_clones_share_storage() {
		let extensions = Extensions::new();
		let cloned = extensions.clone();
		cloned.insert(RouteContext::from_pairs([("id", "7")]));

		let ctx = extensions.get::<RouteContext>().unwrap();
		assert_eq!(ctx.url_param("id"), Some("7"));
	}
}
