//! Field descriptors and the `Bind` visitor

use crate::source::Tag;
use crate::target::Target;

/// One destination field as seen by the binder
///
/// Built fresh on every bind call from the destination's declared tags.
#[derive(Debug)]
pub struct FieldDescriptor<'a> {
	pub name: &'static str,
	pub tags: Vec<Tag>,
	pub target: Target<'a>,
}

impl<'a> FieldDescriptor<'a> {
	/// A field with no tags yet
	pub fn new(name: &'static str, target: Target<'a>) -> Self {
		Self {
			name,
			tags: Vec::new(),
			target,
		}
	}

	pub fn tag(mut self, tag: Tag) -> Self {
		self.tags.push(tag);
		self
	}

	pub fn header(self, key: &'static str) -> Self {
		self.tag(Tag::header(key))
	}

	pub fn query(self, key: &'static str) -> Self {
		self.tag(Tag::query(key))
	}

	pub fn path(self, key: &'static str) -> Self {
		self.tag(Tag::path(key))
	}

	pub fn body(self) -> Self {
		self.tag(Tag::body())
	}
}

/// A record the binder can populate
///
/// Implementations list their tagged fields in declaration order, each
/// with a writable [`Target`]. Untagged fields are simply left out. The
/// `#[derive(Bind)]` macro generates this from `#[bind(...)]` attributes;
/// it can also be written by hand:
///
/// ```
/// use tagbind_params::{Bind, FieldDescriptor, Target};
///
/// #[derive(Default)]
/// struct Paging {
///     page: u32,
///     per_page: u32,
/// }
///
/// impl Bind for Paging {
///     fn fields(&mut self) -> Vec<FieldDescriptor<'_>> {
///         let Self { page, per_page } = self;
///         vec![
///             FieldDescriptor::new("page", Target::of(page)).query("page"),
///             FieldDescriptor::new("per_page", Target::of(per_page)).query("per_page"),
///         ]
///     }
/// }
/// ```
pub trait Bind {
	fn fields(&mut self) -> Vec<FieldDescriptor<'_>>;
}
