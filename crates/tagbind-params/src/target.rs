//! Destination shapes a field can be bound into
//!
//! [`Target`] is the closed set of field shapes the binder knows how to
//! populate. Every shape it cannot populate is named by a [`TypeKind`], so
//! adding a shape is a compile-time change to every `match` over it.

use serde::de::DeserializeOwned;
use std::fmt;
use tagbind_codec::{Codec, CodecError, NegotiatedCodec};

/// A writable view of one destination field
pub enum Target<'a> {
	Bool(&'a mut bool),
	I8(&'a mut i8),
	I16(&'a mut i16),
	I32(&'a mut i32),
	I64(&'a mut i64),
	Isize(&'a mut isize),
	U8(&'a mut u8),
	U16(&'a mut u16),
	U32(&'a mut u32),
	U64(&'a mut u64),
	Usize(&'a mut usize),
	F32(&'a mut f32),
	F64(&'a mut f64),
	Str(&'a mut String),
	/// Record, map or pointer-to-record decoded through a codec
	Structured(StructuredTarget<'a>),
	/// A field shape that cannot be bound
	Unsupported(TypeKind),
}

impl<'a> Target<'a> {
	/// View a primitive or `String` field
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_params::Target;
	///
	/// let mut port = 0u16;
	/// let target = Target::of(&mut port);
	/// assert_eq!(target.type_name(), "u16");
	/// ```
	pub fn of<T: IntoTarget>(field: &'a mut T) -> Self {
		field.into_target()
	}

	/// View a record or map field decoded in place
	pub fn structured<T: DeserializeOwned>(field: &'a mut T) -> Self {
		Self::Structured(StructuredTarget::value(field))
	}

	/// View an optional boxed record, set to `Some` on decode
	pub fn boxed<T: DeserializeOwned>(field: &'a mut Option<Box<T>>) -> Self {
		Self::Structured(StructuredTarget::boxed(field))
	}

	pub fn unsupported(kind: TypeKind) -> Self {
		Self::Unsupported(kind)
	}

	/// Name of the target type, used in diagnostics
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::I8(_) => "i8",
			Self::I16(_) => "i16",
			Self::I32(_) => "i32",
			Self::I64(_) => "i64",
			Self::Isize(_) => "isize",
			Self::U8(_) => "u8",
			Self::U16(_) => "u16",
			Self::U32(_) => "u32",
			Self::U64(_) => "u64",
			Self::Usize(_) => "usize",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::Str(_) => "String",
			Self::Structured(target) => target.type_name(),
			Self::Unsupported(kind) => kind.as_str(),
		}
	}
}

impl fmt::Debug for Target<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Structured(target) => target.fmt(f),
			Self::Unsupported(kind) => f.debug_tuple("Unsupported").field(kind).finish(),
			other => f.debug_tuple("Target").field(&other.type_name()).finish(),
		}
	}
}

/// Field shapes the binder refuses to populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
	/// Fixed-size array or slice
	Array,
	/// Growable sequence or set (`Vec`, `VecDeque`, `HashSet`, ...)
	Sequence,
	/// Channel endpoint
	Channel,
	/// Numeric pair such as a tuple or complex number
	Complex,
	/// Function pointer or closure
	Func,
	/// Reference, or a pointer to something that is not a record
	Pointer,
	/// Raw pointer
	UnsafePointer,
	/// Trait object
	Interface,
	/// Anything unrecognized
	Invalid,
}

impl TypeKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Array => "array",
			Self::Sequence => "sequence",
			Self::Channel => "channel",
			Self::Complex => "complex",
			Self::Func => "func",
			Self::Pointer => "pointer",
			Self::UnsafePointer => "unsafe pointer",
			Self::Interface => "interface",
			Self::Invalid => "invalid",
		}
	}
}

impl fmt::Display for TypeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Whether a structured field holds the value itself or a pointer to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indirection {
	Value,
	Pointer,
}

/// Writes a decoded value into its field
pub(crate) trait DecodeSlot {
	fn decode(&mut self, codec: &NegotiatedCodec, bytes: &[u8]) -> Result<(), CodecError>;
}

struct ValueSlot<'a, T>(&'a mut T);

impl<T: DeserializeOwned> DecodeSlot for ValueSlot<'_, T> {
	fn decode(&mut self, codec: &NegotiatedCodec, bytes: &[u8]) -> Result<(), CodecError> {
		*self.0 = codec.decode(bytes)?;
		Ok(())
	}
}

struct BoxedSlot<'a, T>(&'a mut Option<Box<T>>);

impl<T: DeserializeOwned> DecodeSlot for BoxedSlot<'_, T> {
	fn decode(&mut self, codec: &NegotiatedCodec, bytes: &[u8]) -> Result<(), CodecError> {
		*self.0 = Some(Box::new(codec.decode(bytes)?));
		Ok(())
	}
}

struct RequiredBoxSlot<'a, T>(&'a mut Box<T>);

impl<T: DeserializeOwned> DecodeSlot for RequiredBoxSlot<'_, T> {
	fn decode(&mut self, codec: &NegotiatedCodec, bytes: &[u8]) -> Result<(), CodecError> {
		*self.0 = Box::new(codec.decode(bytes)?);
		Ok(())
	}
}

struct OptionalSlot<'a, T>(&'a mut Option<T>);

impl<T: DeserializeOwned> DecodeSlot for OptionalSlot<'_, T> {
	fn decode(&mut self, codec: &NegotiatedCodec, bytes: &[u8]) -> Result<(), CodecError> {
		*self.0 = Some(codec.decode(bytes)?);
		Ok(())
	}
}

pub(crate) enum Slot<'a> {
	Writable(Box<dyn DecodeSlot + 'a>),
	/// A real location that cannot be written through (shared ownership)
	ReadOnly,
	/// No location at all
	Invalid,
}

/// A record-shaped destination decoded through a codec
pub struct StructuredTarget<'a> {
	type_name: &'static str,
	indirection: Indirection,
	pub(crate) slot: Slot<'a>,
}

impl<'a> StructuredTarget<'a> {
	/// Decode directly into `field`
	pub fn value<T: DeserializeOwned>(field: &'a mut T) -> Self {
		Self::writable::<T>(Indirection::Value, Box::new(ValueSlot(field)))
	}

	/// Decode into a fresh box stored as `Some` in `field`
	pub fn boxed<T: DeserializeOwned>(field: &'a mut Option<Box<T>>) -> Self {
		Self::writable::<T>(Indirection::Pointer, Box::new(BoxedSlot(field)))
	}

	/// Decode into a fresh box replacing `field`
	pub fn boxed_required<T: DeserializeOwned>(field: &'a mut Box<T>) -> Self {
		Self::writable::<T>(Indirection::Pointer, Box::new(RequiredBoxSlot(field)))
	}

	/// Decode into `Some` of `field`
	pub fn optional<T: DeserializeOwned>(field: &'a mut Option<T>) -> Self {
		Self::writable::<T>(Indirection::Pointer, Box::new(OptionalSlot(field)))
	}

	/// A destination that exists but cannot be written, such as an `Arc<T>`
	pub fn read_only<T>() -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			indirection: Indirection::Pointer,
			slot: Slot::ReadOnly,
		}
	}

	/// No destination to write to
	pub fn invalid<T>() -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			indirection: Indirection::Value,
			slot: Slot::Invalid,
		}
	}

	fn writable<T>(indirection: Indirection, slot: Box<dyn DecodeSlot + 'a>) -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			indirection,
			slot: Slot::Writable(slot),
		}
	}

	/// Fully-qualified name of the decoded type (the pointee for pointers)
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn indirection(&self) -> Indirection {
		self.indirection
	}

	pub fn is_pointer(&self) -> bool {
		self.indirection == Indirection::Pointer
	}
}

impl fmt::Debug for StructuredTarget<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let slot = match self.slot {
			Slot::Writable(_) => "writable",
			Slot::ReadOnly => "read-only",
			Slot::Invalid => "invalid",
		};
		f.debug_struct("StructuredTarget")
			.field("type_name", &self.type_name)
			.field("indirection", &self.indirection)
			.field("slot", &slot)
			.finish()
	}
}

/// Primitive field types with a dedicated [`Target`] variant
pub trait IntoTarget {
	fn into_target(&mut self) -> Target<'_>;
}

macro_rules! impl_into_target {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoTarget for $ty {
				fn into_target(&mut self) -> Target<'_> {
					Target::$variant(self)
				}
			}
		)*
	};
}

impl_into_target! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	String => Str,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde::Deserialize;

	#[derive(Debug, Default, Deserialize, PartialEq)]
	struct Inner {
		n: i64,
	}

	#[rstest]
	fn test_value_slot_decodes() {
		let mut inner = Inner::default();
		let mut target = StructuredTarget::value(&mut inner);
		assert!(!target.is_pointer());
		assert!(target.type_name().ends_with("Inner"));

		let Slot::Writable(slot) = &mut target.slot else {
			panic!("expected writable slot");
		};
		slot.decode(&NegotiatedCodec::json(), br#"{"n":3}"#).unwrap();
		drop(target);
		assert_eq!(inner, Inner { n: 3 });
	}

	#[rstest]
	fn test_boxed_slot_sets_some() {
		let mut inner: Option<Box<Inner>> = None;
		let mut target = StructuredTarget::boxed(&mut inner);
		assert!(target.is_pointer());

		let Slot::Writable(slot) = &mut target.slot else {
			panic!("expected writable slot");
		};
		slot.decode(&NegotiatedCodec::json(), br#"{"n":5}"#).unwrap();
		drop(target);
		assert_eq!(inner, Some(Box::new(Inner { n: 5 })));
	}

	#[rstest]
	fn test_failed_decode_leaves_field() {
		let mut inner = Inner { n: 9 };
		let mut target = StructuredTarget::value(&mut inner);
		let Slot::Writable(slot) = &mut target.slot else {
			panic!("expected writable slot");
		};
		assert!(slot.decode(&NegotiatedCodec::json(), b"{").is_err());
		drop(target);
		assert_eq!(inner.n, 9);
	}

	#[rstest]
	#[case(TypeKind::Sequence, "sequence")]
	#[case(TypeKind::UnsafePointer, "unsafe pointer")]
	#[case(TypeKind::Interface, "interface")]
	fn test_type_kind_display(#[case] kind: TypeKind, #[case] expected: &str) {
		assert_eq!(kind.to_string(), expected);
		assert_eq!(Target::unsupported(kind).type_name(), expected);
	}

	#[rstest]
	fn test_of_primitive() {
		let mut flag = false;
		assert!(matches!(Target::of(&mut flag), Target::Bool(_)));
		let mut name = String::new();
		assert_eq!(Target::of(&mut name).type_name(), "String");
	}
}
