//! Raw value to field coercion

use crate::error::{BadDestination, BindError, BindResult};
use crate::target::{Slot, StructuredTarget, Target};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use tagbind_codec::{Codec, NegotiatedCodec};

/// Accepted spellings for boolean values
const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];
const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];

#[derive(Debug, thiserror::Error)]
#[error("invalid syntax")]
struct InvalidSyntax;

#[derive(Debug, thiserror::Error)]
#[error("value out of range")]
struct OutOfRange;

/// Converts raw request values into typed fields
///
/// Header, query and path values arrive as text and go through
/// [`coerce_str`](Self::coerce_str). The body arrives as bytes and always
/// goes through a codec via [`coerce_body`](Self::coerce_body).
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCoercer;

impl TypeCoercer {
	pub fn new() -> Self {
		Self
	}

	/// Store `raw` into `target`
	///
	/// An empty `raw` leaves the field untouched. Structured targets are
	/// decoded as JSON, since text sources carry no content type of their own.
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_params::{Target, TypeCoercer};
	///
	/// let mut retries = 0u8;
	/// TypeCoercer::new()
	///     .coerce_str("retries", "3", &mut Target::of(&mut retries))
	///     .unwrap();
	/// assert_eq!(retries, 3);
	///
	/// let mut ratio = 0.0f64;
	/// TypeCoercer::new()
	///     .coerce_str("ratio", "NaN", &mut Target::of(&mut ratio))
	///     .unwrap();
	/// assert!(ratio.is_nan());
	/// ```
	pub fn coerce_str(&self, field: &'static str, raw: &str, target: &mut Target<'_>) -> BindResult<()> {
		if raw.is_empty() {
			return Ok(());
		}

		match target {
			Target::Bool(slot) => **slot = parse_bool(field, raw)?,
			Target::I8(slot) => **slot = parse_signed(field, raw, "i8")?,
			Target::I16(slot) => **slot = parse_signed(field, raw, "i16")?,
			Target::I32(slot) => **slot = parse_signed(field, raw, "i32")?,
			Target::I64(slot) => **slot = parse_signed(field, raw, "i64")?,
			Target::Isize(slot) => **slot = parse_signed(field, raw, "isize")?,
			Target::U8(slot) => **slot = parse_unsigned(field, raw, "u8")?,
			Target::U16(slot) => **slot = parse_unsigned(field, raw, "u16")?,
			Target::U32(slot) => **slot = parse_unsigned(field, raw, "u32")?,
			Target::U64(slot) => **slot = parse_unsigned(field, raw, "u64")?,
			Target::Usize(slot) => **slot = parse_unsigned(field, raw, "usize")?,
			// Narrowing to f32 rounds; out-of-range values become infinite.
			Target::F32(slot) => **slot = parse_float(field, raw, "f32")? as f32,
			Target::F64(slot) => **slot = parse_float(field, raw, "f64")?,
			Target::Str(slot) => raw.clone_into(&mut **slot),
			Target::Structured(structured) => {
				decode_structured(field, raw.as_bytes(), &NegotiatedCodec::json(), structured)?
			}
			Target::Unsupported(kind) => {
				return Err(BindError::UnsupportedType { field, kind: *kind });
			}
		}
		Ok(())
	}

	/// Decode a request body into `target` with `codec`
	///
	/// Empty payloads are still handed to the codec, which decides whether
	/// they are acceptable.
	pub fn coerce_body(
		&self,
		field: &'static str,
		bytes: &[u8],
		codec: &NegotiatedCodec,
		target: &mut Target<'_>,
	) -> BindResult<()> {
		match target {
			Target::Bool(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::I8(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::I16(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::I32(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::I64(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::Isize(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::U8(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::U16(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::U32(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::U64(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::Usize(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::F32(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::F64(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::Str(slot) => decode_primitive(field, bytes, codec, &mut **slot),
			Target::Structured(structured) => decode_structured(field, bytes, codec, structured),
			Target::Unsupported(kind) => Err(BindError::UnsupportedType { field, kind: *kind }),
		}
	}
}

fn parse_error(
	field: &'static str,
	raw: &str,
	target: &'static str,
	source: impl std::error::Error + Send + Sync + 'static,
) -> BindError {
	BindError::Parse {
		field,
		literal: raw.to_string(),
		target,
		source: Box::new(source),
	}
}

fn parse_bool(field: &'static str, raw: &str) -> BindResult<bool> {
	if TRUE_LITERALS.contains(&raw) {
		Ok(true)
	} else if FALSE_LITERALS.contains(&raw) {
		Ok(false)
	} else {
		Err(parse_error(field, raw, "bool", InvalidSyntax))
	}
}

/// Parse as `i64`, then narrow to the field width
fn parse_signed<T>(field: &'static str, raw: &str, target: &'static str) -> BindResult<T>
where
	T: TryFrom<i64>,
{
	let wide = i64::from_str(raw).map_err(|e| parse_error(field, raw, target, e))?;
	T::try_from(wide).map_err(|_| parse_error(field, raw, target, OutOfRange))
}

/// Parse as `u64`, then narrow to the field width
///
/// Unsigned values carry no sign, so `+7` is rejected like `-7`.
fn parse_unsigned<T>(field: &'static str, raw: &str, target: &'static str) -> BindResult<T>
where
	T: TryFrom<u64>,
{
	if raw.starts_with('+') {
		return Err(parse_error(field, raw, target, InvalidSyntax));
	}
	let wide = u64::from_str(raw).map_err(|e| parse_error(field, raw, target, e))?;
	T::try_from(wide).map_err(|_| parse_error(field, raw, target, OutOfRange))
}

/// `NaN` and the infinities parse successfully.
fn parse_float(field: &'static str, raw: &str, target: &'static str) -> BindResult<f64> {
	f64::from_str(raw).map_err(|e| parse_error(field, raw, target, e))
}

fn decode_primitive<T: DeserializeOwned>(
	field: &'static str,
	bytes: &[u8],
	codec: &NegotiatedCodec,
	slot: &mut T,
) -> BindResult<()> {
	*slot = codec.decode(bytes).map_err(|source| BindError::Codec {
		field,
		mime: codec.mime(),
		type_name: std::any::type_name::<T>(),
		source,
	})?;
	Ok(())
}

fn decode_structured(
	field: &'static str,
	bytes: &[u8],
	codec: &NegotiatedCodec,
	target: &mut StructuredTarget<'_>,
) -> BindResult<()> {
	let type_name = target.type_name();
	let slot = match &mut target.slot {
		Slot::Writable(slot) => slot,
		Slot::ReadOnly => return Err(bad_destination(field, BadDestination::NotSettable)),
		Slot::Invalid => return Err(bad_destination(field, BadDestination::Invalid)),
	};

	slot.decode(codec, bytes).map_err(|source| BindError::Codec {
		field,
		mime: codec.mime(),
		type_name,
		source,
	})
}

fn bad_destination(field: &'static str, reason: BadDestination) -> BindError {
	tracing::debug!(field, %reason, "structured destination rejected");
	BindError::BadDestination { field, reason }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::target::TypeKind;
	use rstest::rstest;
	use serde::Deserialize;
	use std::collections::HashMap;

	#[derive(Debug, Default, Deserialize, PartialEq)]
	struct Inner {
		n: i64,
	}

	fn coerce<T: crate::IntoTarget + Default>(raw: &str) -> BindResult<T> {
		let mut value = T::default();
		TypeCoercer::new().coerce_str("field", raw, &mut Target::of(&mut value))?;
		Ok(value)
	}

	#[rstest]
	#[case("1", true)]
	#[case("t", true)]
	#[case("TRUE", true)]
	#[case("True", true)]
	#[case("0", false)]
	#[case("F", false)]
	#[case("false", false)]
	fn test_bool_literals(#[case] raw: &str, #[case] expected: bool) {
		assert_eq!(coerce::<bool>(raw).unwrap(), expected);
	}

	#[rstest]
	#[case("maybe")]
	#[case("yes")]
	#[case("tRUE")]
	fn test_bool_rejects(#[case] raw: &str) {
		let err = coerce::<bool>(raw).unwrap_err();
		match &err {
			BindError::Parse {
				literal, target, ..
			} => {
				assert_eq!(literal, raw);
				assert_eq!(*target, "bool");
			}
			other => panic!("expected parse error, got {other:?}"),
		}
		assert!(err.to_string().contains(raw));
	}

	#[rstest]
	fn test_signed_narrowing() {
		assert_eq!(coerce::<i8>("-128").unwrap(), -128);
		assert_eq!(coerce::<i16>("+7").unwrap(), 7);
		let err = coerce::<i8>("128").unwrap_err();
		assert!(err.to_string().contains("out of range"), "{err}");
	}

	#[rstest]
	#[case("-1")]
	#[case("+7")]
	#[case("+")]
	#[case("1.5")]
	#[case("0x10")]
	#[case("seven")]
	fn test_unsigned_rejects(#[case] raw: &str) {
		assert!(matches!(coerce::<u32>(raw), Err(BindError::Parse { .. })));
	}

	#[rstest]
	fn test_unsigned_plus_sign_message() {
		let err = coerce::<u16>("+7").unwrap_err();
		assert!(err.to_string().ends_with("invalid syntax"), "{err}");
	}

	#[rstest]
	fn test_signed_accepts_plus_sign() {
		assert_eq!(coerce::<i32>("+7").unwrap(), 7);
	}

	#[rstest]
	fn test_unsigned_narrowing() {
		assert_eq!(coerce::<u8>("255").unwrap(), 255);
		assert!(coerce::<u8>("256").is_err());
		assert_eq!(coerce::<u64>("18446744073709551615").unwrap(), u64::MAX);
	}

	#[rstest]
	#[case("NaN")]
	#[case("nan")]
	fn test_float_nan(#[case] raw: &str) {
		assert!(coerce::<f64>(raw).unwrap().is_nan());
		assert!(coerce::<f32>(raw).unwrap().is_nan());
	}

	#[rstest]
	fn test_float_values() {
		assert_eq!(coerce::<f64>("1e3").unwrap(), 1000.0);
		assert_eq!(coerce::<f32>("-0.5").unwrap(), -0.5);
		assert!(coerce::<f64>("inf").unwrap().is_infinite());
		assert!(matches!(coerce::<f64>("1,5"), Err(BindError::Parse { .. })));
	}

	#[rstest]
	fn test_string_verbatim() {
		assert_eq!(coerce::<String>("  a+b%20 ").unwrap(), "  a+b%20 ");
	}

	#[rstest]
	fn test_empty_is_noop() {
		let mut value = 42i64;
		TypeCoercer::new()
			.coerce_str("field", "", &mut Target::of(&mut value))
			.unwrap();
		assert_eq!(value, 42);

		let mut target = Target::unsupported(TypeKind::Sequence);
		assert!(TypeCoercer::new().coerce_str("field", "", &mut target).is_ok());
	}

	#[rstest]
	fn test_structured_from_text_uses_json() {
		let mut inner: Option<Box<Inner>> = None;
		TypeCoercer::new()
			.coerce_str("inner", r#"{"n":4}"#, &mut Target::boxed(&mut inner))
			.unwrap();
		assert_eq!(inner, Some(Box::new(Inner { n: 4 })));

		let mut map: HashMap<String, i64> = HashMap::new();
		TypeCoercer::new()
			.coerce_str("map", r#"{"a":1}"#, &mut Target::structured(&mut map))
			.unwrap();
		assert_eq!(map["a"], 1);
	}

	#[rstest]
	fn test_structured_decode_error_names_mime_and_type() {
		let mut inner = Inner::default();
		let err = TypeCoercer::new()
			.coerce_str("inner", "{", &mut Target::structured(&mut inner))
			.unwrap_err();
		let message = err.to_string();
		assert!(message.contains("decode application/json: "), "{message}");
		assert!(message.contains("Inner"), "{message}");
	}

	#[rstest]
	#[case(TypeKind::Sequence)]
	#[case(TypeKind::Channel)]
	#[case(TypeKind::Func)]
	fn test_unsupported(#[case] kind: TypeKind) {
		let err = TypeCoercer::new()
			.coerce_str("field", "x", &mut Target::unsupported(kind))
			.unwrap_err();
		assert!(matches!(err, BindError::UnsupportedType { kind: k, .. } if k == kind));
		assert!(err.to_string().contains(kind.as_str()));
	}

	#[rstest]
	#[case(StructuredTarget::read_only::<Inner>(), BadDestination::NotSettable)]
	#[case(StructuredTarget::invalid::<Inner>(), BadDestination::Invalid)]
	fn test_bad_destination(#[case] target: StructuredTarget<'static>, #[case] reason: BadDestination) {
		let err = TypeCoercer::new()
			.coerce_body(
				"body",
				br#"{"n":1}"#,
				&NegotiatedCodec::json(),
				&mut Target::Structured(target),
			)
			.unwrap_err();
		assert!(matches!(err, BindError::BadDestination { reason: r, .. } if r == reason));
	}

	#[rstest]
	fn test_body_empty_still_decodes() {
		let mut inner = Inner::default();
		let err = TypeCoercer::new()
			.coerce_body("body", b"", &NegotiatedCodec::json(), &mut Target::structured(&mut inner))
			.unwrap_err();
		assert!(matches!(err, BindError::Codec { mime: "application/json", .. }));
	}

	#[rstest]
	fn test_body_primitive_goes_through_codec() {
		let mut count = 0u32;
		TypeCoercer::new()
			.coerce_body("count", b"12", &NegotiatedCodec::json(), &mut Target::of(&mut count))
			.unwrap();
		assert_eq!(count, 12);
	}
}
