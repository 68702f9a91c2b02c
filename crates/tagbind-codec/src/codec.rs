//! Codec contract and the negotiated codec set

use crate::{APPLICATION_XML, CodecError, JsonCodec, TEXT_XML, XmlCodec};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode/decode strategy for structured payloads
///
/// Implementations hold no per-call state, so one value can be shared by
/// any number of concurrent bind operations.
pub trait Codec: Send + Sync {
	/// MIME type written as `Content-Type` for encoded payloads
	fn mime(&self) -> &'static str;

	/// Encode a value
	fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

	/// Decode a payload into a fresh value of type `T`
	fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// The codecs content negotiation can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiatedCodec {
	Json(JsonCodec),
	Xml(XmlCodec),
}

impl NegotiatedCodec {
	/// Map a bare media type (no parameters) to a codec
	///
	/// Unknown or empty media types fall back to JSON.
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_codec::{Codec, NegotiatedCodec};
	///
	/// assert_eq!(NegotiatedCodec::from_mime("text/xml").mime(), "application/xml");
	/// assert_eq!(NegotiatedCodec::from_mime("application/json").mime(), "application/json");
	/// assert_eq!(NegotiatedCodec::from_mime("text/csv").mime(), "application/json");
	/// assert_eq!(NegotiatedCodec::from_mime("").mime(), "application/json");
	/// ```
	pub fn from_mime(media_type: &str) -> Self {
		Self::known(media_type).unwrap_or_default()
	}

	/// Like [`from_mime`](Self::from_mime) but without the JSON fallback
	pub(crate) fn known(media_type: &str) -> Option<Self> {
		let media_type = media_type.trim();
		if media_type.eq_ignore_ascii_case(APPLICATION_XML)
			|| media_type.eq_ignore_ascii_case(TEXT_XML)
		{
			Some(Self::xml())
		} else if media_type.eq_ignore_ascii_case(crate::APPLICATION_JSON) {
			Some(Self::json())
		} else {
			None
		}
	}

	pub fn json() -> Self {
		Self::Json(JsonCodec::new())
	}

	pub fn xml() -> Self {
		Self::Xml(XmlCodec::new())
	}
}

impl Default for NegotiatedCodec {
	fn default() -> Self {
		Self::json()
	}
}

impl Codec for NegotiatedCodec {
	fn mime(&self) -> &'static str {
		match self {
			Self::Json(codec) => codec.mime(),
			Self::Xml(codec) => codec.mime(),
		}
	}

	fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
		match self {
			Self::Json(codec) => codec.encode(value),
			Self::Xml(codec) => codec.encode(value),
		}
	}

	fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
		match self {
			Self::Json(codec) => codec.decode(bytes),
			Self::Xml(codec) => codec.decode(bytes),
		}
	}
}
