//! JSON codec

use crate::{APPLICATION_JSON, Codec, CodecError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// JSON codec backed by `serde_json`
///
/// # Examples
///
/// ```
/// use tagbind_codec::{Codec, JsonCodec};
/// use std::collections::HashMap;
///
/// let codec = JsonCodec::new();
/// let value: HashMap<String, i64> = codec.decode(br#"{"n":1}"#).unwrap();
/// assert_eq!(value["n"], 1);
/// assert_eq!(codec.encode(&value).unwrap(), br#"{"n":1}"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl JsonCodec {
	pub fn new() -> Self {
		Self
	}
}

impl Codec for JsonCodec {
	fn mime(&self) -> &'static str {
		APPLICATION_JSON
	}

	fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
		Ok(serde_json::to_vec(value)?)
	}

	fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
		Ok(serde_json::from_slice(bytes)?)
	}
}
