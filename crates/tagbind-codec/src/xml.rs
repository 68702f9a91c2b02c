//! XML codec
//!
//! Uses quick-xml's serde support. Struct fields map to child elements;
//! fields renamed with a leading `@` map to attributes.

use crate::{APPLICATION_XML, Codec, CodecError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// XML codec backed by `quick-xml`
///
/// Named types are written under a root element named after the type.
/// Values without a natural name (maps, sequences, primitives) need an
/// explicit root, see [`XmlCodec::with_root`].
///
/// # Examples
///
/// ```
/// use tagbind_codec::{Codec, XmlCodec};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize, PartialEq)]
/// struct Item {
///     name: String,
///     count: u32,
/// }
///
/// let codec = XmlCodec::new();
/// let item: Item = codec
///     .decode(b"<Item><name>bolt</name><count>3</count></Item>")
///     .unwrap();
/// assert_eq!(item, Item { name: "bolt".into(), count: 3 });
///
/// let encoded = codec.encode(&item).unwrap();
/// assert_eq!(encoded, b"<Item><name>bolt</name><count>3</count></Item>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlCodec {
	root: Option<String>,
}

impl XmlCodec {
	pub fn new() -> Self {
		Self::default()
	}

	/// Always encode under the given root element name
	pub fn with_root(root: impl Into<String>) -> Self {
		Self {
			root: Some(root.into()),
		}
	}

	pub fn root(&self) -> Option<&str> {
		self.root.as_deref()
	}
}

impl Codec for XmlCodec {
	fn mime(&self) -> &'static str {
		APPLICATION_XML
	}

	fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
		let encoded = match &self.root {
			Some(root) => quick_xml::se::to_string_with_root(root, value),
			None => quick_xml::se::to_string(value),
		}
		.map_err(CodecError::xml)?;
		Ok(encoded.into_bytes())
	}

	fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
		let text = std::str::from_utf8(bytes)?;
		quick_xml::de::from_str(text).map_err(CodecError::xml)
	}
}
