//! Structured payload codecs and content negotiation
//!
//! A [`Codec`] turns a serde value into bytes and back, and names its MIME
//! type. The closed [`NegotiatedCodec`] set covers the formats the binder
//! understands; a [`CodecSelector`] picks one from a request or response.
//!
//! ## Negotiation
//!
//! | Media type | Codec |
//! |---|---|
//! | `application/xml`, `text/xml` | [`XmlCodec`] |
//! | `application/json`, anything else, absent | [`JsonCodec`] |
//!
//! Parameters are ignored, `q` included. For an `Accept` list the first
//! well-formed entry decides.
//!
//! ```
//! use tagbind_codec::{Codec, CodecSelector, DefaultCodecSelector};
//! use tagbind_http::Request;
//!
//! let request = Request::builder()
//!     .header("accept", "text/xml; charset=utf-8")
//!     .build()
//!     .unwrap();
//!
//! let codec = DefaultCodecSelector.for_request(&request);
//! assert_eq!(codec.mime(), "application/xml");
//! ```

pub mod codec;
pub mod error;
pub mod json;
pub mod media_type;
pub mod selector;
pub mod xml;

pub use codec::{Codec, NegotiatedCodec};
pub use error::CodecError;
pub use json::JsonCodec;
pub use media_type::{AcceptHeader, MediaType};
pub use selector::{CodecSelector, DefaultCodecSelector};
pub use xml::XmlCodec;

/// MIME identifier of the JSON codec
pub const APPLICATION_JSON: &str = "application/json";
/// MIME identifier of the XML codec
pub const APPLICATION_XML: &str = "application/xml";
/// Alternate XML media type accepted during negotiation
pub const TEXT_XML: &str = "text/xml";
