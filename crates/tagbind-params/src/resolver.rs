//! Raw value extraction from a request

use bytes::Bytes;
use tagbind_http::{BodyError, Request};

/// A raw header, query or path value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
	Absent,
	Text(String),
}

impl RawValue {
	/// The text, or `""` when absent
	pub fn as_str(&self) -> &str {
		match self {
			Self::Absent => "",
			Self::Text(text) => text,
		}
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}
}

impl From<Option<&str>> for RawValue {
	fn from(value: Option<&str>) -> Self {
		value.map_or(Self::Absent, |v| Self::Text(v.to_string()))
	}
}

/// Pulls the raw value for one tag out of a request
///
/// Text lookups never fail: a missing value is [`RawValue::Absent`]. Only
/// the body read can fail, because it touches the transport.
pub trait SourceResolver: Send + Sync {
	fn header(&self, req: &Request, key: &str) -> RawValue;

	fn query(&self, req: &Request, key: &str) -> RawValue;

	/// Absent when the request carries no routing context or the key was
	/// not matched
	fn path(&self, req: &Request, key: &str) -> RawValue;

	/// Read the entire body; callable once per request
	fn body(&self, req: &Request) -> Result<Bytes, BodyError>;
}

/// [`SourceResolver`] over [`tagbind_http::Request`]
#[derive(Debug, Clone, Copy)]
pub struct RequestSourceResolver {
	max_body_size: Option<usize>,
}

impl RequestSourceResolver {
	pub fn new(max_body_size: Option<usize>) -> Self {
		Self { max_body_size }
	}
}

impl Default for RequestSourceResolver {
	fn default() -> Self {
		Self::new(crate::BinderConfig::default().max_body_size)
	}
}

impl SourceResolver for RequestSourceResolver {
	/// A present header is never absent; invalid UTF-8 is replaced
	fn header(&self, req: &Request, key: &str) -> RawValue {
		req.header_lossy(key)
			.map_or(RawValue::Absent, |v| RawValue::Text(v.into_owned()))
	}

	fn query(&self, req: &Request, key: &str) -> RawValue {
		req.query(key).into()
	}

	fn path(&self, req: &Request, key: &str) -> RawValue {
		let Some(ctx) = req.route_context() else {
			tracing::trace!(key, "no routing context on request");
			return RawValue::Absent;
		};
		ctx.url_param(key).into()
	}

	fn body(&self, req: &Request) -> Result<Bytes, BodyError> {
		match self.max_body_size {
			Some(limit) => req.read_body_limited(limit),
			None => req.read_body(),
		}
	}
}
