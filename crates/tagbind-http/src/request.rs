//! Inbound HTTP request

mod body;
mod params;

pub use body::BodyError;

use crate::{Extensions, RouteContext};
use body::RequestBody;
use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use http::uri::InvalidUri;
use hyper::{HeaderMap, Method, Uri, Version};
use std::borrow::Cow;
use std::io::Read;

/// Errors raised while assembling a [`Request`]
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
	#[error("Invalid URI: {0}")]
	InvalidUri(#[from] InvalidUri),
	#[error("Invalid header name: {0}")]
	InvalidHeaderName(#[from] InvalidHeaderName),
	#[error("Invalid header value: {0}")]
	InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// An already-received HTTP request
///
/// Headers, query string and routing context may be read any number of
/// times. The body is a single-use resource: see [`Request::read_body`].
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub extensions: Extensions,
	query_params: Vec<(String, String)>,
	body: RequestBody,
}

impl Request {
	/// Create a request with an in-memory body
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_http::Request;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/items?page=2"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.query("page"), Some("2"));
	/// ```
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		Self::with_body(method, uri, version, headers, RequestBody::buffered(body))
	}

	fn with_body(
		method: Method,
		uri: Uri,
		version: Version,
		headers: HeaderMap,
		body: RequestBody,
	) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			extensions: Extensions::new(),
			query_params,
			body,
		}
	}

	/// Start building a request
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Get a header value by name
	///
	/// Lookup is case-insensitive. Values are decoded as UTF-8, so
	/// non-ASCII text such as `José` is returned as sent. Values that are not
	/// valid UTF-8 are treated as absent; use [`Request::header_lossy`] to
	/// keep them.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.get(name)
			.and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
	}

	/// Get a header value by name, replacing invalid UTF-8 sequences
	/// with `U+FFFD`
	pub fn header_lossy(&self, name: &str) -> Option<Cow<'_, str>> {
		self.headers
			.get(name)
			.map(|v| String::from_utf8_lossy(v.as_bytes()))
	}

	/// Get the routing context attached by the router, if any
	pub fn route_context(&self) -> Option<RouteContext> {
		self.extensions.get::<RouteContext>()
	}

	/// Attach a routing context, replacing any existing one
	pub fn set_route_context(&self, ctx: RouteContext) {
		self.extensions.insert(ctx);
	}

	/// Read the whole body into memory
	///
	/// The body can be read once. Later calls fail with
	/// [`BodyError::AlreadyConsumed`] instead of returning an empty payload.
	pub fn read_body(&self) -> Result<Bytes, BodyError> {
		self.body.read(None)
	}

	/// Read the whole body, failing if it is larger than `limit` bytes
	pub fn read_body_limited(&self, limit: usize) -> Result<Bytes, BodyError> {
		self.body.read(Some(limit))
	}

	/// Whether the body has already been read
	pub fn is_body_consumed(&self) -> bool {
		self.body.is_consumed()
	}
}

impl std::fmt::Debug for Request {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Request")
			.field("method", &self.method)
			.field("uri", &self.uri)
			.field("version", &self.version)
			.field("headers", &self.headers)
			.field("body_consumed", &self.is_body_consumed())
			.finish()
	}
}

enum PendingBody {
	Bytes(Bytes),
	Reader(Box<dyn Read + Send>),
}

/// Builder for [`Request`]
///
/// URI and header parsing is deferred to [`RequestBuilder::build`].
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: Vec<(String, String)>,
	header_map: HeaderMap,
	route: RouteContext,
	body: PendingBody,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: Vec::new(),
			header_map: HeaderMap::new(),
			route: RouteContext::new(),
			body: PendingBody::Bytes(Bytes::new()),
		}
	}
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Append a header; validated on [`build`](Self::build)
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Use an already-parsed header map as the base header set
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.header_map = headers;
		self
	}

	/// Record a path parameter as the router would
	pub fn route_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.route.push(name, value);
		self
	}

	/// Use an in-memory body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = PendingBody::Bytes(body.into());
		self
	}

	/// Use a streaming body that is read on first access
	pub fn body_reader(mut self, reader: impl Read + Send + 'static) -> Self {
		self.body = PendingBody::Reader(Box::new(reader));
		self
	}

	pub fn build(self) -> Result<Request, RequestError> {
		let uri: Uri = self.uri.parse()?;

		let mut headers = self.header_map;
		for (name, value) in self.headers {
			let name = HeaderName::from_bytes(name.as_bytes())?;
			let value = HeaderValue::from_str(&value)?;
			headers.append(name, value);
		}

		let body = match self.body {
			PendingBody::Bytes(bytes) => RequestBody::buffered(bytes),
			PendingBody::Reader(reader) => RequestBody::streaming(reader),
		};

		let request = Request::with_body(self.method, uri, self.version, headers, body);
		if !self.route.is_empty() {
			request.set_route_context(self.route);
		}
		Ok(request)
	}
}
