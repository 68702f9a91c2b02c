//! Outbound HTTP response

use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};

/// A fully-buffered HTTP response
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create an empty response with the given status
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_http::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::NO_CONTENT);
	/// assert_eq!(response.status, StatusCode::NO_CONTENT);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set a header, replacing any previous value
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);
		self
	}

	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// The declared `Content-Type`, if any
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_with_header_replaces() {
		let response = Response::ok()
			.with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
			.with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		assert_eq!(response.content_type(), Some("application/json"));
		assert_eq!(response.headers.get_all(CONTENT_TYPE).iter().count(), 1);
	}

	#[rstest]
	#[case(Response::ok(), StatusCode::OK)]
	#[case(Response::bad_request(), StatusCode::BAD_REQUEST)]
	#[case(Response::internal_server_error(), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_status_constructors(#[case] response: Response, #[case] status: StatusCode) {
		assert_eq!(response.status, status);
		assert_eq!(response.content_type(), None);
	}
}
