//! Bind-then-respond helper for request handlers

use crate::binder::Binder;
use crate::descriptor::Bind;
use crate::error::{BindError, BindResult};
use crate::resolver::{RequestSourceResolver, SourceResolver};
use serde::Serialize;
use std::fmt::Display;
use tagbind_codec::{Codec, CodecSelector, DefaultCodecSelector};
use tagbind_http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};
use tagbind_http::{Request, Response, StatusCode};

const ENCODE_FAILURE: &str = "could not encode data";

/// Error payload written for failed handlers, `{"error": "..."}` in JSON
#[derive(Debug, Serialize)]
#[serde(rename = "response")]
struct ErrorPayload<'a> {
	error: &'a str,
}

/// Binds requests and writes negotiated responses
///
/// Responses are encoded with the codec the client asked for in `Accept`.
#[derive(Debug, Clone)]
pub struct RequestHandler<R = RequestSourceResolver, S = DefaultCodecSelector> {
	binder: Binder<R, S>,
}

impl Default for RequestHandler {
	fn default() -> Self {
		Self::new(Binder::new())
	}
}

impl<R, S> RequestHandler<R, S>
where
	R: SourceResolver,
	S: CodecSelector,
{
	pub fn new(binder: Binder<R, S>) -> Self {
		Self { binder }
	}

	pub fn binder(&self) -> &Binder<R, S> {
		&self.binder
	}

	/// Bind `dst` from `req`
	pub fn marshal_and_verify<B: Bind + ?Sized>(&self, req: &Request, dst: &mut B) -> BindResult<()> {
		self.binder.fill(req, dst)
	}

	/// Encode a handler outcome as a response
	///
	/// Success answers 200 with the encoded value. An error answers 400 with
	/// the error message as payload.
	pub fn respond<T, E>(&self, req: &Request, result: Result<T, E>) -> Response
	where
		T: Serialize,
		E: Display,
	{
		match result {
			Ok(value) => self.encode(req, StatusCode::OK, &value),
			Err(err) => {
				let message = err.to_string();
				tracing::debug!(error = %message, "handler failed");
				self.encode(req, StatusCode::BAD_REQUEST, &ErrorPayload { error: &message })
			}
		}
	}

	/// Response for a failed bind, with the status the error maps to
	pub fn reject(&self, req: &Request, err: &BindError) -> Response {
		let message = err.to_string();
		self.encode(req, err.status_code(), &ErrorPayload { error: &message })
	}

	/// Run `f` on `req` and encode its outcome
	///
	/// ```
	/// use tagbind_http::{Request, StatusCode};
	/// use tagbind_params::RequestHandler;
	///
	/// let handler = RequestHandler::default();
	/// let request = Request::builder().build().unwrap();
	///
	/// let response = handler.handle(&request, |_| Ok::<_, String>(vec![1, 2, 3]));
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert_eq!(&response.body[..], b"[1,2,3]");
	/// ```
	pub fn handle<T, E, F>(&self, req: &Request, f: F) -> Response
	where
		T: Serialize,
		E: Display,
		F: FnOnce(&Request) -> Result<T, E>,
	{
		self.respond(req, f(req))
	}

	fn encode<T: Serialize + ?Sized>(&self, req: &Request, status: StatusCode, value: &T) -> Response {
		let codec = self.binder.selector().for_request(req);
		match codec.encode(value) {
			Ok(body) => Response::new(status)
				.with_header(CONTENT_TYPE, HeaderValue::from_static(codec.mime()))
				.with_header(CONTENT_LENGTH, HeaderValue::from(body.len()))
				.with_body(body),
			Err(err) => {
				tracing::error!(mime = codec.mime(), error = %err, "failed to encode response");
				Response::internal_server_error()
					.with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))
					.with_header(CONTENT_LENGTH, HeaderValue::from(ENCODE_FAILURE.len()))
					.with_body(ENCODE_FAILURE)
			}
		}
	}
}
