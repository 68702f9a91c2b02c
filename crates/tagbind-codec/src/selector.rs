//! Codec selection by content negotiation

use crate::{AcceptHeader, Codec, MediaType, NegotiatedCodec};
use tagbind_http::header::{ACCEPT, CONTENT_TYPE};
use tagbind_http::{Request, Response};

/// Chooses a codec for a request or response
pub trait CodecSelector: Send + Sync {
	/// Codec for writing the response to `req`, negotiated over `Accept`
	fn for_request(&self, req: &Request) -> NegotiatedCodec;

	/// Codec for reading the body of `req`
	///
	/// Negotiated over `Content-Type`. Requests that declare no content type
	/// fall back to `Accept`, so clients that only state what they speak
	/// still have their payload read in that format.
	fn for_request_body(&self, req: &Request) -> NegotiatedCodec;

	/// Codec for reading `resp`, negotiated over `Content-Type`
	fn for_response(&self, resp: &Response) -> NegotiatedCodec;
}

/// Stateless selector over the JSON and XML codecs, defaulting to JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodecSelector;

impl DefaultCodecSelector {
	/// The first listed type decides; wildcards fall through to JSON
	fn from_accept(header: Option<&str>) -> NegotiatedCodec {
		header
			.map(AcceptHeader::parse)
			.and_then(|accept| accept.preferred().map(MediaType::essence))
			.map(|essence| NegotiatedCodec::from_mime(&essence))
			.unwrap_or_default()
	}

	fn from_content_type(header: Option<&str>) -> Option<NegotiatedCodec> {
		let media_type = MediaType::parse(header?)?;
		Some(NegotiatedCodec::from_mime(&media_type.essence()))
	}
}

impl CodecSelector for DefaultCodecSelector {
	fn for_request(&self, req: &Request) -> NegotiatedCodec {
		let codec = Self::from_accept(req.header(ACCEPT.as_str()));
		tracing::trace!(mime = codec.mime(), "negotiated response codec");
		codec
	}

	fn for_request_body(&self, req: &Request) -> NegotiatedCodec {
		let codec = match req.header(CONTENT_TYPE.as_str()) {
			Some(content_type) => Self::from_content_type(Some(content_type)).unwrap_or_default(),
			None => Self::from_accept(req.header(ACCEPT.as_str())),
		};
		tracing::trace!(mime = codec.mime(), "negotiated request body codec");
		codec
	}

	fn for_response(&self, resp: &Response) -> NegotiatedCodec {
		Self::from_content_type(resp.content_type()).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tagbind_http::header::HeaderValue;

	fn request(headers: &[(&str, &str)]) -> Request {
		headers
			.iter()
			.fold(Request::builder(), |b, (k, v)| b.header(*k, *v))
			.build()
			.unwrap()
	}

	#[rstest]
	#[case(None, "application/json")]
	#[case(Some("application/xml"), "application/xml")]
	#[case(Some("text/xml"), "application/xml")]
	#[case(Some("application/json"), "application/json")]
	#[case(Some("text/html"), "application/json")]
	#[case(Some("*/*"), "application/json")]
	#[case(Some("text/html, application/xml;q=0.9, */*;q=0.1"), "application/json")]
	#[case(Some("application/json;q=0.5, application/xml"), "application/json")]
	#[case(Some("application/xml;q=0.1, application/json"), "application/xml")]
	#[case(Some("text/xml; charset=utf-8"), "application/xml")]
	#[case(Some("not a media type"), "application/json")]
	#[case(Some("not a media type, text/xml"), "application/xml")]
	fn test_for_request(#[case] accept: Option<&str>, #[case] mime: &str) {
		let req = match accept {
			Some(accept) => request(&[("accept", accept)]),
			None => request(&[]),
		};
		assert_eq!(DefaultCodecSelector.for_request(&req).mime(), mime);
	}

	#[rstest]
	#[case(&[("content-type", "application/xml; charset=utf-8")], "application/xml")]
	#[case(&[("content-type", "application/json"), ("accept", "text/xml")], "application/json")]
	#[case(&[("content-type", "text/plain"), ("accept", "text/xml")], "application/json")]
	#[case(&[("accept", "text/xml")], "application/xml")]
	#[case(&[], "application/json")]
	fn test_for_request_body(#[case] headers: &[(&str, &str)], #[case] mime: &str) {
		let req = request(headers);
		assert_eq!(DefaultCodecSelector.for_request_body(&req).mime(), mime);
	}

	#[rstest]
	#[case(Some("text/xml"), "application/xml")]
	#[case(Some("application/json"), "application/json")]
	#[case(None, "application/json")]
	fn test_for_response(#[case] content_type: Option<&'static str>, #[case] mime: &str) {
		let mut resp = Response::ok();
		if let Some(ct) = content_type {
			resp = resp.with_header(CONTENT_TYPE, HeaderValue::from_static(ct));
		}
		assert_eq!(DefaultCodecSelector.for_response(&resp).mime(), mime);
	}
}
