//! Codec errors

/// Failure to encode or decode a structured payload
///
/// The display form is the underlying parser message only. Callers add the
/// MIME type and target type when reporting it.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	#[error("{0}")]
	Json(#[from] serde_json::Error),
	#[error("{0}")]
	Xml(String),
	#[error("payload is not valid UTF-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),
}

impl CodecError {
	pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
		Self::Xml(err.to_string())
	}
}
