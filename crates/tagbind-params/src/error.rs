//! Binding errors

use crate::target::TypeKind;
use std::fmt;
use tagbind_codec::CodecError;
use tagbind_http::{BodyError, StatusCode};

/// Why a structured destination could not be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadDestination {
	/// There is no location to write to
	Invalid,
	/// The location exists but cannot be written through
	NotSettable,
}

impl fmt::Display for BadDestination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Invalid => "invalid value",
			Self::NotSettable => "not settable",
		})
	}
}

/// Failure while binding one field
///
/// Every variant names the field being bound when the error occurred. An
/// absent header, query or path value is never an error.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
	/// Raw text does not match the target primitive's grammar
	#[error("{field}: parsing {literal:?} as {target}: {source}")]
	Parse {
		field: &'static str,
		literal: String,
		target: &'static str,
		#[source]
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	/// The field's type cannot be bound
	#[error("{field}: unsupported kind: {kind}")]
	UnsupportedType { field: &'static str, kind: TypeKind },

	#[error("{field}: bad destination: {reason}")]
	BadDestination {
		field: &'static str,
		reason: BadDestination,
	},

	/// Structured decode failed
	#[error("{field}: decode {mime}: {type_name}: {source}")]
	Codec {
		field: &'static str,
		mime: &'static str,
		type_name: &'static str,
		#[source]
		source: CodecError,
	},

	/// Reading the request body failed
	#[error("{field}: reading request body: {source}")]
	Transport {
		field: &'static str,
		#[source]
		source: BodyError,
	},
}

impl BindError {
	/// Name of the field being bound
	pub fn field(&self) -> &'static str {
		match self {
			Self::Parse { field, .. }
			| Self::UnsupportedType { field, .. }
			| Self::BadDestination { field, .. }
			| Self::Codec { field, .. }
			| Self::Transport { field, .. } => field,
		}
	}

	/// HTTP status a handler should answer with
	///
	/// Malformed client input maps to 400 and an oversized body to 413.
	/// Destination shape problems and double body reads are defects in the
	/// destination type or handler and map to 500.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::Parse { .. } | Self::Codec { .. } => StatusCode::BAD_REQUEST,
			Self::Transport {
				source: BodyError::TooLarge { .. },
				..
			} => StatusCode::PAYLOAD_TOO_LARGE,
			Self::Transport {
				source: BodyError::Io(_),
				..
			} => StatusCode::BAD_REQUEST,
			Self::Transport {
				source: BodyError::AlreadyConsumed,
				..
			}
			| Self::UnsupportedType { .. }
			| Self::BadDestination { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Result type for binding operations
pub type BindResult<T> = Result<T, BindError>;
