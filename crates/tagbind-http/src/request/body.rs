//! Single-use request body

use bytes::Bytes;
use std::io::{self, Read};
use std::sync::Mutex;

/// Errors raised while reading a request body
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Request body already consumed")]
	AlreadyConsumed,
	#[error("Body too large: {actual} bytes exceeds limit of {limit} bytes")]
	TooLarge {
		/// Configured limit
		limit: usize,
		/// Bytes seen before giving up
		actual: usize,
	},
}

enum Source {
	Buffered(Bytes),
	Streaming(Box<dyn Read + Send>),
}

/// The body source is moved out on first read, leaving `None` behind.
pub(super) struct RequestBody {
	source: Mutex<Option<Source>>,
}

impl RequestBody {
	pub(super) fn buffered(bytes: Bytes) -> Self {
		Self {
			source: Mutex::new(Some(Source::Buffered(bytes))),
		}
	}

	pub(super) fn streaming(reader: Box<dyn Read + Send>) -> Self {
		Self {
			source: Mutex::new(Some(Source::Streaming(reader))),
		}
	}

	pub(super) fn is_consumed(&self) -> bool {
		self.source
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.is_none()
	}

	pub(super) fn read(&self, limit: Option<usize>) -> Result<Bytes, BodyError> {
		let source = self
			.source
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.take()
			.ok_or(BodyError::AlreadyConsumed)?;

		let bytes = match source {
			Source::Buffered(bytes) => bytes,
			Source::Streaming(reader) => read_stream(reader, limit)?,
		};

		if let Some(limit) = limit
			&& bytes.len() > limit
		{
			return Err(BodyError::TooLarge {
				limit,
				actual: bytes.len(),
			});
		}

		tracing::trace!(len = bytes.len(), "request body read");
		Ok(bytes)
	}
}

fn read_stream(reader: Box<dyn Read + Send>, limit: Option<usize>) -> Result<Bytes, BodyError> {
	let mut buf = Vec::new();
	match limit {
		// One byte past the limit is enough to know it was exceeded.
		Some(limit) => {
			reader
				.take((limit as u64).saturating_add(1))
				.read_to_end(&mut buf)?;
		}
		None => {
			let mut reader = reader;
			reader.read_to_end(&mut buf)?;
		}
	}
	Ok(Bytes::from(buf))
}
