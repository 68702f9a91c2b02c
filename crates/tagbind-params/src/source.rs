//! Value sources and field tags

use std::fmt;

/// Where a field's raw value comes from
///
/// The declaration order is the precedence order: when a field carries
/// several tags they are applied Header, Query, Path, Body, and each later
/// assignment overwrites the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
	Header,
	Query,
	Path,
	Body,
}

impl SourceKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Header => "header",
			Self::Query => "query",
			Self::Path => "path",
			Self::Body => "body",
		}
	}
}

impl fmt::Display for SourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One `kind:"key"` annotation on a field
///
/// The key is ignored for [`SourceKind::Body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
	pub kind: SourceKind,
	pub key: &'static str,
}

impl Tag {
	pub const fn header(key: &'static str) -> Self {
		Self {
			kind: SourceKind::Header,
			key,
		}
	}

	pub const fn query(key: &'static str) -> Self {
		Self {
			kind: SourceKind::Query,
			key,
		}
	}

	pub const fn path(key: &'static str) -> Self {
		Self {
			kind: SourceKind::Path,
			key,
		}
	}

	pub const fn body() -> Self {
		Self {
			kind: SourceKind::Body,
			key: "",
		}
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{:?}", self.kind, self.key)
	}
}
