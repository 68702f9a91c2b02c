//! Media type and Accept header parsing

/// A parsed media type such as `application/json; charset=utf-8`
///
/// Type and subtype are lower-cased. Parameters, `q` included, are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
	pub type_: String,
	pub subtype: String,
}

impl MediaType {
	pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			type_: type_.into().to_ascii_lowercase(),
			subtype: subtype.into().to_ascii_lowercase(),
		}
	}

	/// Parse a single media type, ignoring its parameters
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_codec::MediaType;
	///
	/// let mt = MediaType::parse("Application/XML; charset=utf-8").unwrap();
	/// assert_eq!(mt.essence(), "application/xml");
	///
	/// let weighted = MediaType::parse("text/xml;q=0.5").unwrap();
	/// assert_eq!(weighted.essence(), "text/xml");
	///
	/// assert!(MediaType::parse("garbage").is_none());
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		let essence = s.split(';').next()?.trim();
		let (type_, subtype) = essence.split_once('/')?;
		let (type_, subtype) = (type_.trim(), subtype.trim());
		if type_.is_empty() || subtype.is_empty() || subtype.contains('/') {
			return None;
		}
		Some(Self::new(type_, subtype))
	}

	/// `type/subtype` without parameters
	pub fn essence(&self) -> String {
		format!("{}/{}", self.type_, self.subtype)
	}
}

/// An `Accept` header, entries in the order the client listed them
#[derive(Debug, Clone, Default)]
pub struct AcceptHeader {
	pub media_types: Vec<MediaType>,
}

impl AcceptHeader {
	/// Parse an `Accept` header; malformed entries are skipped
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_codec::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("application/json;q=0.8, bogus, text/xml");
	/// assert_eq!(accept.media_types.len(), 2);
	/// assert_eq!(accept.preferred().unwrap().essence(), "application/json");
	/// ```
	pub fn parse(header: &str) -> Self {
		let media_types = header
			.split(',')
			.filter_map(|s| MediaType::parse(s.trim()))
			.collect();
		Self { media_types }
	}

	/// The first well-formed entry
	///
	/// Quality weights are not consulted: the type listed first decides.
	pub fn preferred(&self) -> Option<&MediaType> {
		self.media_types.first()
	}
}
