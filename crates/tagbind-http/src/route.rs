//! Router-populated path parameters

/// Matched path parameter names and values for one request
///
/// The router that dispatched the request fills this in and stores it in the
/// request's [`Extensions`](crate::Extensions). Names and values are kept as
/// parallel lists in match order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
	pub keys: Vec<String>,
	pub values: Vec<String>,
}

impl RouteContext {
	/// Create an empty routing context
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a context from `(name, value)` pairs
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_http::RouteContext;
	///
	/// let ctx = RouteContext::from_pairs([("org", "acme"), ("id", "42")]);
	/// assert_eq!(ctx.keys, vec!["org", "id"]);
	/// assert_eq!(ctx.url_param("id"), Some("42"));
	/// ```
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut ctx = Self::new();
		for (key, value) in pairs {
			ctx.push(key, value);
		}
		ctx
	}

	/// Record one matched parameter
	pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.keys.push(key.into());
		self.values.push(value.into());
	}

	/// Look up the value matched for `name`
	///
	/// When a name was matched more than once the last match wins, since
	/// nested routers append their parameters after the parent's.
	pub fn url_param(&self, name: &str) -> Option<&str> {
		self.keys
			.iter()
			.rposition(|k| k == name)
			.and_then(|idx| self.values.get(idx))
			.map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("id", Some("42"))]
	#[case("org", Some("acme"))]
	#[case("missing", None)]
	fn test_url_param(#[case] name: &str, #[case] expected: Option<&str>) {
		let ctx = RouteContext::from_pairs([("org", "acme"), ("id", "42")]);
		assert_eq!(ctx.url_param(name), expected);
	}

	#[rstest]
	fn test_url_param_last_match_wins() {
		let ctx = RouteContext::from_pairs([("id", "parent"), ("id", "child")]);
		assert_eq!(ctx.url_param("id"), Some("child"));
	}

	#[rstest]
	fn test_url_param_with_short_values_list() {
		let ctx = RouteContext {
			keys: vec!["a".into(), "b".into()],
			values: vec!["1".into()],
		};
		assert_eq!(ctx.url_param("a"), Some("1"));
		assert_eq!(ctx.url_param("b"), None);
	}
}
