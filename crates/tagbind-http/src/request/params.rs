use super::Request;
use hyper::Uri;
use percent_encoding::percent_decode_str;

impl Request {
	/// Parse and decode query parameters from the URI, keeping their order
	pub(super) fn parse_query_params(uri: &Uri) -> Vec<(String, String)> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter(|pair| !pair.is_empty())
					.map(|pair| {
						// Split on first '=' only to preserve '=' in values (e.g., Base64)
						let mut parts = pair.splitn(2, '=');
						let key = parts.next().unwrap_or("");
						let value = parts.next().unwrap_or("");
						(decode_component(key), decode_component(value))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// Get the first value of a query parameter
	///
	/// Keys and values are URL-decoded, with `+` read as a space.
	///
	/// # Examples
	///
	/// ```
	/// use tagbind_http::Request;
	///
	/// let request = Request::builder()
	///     .uri("/search?q=rust+lang&tag=a&tag=b&name=John%20Doe")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.query("q"), Some("rust lang"));
	/// assert_eq!(request.query("tag"), Some("a"));
	/// assert_eq!(request.query("name"), Some("John Doe"));
	/// assert_eq!(request.query("missing"), None);
	/// ```
	pub fn query(&self, key: &str) -> Option<&str> {
		self.query_params
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// All decoded query pairs in request order
	pub fn query_pairs(&self) -> &[(String, String)] {
		&self.query_params
	}

	/// Get the request path
	pub fn path(&self) -> &str {
		self.uri.path()
	}
}

fn decode_component(raw: &str) -> String {
	let spaced = raw.replace('+', " ");
	percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/?a=1&b=2", vec![("a", "1"), ("b", "2")])]
	#[case("/?token=abc==", vec![("token", "abc==")])]
	#[case("/?flag", vec![("flag", "")])]
	#[case("/?a=1&&b=2", vec![("a", "1"), ("b", "2")])]
	#[case("/?k%20ey=v%2Fal", vec![("k ey", "v/al")])]
	#[case("/", vec![])]
	fn test_parse_query_params(#[case] uri: &'static str, #[case] expected: Vec<(&str, &str)>) {
		let parsed = Request::parse_query_params(&Uri::from_static(uri));
		let expected: Vec<(String, String)> = expected
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		assert_eq!(parsed, expected);
	}

	#[rstest]
	fn test_query_first_value_wins() {
		let request = Request::builder().uri("/?id=1&id=2").build().unwrap();
		assert_eq!(request.query("id"), Some("1"));
		assert_eq!(request.query_pairs().len(), 2);
	}
}
