//! Binder configuration

use serde::{Deserialize, Serialize};

/// Default request body limit (10 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid binder configuration: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Settings shared by every bind call of one [`Binder`](crate::Binder)
///
/// ```
/// use tagbind_params::BinderConfig;
///
/// let config = BinderConfig::from_toml_str("max_body_size = 1024").unwrap();
/// assert_eq!(config.max_body_size, Some(1024));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinderConfig {
	/// Maximum body size in bytes; `None` reads bodies of any size
	pub max_body_size: Option<usize>,
}

impl Default for BinderConfig {
	fn default() -> Self {
		Self {
			max_body_size: Some(DEFAULT_MAX_BODY_SIZE),
		}
	}
}

impl BinderConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_body_size(mut self, limit: usize) -> Self {
		self.max_body_size = Some(limit);
		self
	}

	/// No limit on the body size
	pub fn unlimited() -> Self {
		Self { max_body_size: None }
	}

	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_limit() {
		assert_eq!(BinderConfig::default().max_body_size, Some(DEFAULT_MAX_BODY_SIZE));
		assert_eq!(BinderConfig::unlimited().max_body_size, None);
		assert_eq!(BinderConfig::new().with_max_body_size(8).max_body_size, Some(8));
	}

	#[rstest]
	#[case("", Some(DEFAULT_MAX_BODY_SIZE))]
	#[case("max_body_size = 2048", Some(2048))]
	fn test_from_toml_str(#[case] input: &str, #[case] expected: Option<usize>) {
		let config = BinderConfig::from_toml_str(input).unwrap();
		assert_eq!(config.max_body_size, expected);
	}

	#[rstest]
	#[case("max_body = 1")]
	#[case("max_body_size = \"big\"")]
	fn test_from_toml_str_rejects(#[case] input: &str) {
		let err = BinderConfig::from_toml_str(input).unwrap_err();
		assert!(err.to_string().starts_with("invalid binder configuration"));
	}
}
