//! The remote hashtag-generation collaborator.
//!
//! [`HashtagService`] is the seam between the UI and whatever produces
//! hashtags. [`GeminiClient`] is the production implementation; tests plug in
//! their own.

mod error;
mod gemini;

use std::future::Future;

pub use error::{ServiceError, ServiceResult};
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig};

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Something that turns post text into a space-delimited string of tokens.
pub trait HashtagService: Send + Sync + 'static {
	fn generate(&self, post: &str) -> impl Future<Output = ServiceResult<String>> + Send;
}

/// Pick the API key from an explicit value or the environment.
///
/// Blank values are treated as unset so an empty `GEMINI_API_KEY=` in a shell
/// profile does not shadow `API_KEY`.
pub fn resolve_api_key<F>(explicit: Option<&str>, lookup: F) -> ServiceResult<String>
where
	F: Fn(&str) -> Option<String>,
{
	if let Some(key) = explicit.map(str::trim).filter(|key| !key.is_empty()) {
		return Ok(key.to_string());
	}

	API_KEY_ENV_VARS
		.iter()
		.filter_map(|name| lookup(name))
		.map(|value| value.trim().to_string())
		.find(|value| !value.is_empty())
		.ok_or(ServiceError::MissingApiKey)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn explicit_key_wins() {
		let key = resolve_api_key(Some("cli-key"), env(&[("GEMINI_API_KEY", "env-key")]));
		assert_eq!(key.unwrap(), "cli-key");
	}

	#[test]
	fn falls_back_through_environment() {
		let key = resolve_api_key(None, env(&[("GEMINI_API_KEY", "  "), ("API_KEY", "legacy")]));
		assert_eq!(key.unwrap(), "legacy");
	}

	#[test]
	fn missing_everywhere_is_an_error() {
		let err = resolve_api_key(Some(""), env(&[])).unwrap_err();
		assert!(matches!(err, ServiceError::MissingApiKey));
	}
}
