//! Gemini API client for hashtag generation.
//!
//! Calls the `generateContent` endpoint with a fixed instruction followed by
//! the user's post and returns the model's text verbatim. Filtering the text
//! down to hashtags is left to [`crate::hashtags`].

use serde::{Deserialize, Serialize};

use super::HashtagService;
use super::error::{ServiceError, ServiceResult};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";
const PROMPT: &str = include_str!("prompt.txt");

/// Connection settings for [`GeminiClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiConfig {
	pub api_key: String,
	pub model: String,
	pub base_url: String,
}

impl GeminiConfig {
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			model: DEFAULT_MODEL.to_string(),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	#[must_use]
	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = model.into();
		self
	}

	#[must_use]
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	fn endpoint(&self) -> String {
		format!(
			"{}/v1beta/models/{}:generateContent",
			self.base_url.trim_end_matches('/'),
			self.model
		)
	}
}

/// Gemini API client for generating hashtags.
#[derive(Clone, Debug)]
pub struct GeminiClient {
	http_client: reqwest::Client,
	config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
	contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
	#[serde(default)]
	text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
	content: Option<Content>,
}

/// Stable digest of an error body so failures can be correlated in logs
/// without writing the body itself.
fn summarize_response_body(body: &str) -> String {
	const FNV_OFFSET: u64 = 0xcbf29ce484222325;
	const FNV_PRIME: u64 = 0x00000100000001b3;

	let mut hash = FNV_OFFSET;
	for byte in body.as_bytes() {
		hash ^= u64::from(*byte);
		hash = hash.wrapping_mul(FNV_PRIME);
	}
	format!("len={},digest={hash:016x}", body.len())
}

fn build_prompt(post: &str) -> String {
	format!("{PROMPT}{}", post.trim())
}

impl GeminiClient {
	pub fn new(config: GeminiConfig) -> Self {
		Self {
			http_client: reqwest::Client::new(),
			config,
		}
	}

	/// Ask the model for hashtags describing `post`.
	///
	/// Returns the concatenated text of the first candidate. The text is
	/// expected to be space-delimited hashtags but is not validated here.
	pub async fn generate_hashtags(&self, post: &str) -> ServiceResult<String> {
		let request = GenerateContentRequest {
			contents: vec![Content {
				parts: vec![Part {
					text: build_prompt(post),
				}],
			}],
		};

		tracing::debug!(model = %self.config.model, post_len = post.len(), "Sending hashtag request to Gemini");

		let response = self
			.http_client
			.post(self.config.endpoint())
			.header(API_KEY_HEADER, &self.config.api_key)
			.json(&request)
			.send()
			.await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			let body_summary = summarize_response_body(&body);
			tracing::error!(status, body_summary = %body_summary, "Gemini API error");
			return Err(ServiceError::Api {
				status,
				message: format!("upstream error ({body_summary})"),
			});
		}

		let completion: GenerateContentResponse = response.json().await?;

		let text = completion
			.candidates
			.into_iter()
			.next()
			.and_then(|candidate| candidate.content)
			.map(|content| {
				content
					.parts
					.into_iter()
					.map(|part| part.text)
					.collect::<String>()
			})
			.ok_or_else(|| ServiceError::InvalidResponse("No candidates in response".to_string()))?;

		tracing::info!(chars = text.len(), "Received hashtag text from Gemini");

		Ok(text)
	}
}

impl HashtagService for GeminiClient {
	async fn generate(&self, post: &str) -> ServiceResult<String> {
		self.generate_hashtags(post).await
	}
}

#[cfg(test)]
mod tests {
	use mockito::Matcher;

	use super::*;

	const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

	fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
		GeminiClient::new(GeminiConfig::new("test-key").with_base_url(server.url()))
	}

	#[test]
	fn endpoint_joins_base_and_model() {
		let config = GeminiConfig::new("k")
			.with_base_url("http://localhost:9000/")
			.with_model("gemini-pro");
		assert_eq!(
			config.endpoint(),
			"http://localhost:9000/v1beta/models/gemini-pro:generateContent"
		);
	}

	#[test]
	fn request_serialization_carries_prompt_and_post() {
		let request = GenerateContentRequest {
			contents: vec![Content {
				parts: vec![Part {
					text: build_prompt("  sunset at the pier  "),
				}],
			}],
		};

		let json = serde_json::to_value(&request).unwrap();
		let text = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
		assert!(text.starts_with("You are a social media assistant."));
		assert!(text.ends_with("Post:\nsunset at the pier"));
	}

	#[test]
	fn body_summary_is_stable_and_hides_content() {
		let summary = summarize_response_body("secret token leaked");
		assert_eq!(summary, summarize_response_body("secret token leaked"));
		assert!(summary.starts_with("len=19,digest="));
		assert!(!summary.contains("secret"));
	}

	#[tokio::test]
	async fn returns_candidate_text() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("POST", MODEL_PATH)
			.match_header(API_KEY_HEADER, "test-key")
			.match_body(Matcher::Regex("beach day".to_string()))
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(
				r##"{"candidates":[{"content":{"parts":[{"text":"#sun #sea "},{"text":"#summer"}]}}]}"##,
			)
			.create_async()
			.await;

		let text = client_for(&server).generate("beach day").await.unwrap();
		assert_eq!(text, "#sun #sea #summer");
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn non_success_status_maps_to_api_error() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("POST", MODEL_PATH)
			.with_status(403)
			.with_body(r#"{"error":{"message":"API key not valid"}}"#)
			.create_async()
			.await;

		let err = client_for(&server).generate("post").await.unwrap_err();
		match err {
			ServiceError::Api { status, message } => {
				assert_eq!(status, 403);
				assert!(!message.contains("API key not valid"));
			}
			other => panic!("expected api error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn empty_candidates_are_invalid() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("POST", MODEL_PATH)
			.with_status(200)
			.with_header("content-type", "application/json")
			.with_body(r#"{"candidates":[]}"#)
			.create_async()
			.await;

		let err = client_for(&server).generate("post").await.unwrap_err();
		assert!(matches!(err, ServiceError::InvalidResponse(_)));
	}

	#[tokio::test]
	async fn malformed_body_is_an_http_decode_error() {
		let mut server = mockito::Server::new_async().await;
		server
			.mock("POST", MODEL_PATH)
			.with_status(200)
			.with_body("not json")
			.create_async()
			.await;

		let err = client_for(&server).generate("post").await.unwrap_err();
		assert!(matches!(err, ServiceError::Http(_)));
	}
}
