use thiserror::Error;

/// Errors raised while asking the remote service for hashtags.
///
/// The variants only matter for logs; the UI reports every one of them with
/// the same notice.
#[derive(Error, Debug)]
pub enum ServiceError {
	/// HTTP request failed
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	/// API returned an error response
	#[error("Gemini API error: {status} - {message}")]
	Api { status: u16, message: String },

	#[error("Missing Gemini API key")]
	MissingApiKey,

	/// Response decoded but lacked the expected fields
	#[error("Invalid API response: {0}")]
	InvalidResponse(String),

	/// The worker could not drive the request (runtime construction failed)
	#[error("generation runtime unavailable: {0}")]
	Runtime(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
