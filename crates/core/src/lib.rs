//! Core crate for the `instatag` hashtag assistant.
//!
//! Everything that is not terminal rendering lives here: turning service
//! output into hashtags, the request lifecycle shown by the UI, the Gemini
//! client, and the background worker that keeps network calls off the UI
//! thread.

pub mod hashtags;
pub mod lifecycle;
pub mod outcome;
pub mod service;
pub mod worker;

pub use hashtags::{HashtagSet, MARKER, extract_hashtags};
pub use lifecycle::{Lifecycle, Notice, Phase, Submission, Ticket};
pub use outcome::SessionOutcome;
pub use service::{
	GeminiClient, GeminiConfig, HashtagService, ServiceError, ServiceResult, resolve_api_key,
};
pub use worker::{GenerationResult, GenerationRuntime};
