use std::env;

use anyhow::{Context, Result, bail};
use instatag_core::{
	GeminiClient, GeminiConfig, GenerationRuntime, HashtagService, Lifecycle, ServiceError,
	ServiceResult, SessionOutcome, Submission, resolve_api_key,
};
use instatag_tui::Composer;

use crate::settings::ResolvedConfig;

/// Backend handed to the composer.
///
/// Without an API key the UI still starts; every request then fails with the
/// usual notice and the cause goes to the log.
pub(crate) enum Backend {
	Gemini(GeminiClient),
	Unconfigured,
}

impl Backend {
	fn from_config(config: &ResolvedConfig) -> Self {
		match resolve_api_key(config.api_key.as_deref(), |name| env::var(name).ok()) {
			Ok(key) => Self::Gemini(GeminiClient::new(
				GeminiConfig::new(key)
					.with_model(config.model.clone())
					.with_base_url(config.base_url.clone()),
			)),
			Err(err) => {
				tracing::warn!(error = %err, "starting without an API key");
				Self::Unconfigured
			}
		}
	}
}

impl HashtagService for Backend {
	async fn generate(&self, post: &str) -> ServiceResult<String> {
		match self {
			Self::Gemini(client) => client.generate_hashtags(post).await,
			Self::Unconfigured => Err(ServiceError::MissingApiKey),
		}
	}
}

/// Coordinates building and running the interactive composer.
pub(crate) struct ComposerWorkflow {
	composer: Composer<Backend>,
}

impl ComposerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let backend = Backend::from_config(&config);
		let mut composer = Composer::new(backend)
			.with_labels(config.labels)
			.with_initial_post(config.initial_post);
		if let Some(theme) = config.theme.as_deref() {
			composer = composer.with_theme_name(theme)?;
		}
		Ok(Self { composer })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.composer.run()
	}
}

/// Generate hashtags for `post` once, without the UI.
pub(crate) fn run_headless(config: &ResolvedConfig, post: &str) -> Result<SessionOutcome> {
	let Backend::Gemini(client) = Backend::from_config(config) else {
		bail!(ServiceError::MissingApiKey);
	};
	generate_once(client, post)
}

fn generate_once<S: HashtagService>(service: S, post: &str) -> Result<SessionOutcome> {
	let mut lifecycle = Lifecycle::new();
	let ticket = match lifecycle.submit(post) {
		Submission::Dispatched(ticket) => ticket,
		Submission::Rejected(notice) => bail!(notice),
		Submission::Busy => bail!("a request is already in flight"),
	};

	let runtime = GenerationRuntime::new(service).context("failed to start generation worker")?;
	runtime.request(ticket);
	let result = runtime
		.recv()
		.context("generation worker stopped before answering")?;
	lifecycle.complete(result.id, result.outcome);

	if let Some(notice) = lifecycle.notice() {
		bail!(notice);
	}

	Ok(SessionOutcome {
		accepted: true,
		post: post.to_string(),
		hashtags: lifecycle.succeeded().cloned().unwrap_or_default(),
	})
}

#[cfg(test)]
mod tests {
	use instatag_core::Notice;

	use super::*;

	struct Fixed(Option<&'static str>);

	impl HashtagService for Fixed {
		async fn generate(&self, _post: &str) -> ServiceResult<String> {
			self.0
				.map(str::to_string)
				.ok_or_else(|| ServiceError::InvalidResponse("no text".into()))
		}
	}

	#[test]
	fn headless_generation_filters_tokens() {
		let outcome = generate_once(Fixed(Some("#city lights #night")), "Night walk").unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.post, "Night walk");
		assert_eq!(outcome.hashtags.as_slice(), ["#city", "#night"]);
	}

	#[test]
	fn headless_blank_post_reports_validation_notice() {
		let err = generate_once(Fixed(Some("#unused")), "  ").unwrap_err();
		assert_eq!(err.to_string(), Notice::EmptyPost.message());
	}

	#[test]
	fn headless_failure_reports_fixed_notice() {
		let err = generate_once(Fixed(None), "post").unwrap_err();
		assert_eq!(err.to_string(), Notice::ServiceFailure.message());
	}

	#[test]
	fn unconfigured_backend_fails_requests() {
		let err = generate_once(Backend::Unconfigured, "post").unwrap_err();
		assert_eq!(err.to_string(), Notice::ServiceFailure.message());
	}
}
