//! Request lifecycle behind the single generate button.
//!
//! The lifecycle moves `Idle -> Loading -> Succeeded | Failed` and back to
//! `Loading` on the next submit. Only one request may be outstanding; results
//! carrying any other id are dropped.

use crate::hashtags::HashtagSet;
use crate::service::ServiceError;

/// User-facing messages. These strings are the only error text the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	/// Submit was pressed with an empty or whitespace-only post.
	EmptyPost,
	/// The remote call failed for any reason.
	ServiceFailure,
}

impl Notice {
	#[must_use]
	pub fn message(self) -> &'static str {
		match self {
			Self::EmptyPost => "Please enter some content for your post.",
			Self::ServiceFailure => {
				"Failed to generate hashtags. Please check your connection or API key and try again."
			}
		}
	}
}

impl std::fmt::Display for Notice {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message())
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Idle,
	Loading {
		id: u64,
	},
	Succeeded(HashtagSet),
	Failed(Notice),
}

/// A dispatched request: the id to match the result against and the post to
/// send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
	pub id: u64,
	pub post: String,
}

/// What happened when the user pressed generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	/// The post must be sent to the service.
	Dispatched(Ticket),
	/// Nothing is sent; the notice is now displayed.
	Rejected(Notice),
	/// A request is already outstanding.
	Busy,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
	phase: Phase,
	next_id: u64,
}

impl Lifecycle {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self.phase, Phase::Loading { .. })
	}

	/// Id of the outstanding request, if any.
	#[must_use]
	pub fn loading_id(&self) -> Option<u64> {
		match self.phase {
			Phase::Loading { id } => Some(id),
			_ => None,
		}
	}

	/// Hashtags from the last successful request, empty in every other phase.
	#[must_use]
	pub fn hashtags(&self) -> &[String] {
		match &self.phase {
			Phase::Succeeded(set) => set.as_slice(),
			_ => &[],
		}
	}

	/// The full result of the last successful request.
	#[must_use]
	pub fn succeeded(&self) -> Option<&HashtagSet> {
		match &self.phase {
			Phase::Succeeded(set) => Some(set),
			_ => None,
		}
	}

	#[must_use]
	pub fn notice(&self) -> Option<Notice> {
		match self.phase {
			Phase::Failed(notice) => Some(notice),
			_ => None,
		}
	}

	/// Validate `post` and, when acceptable, move to `Loading`.
	///
	/// Entering `Loading` clears any previous notice and hashtags.
	pub fn submit(&mut self, post: &str) -> Submission {
		if self.is_loading() {
			return Submission::Busy;
		}

		if post.trim().is_empty() {
			self.phase = Phase::Failed(Notice::EmptyPost);
			return Submission::Rejected(Notice::EmptyPost);
		}

		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		self.phase = Phase::Loading { id };
		tracing::debug!(id, "Dispatching hashtag request");

		Submission::Dispatched(Ticket {
			id,
			post: post.to_string(),
		})
	}

	/// Apply the outcome of request `id`. Returns `false` when the result is
	/// stale and was ignored.
	pub fn complete(&mut self, id: u64, outcome: Result<String, ServiceError>) -> bool {
		if self.phase != (Phase::Loading { id }) {
			tracing::debug!(id, "Ignoring stale generation result");
			return false;
		}

		self.phase = match outcome {
			Ok(raw) => {
				let set = HashtagSet::from_output(&raw);
				tracing::info!(id, count = set.len(), "Hashtags generated");
				Phase::Succeeded(set)
			}
			Err(err) => {
				tracing::error!(id, error = %err, "Hashtag generation failed");
				Phase::Failed(Notice::ServiceFailure)
			}
		};
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dispatched(lifecycle: &mut Lifecycle, post: &str) -> Ticket {
		match lifecycle.submit(post) {
			Submission::Dispatched(ticket) => ticket,
			other => panic!("expected dispatch, got {other:?}"),
		}
	}

	#[test]
	fn blank_post_is_rejected_without_dispatch() {
		for post in ["", "   ", "\n\t "] {
			let mut lifecycle = Lifecycle::new();
			assert_eq!(lifecycle.submit(post), Submission::Rejected(Notice::EmptyPost));
			assert_eq!(lifecycle.notice(), Some(Notice::EmptyPost));
			assert!(!lifecycle.is_loading());
		}
	}

	#[test]
	fn submit_clears_previous_error_and_results() {
		let mut lifecycle = Lifecycle::new();
		lifecycle.submit(" ");
		let ticket = dispatched(&mut lifecycle, "Morning run by the river");
		assert!(lifecycle.is_loading());
		assert_eq!(lifecycle.notice(), None);
		assert_eq!(ticket.post, "Morning run by the river");

		lifecycle.complete(ticket.id, Ok("#run #river".into()));
		let second = dispatched(&mut lifecycle, "again");
		assert!(lifecycle.hashtags().is_empty());
		assert_ne!(second.id, ticket.id);
	}

	#[test]
	fn success_keeps_only_marker_tokens() {
		let mut lifecycle = Lifecycle::new();
		let ticket = dispatched(&mut lifecycle, "coffee");
		assert!(lifecycle.complete(ticket.id, Ok("Sure! #coffee #latte art".into())));
		assert_eq!(lifecycle.hashtags(), ["#coffee", "#latte"]);
		assert_eq!(
			lifecycle.succeeded().map(HashtagSet::joined).as_deref(),
			Some("#coffee #latte")
		);
		assert!(!lifecycle.is_loading());
	}

	#[test]
	fn any_failure_shows_the_fixed_message_and_stops_loading() {
		let failures = [
			ServiceError::MissingApiKey,
			ServiceError::Api {
				status: 500,
				message: "boom".into(),
			},
			ServiceError::InvalidResponse("empty".into()),
		];
		for failure in failures {
			let mut lifecycle = Lifecycle::new();
			let ticket = dispatched(&mut lifecycle, "post");
			lifecycle.complete(ticket.id, Err(failure));
			assert!(!lifecycle.is_loading());
			assert_eq!(lifecycle.notice(), Some(Notice::ServiceFailure));
			assert_eq!(
				lifecycle.notice().unwrap().message(),
				"Failed to generate hashtags. Please check your connection or API key and try again."
			);
		}
	}

	#[test]
	fn second_submit_while_loading_is_busy() {
		let mut lifecycle = Lifecycle::new();
		let ticket = dispatched(&mut lifecycle, "first");
		assert_eq!(lifecycle.submit("second"), Submission::Busy);
		assert_eq!(lifecycle.phase(), &Phase::Loading { id: ticket.id });
	}

	#[test]
	fn stale_results_are_ignored() {
		let mut lifecycle = Lifecycle::new();
		let ticket = dispatched(&mut lifecycle, "first");
		assert!(!lifecycle.complete(ticket.id + 1, Ok("#wrong".into())));
		assert!(lifecycle.is_loading());

		assert!(lifecycle.complete(ticket.id, Ok("#right".into())));
		assert!(!lifecycle.complete(ticket.id, Ok("#again".into())));
		assert_eq!(lifecycle.hashtags(), ["#right"]);
	}
}
