use serde::Serialize;

use crate::hashtags::HashtagSet;

/// What the user walked away with when the UI closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// `true` when the user explicitly kept the hashtags.
	pub accepted: bool,
	/// Post text as it was in the input when the UI closed.
	pub post: String,
	/// Hashtags visible when the UI closed.
	pub hashtags: HashtagSet,
}

impl SessionOutcome {
	#[must_use]
	pub fn cancelled(post: impl Into<String>) -> Self {
		Self {
			accepted: false,
			post: post.into(),
			hashtags: HashtagSet::default(),
		}
	}
}
