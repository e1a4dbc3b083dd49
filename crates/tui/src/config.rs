/// Human-readable text rendered around the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Application name shown in the header.
	pub title: String,
	/// Tagline shown beneath the title.
	pub subtitle: String,
	/// Title of the post input box.
	pub input_title: String,
	/// Placeholder shown while the post input is empty.
	pub placeholder: String,
	/// Button label when idle.
	pub button_label: String,
	/// Button label while a request is outstanding.
	pub busy_label: String,
	/// Text displayed next to the loading spinner.
	pub loading_label: String,
	/// Heading of the error banner.
	pub error_heading: String,
	/// Title of the hashtag display.
	pub hashtags_title: String,
	/// Footer line.
	pub footer: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "InstaTag AI".to_string(),
			subtitle: "Your personal hashtag assistant".to_string(),
			input_title: "Post content".to_string(),
			placeholder: "What's your post about?".to_string(),
			button_label: "Generate Hashtags".to_string(),
			busy_label: "Generating...".to_string(),
			loading_label: "Finding the perfect hashtags".to_string(),
			error_heading: "Error".to_string(),
			hashtags_title: "Suggested hashtags".to_string(),
			footer: "Powered by Gemini".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the header title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Override the header tagline.
	#[must_use]
	pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = subtitle.into();
		self
	}

	/// Return the button label for the current request state.
	#[must_use]
	pub fn button_text(&self, busy: bool) -> &str {
		if busy {
			&self.busy_label
		} else {
			&self.button_label
		}
	}
}
