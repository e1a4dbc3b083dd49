//! Extraction of hashtags from raw service output.

use serde::Serialize;

/// Character every displayed token must start with.
pub const MARKER: char = '#';

/// Split service output on whitespace and keep the tokens that carry the
/// marker.
///
/// Order is preserved and duplicates are kept. A token made of the marker
/// alone is not a hashtag and is dropped.
#[must_use]
pub fn extract_hashtags(raw: &str) -> Vec<String> {
	raw.split_whitespace()
		.filter(|token| token.starts_with(MARKER))
		.filter(|token| token.len() > MARKER.len_utf8())
		.map(str::to_owned)
		.collect()
}

/// Ordered list of hashtags produced by one successful generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HashtagSet(Vec<String>);

impl HashtagSet {
	/// Build a set from raw service output.
	#[must_use]
	pub fn from_output(raw: &str) -> Self {
		Self(extract_hashtags(raw))
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Space-separated rendering, ready to paste under a post.
	#[must_use]
	pub fn joined(&self) -> String {
		self.0.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_only_marker_tokens() {
		let tags = extract_hashtags("Here you go: #travel #sunset photo #beach");
		assert_eq!(tags, vec!["#travel", "#sunset", "#beach"]);
		assert!(tags.iter().all(|tag| tag.starts_with(MARKER)));
	}

	#[test]
	fn newlines_and_repeated_spaces_split_tokens() {
		let tags = extract_hashtags("#coffee\n#morning   #latte\t#cafe\n");
		assert_eq!(tags, vec!["#coffee", "#morning", "#latte", "#cafe"]);
	}

	#[test]
	fn bare_marker_is_dropped() {
		assert_eq!(extract_hashtags("# #ok #"), vec!["#ok"]);
	}

	#[test]
	fn output_without_hashtags_is_empty() {
		assert!(extract_hashtags("Sorry, I cannot help with that.").is_empty());
		assert!(extract_hashtags("").is_empty());
	}

	#[test]
	fn duplicates_keep_their_position() {
		let set = HashtagSet::from_output("#a #b #a");
		assert_eq!(set.as_slice(), ["#a", "#b", "#a"]);
		assert_eq!(set.joined(), "#a #b #a");
	}

	#[test]
	fn serializes_as_plain_list() {
		let set = HashtagSet::from_output("#one #two");
		let json = serde_json::to_string(&set).expect("serialize");
		assert_eq!(json, r##"["#one","#two"]"##);
	}
}
