use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const CHIP_GAP: &str = "  ";

/// Lay hashtags out as chips, wrapping to a new line before a chip would
/// overflow `width`. A chip wider than `width` gets a line to itself.
#[must_use]
pub fn hashtag_lines(tags: &[String], width: u16, theme: &Theme) -> Vec<Line<'static>> {
	let width = usize::from(width.max(1));
	let gap = CHIP_GAP.width();

	let mut lines = Vec::new();
	let mut current: Vec<Span<'static>> = Vec::new();
	let mut used = 0usize;

	for tag in tags {
		let chip = tag.width();
		if !current.is_empty() && used + gap + chip > width {
			lines.push(Line::from(std::mem::take(&mut current)));
			used = 0;
		}
		if !current.is_empty() {
			current.push(Span::raw(CHIP_GAP));
			used += gap;
		}
		current.push(Span::styled(tag.clone(), theme.hashtag));
		used += chip;
	}

	if !current.is_empty() {
		lines.push(Line::from(current));
	}
	lines
}

/// Render the hashtag display box.
pub fn render_hashtags(frame: &mut Frame, area: Rect, title: &str, tags: &[String], theme: &Theme) {
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.title(format!(" {title} ({}) ", tags.len()))
		.border_style(theme.accent);
	let inner = block.inner(area);
	let lines = hashtag_lines(tags, inner.width, theme);
	frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| (*value).to_string()).collect()
	}

	fn plain(lines: &[Line<'_>]) -> Vec<String> {
		lines
			.iter()
			.map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
			.collect()
	}

	#[test]
	fn chips_share_a_line_when_they_fit() {
		let lines = hashtag_lines(&tags(&["#a", "#bb", "#ccc"]), 40, &Theme::default());
		assert_eq!(plain(&lines), vec!["#a  #bb  #ccc"]);
	}

	#[test]
	fn chips_wrap_before_overflowing() {
		let lines = hashtag_lines(&tags(&["#travel", "#beach", "#sunset"]), 16, &Theme::default());
		assert_eq!(plain(&lines), vec!["#travel  #beach", "#sunset"]);
	}

	#[test]
	fn oversized_chip_takes_its_own_line() {
		let lines = hashtag_lines(&tags(&["#a", "#averyveryverylongtag", "#b"]), 8, &Theme::default());
		assert_eq!(plain(&lines), vec!["#a", "#averyveryverylongtag", "#b"]);
	}

	#[test]
	fn no_tags_yields_no_lines() {
		assert!(hashtag_lines(&[], 20, &Theme::default()).is_empty());
	}

	#[test]
	fn duplicates_are_rendered_in_order() {
		let lines = hashtag_lines(&tags(&["#x", "#x"]), 20, &Theme::default());
		assert_eq!(plain(&lines), vec!["#x  #x"]);
	}
}
