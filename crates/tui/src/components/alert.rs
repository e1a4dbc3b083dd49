use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::style::Theme;

/// Render the error banner with a bold heading above the message.
pub fn render_alert(frame: &mut Frame, area: Rect, heading: &str, message: &str, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(
			heading.to_string(),
			theme.error.add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(message.to_string(), theme.error)),
	];
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.error);
	frame.render_widget(
		Paragraph::new(lines)
			.wrap(Wrap { trim: true })
			.block(block),
		area,
	);
}
