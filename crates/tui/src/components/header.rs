use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Render the title and tagline across the top of the screen.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, theme: &Theme) {
	if area.height == 0 {
		return;
	}

	let mut lines = vec![Line::from(Span::styled(
		title.to_string(),
		theme.header.add_modifier(Modifier::BOLD),
	))];
	if area.height > 1 && !subtitle.is_empty() {
		lines.push(Line::from(Span::styled(subtitle.to_string(), theme.header)));
	}

	let paragraph = Paragraph::new(lines)
		.style(theme.header)
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, area);
}
