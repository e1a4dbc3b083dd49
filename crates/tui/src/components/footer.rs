use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

const KEY_HINTS: &[(&str, &str)] = &[
	("Tab", "focus"),
	("Ctrl+G", "generate"),
	("Ctrl+Y", "copy"),
	("Ctrl+S", "accept"),
	("Esc", "quit"),
];

/// Render key hints on the first row and the attribution (or a transient
/// status message) on the second.
pub fn render_footer(frame: &mut Frame, area: Rect, label: &str, status: Option<&str>, theme: &Theme) {
	if area.height == 0 {
		return;
	}

	let mut hints = Vec::with_capacity(KEY_HINTS.len() * 3);
	for (index, (key, action)) in KEY_HINTS.iter().enumerate() {
		if index > 0 {
			hints.push(Span::styled("  ", theme.muted));
		}
		hints.push(Span::styled(*key, theme.accent.add_modifier(Modifier::BOLD)));
		hints.push(Span::styled(format!(" {action}"), theme.muted));
	}

	let mut lines = vec![Line::from(hints)];
	if area.height > 1 {
		let text = status.unwrap_or(label);
		lines.push(Line::from(Span::styled(text.to_string(), theme.muted)));
	}

	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
