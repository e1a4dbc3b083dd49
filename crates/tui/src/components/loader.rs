use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Render a spinner followed by the loading label, centered in `area`.
pub fn render_loader(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let spinner = Throbber::default()
		.style(theme.accent)
		.throbber_style(theme.accent);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), theme.muted),
	]);

	let row = Rect {
		y: area.y + area.height / 2,
		height: 1,
		..area
	};
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
