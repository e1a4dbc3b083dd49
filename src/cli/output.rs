use anyhow::Result;
use instatag_core::SessionOutcome;

/// Format the outcome as a single line of plain text.
pub(crate) fn format_plain(outcome: &SessionOutcome) -> String {
	if !outcome.accepted {
		return "Cancelled".to_string();
	}
	if outcome.hashtags.is_empty() {
		return "No hashtags".to_string();
	}
	outcome.hashtags.joined()
}

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
