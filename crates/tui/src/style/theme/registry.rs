use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn from_registrations<I>(registrations: I) -> Self
	where
		I: IntoIterator<Item = ThemeRegistration>,
	{
		let mut registry = Self::default();
		for registration in registrations {
			registry.register(registration);
		}
		registry
	}

	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;

		let normalized = normalize_name(&name);
		if self.canonical.contains_key(&normalized) {
			tracing::warn!(theme = %name, "duplicate theme name ignored");
			return;
		}
		self.canonical.insert(
			normalized.clone(),
			ThemeEntry {
				display_name: name,
				theme,
			},
		);

		for alias in aliases {
			let alias_normalized = normalize_name(&alias);
			if alias_normalized == normalized {
				continue;
			}

			match self.aliases.get(&alias_normalized) {
				Some(existing) if existing != &normalized => {
					tracing::warn!(
						%alias,
						existing = %existing,
						attempted = %normalized,
						"theme alias already taken"
					);
				}
				_ => {
					self.aliases.insert(alias_normalized, normalized.clone());
				}
			}
		}
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}

	fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self
			.canonical
			.values()
			.map(|entry| entry.display_name.clone())
			.collect();
		names.sort_unstable_by_key(|a| a.to_ascii_lowercase());
		names
	}
}

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

fn registry() -> &'static ThemeRegistry {
	REGISTRY.get_or_init(|| ThemeRegistry::from_registrations(builtins::registrations()))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Lookup a Theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Return the canonical theme names known to the UI.
#[must_use]
pub fn names() -> Vec<String> {
	registry().names()
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};

	use super::*;

	fn theme_with_accent(color: Color) -> Theme {
		Theme {
			header: Style::new().bg(Color::Blue),
			accent: Style::new().fg(color),
			input: Style::new().fg(Color::White),
			muted: Style::new().fg(Color::DarkGray),
			error: Style::new().fg(Color::Red),
			hashtag: Style::new().fg(Color::Yellow),
		}
	}

	#[test]
	fn builtin_themes_are_registered() {
		let names = names();
		assert!(names.iter().any(|name| name == "slate"));
		assert!(by_name("Slate").is_some());
		assert!(by_name("dark").is_some(), "alias resolves");
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn aliases_resolve_case_insensitively() {
		let registry = ThemeRegistry::from_registrations([ThemeRegistration::new(
			"test-theme",
			theme_with_accent(Color::Cyan),
		)
		.alias("Test Theme")
		.alias("test_theme")]);

		assert_eq!(registry.names(), vec!["test-theme".to_string()]);
		assert_eq!(
			registry.get("  test theme "),
			Some(theme_with_accent(Color::Cyan))
		);
		assert!(registry.get("TEST_THEME").is_some());
	}

	#[test]
	fn first_theme_keeps_a_shared_alias() {
		let registry = ThemeRegistry::from_registrations([
			ThemeRegistration::new("first", theme_with_accent(Color::Cyan)).alias("shared"),
			ThemeRegistration::new("second", theme_with_accent(Color::Green)).alias("shared"),
			ThemeRegistration::new("FIRST", theme_with_accent(Color::Magenta)),
		]);

		assert_eq!(registry.get("shared"), Some(theme_with_accent(Color::Cyan)));
		assert_eq!(registry.get("first"), Some(theme_with_accent(Color::Cyan)));
		assert_eq!(registry.names(), vec!["first".to_string(), "second".to_string()]);
	}

	#[test]
	fn names_are_sorted_case_insensitively() {
		let registry = ThemeRegistry::from_registrations([
			ThemeRegistration::new("beta", theme_with_accent(Color::Cyan)),
			ThemeRegistration::new("Alpha", theme_with_accent(Color::Cyan)),
			ThemeRegistration::new("gamma", theme_with_accent(Color::Cyan)),
		]);
		assert_eq!(registry.names(), vec!["Alpha", "beta", "gamma"]);
	}
}
