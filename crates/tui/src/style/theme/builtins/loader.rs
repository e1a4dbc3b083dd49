use std::borrow::Cow;

use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_document(self, context: &str) -> Result<ThemeDocument> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;

		let registration = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.fold(
				ThemeRegistration::new(self.name, theme),
				|registration, alias| registration.alias(alias),
			);

		Ok(ThemeDocument {
			registration,
			is_default: self.default,
		})
	}
}

#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	header: StyleConfig,
	accent: StyleConfig,
	input: StyleConfig,
	muted: StyleConfig,
	error: StyleConfig,
	hashtag: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style(&format!("{context}.header"))?,
			accent: self.accent.to_style(&format!("{context}.accent"))?,
			input: self.input.to_style(&format!("{context}.input"))?,
			muted: self.muted.to_style(&format!("{context}.muted"))?,
			error: self.error.to_style(&format!("{context}.error"))?,
			hashtag: self.hashtag.to_style(&format!("{context}.hashtag"))?,
		})
	}
}

struct ThemeDocument {
	registration: ThemeRegistration,
	is_default: bool,
}

#[derive(Debug, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let modifier_value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier_value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut registrations = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let document = parse_theme_document(file)?;
		let theme = document.registration.theme;

		if document.is_default {
			if let Some((_, existing_name)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing_name}` and `{}`)",
					document.registration.name
				);
			}

			default_theme = Some((theme, document.registration.name.clone()));
		}

		registrations.push(document.registration);
	}

	if registrations.is_empty() {
		bail!("no built-in theme definitions were found");
	}

	let default_theme = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_document(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;

	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	config.into_document(&format!("{path:?}"))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Some(body) = value
		.strip_prefix("ansi(")
		.and_then(|s| s.strip_suffix(')'))
	{
		let index: u8 = body
			.trim()
			.parse()
			.with_context(|| format!("invalid ANSI colour index `{body}`"))?;
		return Ok(Color::Indexed(index));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => {
			let mut expanded = String::with_capacity(6);
			for ch in hex.chars() {
				expanded.push(ch);
				expanded.push(ch);
			}
			Cow::Owned(expanded)
		}
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let r = u8::from_str_radix(&expanded[0..2], 16)
		.with_context(|| format!("invalid red component `{hex}`"))?;
	let g = u8::from_str_radix(&expanded[2..4], 16)
		.with_context(|| format!("invalid green component `{hex}`"))?;
	let b = u8::from_str_radix(&expanded[4..6], 16)
		.with_context(|| format!("invalid blue component `{hex}`"))?;

	Ok(Color::Rgb(r, g, b))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components = body.split(',').map(|part| part.trim()).collect::<Vec<_>>();

	if components.len() != 3 {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	}

	let r = parse_rgb_component(components[0], 'r')?;
	let g = parse_rgb_component(components[1], 'g')?;
	let b = parse_rgb_component(components[2], 'b')?;

	Ok(Color::Rgb(r, g, b))
}

fn parse_rgb_component(value: &str, component: char) -> Result<u8> {
	value.parse::<u8>().with_context(|| {
		format!("invalid {component}-component `{value}` in rgb() colour specification")
	})
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"slow_blink" | "slowblink" => Ok(Modifier::SLOW_BLINK),
		"rapid_blink" | "rapidblink" | "fast_blink" => Ok(Modifier::RAPID_BLINK),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"hidden" => Ok(Modifier::HIDDEN),
		"crossed_out" | "crossedout" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use include_dir::DirEntry;

	use super::*;

	const DOCUMENT: &str = r##"
name = "Paper"
aliases = ["white", " "]
default = true

[styles]
header = { fg = "#000", bg = "rgb(250, 250, 250)", modifiers = ["bold"] }
accent = { fg = "ansi(33)" }
input = { fg = "dark-gray" }
muted = { fg = "grey", modifiers = ["Italic"] }
error = { fg = "light_red", bg = "reset" }
hashtag = { fg = "blue", modifiers = ["underline"] }
"##;

	#[test]
	fn parses_documents_and_picks_default() {
		let entries = [DirEntry::File(File::new("paper.toml", DOCUMENT.as_bytes()))];
		let dir = Dir::new("", &entries);

		let themes = load_builtin_themes(&dir).expect("themes load");
		assert_eq!(themes.registrations.len(), 1);
		let registration = &themes.registrations[0];
		assert_eq!(registration.name, "Paper");
		assert_eq!(registration.aliases, vec!["white".to_string()]);
		assert_eq!(themes.default_theme.header.fg, Some(Color::Rgb(0, 0, 0)));
		assert_eq!(themes.default_theme.header.bg, Some(Color::Rgb(250, 250, 250)));
		assert_eq!(themes.default_theme.accent.fg, Some(Color::Indexed(33)));
		assert!(themes.default_theme.muted.add_modifier.contains(Modifier::ITALIC));
	}

	#[test]
	fn empty_directory_is_an_error() {
		let dir = Dir::new("", &[]);
		assert!(load_builtin_themes(&dir).is_err());
	}

	#[test]
	fn unknown_colour_reports_context() {
		let broken = DOCUMENT.replace("light_red", "ultraviolet");
		let entries = [DirEntry::File(File::new("broken.toml", broken.as_bytes()))];
		let dir = Dir::new("", &entries);

		let err = load_builtin_themes(&dir).err().expect("parse should fail");
		let rendered = format!("{err:#}");
		assert!(rendered.contains("styles.error"), "{rendered}");
		assert!(rendered.contains("ultraviolet"), "{rendered}");
	}

	#[test]
	fn colour_grammar() {
		assert_eq!(parse_color("#1e293b").unwrap(), Color::Rgb(30, 41, 59));
		assert_eq!(parse_color("12").unwrap(), Color::Indexed(12));
		assert_eq!(parse_color("Light Cyan").unwrap(), Color::LightCyan);
		assert!(parse_color("#12345").is_err());
		assert!(parse_color("rgb(1,2)").is_err());
		assert_eq!(parse_modifier("strikethrough").unwrap(), Modifier::CROSSED_OUT);
	}
}
