use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Native clipboard programs tried after the terminal escape, in order.
const NATIVE_TOOLS: &[(&str, &[&str])] = &[
	("wl-copy", &[]),
	("xclip", &["-selection", "clipboard"]),
	("xsel", &["--clipboard", "--input"]),
	("pbcopy", &[]),
];

/// Place `text` on the system clipboard.
///
/// An OSC 52 escape is emitted first since it reaches the host terminal
/// through tmux and ssh. When stdout refuses the write the native
/// clipboard programs are tried instead.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
	let sequence = osc52_sequence(text, env::var_os("TMUX").is_some());
	let mut stdout = std::io::stdout().lock();
	if stdout.write_all(sequence.as_bytes()).is_ok() && stdout.flush().is_ok() {
		return Ok(());
	}
	drop(stdout);

	copy_with_native_tool(text)
}

fn osc52_sequence(text: &str, inside_tmux: bool) -> String {
	let encoded = STANDARD.encode(text);
	if inside_tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn copy_with_native_tool(text: &str) -> Result<()> {
	let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
	for (program, args) in NATIVE_TOOLS {
		if *program == "wl-copy" && !wayland {
			continue;
		}
		if pipe_into(program, args, text) {
			tracing::debug!(program, "copied hashtags with native clipboard tool");
			return Ok(());
		}
	}
	bail!("no clipboard tool available")
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> bool {
	let Ok(mut child) = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
	else {
		return false;
	};

	let written = child
		.stdin
		.take()
		.is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());
	let exited_cleanly = child.wait().is_ok_and(|status| status.success());
	written && exited_cleanly
}
