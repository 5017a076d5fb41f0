//! Synchronous external process invocation.
//!
//! Every collaborator (resolver, disassembler, `which`, `grep`, `dos2unix`)
//! is an opaque external process. Calls block until the child exits and its
//! stdout has been captured whole; there are no timeouts and no retries.

use anyhow::{Context, Result};
use log::warn;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a command to completion and capture its stdout.
///
/// A nonzero exit status is not an error: callers consume whatever output
/// was produced, the way the original shell-capture did. One trailing
/// newline is stripped from the captured text.
pub fn capture(cmd: &mut Command) -> Result<String> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = cmd.output().with_context(|| format!("failed to run {program}"))?;
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Locate an executable on the search path via `which`.
///
/// Returns the trimmed path, or an empty string when `which` found nothing.
pub fn which(name: &str) -> Result<String> {
    let out = capture(Command::new("which").arg(name))?;
    Ok(out.trim().to_owned())
}

/// Rewrite the report's line endings in place via `dos2unix`.
///
/// Best-effort: a missing `dos2unix` binary is logged and ignored, matching
/// the original behavior of discarding the shell's error text.
pub fn normalize_line_endings(report: &Path) {
    if let Err(e) = Command::new("dos2unix").arg(report).output() {
        warn!("dos2unix unavailable, line endings left as-is: {e}");
    }
}

/// Filter `text` through `grep -B 10 -A 5 -w <pattern>`.
///
/// This is the window filter applied to a disassembly listing around the
/// faulting address. No match yields an empty string, not an error.
pub fn grep_window(text: &str, pattern: &str) -> Result<String> {
    let mut child = Command::new("grep")
        .args(["-B", "10", "-A", "5", "-w", pattern])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("failed to spawn grep")?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).context("failed to feed grep")?;
    }

    let output = child.wait_with_output().context("failed to run grep")?;
    let mut filtered = String::from_utf8_lossy(&output.stdout).into_owned();
    if filtered.ends_with('\n') {
        filtered.pop();
    }
    Ok(filtered)
}
