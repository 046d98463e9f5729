//! Line formatting shared by every sink.
//!
//! Output shapes:
//!
//! - `<timestamp> [<LABEL>] <locator>:<line> <message>`
//! - `<timestamp> [<LABEL>] <locator>: <message>` when there is no line number.
//!
//! No newline is appended; the message carries its own.

use std::fmt::Write as _;

/// Builds one log line. Pure and deterministic.
#[must_use]
pub fn format_line(
    timestamp: &str,
    label: &str,
    message: &str,
    locator: &str,
    line: Option<u32>,
) -> String {
    let mut out = String::with_capacity(
        timestamp.len() + label.len() + locator.len() + message.len() + 16,
    );
    out.push_str(timestamp);
    out.push_str(" [");
    out.push_str(label);
    out.push_str("] ");
    out.push_str(locator);
    match line {
        Some(n) => {
            // Writing into a String cannot fail.
            let _ = write!(out, ":{n} ");
        }
        None => out.push_str(": "),
    }
    out.push_str(message);
    out
}

/// Shortens a source path so that it starts at `marker`.
///
/// `/home/me/FFmpegPlusPlus/src/lib.rs` with marker `FFmpegPlusPlus` becomes
/// `FFmpegPlusPlus/src/lib.rs`. Paths without the marker are returned unchanged.
#[must_use]
pub fn trim_locator<'a>(locator: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return locator;
    }
    locator.find(marker).map_or(locator, |pos| &locator[pos..])
}
