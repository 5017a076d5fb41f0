//! Report classification via literal marker scanning.
//!
//! The exception handler stamps every dump with an origin marker
//! (`excFrom: kernel` or `excFrom: User`). Classification is nothing more
//! than checking which marker appears first when reading top-to-bottom; a
//! file with neither is presumed to be a plain backtrace and handed to the
//! backtrace resolver.
//!
//! Each marker check echoes its matched line to stdout. That echo is part of
//! the tool's historical output contract (operators grep for it), not debug
//! noise, so it must stay.

use crate::domain::{ReportKind, KERNEL_MARKER, USER_MARKER};

/// Classify report content by its exception-origin markers.
///
/// Both marker checks always run, kernel first, and each prints its matched
/// line. When both markers are present the file classifies as a user report:
/// a faulting user process makes the kernel dump the user context first, so
/// the user block is the one worth resolving.
#[must_use]
pub fn classify(content: &str) -> ReportKind {
    let kernel = echo_marker_line(content, KERNEL_MARKER);
    let user = echo_marker_line(content, USER_MARKER);

    if user {
        ReportKind::UserException
    } else if kernel {
        ReportKind::KernelException
    } else {
        ReportKind::Backtrace
    }
}

/// Print the first line containing `marker`, if any. Returns whether one was
/// found.
fn echo_marker_line(content: &str, marker: &str) -> bool {
    match content.lines().find(|line| line.contains(marker)) {
        Some(line) => {
            println!("{line}");
            true
        }
        None => false,
    }
}
