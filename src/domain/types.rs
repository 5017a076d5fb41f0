//! Report kinds and the literal marker vocabulary of the dump format.
//!
//! The kernel's exception handler brackets its output with fixed marker
//! strings; everything this tool recognizes in a report file is one of these
//! substrings plus whitespace-delimited fields at fixed offsets.

use std::fmt;

/// Marker printed at the top of a kernel-origin exception dump.
pub const KERNEL_MARKER: &str = "excFrom: kernel";

/// Marker printed at the top of a user-origin exception dump.
pub const USER_MARKER: &str = "excFrom: User";

/// Marker opening a plain call-stack dump.
pub const BACKTRACE_MARKER: &str = "backtrace begin";

/// The shape of a report file, decided by marker scanning.
///
/// A file carrying neither exception marker is presumed to be a plain
/// backtrace; whether it really is one is only known after the backtrace
/// resolver has scanned it (zero resolved frames means the file is
/// unrecognized, surfaced as [`super::ParseError::UnrecognizedReport`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Exception raised while executing kernel code.
    KernelException,
    /// Exception raised in a user-space process.
    UserException,
    /// No exception markers; treated as a plain backtrace dump.
    Backtrace,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::KernelException => write!(f, "kernel exception"),
            ReportKind::UserException => write!(f, "user exception"),
            ReportKind::Backtrace => write!(f, "backtrace"),
        }
    }
}
