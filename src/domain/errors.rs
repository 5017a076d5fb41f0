//! Structured error types for excparse
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Every variant maps to the same process exit code (-1); the variants exist
//! so each failure prints a distinct, actionable message.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{} is not an exception or backtrace file", .0.display())]
    UnrecognizedReport(PathBuf),

    #[error("rootfs directory is required to resolve a user-mode report (pass --r)")]
    MissingRootfs,

    #[error("no pc or klr field found in the kernel exception block")]
    NoKernelRegister,

    #[error("no pc or ulr field found in the user exception block")]
    NoUserRegister,

    #[error("{0} not found on PATH")]
    CompilerNotFound(String),

    #[error("{0} is not a gcc or clang toolchain")]
    UnsupportedCompiler(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_report_display() {
        let err = ParseError::UnrecognizedReport(PathBuf::from("boot.log"));
        assert_eq!(err.to_string(), "boot.log is not an exception or backtrace file");
    }

    #[test]
    fn test_unsupported_compiler_display() {
        let err = ParseError::UnsupportedCompiler("tcc".to_string());
        assert!(err.to_string().contains("tcc"));
        assert!(err.to_string().contains("gcc or clang"));
    }

    #[test]
    fn test_missing_rootfs_mentions_flag() {
        let err = ParseError::MissingRootfs;
        assert!(err.to_string().contains("--r"));
    }
}
