//! # excparse - Main Entry Point
//!
//! Single pass: derive the toolchain, normalize line endings, classify the
//! report, run the matching resolver. All failures surface as printed text
//! plus the historical exit code.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use std::fs;

use excparse::classify::classify;
use excparse::cli::Args;
use excparse::domain::{ParseError, ReportKind};
use excparse::invoke;
use excparse::resolve::{backtrace, kernel, user};
use excparse::toolchain::Toolchain;

// Exit codes: the original surfaced -1 (255 to the OS) for every failure.
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = -1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_FAILURE
        }
    });
}

fn run() -> Result<()> {
    let args = Args::parse();

    let (Some(report), Some(image)) = (&args.report, &args.image) else {
        Args::command().print_help().ok();
        bail!("input error: --f and --e are both required");
    };

    // Toolchain derivation aborts before any parsing begins.
    let tools = match args.compiler.as_deref() {
        Some(compiler) => Toolchain::from_compiler(compiler)?,
        None => Toolchain::default(),
    };
    info!("addr2line: {}, objdump: {}", tools.addr2line, tools.objdump);

    invoke::normalize_line_endings(report);

    let content = fs::read_to_string(report)
        .with_context(|| format!("cannot read {}", report.display()))?;

    let kind = classify(&content);
    info!("classified {} as {kind}", report.display());

    match kind {
        ReportKind::UserException => {
            let Some(rootfs) = args.rootfs.as_deref() else {
                return Err(ParseError::MissingRootfs.into());
            };
            user::resolve_report(&content, rootfs, &tools)
        }
        ReportKind::KernelException => kernel::resolve_report(&content, image, &tools),
        ReportKind::Backtrace => {
            if backtrace::resolve_report(&content, image, &tools)? {
                Ok(())
            } else {
                Err(ParseError::UnrecognizedReport(report.clone()).into())
            }
        }
    }
}
