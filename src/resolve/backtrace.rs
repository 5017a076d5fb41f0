//! Plain backtrace resolution.
//!
//! Files without exception markers are scanned for a `backtrace begin`
//! block instead; every `lr =` frame resolves against the single system
//! image. Zero resolved frames means the file was not a backtrace after
//! all, which the caller reports as an unrecognized file.

use super::{armed_matches, token_at, LR_FIELD};
use crate::domain::BACKTRACE_MARKER;
use crate::toolchain::Toolchain;
use anyhow::Result;
use log::warn;
use std::path::Path;

const ADDR_INDEX: usize = 2;

/// Resolve every `lr =` frame in the first backtrace block as a numbered
/// list. Returns whether at least one frame was resolved.
pub fn resolve_report(content: &str, image: &Path, tools: &Toolchain) -> Result<bool> {
    let mut index = 1;
    for tail in armed_matches(content, BACKTRACE_MARKER, LR_FIELD) {
        let Some(addr) = token_at(tail, ADDR_INDEX) else {
            warn!("lr line has too few fields, skipping: {tail}");
            continue;
        };

        let func = tools.resolve(image, addr)?;
        println!("\n<{index:02}>{func} <{addr}>");
        index += 1;
    }
    Ok(index > 1)
}
