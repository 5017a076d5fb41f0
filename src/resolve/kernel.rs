//! Kernel-origin exception resolution.
//!
//! All addresses in a kernel dump live in the single system image, so every
//! tool invocation targets the `--e` file. Register fields and link
//! registers sit at token offset 2 of the sliced line
//! (`pc    = 0xADDR ...` / `lr = 0xADDR ...`).

use super::{armed_matches, token_at, LR_FIELD};
use crate::domain::{ParseError, KERNEL_MARKER};
use crate::toolchain::Toolchain;
use anyhow::Result;
use log::warn;
use std::path::Path;

const ADDR_INDEX: usize = 2;

/// Resolve a kernel report: `pc`, then `klr`, then the link-register list.
///
/// A missing `pc` or `klr` is non-fatal to the rest of the pass; the whole
/// report only fails when neither register field was present in the armed
/// block.
pub fn resolve_report(content: &str, image: &Path, tools: &Toolchain) -> Result<()> {
    let pc_found = resolve_register(content, image, "pc", tools)?;
    let klr_found = resolve_register(content, image, "klr", tools)?;
    resolve_link_registers(content, image, tools)?;

    if pc_found || klr_found {
        Ok(())
    } else {
        Err(ParseError::NoKernelRegister.into())
    }
}

/// Resolve the first occurrence of a register field (`pc` or `klr`) in the
/// kernel block.
///
/// Prints the disassembly window around the address, then the resolved
/// symbol as `<FIELD>FUNC <0xADDR>`. Returns whether an occurrence was
/// processed.
pub fn resolve_register(
    content: &str,
    image: &Path,
    field: &str,
    tools: &Toolchain,
) -> Result<bool> {
    for tail in armed_matches(content, KERNEL_MARKER, field) {
        let Some(addr) = token_at(tail, ADDR_INDEX) else {
            warn!("{field} line has too few fields, skipping: {tail}");
            continue;
        };

        let listing = tools.disassembly_context(image, addr)?;
        println!("{listing}");

        let func = tools.resolve(image, addr)?;
        println!("<{field}>{func} <{addr}>\n");
        return Ok(true);
    }
    Ok(false)
}

/// Resolve every `lr =` occurrence in the kernel block as a numbered list,
/// in file order, numbering from 1. Returns the number of frames printed.
pub fn resolve_link_registers(content: &str, image: &Path, tools: &Toolchain) -> Result<usize> {
    let mut index = 1;
    for tail in armed_matches(content, KERNEL_MARKER, LR_FIELD) {
        let Some(addr) = token_at(tail, ADDR_INDEX) else {
            warn!("lr line has too few fields, skipping: {tail}");
            continue;
        };

        let func = tools.resolve(image, addr)?;
        println!("<{index:02}>{func} <{addr}>");
        index += 1;
    }
    Ok(index - 1)
}
