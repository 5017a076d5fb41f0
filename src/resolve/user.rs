//! User-origin exception resolution.
//!
//! User-mode addresses belong to whichever binary the faulting process had
//! mapped, so each line carries the module path alongside the offset and
//! resolution targets `rootfs + module` instead of the system image. The
//! dump format:
//!
//! ```text
//! pc    = 0xPC in /bin/app ---> 0xOFF            (module at 4, address at 6)
//! traceback 0 -- lr = 0xLR    fp = 0xFP lr in /lib/libc.so --> 0xOFF
//!                                                (module at 8, address at 10)
//! ```
//!
//! Lines missing the module info (the kernel could not map the address to a
//! region) have fewer tokens and are skipped with a logged diagnostic.

use super::{armed_matches, token_at, LR_FIELD};
use crate::domain::{ParseError, USER_MARKER};
use crate::toolchain::Toolchain;
use anyhow::Result;
use log::warn;
use std::path::PathBuf;

const REG_MODULE_INDEX: usize = 4;
const REG_ADDR_INDEX: usize = 6;
const LR_MODULE_INDEX: usize = 8;
const LR_ADDR_INDEX: usize = 10;

/// Resolve a user report: `pc`, then `ulr`, then the link-register list.
///
/// Same aggregation as the kernel path: the report fails only when neither
/// register field was present in the armed block.
pub fn resolve_report(content: &str, rootfs: &str, tools: &Toolchain) -> Result<()> {
    let pc_found = resolve_register(content, rootfs, "pc", tools)?;
    let ulr_found = resolve_register(content, rootfs, "ulr", tools)?;
    resolve_link_registers(content, rootfs, tools)?;

    if pc_found || ulr_found {
        Ok(())
    } else {
        Err(ParseError::NoUserRegister.into())
    }
}

/// Resolve the first well-formed occurrence of a register field (`pc` or
/// `ulr`) in the user block. Returns whether an occurrence was processed.
pub fn resolve_register(
    content: &str,
    rootfs: &str,
    field: &str,
    tools: &Toolchain,
) -> Result<bool> {
    for tail in armed_matches(content, USER_MARKER, field) {
        let Some((module, addr)) = module_and_addr(tail, REG_MODULE_INDEX, REG_ADDR_INDEX) else {
            warn!("{field} line has too few fields, skipping: {tail}");
            continue;
        };

        let binary = module_binary(rootfs, module);
        let listing = tools.disassembly_context(&binary, addr)?;
        println!("{listing}");

        let func = tools.resolve(&binary, addr)?;
        println!("<{field}>{func} <{addr}><{module}>\n");
        return Ok(true);
    }
    Ok(false)
}

/// Resolve every well-formed `lr =` occurrence in the user block as a
/// numbered list. Returns the number of frames printed.
pub fn resolve_link_registers(content: &str, rootfs: &str, tools: &Toolchain) -> Result<usize> {
    let mut index = 1;
    for tail in armed_matches(content, USER_MARKER, LR_FIELD) {
        let Some((module, addr)) = module_and_addr(tail, LR_MODULE_INDEX, LR_ADDR_INDEX) else {
            warn!("lr line has too few fields, skipping: {tail}");
            continue;
        };

        let func = tools.resolve(&module_binary(rootfs, module), addr)?;
        println!("<{index:02}>{func} <{addr}><{module}>");
        index += 1;
    }
    Ok(index - 1)
}

/// Module path and address tokens of a sliced line, or `None` when the line
/// is too short to carry both.
fn module_and_addr(tail: &str, module_index: usize, addr_index: usize) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = tail.split_whitespace().collect();
    if tokens.len() <= addr_index {
        return None;
    }
    Some((tokens[module_index], tokens[addr_index]))
}

/// The on-disk binary behind a module path: plain concatenation of the
/// rootfs directory and the module path, as the dump's absolute module
/// paths expect.
fn module_binary(rootfs: &str, module: &str) -> PathBuf {
    PathBuf::from(format!("{rootfs}{module}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_and_addr_register_line() {
        let tail = "pc = 0x2f5c in /bin/app ---> 0x1f5c";
        assert_eq!(
            module_and_addr(tail, REG_MODULE_INDEX, REG_ADDR_INDEX),
            Some(("/bin/app", "0x1f5c"))
        );
    }

    #[test]
    fn test_module_and_addr_lr_line() {
        let tail = "lr = 0x1c04    fp = 0x2ff0 lr in /lib/libc.so --> 0xc04";
        assert_eq!(
            module_and_addr(tail, LR_MODULE_INDEX, LR_ADDR_INDEX),
            Some(("/lib/libc.so", "0xc04"))
        );
    }

    #[test]
    fn test_short_line_yields_none() {
        // No region info: the kernel printed the raw address only.
        assert_eq!(module_and_addr("pc = 0x2f5c", REG_MODULE_INDEX, REG_ADDR_INDEX), None);
        assert_eq!(
            module_and_addr("lr = 0x1c04    fp = 0x2ff0", LR_MODULE_INDEX, LR_ADDR_INDEX),
            None
        );
    }

    #[test]
    fn test_module_binary_is_plain_concatenation() {
        assert_eq!(module_binary("./rootfs", "/bin/app"), PathBuf::from("./rootfs/bin/app"));
    }
}
