//! Toolchain configuration: deriving and driving the external resolver and
//! disassembler.
//!
//! The tool never opens the ELF image itself. Address-to-source mapping is
//! delegated wholesale to an `addr2line`-compatible resolver and an
//! `objdump`-compatible disassembler, located either on the search path
//! (plain llvm defaults) or derived as siblings of a cross compiler named
//! with `--c`.

use crate::domain::ParseError;
use crate::invoke;
use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// The resolver/disassembler pair derived for one run.
///
/// Fixed for the run: the resolver is always invoked as
/// `<addr2line> -C -f -e <binary> <addr>` and the disassembler as
/// `<objdump> -d <binary>`, with the listing filtered through a grep window
/// around the target address.
pub struct Toolchain {
    pub addr2line: String,
    pub objdump: String,
}

impl Default for Toolchain {
    /// Plain llvm tools, assumed to be on the search path.
    fn default() -> Self {
        Toolchain {
            addr2line: "llvm-addr2line".to_string(),
            objdump: "llvm-objdump".to_string(),
        }
    }
}

impl Toolchain {
    /// Derive the tool pair from a compiler name.
    ///
    /// The compiler is located via a `which` lookup; an empty result is a
    /// hard failure before any report parsing happens.
    ///
    /// # Errors
    /// - [`ParseError::CompilerNotFound`] when `which` finds nothing
    /// - [`ParseError::UnsupportedCompiler`] when the located path names
    ///   neither a gcc nor a clang toolchain
    pub fn from_compiler(compiler: &str) -> Result<Self> {
        let located = invoke::which(compiler)?;
        if located.is_empty() {
            return Err(ParseError::CompilerNotFound(compiler.to_string()).into());
        }
        Self::derive(&located)
            .ok_or_else(|| ParseError::UnsupportedCompiler(compiler.to_string()).into())
    }

    /// Pure derivation from an already-located compiler path.
    ///
    /// `gcc` toolchains keep their triple prefix (`.../arm-none-eabi-gcc`
    /// becomes `.../arm-none-eabi-addr2line`); `clang` toolchains replace
    /// the last path segment with the llvm tool names. The `gcc` substring
    /// wins when both appear in the path.
    fn derive(path: &str) -> Option<Self> {
        if let Some(idx) = path.rfind("gcc") {
            let prefix = &path[..idx];
            return Some(Toolchain {
                addr2line: format!("{prefix}addr2line"),
                objdump: format!("{prefix}objdump"),
            });
        }
        if path.rfind("clang").is_some() {
            let dir = match path.rfind('/') {
                Some(slash) => &path[..=slash],
                None => "",
            };
            return Some(Toolchain {
                addr2line: format!("{dir}llvm-addr2line"),
                objdump: format!("{dir}llvm-objdump"),
            });
        }
        None
    }

    /// Map an address inside `binary` to its symbol via the resolver.
    ///
    /// Returns the first line of the resolver's output, which under `-f` is
    /// the demangled function name (`??` when the tool cannot resolve it).
    pub fn resolve(&self, binary: &Path, addr: &str) -> Result<String> {
        let out = invoke::capture(
            Command::new(&self.addr2line).args(["-C", "-f", "-e"]).arg(binary).arg(addr),
        )?;
        Ok(out.lines().next().unwrap_or_default().to_string())
    }

    /// Disassemble `binary` and return the listing window around `addr`.
    ///
    /// The full listing is captured first, then filtered through
    /// `grep -B 10 -A 5 -w <addr-without-0x>:`.
    pub fn disassembly_context(&self, binary: &Path, addr: &str) -> Result<String> {
        let listing = invoke::capture(Command::new(&self.objdump).arg("-d").arg(binary))?;
        let bare = addr.strip_prefix("0x").unwrap_or(addr);
        invoke::grep_window(&listing, &format!("{bare}:"))
    }
}
