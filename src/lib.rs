//! # excparse - Crash Report Symbolization for Embedded OS Exception Dumps
//!
//! excparse pretty-prints crash and backtrace logs captured from the serial
//! console of a LiteOS-style embedded system. The kernel dumps raw register
//! values (`pc`, `klr`, `ulr`, `lr`) as hexadecimal addresses; this tool maps
//! them back to function names and source locations by driving the external
//! toolchain utilities, then prints the resolved frames in the exact format
//! operators have scripted against for years.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Report file (excinfo dump or plain backtrace, text lines) │
//! └──────────────────────────┬─────────────────────────────────┘
//!                            │ marker scanning
//!                            ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  classify: excFrom: kernel / excFrom: User / backtrace     │
//! └──────────────────────────┬─────────────────────────────────┘
//!                            │ one resolver per report kind
//!                            ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  resolve::{kernel, user, backtrace}                        │
//! │  armed/scanning line scanner, fixed token offsets          │
//! └──────────────────────────┬─────────────────────────────────┘
//!                            │ one blocking call per address
//!                            ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  toolchain: addr2line -C -f -e / objdump -d | grep window  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line argument parsing (`--f`, `--e`, `--r`, `--c`)
//! - [`classify`]: Report kind detection via literal marker substrings
//! - [`resolve`]: The three report resolvers and their shared line scanner
//! - [`toolchain`]: Derives and drives the resolver/disassembler pair
//! - [`invoke`]: Synchronous external process invocation with full capture
//! - [`domain`]: Report kinds, marker vocabulary, and structured errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Kernel exception dump or plain backtrace against the system image
//! excparse --f excinfo.txt --e OHOS_Image
//!
//! # User-mode exception dump; module paths resolve under the rootfs
//! excparse --f excinfo.txt --e OHOS_Image --r ./rootfs
//!
//! # Derive the tool pair from a cross toolchain instead of plain llvm
//! excparse --f excinfo.txt --e OHOS_Image --c arm-none-eabi-gcc
//! ```
//!
//! Everything runs single-threaded and synchronously: each external tool
//! call blocks until its output has been captured whole. Nothing is retained
//! between frames; resolved output goes straight to stdout.

pub mod classify;
pub mod cli;
pub mod domain;
pub mod invoke;
pub mod resolve;
pub mod toolchain;
