//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

// The historical single-letter long flags (--f, --e, ...) are the interface
// existing build scripts call; keep them as-is.
#[derive(Parser)]
#[command(
    name = "excparse",
    about = "Resolve addresses in embedded OS crash reports and backtraces",
    after_help = "\
EXAMPLES:
    excparse --f excinfo.txt --e OHOS_Image                    Kernel report or backtrace
    excparse --f excinfo.txt --e OHOS_Image --r ./rootfs       User-mode report
    excparse --f excinfo.txt --e OHOS_Image --c arm-none-eabi-gcc"
)]
pub struct Args {
    /// Exception report or backtrace file
    #[arg(long = "f", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// ELF system image file
    #[arg(long = "e", value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Root filesystem directory, prepended to user-mode module paths
    #[arg(long = "r", value_name = "DIR")]
    pub rootfs: Option<String>,

    /// Compiler to derive the addr2line/objdump pair from [arm-xxx-xxx-gcc/clang]
    #[arg(long = "c", value_name = "COMPILER")]
    pub compiler: Option<String>,
}
