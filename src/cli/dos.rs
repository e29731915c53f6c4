//! # dos 子命令 CLI 定义
//!
//! 电子态密度绘图与积分分析的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dos.rs`

use clap::Args;
use std::path::PathBuf;

/// dos 子命令参数
#[derive(Args, Debug)]
pub struct DosArgs {
    /// DOS table: column 1 is energy in eV, column 2 is DOS in states/eV
    #[arg(long, default_value = "dos.dat")]
    pub dos_file: PathBuf,

    /// Filename for the DOS plot (PNG format)
    #[arg(short, long, default_value = "dos.png")]
    pub output: PathBuf,

    /// Title for the plot
    #[arg(long, default_value = "Density of States")]
    pub title: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
