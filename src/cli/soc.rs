//! # soc 子命令 CLI 定义
//!
//! 自旋轨道耦合对比分析的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/soc.rs`

use clap::Args;
use std::path::PathBuf;

/// soc 子命令参数
#[derive(Args, Debug)]
pub struct SocArgs {
    /// Band energy table from the spin-orbit coupled calculation
    #[arg(long, default_value = "soc_bands.dat")]
    pub soc_file: PathBuf,

    /// Band energy table from the scalar-relativistic calculation
    #[arg(long, default_value = "bands.dat")]
    pub scalar_file: PathBuf,

    /// Filename for the comparison plot (PNG format)
    #[arg(short, long, default_value = "soc_comparison.png")]
    pub output: PathBuf,

    /// Title for the plot
    #[arg(long, default_value = "SOC Comparison")]
    pub title: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
