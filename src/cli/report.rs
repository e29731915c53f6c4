//! # report 子命令 CLI 定义
//!
//! 综合分析（能带 + 声子 + SOC）与结果面板的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/report.rs`

use clap::Args;
use std::path::PathBuf;

/// report 子命令参数
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Directory containing the calculation output files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Number of valence bands used for the band gap estimate
    #[arg(long, default_value_t = 20)]
    pub valence_bands: usize,

    /// Filename for the text summary report
    #[arg(long, default_value = "comprehensive_report.txt")]
    pub report: PathBuf,

    /// Filename for the 2x2 summary panel (PNG format)
    #[arg(long, default_value = "comprehensive_results.png")]
    pub panel: PathBuf,

    /// Panel width in pixels
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Panel height in pixels
    #[arg(long, default_value_t = 1200)]
    pub height: u32,
}
