//! # bands 子命令 CLI 定义
//!
//! 能带结构绘图与带隙分析的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bands.rs`

use clap::Args;
use std::path::PathBuf;

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Band energy table: column 1 is the k-path coordinate, the rest are band energies in eV
    #[arg(long, default_value = "bands.dat")]
    pub bands_file: PathBuf,

    /// Number of valence bands, counted from the lowest band column
    #[arg(long, default_value_t = 20)]
    pub valence_bands: usize,

    /// Comma-separated high-symmetry point labels, placed evenly along the k-path
    #[arg(long, default_value = "Γ,K,M,Γ")]
    pub labels: String,

    /// Filename for the band structure plot (PNG format)
    #[arg(short, long, default_value = "band_structure.png")]
    pub output: PathBuf,

    /// Title for the plot
    #[arg(long, default_value = "Band Structure")]
    pub title: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

/// 解析逗号分隔的高对称点标签列表
pub fn parse_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ─────────────────────────────────────────────
// 测试
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels("Γ,K,M,Γ"), vec!["Γ", "K", "M", "Γ"]);
        assert_eq!(parse_labels(" X , L "), vec!["X", "L"]);
        assert!(parse_labels("").is_empty());
        assert!(parse_labels(" , ,").is_empty());
    }
}
