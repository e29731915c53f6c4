//! # pdos 子命令 CLI 定义
//!
//! 投影态密度分析的参数，含能量窗口解析辅助函数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/pdos.rs`

use clap::Args;
use std::path::PathBuf;

/// pdos 子命令参数
#[derive(Args, Debug)]
pub struct PdosArgs {
    /// Directory containing per-species PDOS files (atom_<Symbol>_tot.dat)
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Comma-separated species symbols to analyze (default: discover from filenames)
    #[arg(long)]
    pub species: Option<String>,

    /// Energy shift subtracted from the energy axis before plotting
    #[arg(long, default_value_t = -0.21, allow_negative_numbers = true)]
    pub shift: f64,

    /// Energy window for the plot, in eV (format: min:max)
    #[arg(long, default_value = "-3.5:3.5", allow_hyphen_values = true)]
    pub energy_range: String,

    /// Upper bound of the PDOS axis
    #[arg(long, default_value_t = 15.0)]
    pub y_max: f64,

    /// System name used in the plot title and the report header
    #[arg(long, default_value = "V-doped WSSe")]
    pub system: String,

    /// Filename for the PDOS plot (PNG format)
    #[arg(short, long, default_value = "V_doped_WSSe_PDOS.png")]
    pub output: PathBuf,

    /// Filename for the text analysis report
    #[arg(long, default_value = "pdos_analysis_report.txt")]
    pub report: PathBuf,

    /// Optional CSV export of the per-species contribution table
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

/// 解析逗号分隔的物种符号列表
pub fn parse_species_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// 解析 `min:max` 形式的能量窗口
pub fn parse_energy_range(input: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = input.split(':').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid energy range '{}'. Expected format: min:max (e.g., -3.5:3.5)",
            input
        ));
    }

    let lo = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid energy range bound '{}'", parts[0].trim()))?;
    let hi = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid energy range bound '{}'", parts[1].trim()))?;

    if lo >= hi {
        return Err(format!(
            "Invalid energy range: lower bound {} is not below upper bound {}",
            lo, hi
        ));
    }

    Ok((lo, hi))
}

// ─────────────────────────────────────────────
// 测试
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species_list() {
        assert_eq!(parse_species_list("W,Se,S,V"), vec!["W", "Se", "S", "V"]);
        assert_eq!(parse_species_list(" W , V "), vec!["W", "V"]);
        assert!(parse_species_list("").is_empty());
    }

    #[test]
    fn test_parse_energy_range() {
        assert_eq!(parse_energy_range("-3.5:3.5"), Ok((-3.5, 3.5)));
        assert_eq!(parse_energy_range(" -1 : 2 "), Ok((-1.0, 2.0)));
    }

    #[test]
    fn test_parse_energy_range_invalid() {
        assert!(parse_energy_range("3.5").is_err());
        assert!(parse_energy_range("a:b").is_err());
        assert!(parse_energy_range("1:2:3").is_err());
        assert!(parse_energy_range("2:-2").is_err());
        assert!(parse_energy_range("1:1").is_err());
    }
}
