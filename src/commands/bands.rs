//! # bands 命令实现
//!
//! 能带结构分析：绘制能带图并估计带隙。
//!
//! ## 功能
//! - 读取能带数据表（k 点 + 各能带本征值）
//! - 绘制能带结构图（含费米能级与高对称点标注）
//! - 由价带/导带划分计算 VBM、CBM 与带隙
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/extrema.rs`, `plot/dispersion.rs`
//! - 使用 `utils/output.rs`

use crate::analysis;
use crate::cli::bands::{parse_labels, BandsArgs};
use crate::error::Result;
use crate::parsers;
use crate::plot;
use crate::utils::output;

use plotters::prelude::BLUE;
use tabled::{Table, Tabled};

/// 带隙摘要表格行
#[derive(Debug, Clone, Tabled)]
struct GapRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value (eV)")]
    value: String,
}

/// 执行 bands 命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Band Structure Analysis");

    let bands = match parsers::try_load_bands(&args.bands_file)? {
        Some(bands) => bands,
        None => {
            output::print_warning(&format!(
                "Band structure file '{}' not found, skipping analysis.",
                args.bands_file.display()
            ));
            return Ok(());
        }
    };

    output::print_info(&format!(
        "Loaded {} bands over {} k-points",
        bands.n_bands(),
        bands.n_kpoints()
    ));

    // 绘图
    let labels = parse_labels(&args.labels);
    plot::plot_dispersion(
        &bands,
        &args.output,
        &args.title,
        &labels,
        BLUE,
        "K-points",
        "Energy (eV)",
        true,
        args.width,
        args.height,
    )?;
    output::print_success(&format!(
        "Band structure plot saved to '{}'",
        args.output.display()
    ));

    // 带隙分析
    let gap = analysis::band_gap(&bands, args.valence_bands)?;
    output::print_info(&format!("Valence band maximum: {:.3} eV", gap.vbm));
    output::print_info(&format!("Conduction band minimum: {:.3} eV", gap.cbm));
    output::print_info(&format!("Band gap: {:.3} eV", gap.gap));

    let rows = vec![
        GapRow {
            quantity: "Valence band maximum".to_string(),
            value: format!("{:.3}", gap.vbm),
        },
        GapRow {
            quantity: "Conduction band minimum".to_string(),
            value: format!("{:.3}", gap.cbm),
        },
        GapRow {
            quantity: "Band gap".to_string(),
            value: format!("{:.3}", gap.gap),
        },
    ];
    let table = Table::new(&rows);
    println!("{}", table);

    output::print_done("Band structure analysis completed!");

    Ok(())
}
