//! # dos 命令实现
//!
//! 电子态密度分析：绘制 DOS 曲线并计算积分态数与峰位。
//!
//! ## 功能
//! - 读取态密度数据表（能量 + DOS）
//! - 绘制 DOS 曲线图
//! - 在费米能级两侧分别积分并定位峰位
//!
//! ## 依赖关系
//! - 使用 `cli/dos.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/integrate.rs`, `analysis/peaks.rs`
//! - 使用 `plot/dos.rs`, `utils/output.rs`

use crate::analysis;
use crate::cli::dos::DosArgs;
use crate::error::{QepostError, Result};
use crate::parsers;
use crate::plot;
use crate::utils::output;

use plotters::prelude::RED;

/// 执行 dos 命令
pub fn execute(args: DosArgs) -> Result<()> {
    output::print_header("Density of States Analysis");

    let curve = match parsers::try_load_curve(&args.dos_file)? {
        Some(curve) => curve,
        None => {
            output::print_warning(&format!(
                "DOS file '{}' not found, skipping analysis.",
                args.dos_file.display()
            ));
            return Ok(());
        }
    };

    output::print_info(&format!("Loaded {} energy samples", curve.n_samples()));

    // 绘图
    plot::plot_dos_curve(
        &curve,
        &args.output,
        &args.title,
        "Energy (eV)",
        "DOS (states/eV)",
        "",
        RED,
        args.width,
        args.height,
    )?;
    output::print_success(&format!("DOS plot saved to '{}'", args.output.display()));

    // 费米能级两侧的积分与峰位
    let fermi_idx = match curve.fermi_index() {
        Some(idx) => idx,
        None => {
            return Err(QepostError::DegenerateData(
                "DOS curve has no samples".to_string(),
            ))
        }
    };

    let total = analysis::integral(&curve);
    let valence = analysis::integral_between(&curve, 0, fermi_idx);
    let conduction = analysis::integral_between(&curve, fermi_idx, curve.n_samples());
    let peaks = analysis::locate_peaks(&curve, fermi_idx)?;

    output::print_info(&format!("Total integrated states: {:.3}", total));
    output::print_info(&format!("Valence band contribution: {:.3} states", valence));
    output::print_info(&format!(
        "Conduction band contribution: {:.3} states",
        conduction
    ));
    output::print_info(&format!(
        "Valence peak: {:.3} eV ({:.3} states/eV)",
        peaks.valence_energy, peaks.valence_height
    ));
    output::print_info(&format!(
        "Conduction peak: {:.3} eV ({:.3} states/eV)",
        peaks.conduction_energy, peaks.conduction_height
    ));

    output::print_done("DOS analysis completed!");

    Ok(())
}
