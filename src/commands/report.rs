//! # report 命令实现
//!
//! 综合分析：依次执行能带、声子、SOC 三项分析，汇总关键物性
//! 写入文本报告，并绘制 2×2 结果面板。
//!
//! ## 功能
//! - 单步失败只标记该步，不中断整体流程
//! - 输入文件缺失的步骤跳过
//! - 报告中的物性条目在对应数据可用时填入计算值
//!
//! ## 依赖关系
//! - 使用 `cli/report.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/`, `plot/panel.rs`
//! - 使用 `utils/output.rs`

use crate::analysis::{self, DiffStats, GapAnalysis, PhononStats};
use crate::cli::report::ReportArgs;
use crate::error::{QepostError, Result};
use crate::models::{BandSet, Curve};
use crate::parsers;
use crate::plot;
use crate::utils::output;

use std::fs;

/// 各子分析汇总的关键物性与面板数据
#[derive(Debug, Default)]
struct ReportData {
    gap: Option<GapAnalysis>,
    phonon: Option<PhononStats>,
    soc: Option<DiffStats>,
    dos_states: Option<f64>,
    bands: Option<BandSet>,
    dos_curve: Option<Curve>,
    phonon_dos: Option<Curve>,
}

/// 执行 report 命令
pub fn execute(args: ReportArgs) -> Result<()> {
    output::print_header("Comprehensive Quantum ESPRESSO Analysis");

    let mut data = ReportData::default();

    run_step("Band Structure Analysis", || {
        analyze_bands(&args, &mut data)
    });
    run_step("Phonon Analysis", || analyze_phonon(&args, &mut data));
    run_step("Spin-Orbit Coupling Analysis", || {
        analyze_soc(&args, &mut data)
    });

    // dos.dat 只用于面板与报告中的总态数
    if let Some(curve) = parsers::try_load_curve(&args.dir.join("dos.dat"))? {
        data.dos_states = Some(analysis::integral(&curve));
        data.dos_curve = Some(curve);
    }

    // 文本报告
    let report = build_report(&data);
    fs::write(&args.report, report).map_err(|e| QepostError::FileWriteError {
        path: args.report.display().to_string(),
        source: e,
    })?;
    output::print_success(&format!(
        "Summary report created: {}",
        args.report.display()
    ));

    // 结果面板
    output::print_info("Creating combined plots...");
    plot::plot_summary_panel(
        data.bands.as_ref(),
        data.dos_curve.as_ref(),
        data.phonon_dos.as_ref(),
        &args.panel,
        args.width,
        args.height,
    )?;
    output::print_success(&format!(
        "Combined plots saved as: {}",
        args.panel.display()
    ));

    output::print_done("Comprehensive analysis completed!");

    Ok(())
}

/// 执行单个分析步骤：失败打印错误、缺输入打印跳过，均不中断
fn run_step<F: FnOnce() -> Result<bool>>(description: &str, step: F) {
    output::print_info(&format!("Running {}...", description));
    match step() {
        Ok(true) => output::print_success(&format!("{} completed successfully", description)),
        Ok(false) => output::print_skip(&format!(
            "{} skipped (input files not found)",
            description
        )),
        Err(e) => output::print_error(&format!("{} failed: {}", description, e)),
    }
}

/// 能带分析步骤
fn analyze_bands(args: &ReportArgs, data: &mut ReportData) -> Result<bool> {
    match parsers::try_load_bands(&args.dir.join("bands.dat"))? {
        Some(bands) => {
            let gap = analysis::band_gap(&bands, args.valence_bands);
            data.bands = Some(bands);
            data.gap = Some(gap?);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// 声子分析步骤
fn analyze_phonon(args: &ReportArgs, data: &mut ReportData) -> Result<bool> {
    match parsers::try_load_curve(&args.dir.join("phonon_dos.dat"))? {
        Some(curve) => {
            let stats = analysis::phonon_stats(&curve);
            data.phonon_dos = Some(curve);
            data.phonon = Some(stats?);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// SOC 分析步骤
fn analyze_soc(args: &ReportArgs, data: &mut ReportData) -> Result<bool> {
    let soc = match parsers::try_load_bands(&args.dir.join("soc_bands.dat"))? {
        Some(bands) => bands,
        None => return Ok(false),
    };
    let scalar = match parsers::try_load_bands(&args.dir.join("bands.dat"))? {
        Some(bands) => bands,
        None => return Ok(false),
    };

    data.soc = Some(analysis::compare(&scalar, &soc)?);
    Ok(true)
}

/// 生成综合报告文本
fn build_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str("Quantum ESPRESSO Comprehensive Analysis Report\n");
    report.push_str("==============================================\n\n");

    report.push_str("Calculations Performed:\n");
    report.push_str("1. Self-Consistent Field (SCF) calculation\n");
    report.push_str("2. Non-SCF calculation for DOS\n");
    report.push_str("3. Density of States (DOS) calculation\n");
    report.push_str("4. Projected DOS (PDOS) calculation\n");
    report.push_str("5. Band structure calculation\n");
    report.push_str("6. Phonon calculation\n");
    report.push_str("7. Phonon DOS calculation\n");
    report.push_str("8. Spin-orbit coupling calculation\n\n");

    report.push_str("Generated Files:\n");
    report.push_str("- Electronic DOS plots\n");
    report.push_str("- Band structure plots\n");
    report.push_str("- Phonon DOS and dispersion plots\n");
    report.push_str("- SOC comparison plots\n");
    report.push_str("- Analysis reports\n\n");

    report.push_str("Key Physical Properties:\n");
    match &data.gap {
        Some(gap) => report.push_str(&format!(
            "- Electronic band gap: {:.3} eV (VBM {:.3} eV, CBM {:.3} eV)\n",
            gap.gap, gap.vbm, gap.cbm
        )),
        None => report.push_str("- Electronic band gap\n"),
    }
    match &data.phonon {
        Some(stats) => report.push_str(&format!(
            "- Phonon frequencies and modes: max {:.1} cm⁻¹, average {:.1} cm⁻¹\n",
            stats.max_frequency, stats.average_frequency
        )),
        None => report.push_str("- Phonon frequencies and modes\n"),
    }
    match &data.soc {
        Some(stats) => report.push_str(&format!(
            "- Spin-orbit coupling effects: average splitting {:.3} eV, maximum {:.3} eV\n",
            stats.mean_abs, stats.max_abs
        )),
        None => report.push_str("- Spin-orbit coupling effects\n"),
    }
    match &data.dos_states {
        Some(total) => report.push_str(&format!(
            "- Density of states: {:.3} integrated states\n\n",
            total
        )),
        None => report.push_str("- Density of states\n\n"),
    }

    report.push_str("Next Steps:\n");
    report.push_str("1. Analyze optical properties\n");
    report.push_str("2. Calculate transport properties\n");
    report.push_str("3. Study temperature effects\n");
    report.push_str("4. Investigate strain effects\n");

    report
}

// ─────────────────────────────────────────────
// 测试
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report_fills_available_properties() {
        let data = ReportData {
            gap: Some(GapAnalysis {
                vbm: -0.5,
                cbm: 0.2,
                gap: 0.7,
            }),
            phonon: Some(PhononStats {
                max_frequency: 450.0,
                average_frequency: 210.3,
                total_states: 24.0,
            }),
            soc: Some(DiffStats {
                mean_abs: 0.123,
                max_abs: 0.456,
            }),
            dos_states: Some(24.0),
            ..Default::default()
        };

        let report = build_report(&data);
        assert!(report.starts_with("Quantum ESPRESSO Comprehensive Analysis Report\n"));
        assert!(report.contains("Calculations Performed:\n"));
        assert!(report.contains("Generated Files:\n"));
        assert!(report.contains("Key Physical Properties:\n"));
        assert!(
            report.contains("- Electronic band gap: 0.700 eV (VBM -0.500 eV, CBM 0.200 eV)\n")
        );
        assert!(
            report.contains("- Phonon frequencies and modes: max 450.0 cm⁻¹, average 210.3 cm⁻¹\n")
        );
        assert!(report
            .contains("- Spin-orbit coupling effects: average splitting 0.123 eV, maximum 0.456 eV\n"));
        assert!(report.contains("- Density of states: 24.000 integrated states\n"));
        assert!(report.contains("Next Steps:\n"));
        assert!(report.contains("4. Investigate strain effects\n"));
    }

    #[test]
    fn test_build_report_without_data_keeps_bare_entries() {
        let report = build_report(&ReportData::default());
        assert!(report.contains("- Electronic band gap\n"));
        assert!(report.contains("- Phonon frequencies and modes\n"));
        assert!(report.contains("- Spin-orbit coupling effects\n"));
        assert!(report.contains("- Density of states\n"));
        assert!(!report.contains("- Electronic band gap:"));
    }
}
