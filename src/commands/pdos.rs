//! # pdos 命令实现
//!
//! 投影态密度分析：按原子物种加载 PDOS 曲线，绘制叠加图，
//! 计算价带/导带贡献并输出文本报告。
//!
//! ## 功能
//! - 从目录发现 `atom_<Symbol>_tot.dat` 文件（或使用指定物种列表）
//! - 带进度条逐物种加载，缺失文件警告后跳过
//! - 绘制带填充与费米能级标注的 PDOS 叠加图
//! - 逐物种计算贡献与峰位，终端表格 + 文本报告 + 可选 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/pdos.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/integrate.rs`, `analysis/peaks.rs`
//! - 使用 `plot/pdos.rs`, `utils/output.rs`, `utils/progress.rs`

use crate::analysis;
use crate::cli::pdos::{parse_energy_range, parse_species_list, PdosArgs};
use crate::error::{QepostError, Result};
use crate::models::Curve;
use crate::parsers;
use crate::plot;
use crate::utils::{output, progress};

use regex::Regex;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单个物种的 PDOS 贡献分析结果
#[derive(Debug, Clone)]
struct SpeciesContribution {
    species: String,
    valence: f64,
    conduction: f64,
    total: f64,
    valence_peak: f64,
    conduction_peak: f64,
    max_pdos: f64,
}

/// 贡献表格行
#[derive(Debug, Clone, Tabled)]
struct ContributionRow {
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Valence (states)")]
    valence: String,
    #[tabled(rename = "Conduction (states)")]
    conduction: String,
    #[tabled(rename = "Total (states)")]
    total: String,
    #[tabled(rename = "V-peak (eV)")]
    valence_peak: String,
    #[tabled(rename = "C-peak (eV)")]
    conduction_peak: String,
    #[tabled(rename = "Max PDOS")]
    max_pdos: String,
}

/// 执行 pdos 命令
pub fn execute(args: PdosArgs) -> Result<()> {
    output::print_header("PDOS Analysis");

    if !args.dir.exists() {
        return Err(QepostError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let energy_range = parse_energy_range(&args.energy_range).map_err(QepostError::InvalidRange)?;

    // 物种列表：显式指定或从文件名发现
    let species_names = match &args.species {
        Some(list) => parse_species_list(list),
        None => discover_species(&args.dir)?,
    };

    if species_names.is_empty() {
        output::print_warning(&format!(
            "No PDOS files found in '{}'.",
            args.dir.display()
        ));
        return Ok(());
    }

    // 逐物种加载
    output::print_info(&format!(
        "Loading PDOS data for {} species...",
        species_names.len()
    ));

    let pb = progress::create_progress_bar(species_names.len() as u64, "Loading PDOS");
    let mut loaded: Vec<(String, Curve)> = Vec::new();

    for name in &species_names {
        let path = args.dir.join(format!("atom_{}_tot.dat", name));
        match parsers::try_load_curve(&path)? {
            Some(curve) => loaded.push((name.clone(), curve)),
            None => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "File '{}' not found, skipping {}",
                        path.display(),
                        name
                    ));
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if loaded.is_empty() {
        output::print_warning("No valid PDOS data found.");
        return Ok(());
    }

    output::print_info(&format!(
        "Loaded {} of {} species",
        loaded.len(),
        species_names.len()
    ));

    // 绘图（能量轴平移后）
    let title = format!("{} - Projected Density of States", args.system);
    let shifted: Vec<(String, Curve)> = loaded
        .iter()
        .map(|(name, curve)| (name.clone(), curve.shifted(args.shift)))
        .collect();

    plot::plot_pdos(
        &shifted,
        &args.output,
        &title,
        energy_range,
        args.y_max,
        args.width,
        args.height,
    )?;
    output::print_success(&format!("Plot saved as: {}", args.output.display()));

    // 逐物种贡献分析（在未平移的能量轴上）
    output::print_info("Analyzing PDOS contributions...");

    let mut contributions = Vec::new();
    for (name, curve) in &loaded {
        contributions.push(analyze_species(name, curve)?);
    }

    output::print_header("PDOS Contributions by Species");
    let rows: Vec<ContributionRow> = contributions
        .iter()
        .map(|c| ContributionRow {
            species: c.species.clone(),
            valence: format!("{:.3}", c.valence),
            conduction: format!("{:.3}", c.conduction),
            total: format!("{:.3}", c.total),
            valence_peak: format!("{:.3}", c.valence_peak),
            conduction_peak: format!("{:.3}", c.conduction_peak),
            max_pdos: format!("{:.3}", c.max_pdos),
        })
        .collect();
    let table = Table::new(&rows);
    println!("{}", table);

    // 文本报告
    let report = build_report(&args.system, &contributions);
    fs::write(&args.report, report).map_err(|e| QepostError::FileWriteError {
        path: args.report.display().to_string(),
        source: e,
    })?;
    output::print_success(&format!(
        "Analysis report saved as: {}",
        args.report.display()
    ));

    // 可选 CSV 导出
    if let Some(ref csv_path) = args.output_csv {
        save_contributions_csv(&contributions, csv_path)?;
        output::print_success(&format!(
            "Contribution table saved to '{}'",
            csv_path.display()
        ));
    }

    output::print_done("PDOS analysis completed successfully!");

    Ok(())
}

/// 扫描目录，从 `atom_<Symbol>_tot.dat` 文件名发现物种
fn discover_species(dir: &Path) -> Result<Vec<String>> {
    let pattern = Regex::new(r"^atom_(.+)_tot\.dat$").unwrap();

    let entries = fs::read_dir(dir).map_err(|e| QepostError::FileReadError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut found: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            pattern.captures(&name).map(|caps| caps[1].to_string())
        })
        .collect();

    found.sort();
    Ok(found)
}

/// 分析单个物种：费米能级两侧的积分贡献与峰位
fn analyze_species(name: &str, curve: &Curve) -> Result<SpeciesContribution> {
    let fermi_idx = match curve.fermi_index() {
        Some(idx) => idx,
        None => {
            return Err(QepostError::DegenerateData(format!(
                "PDOS curve for {} has no samples",
                name
            )))
        }
    };

    let valence = analysis::integral_between(curve, 0, fermi_idx);
    let conduction = analysis::integral_between(curve, fermi_idx, curve.n_samples());
    let peaks = analysis::locate_peaks(curve, fermi_idx)?;

    Ok(SpeciesContribution {
        species: name.to_string(),
        valence,
        conduction,
        total: valence + conduction,
        valence_peak: peaks.valence_energy,
        conduction_peak: peaks.conduction_energy,
        max_pdos: curve.y_max().unwrap_or(0.0),
    })
}

/// 生成文本分析报告
fn build_report(system: &str, contributions: &[SpeciesContribution]) -> String {
    let mut report = String::new();

    report.push_str("PDOS Analysis Report\n");
    report.push_str("===================\n\n");
    report.push_str(&format!("System: {}\n\n", system));

    for c in contributions {
        report.push_str(&format!("{} Atom Analysis:\n", c.species));
        report.push_str(&format!("  Total contribution: {:.3} states\n", c.total));
        report.push_str(&format!(
            "  Valence band contribution: {:.3} states\n",
            c.valence
        ));
        report.push_str(&format!(
            "  Conduction band contribution: {:.3} states\n",
            c.conduction
        ));
        report.push_str(&format!(
            "  Valence peak energy: {:.3} eV\n",
            c.valence_peak
        ));
        report.push_str(&format!(
            "  Conduction peak energy: {:.3} eV\n",
            c.conduction_peak
        ));
        report.push_str(&format!("  Maximum PDOS: {:.3} states/eV\n\n", c.max_pdos));
    }

    report
}

/// 保存贡献表到 CSV
fn save_contributions_csv(contributions: &[SpeciesContribution], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(|e| QepostError::CsvError(e))?;

    wtr.write_record([
        "species",
        "valence_states",
        "conduction_states",
        "total_states",
        "valence_peak_eV",
        "conduction_peak_eV",
        "max_pdos",
    ])
    .map_err(|e| QepostError::CsvError(e))?;

    for c in contributions {
        wtr.write_record([
            c.species.clone(),
            format!("{:.6}", c.valence),
            format!("{:.6}", c.conduction),
            format!("{:.6}", c.total),
            format!("{:.6}", c.valence_peak),
            format!("{:.6}", c.conduction_peak),
            format!("{:.6}", c.max_pdos),
        ])
        .map_err(|e| QepostError::CsvError(e))?;
    }

    wtr.flush().map_err(|e| QepostError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

// ─────────────────────────────────────────────
// 测试
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_species_from_filenames() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "atom_W_tot.dat",
            "atom_Se_tot.dat",
            "atom_V_tot.dat",
            "dos.dat",
            "atom_tot.dat",
            "atom_W_tot.dat.bak",
        ] {
            fs::write(dir.path().join(name), "0.0 1.0\n").unwrap();
        }

        let species = discover_species(dir.path()).unwrap();
        assert_eq!(species, vec!["Se", "V", "W"]);
    }

    #[test]
    fn test_analyze_species_contributions() {
        let curve = Curve::new(
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            vec![1.0, 5.0, 2.0, 8.0, 3.0],
        );

        let c = analyze_species("W", &curve).unwrap();
        // 费米索引 2：价带积分只覆盖前两点，导带积分从 x=0 开始
        assert!((c.valence - 3.0).abs() < 1e-12);
        assert!((c.conduction - 10.5).abs() < 1e-12);
        assert!((c.total - 13.5).abs() < 1e-12);
        assert!((c.valence_peak - (-1.0)).abs() < 1e-12);
        assert!((c.conduction_peak - 1.0).abs() < 1e-12);
        assert!((c.max_pdos - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_report_content() {
        let contributions = vec![SpeciesContribution {
            species: "W".to_string(),
            valence: 3.0,
            conduction: 10.5,
            total: 13.5,
            valence_peak: -1.0,
            conduction_peak: 1.0,
            max_pdos: 8.0,
        }];

        let report = build_report("V-doped WSSe", &contributions);
        assert!(report.starts_with("PDOS Analysis Report\n"));
        assert!(report.contains("System: V-doped WSSe\n"));
        assert!(report.contains("W Atom Analysis:\n"));
        assert!(report.contains("  Total contribution: 13.500 states\n"));
        assert!(report.contains("  Valence band contribution: 3.000 states\n"));
        assert!(report.contains("  Conduction band contribution: 10.500 states\n"));
        assert!(report.contains("  Valence peak energy: -1.000 eV\n"));
        assert!(report.contains("  Conduction peak energy: 1.000 eV\n"));
        assert!(report.contains("  Maximum PDOS: 8.000 states/eV\n"));
    }
}
