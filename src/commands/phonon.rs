//! # phonon 命令实现
//!
//! 声子谱分析：态密度统计与色散图绘制。
//!
//! ## 功能
//! - 读取声子态密度表，绘图并计算最高/平均频率与总态数
//! - 读取声子支频率表，绘制色散图
//! - 两份输入相互独立，缺失任意一份只跳过对应部分
//!
//! ## 依赖关系
//! - 使用 `cli/phonon.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/integrate.rs`
//! - 使用 `plot/dos.rs`, `plot/dispersion.rs`, `utils/output.rs`

use crate::analysis;
use crate::cli::bands::parse_labels;
use crate::cli::phonon::PhononArgs;
use crate::error::Result;
use crate::parsers;
use crate::plot;
use crate::utils::output;

use plotters::prelude::GREEN;

/// 执行 phonon 命令
pub fn execute(args: PhononArgs) -> Result<()> {
    output::print_header("Phonon Analysis");

    // 声子态密度
    match parsers::try_load_curve(&args.dos_file)? {
        Some(curve) => {
            plot::plot_dos_curve(
                &curve,
                &args.dos_output,
                &args.dos_title,
                "Frequency (cm⁻¹)",
                "DOS (states/cm⁻¹)",
                "Phonon DOS",
                GREEN,
                1000,
                600,
            )?;
            output::print_success(&format!(
                "Phonon DOS plot saved to '{}'",
                args.dos_output.display()
            ));

            let stats = analysis::phonon_stats(&curve)?;
            output::print_info(&format!(
                "Maximum frequency: {:.1} cm⁻¹",
                stats.max_frequency
            ));
            output::print_info(&format!(
                "Average frequency: {:.1} cm⁻¹",
                stats.average_frequency
            ));
            output::print_info(&format!("Total phonon states: {:.1}", stats.total_states));
        }
        None => output::print_warning(&format!(
            "Phonon DOS file '{}' not found, skipping DOS analysis.",
            args.dos_file.display()
        )),
    }

    // 声子色散
    match parsers::try_load_bands(&args.modes_file)? {
        Some(modes) => {
            let labels = parse_labels(&args.labels);
            plot::plot_dispersion(
                &modes,
                &args.dispersion_output,
                &args.dispersion_title,
                &labels,
                GREEN,
                "Q-points",
                "Frequency (cm⁻¹)",
                false,
                1200,
                800,
            )?;
            output::print_success(&format!(
                "Phonon dispersion plot saved to '{}'",
                args.dispersion_output.display()
            ));
        }
        None => output::print_warning(&format!(
            "Phonon modes file '{}' not found, skipping dispersion plot.",
            args.modes_file.display()
        )),
    }

    output::print_done("Phonon analysis completed!");

    Ok(())
}
