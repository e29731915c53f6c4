//! # soc 命令实现
//!
//! 自旋轨道耦合对比分析：统计两组能带的能级劈裂并叠加绘图。
//!
//! ## 功能
//! - 读取含 SOC 与标量相对论两份能带表
//! - 逐元素差值统计（平均/最大 |ΔE|），形状不一致直接报错
//! - 绘制对比图
//!
//! ## 依赖关系
//! - 使用 `cli/soc.rs` 定义的参数
//! - 使用 `parsers/table.rs`, `analysis/diff.rs`, `plot/soc.rs`
//! - 使用 `utils/output.rs`

use crate::analysis;
use crate::cli::soc::SocArgs;
use crate::error::Result;
use crate::parsers;
use crate::plot;
use crate::utils::output;

/// 执行 soc 命令
pub fn execute(args: SocArgs) -> Result<()> {
    output::print_header("Spin-Orbit Coupling Analysis");

    let soc = match parsers::try_load_bands(&args.soc_file)? {
        Some(bands) => bands,
        None => {
            output::print_warning(&format!(
                "SOC band file '{}' not found, skipping analysis.",
                args.soc_file.display()
            ));
            return Ok(());
        }
    };

    let scalar = match parsers::try_load_bands(&args.scalar_file)? {
        Some(bands) => bands,
        None => {
            output::print_warning(&format!(
                "Scalar band file '{}' not found, skipping analysis.",
                args.scalar_file.display()
            ));
            return Ok(());
        }
    };

    let stats = analysis::compare(&scalar, &soc)?;
    output::print_info(&format!(
        "Average SOC splitting: {:.3} eV",
        stats.mean_abs
    ));
    output::print_info(&format!(
        "Maximum SOC splitting: {:.3} eV",
        stats.max_abs
    ));

    plot::plot_soc_comparison(
        &scalar,
        &soc,
        &args.output,
        &args.title,
        args.width,
        args.height,
    )?;
    output::print_success(&format!(
        "SOC comparison plot saved to '{}'",
        args.output.display()
    ));

    output::print_done("SOC analysis completed!");

    Ok(())
}
