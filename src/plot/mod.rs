//! # 图表绘制模块
//!
//! 基于 `plotters` 的全部出图例程：色散图、态密度曲线、多物种
//! PDOS 叠加图、SOC 对比图与 2×2 综合结果面板，统一输出 PNG。
//!
//! ## 依赖关系
//! - 被 `commands` 各子命令调用
//! - 使用 `models` 中的数据结构

pub mod dispersion;
pub mod dos;
pub mod panel;
pub mod pdos;
pub mod soc;

pub use dispersion::plot_dispersion;
pub use dos::plot_dos_curve;
pub use panel::plot_summary_panel;
pub use pdos::plot_pdos;
pub use soc::plot_soc_comparison;
