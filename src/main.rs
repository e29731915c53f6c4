//! # Qepost - Quantum ESPRESSO 后处理统一工具箱
//!
//! 将分散的后处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `bands`  - 能带结构绘图与带隙分析
//! - `dos`    - 电子态密度绘图与积分分析
//! - `pdos`   - 投影态密度（按原子物种）分析
//! - `phonon` - 声子态密度统计与色散绘图
//! - `soc`    - 含/不含自旋轨道耦合的能带对比
//! - `report` - 综合报告与 2×2 结果面板
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (数据表加载)
//!   │     ├── analysis/  (带隙/积分/峰位/差值分析)
//!   │     ├── plot/      (plotters 图表)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
