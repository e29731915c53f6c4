//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `bands`: 能带结构分析与绘图
//! - `dos`: 电子态密度分析与绘图
//! - `pdos`: 投影态密度（按原子物种）分析与绘图
//! - `phonon`: 声子态密度与色散分析
//! - `soc`: 含/不含自旋轨道耦合的能带对比
//! - `report`: 综合报告与结果面板
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: bands, dos, pdos, phonon, soc, report

pub mod bands;
pub mod dos;
pub mod pdos;
pub mod phonon;
pub mod report;
pub mod soc;

use clap::{Parser, Subcommand};

/// Qepost - Quantum ESPRESSO 后处理统一工具箱
#[derive(Parser)]
#[command(name = "qepost")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A unified Quantum ESPRESSO post-processing toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Plot the band structure and estimate the band gap
    Bands(bands::BandsArgs),

    /// Plot the electronic density of states and integrate state counts
    Dos(dos::DosArgs),

    /// Analyze projected DOS contributions per atomic species
    Pdos(pdos::PdosArgs),

    /// Analyze the phonon spectrum (DOS statistics and dispersion)
    Phonon(phonon::PhononArgs),

    /// Compare band structures with and without spin-orbit coupling
    Soc(soc::SocArgs),

    /// Run all analyses and write a comprehensive report with a summary panel
    Report(report::ReportArgs),
}
