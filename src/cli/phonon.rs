//! # phonon 子命令 CLI 定义
//!
//! 声子态密度统计与色散绘图的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/phonon.rs`

use clap::Args;
use std::path::PathBuf;

/// phonon 子命令参数
#[derive(Args, Debug)]
pub struct PhononArgs {
    /// Phonon DOS table: column 1 is frequency in cm⁻¹, column 2 is DOS
    #[arg(long, default_value = "phonon_dos.dat")]
    pub dos_file: PathBuf,

    /// Phonon mode table: column 1 is the q-path coordinate, the rest are branch frequencies
    #[arg(long, default_value = "phonon_frequencies.dat")]
    pub modes_file: PathBuf,

    /// Filename for the phonon DOS plot (PNG format)
    #[arg(long, default_value = "phonon_dos.png")]
    pub dos_output: PathBuf,

    /// Filename for the phonon dispersion plot (PNG format)
    #[arg(long, default_value = "phonon_dispersion.png")]
    pub dispersion_output: PathBuf,

    /// Comma-separated high-symmetry point labels, placed evenly along the q-path
    #[arg(long, default_value = "Γ,K,M,Γ")]
    pub labels: String,

    /// Title for the phonon DOS plot
    #[arg(long, default_value = "Phonon Density of States")]
    pub dos_title: String,

    /// Title for the phonon dispersion plot
    #[arg(long, default_value = "Phonon Dispersion")]
    pub dispersion_title: String,
}
