//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `analysis/`, `plot/`, `utils/`
//! - 子模块: bands, dos, pdos, phonon, soc, report

pub mod bands;
pub mod dos;
pub mod pdos;
pub mod phonon;
pub mod report;
pub mod soc;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Bands(args) => bands::execute(args),
        Commands::Dos(args) => dos::execute(args),
        Commands::Pdos(args) => pdos::execute(args),
        Commands::Phonon(args) => phonon::execute(args),
        Commands::Soc(args) => soc::execute(args),
        Commands::Report(args) => report::execute(args),
    }
}
