//! # 解析器模块
//!
//! 提供 Quantum ESPRESSO 后处理输出数据文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: table

pub mod table;

pub use table::{load_bands, load_curve, try_load_bands, try_load_curve};
