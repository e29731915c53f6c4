//! # 数据模型模块
//!
//! 定义谱线与能带的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `plot/`, `commands/` 使用
//! - 子模块: curve, bandset

pub mod bandset;
pub mod curve;

pub use bandset::BandSet;
pub use curve::Curve;
