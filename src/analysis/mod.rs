//! # 分析核心模块
//!
//! 提供四个可独立使用的曲线/能带分析例程。
//!
//! ## 子模块
//! - `extrema`: 带隙极值分析（VBM/CBM/带隙）
//! - `integrate`: 梯形积分与加权平均位置
//! - `peaks`: 价带/导带峰定位
//! - `diff`: 两组能带逐元素差值统计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

pub mod diff;
pub mod extrema;
pub mod integrate;
pub mod peaks;

pub use diff::{compare, DiffStats};
pub use extrema::{band_gap, GapAnalysis};
pub use integrate::{
    integral, integral_between, phonon_stats, trapezoid, weighted_mean, PhononStats,
};
pub use peaks::{locate_peaks, PeakPair};
